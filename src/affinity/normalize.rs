//! Symetric normalization of the similarity matrix by the degrees

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use super::degree::degree_from_similarity;
use super::similarity::similarity;
use crate::error::{Result, SymNmfError};
use crate::matrix::DenseMat;
use crate::vectors::VectorSet;

/// computes sim(i,j) / sqrt(deg(i,i) * deg(j,j)).
/// A null degree (isolated point) makes the division non finite and is reported as an error.
pub(crate) fn normalize_from<F>(sim: &DenseMat<F>, deg: &DenseMat<F>) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    if sim.shape() != deg.shape() || sim.nb_rows() != sim.nb_cols() {
        return Err(SymNmfError::invalid_dims(format!(
            "normalize : similarity {:?}, degree {:?}",
            sim.shape(),
            deg.shape()
        )));
    }
    let nb_row = sim.nb_rows();
    for i in 0..nb_row {
        if !(deg.get(i, i) > F::zero()) {
            log::error!(
                "normalize : degree of point {} is {:?}, point is isolated",
                i,
                deg.get(i, i)
            );
            return Err(SymNmfError::NonFiniteResult {
                stage: "normalize",
                row: i,
                col: i,
            });
        }
    }
    //
    let mut norm = DenseMat::<F>::zeros(nb_row, nb_row)?;
    for i in 0..nb_row {
        let d_i = deg.get(i, i);
        for j in 0..nb_row {
            let value = sim.get(i, j) / (d_i * deg.get(j, j)).sqrt();
            if !value.is_finite() {
                return Err(SymNmfError::NonFiniteResult {
                    stage: "normalize",
                    row: i,
                    col: j,
                });
            }
            norm.set(i, j, value);
        }
    }
    Ok(norm)
} // end of normalize_from

/// Computes the normalized affinity matrix W, the input of the factorization.
/// One similarity computation is shared between the degree and the normalization.
pub fn normalized_affinity<F>(vectors: &VectorSet<F>) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    log::debug!("entering normalized_affinity");
    let sim = similarity(vectors)?;
    let deg = degree_from_similarity(&sim)?;
    normalize_from(&sim, &deg)
} // end of normalized_affinity

//==========================================================================

// end of mod tests
