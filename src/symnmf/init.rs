//! Random initialization of the association matrix

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use rand::distributions::{Distribution, Uniform};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Result, SymNmfError};
use crate::matrix::DenseMat;

#[cfg_attr(doc, katexit::katexit)]
/// Generates a (N, k) matrix with entries uniform in $[0, 2 \sqrt{m / k}]$ where $m$ is the mean of the entries of w.
/// The same seed and the same w always give the same matrix.
/// k must satisfy $1 \le k < N$.
pub fn initial_association<F>(w: &DenseMat<F>, k: usize, seed: u64) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    let nb_row = w.nb_rows();
    if w.nb_cols() != nb_row {
        return Err(SymNmfError::invalid_dims(format!(
            "initial_association : w must be square, got {:?}",
            w.shape()
        )));
    }
    if k == 0 || k >= nb_row {
        log::error!("initial_association : k = {} with N = {}", k, nb_row);
        return Err(SymNmfError::invalid_param(
            "k",
            format!("must satisfy 1 <= k < N = {}, got {}", nb_row, k),
        ));
    }
    //
    let mean = w.mean().to_f64().unwrap_or(f64::NAN);
    if !(mean >= 0.) || !mean.is_finite() {
        return Err(SymNmfError::NonFiniteResult {
            stage: "initial_association",
            row: 0,
            col: 0,
        });
    }
    let upper = 2. * (mean / k as f64).sqrt();
    log::debug!(
        "initial_association N : {}, k : {}, mean(W) : {:.3e}, upper bound {:.3e}",
        nb_row,
        k,
        mean,
        upper
    );
    //
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let uniform = Uniform::<f64>::new_inclusive(0., upper);
    let mut h = DenseMat::<F>::zeros(nb_row, k)?;
    for i in 0..nb_row {
        for j in 0..k {
            let xsi = uniform.sample(&mut rng);
            let value = F::from(xsi).ok_or(SymNmfError::NonFiniteResult {
                stage: "initial_association",
                row: i,
                col: j,
            })?;
            h.set(i, j, value);
        }
    }
    Ok(h)
} // end of initial_association

// end of mod tests
