//! Diagonal degree matrix of the similarity graph

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use super::similarity::similarity;
use crate::error::{Result, SymNmfError};
use crate::matrix::DenseMat;
use crate::vectors::VectorSet;

/// computes the (N,N) diagonal matrix whose entry (i,i) is the sum of row i of sim.
/// Off diagonal entries are 0.
pub(crate) fn degree_from_similarity<F>(sim: &DenseMat<F>) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    let (nb_row, nb_col) = sim.shape();
    if nb_row != nb_col {
        return Err(SymNmfError::invalid_dims(format!(
            "degree needs a square similarity, got {:?}",
            sim.shape()
        )));
    }
    let mut deg = DenseMat::<F>::zeros(nb_row, nb_row)?;
    for i in 0..nb_row {
        let sum_i = sim.row(i).iter().fold(F::zero(), |acc, x| acc + *x);
        deg.set(i, i, sum_i);
    }
    Ok(deg)
} // end of degree_from_similarity

/// Computes the degree matrix of the vectors set.
/// The similarity matrix computed on the way is released before returning.
pub fn degree<F>(vectors: &VectorSet<F>) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    log::debug!("entering degree");
    let sim = similarity(vectors)?;
    degree_from_similarity(&sim)
} // end of degree

//==========================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_degree_two_points() {
        log_init_test();
        //
        let vectors = VectorSet::from_rows(&[vec![0., 0.], vec![1., 0.]]).unwrap();
        let deg = degree(&vectors).unwrap();
        let expected = (-0.5f64).exp();
        assert!((deg.get(0, 0) - expected).abs() < 1.0E-12);
        assert!((deg.get(1, 1) - expected).abs() < 1.0E-12);
        assert_eq!(deg.get(0, 1), 0.);
        assert_eq!(deg.get(1, 0), 0.);
    } // end of test_degree_two_points

    #[test]
    fn test_degree_is_row_sum() {
        log_init_test();
        //
        let rows = vec![
            vec![0.5, 1.5],
            vec![1., 0.],
            vec![-0.3, 2.],
            vec![2., 2.],
            vec![0., -1.],
            vec![0.2, 0.1],
        ];
        let vectors = VectorSet::from_rows(&rows).unwrap();
        let sim = similarity(&vectors).unwrap();
        let deg = degree(&vectors).unwrap();
        let n = rows.len();
        for i in 0..n {
            let sum: f64 = (0..n).map(|j| sim.get(i, j)).sum();
            let check = (deg.get(i, i) - sum).abs();
            log::debug!("row {} check : {:.3e}", i, check);
            assert!(check < 1.0E-12);
            for j in 0..n {
                if j != i {
                    assert_eq!(deg.get(i, j), 0.);
                }
            }
        }
    } // end of test_degree_is_row_sum

    #[test]
    fn test_degree_non_square() {
        log_init_test();
        let m = DenseMat::<f64>::zeros(2, 3).unwrap();
        assert!(degree_from_similarity(&m).is_err());
    }
} // end of mod tests
