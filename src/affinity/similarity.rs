//! Gaussian kernel similarity between points

use std::fmt::Debug;

use ndarray::{ArrayView1, LinalgScalar};
use num_traits::float::Float;

use crate::error::Result;
use crate::matrix::DenseMat;
use crate::vectors::VectorSet;

/// squared euclidean distance between 2 points of same dimension
pub(crate) fn squared_distance<F>(v1: &ArrayView1<F>, v2: &ArrayView1<F>) -> F
where
    F: Float,
{
    debug_assert_eq!(v1.len(), v2.len());
    v1.iter().zip(v2.iter()).fold(F::zero(), |acc, (a, b)| {
        let d = *a - *b;
        acc + d * d
    })
}

#[cfg_attr(doc, katexit::katexit)]
/// Computes the (N,N) similarity matrix.
/// For $i \neq j$ the entry is $ \exp(- \Vert v_i - v_j \Vert^2 / 2)$, the diagonal is 0.
/// Each unordered pair is evaluated once and written at (i,j) and (j,i).
///
/// Requires at least 2 points of non null dimension.
/// Note that for very distant points the exponential underflows to 0.
pub fn similarity<F>(vectors: &VectorSet<F>) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    log::debug!(
        "similarity nb points : {}, dim : {}",
        vectors.get_nb_points(),
        vectors.get_dimension()
    );
    vectors.check_affinity_shape()?;
    //
    let nb_points = vectors.get_nb_points();
    let half = F::one() / (F::one() + F::one());
    let mut sim = DenseMat::<F>::zeros(nb_points, nb_points)?;
    for i in 0..nb_points {
        let v_i = vectors.get_point(i);
        for j in (i + 1)..nb_points {
            let dist = squared_distance(&v_i, &vectors.get_point(j));
            let value = (-dist * half).exp();
            sim.set(i, j, value);
            sim.set(j, i, value);
        }
    }
    log::trace!("exiting similarity");
    Ok(sim)
} // end of similarity

//==========================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::SymNmfError;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn small_set() -> VectorSet<f64> {
        let rows = vec![
            vec![0., 0., 1.],
            vec![1., 0., 0.5],
            vec![0.3, -1.2, 2.],
            vec![2.5, 1., -1.],
            vec![0.1, 0.1, 0.9],
        ];
        VectorSet::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_similarity_two_points() {
        log_init_test();
        //
        let vectors = VectorSet::from_rows(&[vec![0., 0.], vec![1., 0.]]).unwrap();
        let sim = similarity(&vectors).unwrap();
        assert_eq!(sim.shape(), (2, 2));
        assert_eq!(sim.get(0, 0), 0.);
        assert_eq!(sim.get(1, 1), 0.);
        let expected = (-0.5f64).exp();
        log::debug!("sim(0,1) : {:.6}", sim.get(0, 1));
        assert!((sim.get(0, 1) - expected).abs() < 1.0E-12);
        assert!((sim.get(0, 1) - 0.6065).abs() < 1.0E-4);
        assert_eq!(sim.get(0, 1), sim.get(1, 0));
    } // end of test_similarity_two_points

    #[test]
    fn test_similarity_properties() {
        log_init_test();
        //
        let sim = similarity(&small_set()).unwrap();
        let n = sim.nb_rows();
        assert!(sim.is_symetric(0.));
        for i in 0..n {
            assert_eq!(sim.get(i, i), 0.);
            for j in 0..n {
                if i != j {
                    assert!(sim.get(i, j) > 0. && sim.get(i, j) <= 1.);
                }
            }
        }
    } // end of test_similarity_properties

    #[test]
    fn test_similarity_identical_points() {
        log_init_test();
        // identical distinct points have similarity exactly 1
        let vectors = VectorSet::from_rows(&[vec![1., 2.], vec![1., 2.], vec![0., 0.]]).unwrap();
        let sim = similarity(&vectors).unwrap();
        assert_eq!(sim.get(0, 1), 1.);
        assert_eq!(sim.get(0, 0), 0.);
    }

    #[test]
    fn test_similarity_rejects_single_point() {
        log_init_test();
        //
        let vectors = VectorSet::from_rows(&[vec![0., 0.]]).unwrap();
        let res = similarity(&vectors);
        assert!(matches!(res, Err(SymNmfError::InvalidDimensions(_))));
    }
} // end of mod tests
