//! The set of points to cluster.
//!
//! A VectorSet is an (N, vecdim) array, one point by row. It is read only for the pipeline.
//! Its shape is carried by the structure and passed along to every stage.

use std::fmt::Debug;

use ndarray::{Array2, ArrayView1, ArrayView2, LinalgScalar};
use num_traits::float::Float;

use crate::error::{Result, SymNmfError};

// index of the first non finite coordinate
fn find_non_finite<'a, F, I>(coords: I) -> Option<usize>
where
    F: Float + 'a,
    I: IntoIterator<Item = &'a F>,
{
    coords.into_iter().position(|x| !x.is_finite())
}

#[derive(Debug, Clone)]
pub struct VectorSet<F> {
    /// (nb_points, dim) array
    points: Array2<F>,
} // end of VectorSet

impl<F> VectorSet<F>
where
    F: Float + LinalgScalar + Debug,
{
    /// all points must have the same dimension and finite coordinates
    pub fn from_rows(rows: &[Vec<F>]) -> Result<Self> {
        let dim = match rows.first() {
            Some(row) => row.len(),
            None => {
                return Err(SymNmfError::invalid_dims("no point in vector set"));
            }
        };
        let mut data = Vec::<F>::new();
        let size = rows.len().saturating_mul(dim);
        if data.try_reserve_exact(size).is_err() {
            return Err(SymNmfError::OutOfMemory {
                rows: rows.len(),
                cols: dim,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                log::error!("point {} has dimension {}, expected {}", i, row.len(), dim);
                return Err(SymNmfError::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
            if let Some(j) = find_non_finite(row.iter()) {
                log::error!("point {} has a non finite coordinate at {} : {:?}", i, j, row[j]);
                return Err(SymNmfError::invalid_param(
                    "vectors",
                    format!("point {} has a non finite coordinate at {}", i, j),
                ));
            }
            data.extend_from_slice(row);
        }
        let points = Array2::from_shape_vec((rows.len(), dim), data)
            .map_err(|e| SymNmfError::invalid_dims(format!("VectorSet::from_rows {}", e)))?;
        Ok(VectorSet { points })
    } // end of from_rows

    pub fn from_array2(points: Array2<F>) -> Self {
        VectorSet { points }
    }

    /// number of points, N
    pub fn get_nb_points(&self) -> usize {
        self.points.nrows()
    }

    /// dimension of points, vecdim
    pub fn get_dimension(&self) -> usize {
        self.points.ncols()
    }

    pub fn get_point(&self, i: usize) -> ArrayView1<F> {
        self.points.row(i)
    }

    pub fn view(&self) -> ArrayView2<F> {
        self.points.view()
    }

    /// check the set can go through the affinity computations : at least 2 points with non null dimension
    /// and finite coordinates.
    pub(crate) fn check_affinity_shape(&self) -> Result<()> {
        let (nb_points, dim) = self.points.dim();
        if nb_points < 2 {
            log::error!("affinity needs at least 2 points, got {}", nb_points);
            return Err(SymNmfError::invalid_dims(format!(
                "affinity needs at least 2 points, got {}",
                nb_points
            )));
        }
        if dim == 0 {
            log::error!("affinity needs points of non null dimension");
            return Err(SymNmfError::invalid_dims("points have dimension 0"));
        }
        // a set built with from_array2 is not checked at construction
        if let Some(rank) = find_non_finite(self.points.iter()) {
            log::error!("point {} has a non finite coordinate", rank / dim);
            return Err(SymNmfError::invalid_param(
                "vectors",
                format!("point {} has a non finite coordinate", rank / dim),
            ));
        }
        Ok(())
    }
} // end of impl VectorSet

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_vectorset_shape() {
        let rows = vec![vec![0., 1., 2.], vec![3., 4., 5.]];
        let vectors = VectorSet::<f64>::from_rows(&rows).unwrap();
        assert_eq!(vectors.get_nb_points(), 2);
        assert_eq!(vectors.get_dimension(), 3);
        assert_eq!(vectors.get_point(1)[2], 5.);
        assert!(vectors.check_affinity_shape().is_ok());
    }

    #[test]
    fn test_vectorset_rejects() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(VectorSet::from_rows(&empty).is_err());
        //
        let ragged = vec![vec![0., 1.], vec![3., 4., 5.]];
        assert!(matches!(
            VectorSet::<f64>::from_rows(&ragged),
            Err(SymNmfError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
        //
        let one = VectorSet::<f64>::from_rows(&[vec![1., 1.]]).unwrap();
        assert!(matches!(
            one.check_affinity_shape(),
            Err(SymNmfError::InvalidDimensions(_))
        ));
        let nodim = VectorSet::<f64>::from_rows(&[vec![], vec![]]).unwrap();
        assert!(nodim.check_affinity_shape().is_err());
    }

    #[test]
    fn test_vectorset_rejects_non_finite() {
        let with_nan = vec![vec![f64::NAN, 0.], vec![0., 0.], vec![1., 0.]];
        assert!(matches!(
            VectorSet::<f64>::from_rows(&with_nan),
            Err(SymNmfError::InvalidParameter { name: "vectors", .. })
        ));
        let with_inf = vec![vec![0., 0.], vec![0., f64::NEG_INFINITY]];
        assert!(VectorSet::<f64>::from_rows(&with_inf).is_err());
        // from_array2 skips the check, the affinity stages catch it
        let unchecked = VectorSet::from_array2(ndarray::arr2(&[[0., 0.], [1., f64::INFINITY], [2., 0.]]));
        assert!(matches!(
            unchecked.check_affinity_shape(),
            Err(SymNmfError::InvalidParameter { name: "vectors", .. })
        ));
        assert!(crate::affinity::similarity(&unchecked).is_err());
        assert!(crate::affinity::normalized_affinity(&unchecked).is_err());
    } // end of test_vectorset_rejects_non_finite
} // end of mod tests
