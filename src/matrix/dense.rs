//! Dense row major matrix used along the whole pipeline.
//!
//! The storage is an [`ndarray::Array2`] in standard (row major) layout.
//! Every operation returning a matrix allocates a new one through [`DenseMat::zeros`], so a failed
//! allocation is reported as [`SymNmfError::OutOfMemory`] instead of aborting the process.
//! Inputs are never modified except by [`DenseMat::assign`].

use std::fmt::Debug;

use ndarray::{Array2, ArrayView1, ArrayView2, LinalgScalar};
use num_traits::float::Float;

use crate::error::{Result, SymNmfError};

/// allocate a (nb_row, nb_col) array filled with value, reporting allocation failure
fn try_alloc<F: Clone>(nb_row: usize, nb_col: usize, value: F) -> Result<Array2<F>> {
    let oom = SymNmfError::OutOfMemory {
        rows: nb_row,
        cols: nb_col,
    };
    let size = match nb_row.checked_mul(nb_col) {
        Some(size) => size,
        None => {
            log::error!("try_alloc size overflow for ({}, {})", nb_row, nb_col);
            return Err(oom);
        }
    };
    let mut data = Vec::<F>::new();
    if data.try_reserve_exact(size).is_err() {
        log::error!("try_alloc could not allocate ({}, {})", nb_row, nb_col);
        return Err(oom);
    }
    data.resize(size, value);
    Array2::from_shape_vec((nb_row, nb_col), data)
        .map_err(|e| SymNmfError::invalid_dims(format!("try_alloc : {}", e)))
} // end of try_alloc

/// A rectangular dense matrix whose dimensions are fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMat<F> {
    data: Array2<F>,
} // end of DenseMat

impl<F> DenseMat<F>
where
    F: Float + LinalgScalar + Debug,
{
    /// allocate a (nb_row, nb_col) matrix of zeros
    pub fn zeros(nb_row: usize, nb_col: usize) -> Result<Self> {
        let data = try_alloc(nb_row, nb_col, F::zero())?;
        Ok(DenseMat { data })
    }

    /// square identity matrix
    pub fn identity(dim: usize) -> Result<Self> {
        let mut mat = Self::zeros(dim, dim)?;
        for i in 0..dim {
            mat.data[[i, i]] = F::one();
        }
        Ok(mat)
    }

    /// wraps an array. The array is copied in standard layout if necessary.
    pub fn from_array2(data: Array2<F>) -> Self {
        if data.is_standard_layout() {
            DenseMat { data }
        } else {
            DenseMat {
                data: data.as_standard_layout().to_owned(),
            }
        }
    }

    /// builds a matrix from rows, all rows must have the same length.
    pub fn from_rows(rows: &[Vec<F>]) -> Result<Self> {
        let nb_row = rows.len();
        let nb_col = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut mat = Self::zeros(nb_row, nb_col)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != nb_col {
                log::error!(
                    "from_rows : row {} has length {}, expected {}",
                    i,
                    row.len(),
                    nb_col
                );
                return Err(SymNmfError::DimensionMismatch {
                    expected: nb_col,
                    found: row.len(),
                });
            }
            for (j, v) in row.iter().enumerate() {
                mat.data[[i, j]] = *v;
            }
        }
        Ok(mat)
    } // end of from_rows

    pub fn nb_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn nb_cols(&self) -> usize {
        self.data.ncols()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn get(&self, i: usize, j: usize) -> F {
        self.data[[i, j]]
    }

    pub fn set(&mut self, i: usize, j: usize, value: F) {
        self.data[[i, j]] = value;
    }

    pub fn row(&self, i: usize) -> ArrayView1<F> {
        self.data.row(i)
    }

    pub fn view(&self) -> ArrayView2<F> {
        self.data.view()
    }

    /// get a reference to the array
    pub fn get_data(&self) -> &Array2<F> {
        &self.data
    }

    pub fn into_array2(self) -> Array2<F> {
        self.data
    }

    /// returns self * other. self.nb_cols() must be equal to other.nb_rows()
    pub fn multiply(&self, other: &DenseMat<F>) -> Result<DenseMat<F>> {
        if self.nb_cols() != other.nb_rows() {
            log::error!(
                "multiply : incompatible shapes {:?} * {:?}",
                self.shape(),
                other.shape()
            );
            return Err(SymNmfError::invalid_dims(format!(
                "multiply {:?} by {:?}",
                self.shape(),
                other.shape()
            )));
        }
        let mut result = Self::zeros(self.nb_rows(), other.nb_cols())?;
        ndarray::linalg::general_mat_mul(
            F::one(),
            &self.data,
            &other.data,
            F::zero(),
            &mut result.data,
        );
        Ok(result)
    } // end of multiply

    /// returns a newly allocated transposed matrix
    pub fn transpose(&self) -> Result<DenseMat<F>> {
        let mut result = Self::zeros(self.nb_cols(), self.nb_rows())?;
        result.data.assign(&self.data.t());
        Ok(result)
    }

    /// returns self - other, shapes must be equal
    pub fn subtract(&self, other: &DenseMat<F>) -> Result<DenseMat<F>> {
        self.check_same_shape(other, "subtract")?;
        let mut result = Self::zeros(self.nb_rows(), self.nb_cols())?;
        ndarray::Zip::from(&mut result.data)
            .and(&self.data)
            .and(&other.data)
            .for_each(|r, a, b| *r = *a - *b);
        Ok(result)
    }

    #[cfg_attr(doc, katexit::katexit)]
    /// Frobenius norm $\sqrt{\sum_{i,j} a_{ij}^2}$.
    /// If squared is true the square root is not taken and the sum of squares is returned.
    pub fn frobenius_norm(&self, squared: bool) -> F {
        let sum = self.data.iter().fold(F::zero(), |acc, x| acc + *x * *x);
        if squared {
            sum
        } else {
            sum.sqrt()
        }
    }

    /// mean of all entries. 0 for an empty matrix
    pub fn mean(&self) -> F {
        let size = self.data.len();
        if size == 0 {
            return F::zero();
        }
        let sum = self.data.iter().fold(F::zero(), |acc, x| acc + *x);
        match F::from(size) {
            Some(n) => sum / n,
            None => F::nan(),
        }
    }

    /// max of absolute value of differences. shapes must be equal
    pub fn max_abs_diff(&self, other: &DenseMat<F>) -> Result<F> {
        self.check_same_shape(other, "max_abs_diff")?;
        let max = self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(F::zero(), |acc, (a, b)| acc.max((*a - *b).abs()));
        Ok(max)
    }

    /// true if the matrix is square and |a_ij - a_ji| <= tol for all i, j
    pub fn is_symetric(&self, tol: F) -> bool {
        let (nb_row, nb_col) = self.shape();
        if nb_row != nb_col {
            return false;
        }
        for i in 0..nb_row {
            for j in (i + 1)..nb_col {
                if (self.data[[i, j]] - self.data[[j, i]]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// copy other into self in place, shapes must be equal
    pub fn assign(&mut self, other: &DenseMat<F>) -> Result<()> {
        self.check_same_shape(other, "assign")?;
        self.data.assign(&other.data);
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMat<F>, op: &str) -> Result<()> {
        if self.shape() != other.shape() {
            log::error!(
                "{} : shapes differ {:?} vs {:?}",
                op,
                self.shape(),
                other.shape()
            );
            return Err(SymNmfError::invalid_dims(format!(
                "{} : {:?} vs {:?}",
                op,
                self.shape(),
                other.shape()
            )));
        }
        Ok(())
    }
} // end of impl DenseMat

//=========================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_identity_multiply() {
        log_init_test();
        //
        let id = DenseMat::<f64>::identity(2).unwrap();
        let m = DenseMat::from_array2(ndarray::arr2(&[[1., 2., 3.], [-4., 5.5, 0.]]));
        let prod = id.multiply(&m).unwrap();
        assert_eq!(prod.shape(), (2, 3));
        assert_eq!(prod, m);
    } // end of test_identity_multiply

    #[test]
    fn test_multiply_values() {
        log_init_test();
        //
        let a = DenseMat::from_array2(ndarray::arr2(&[[1., 2.], [3., 4.], [5., 6.]]));
        let b = DenseMat::from_array2(ndarray::arr2(&[[1., 0., 2.], [0., 1., -1.]]));
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (3, 3));
        let expected = ndarray::arr2(&[[1., 2., 0.], [3., 4., 2.], [5., 6., 4.]]);
        let check = c.max_abs_diff(&DenseMat::from_array2(expected)).unwrap();
        log::debug!("check multiply : {:.3e}", check);
        assert!(check < 1.0E-12);
        // inputs untouched
        assert_eq!(a.get(2, 1), 6.);
    } // end of test_multiply_values

    #[test]
    fn test_multiply_bad_shapes() {
        log_init_test();
        //
        let a = DenseMat::<f64>::zeros(2, 3).unwrap();
        let b = DenseMat::<f64>::zeros(2, 3).unwrap();
        let res = a.multiply(&b);
        assert!(matches!(res, Err(SymNmfError::InvalidDimensions(_))));
    }

    #[test]
    fn test_transpose() {
        log_init_test();
        //
        let a = DenseMat::from_array2(ndarray::arr2(&[[1., 2., 3.], [4., 5., 6.]]));
        let t = a.transpose().unwrap();
        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(a.get(i, j), t.get(j, i));
            }
        }
        assert!(t.get_data().is_standard_layout());
    }

    #[test]
    fn test_subtract() {
        log_init_test();
        //
        let a = DenseMat::from_array2(ndarray::arr2(&[[1., 2.], [3., 4.]]));
        let b = DenseMat::from_array2(ndarray::arr2(&[[0.5, 2.], [4., 1.]]));
        let d = a.subtract(&b).unwrap();
        assert_eq!(d.get(0, 0), 0.5);
        assert_eq!(d.get(0, 1), 0.);
        assert_eq!(d.get(1, 0), -1.);
        assert_eq!(d.get(1, 1), 3.);
        //
        let c = DenseMat::<f64>::zeros(2, 3).unwrap();
        assert!(a.subtract(&c).is_err());
    }

    #[test]
    fn test_frobenius() {
        log_init_test();
        //
        let zero = DenseMat::<f64>::zeros(3, 4).unwrap();
        assert_eq!(zero.frobenius_norm(false), 0.);
        assert_eq!(zero.frobenius_norm(true), 0.);
        //
        let m = DenseMat::from_array2(ndarray::arr2(&[[3., 4.]]));
        assert!((m.frobenius_norm(false) - 5.).abs() < 1.0E-12);
        assert!((m.frobenius_norm(true) - 25.).abs() < 1.0E-12);
    }

    #[test]
    fn test_from_rows_ragged() {
        log_init_test();
        //
        let rows = vec![vec![1., 2.], vec![3.]];
        let res = DenseMat::<f64>::from_rows(&rows);
        match res {
            Err(SymNmfError::DimensionMismatch { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            _ => panic!("expected DimensionMismatch"),
        }
    }

    #[test]
    fn test_huge_alloc_fails() {
        log_init_test();
        //
        let res = DenseMat::<f64>::zeros(usize::MAX / 2, 4);
        assert!(matches!(res, Err(SymNmfError::OutOfMemory { .. })));
    }

    #[test]
    fn test_assign_and_symetry() {
        log_init_test();
        //
        let mut a = DenseMat::<f32>::zeros(2, 2).unwrap();
        let b = DenseMat::from_array2(ndarray::arr2(&[[1f32, 2.], [2., 7.]]));
        a.assign(&b).unwrap();
        assert_eq!(a, b);
        assert!(a.is_symetric(0.));
        a.set(0, 1, 2.5);
        assert!(!a.is_symetric(0.1));
        assert!((b.mean() - 3.).abs() < 1.0E-6);
    }
} // end of mod tests
