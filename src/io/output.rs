//! Text dump of a matrix : one row by line, entries with 4 decimals separated by a comma.

use std::fmt::{Debug, Display};
use std::io::Write;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use crate::matrix::DenseMat;

/// formats a matrix, rows are separated by a newline (no trailing newline)
pub fn format_matrix<F>(mat: &DenseMat<F>) -> String
where
    F: Float + LinalgScalar + Debug + Display,
{
    let mut lines = Vec::<String>::with_capacity(mat.nb_rows());
    for i in 0..mat.nb_rows() {
        let line = mat
            .row(i)
            .iter()
            .map(|x| format!("{:.4}", x))
            .collect::<Vec<String>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n")
} // end of format_matrix

/// writes the formatted matrix followed by a newline
pub fn write_matrix<F, W: Write>(mat: &DenseMat<F>, writer: &mut W) -> anyhow::Result<()>
where
    F: Float + LinalgScalar + Debug + Display,
{
    writeln!(writer, "{}", format_matrix(mat))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_format_matrix() {
        let m = DenseMat::from_array2(ndarray::arr2(&[[0., 0.60653066], [1. / 3., -2.5]]));
        assert_eq!(format_matrix(&m), "0.0000,0.6065\n0.3333,-2.5000");
    }

    #[test]
    fn test_write_matrix() {
        let m = DenseMat::from_array2(ndarray::arr2(&[[1.23456f32, 2.]]));
        let mut buf = Vec::<u8>::new();
        write_matrix(&m, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1.2346,2.0000\n");
    }
} // end of mod tests
