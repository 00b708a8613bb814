//! Hard cluster labels and the clusterer trait used to compare algorithms.

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use crate::error::Result;
use crate::matrix::DenseMat;
use crate::symnmf::SymNmf;
use crate::vectors::VectorSet;

/// The trait ClustererT is something that gives a label to each point of a VectorSet.
/// Useful just to make the comparison of clusterings generic.
pub trait ClustererT<F> {
    /// returns a label in 0..nb_cluster for each point
    fn labels(&mut self, vectors: &VectorSet<F>) -> Result<Vec<usize>>;
    /// name used when reporting
    fn get_name(&self) -> &str;
} // end of trait ClustererT

/// label of each point is the column of the maximal entry in its row of h (first maximum wins)
pub fn hard_labels<F>(h: &DenseMat<F>) -> Vec<usize>
where
    F: Float + LinalgScalar + Debug,
{
    (0..h.nb_rows())
        .map(|i| {
            let row = h.row(i);
            let mut best = 0;
            for (j, x) in row.iter().enumerate() {
                if *x > row[best] {
                    best = j;
                }
            }
            best
        })
        .collect()
} // end of hard_labels

/// SymNMF used as a clusterer : labels are deduced from the association matrix
pub struct SymNmfClusterer {
    nmf: SymNmf,
    nb_cluster: usize,
}

impl SymNmfClusterer {
    pub fn new(nmf: SymNmf, nb_cluster: usize) -> Self {
        SymNmfClusterer { nmf, nb_cluster }
    }
}

impl<F> ClustererT<F> for SymNmfClusterer
where
    F: Float + LinalgScalar + Debug,
{
    fn labels(&mut self, vectors: &VectorSet<F>) -> Result<Vec<usize>> {
        let res = self.nmf.cluster(vectors, self.nb_cluster)?;
        Ok(hard_labels(res.get_h()))
    }

    fn get_name(&self) -> &str {
        "nmf"
    }
} // end of impl ClustererT for SymNmfClusterer

// end of mod tests
