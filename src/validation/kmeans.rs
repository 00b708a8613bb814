//! A reference k-means used to compare with SymNMF clustering.
//!
//! Initial centroids are the first k points. A cluster left empty gets the null vector as centroid.
//! The iterations stop when all centroids move less than epsil.

use std::fmt::Debug;

use ndarray::{Array1, Array2, LinalgScalar};
use num_traits::float::Float;

use super::labels::ClustererT;
use crate::affinity::similarity::squared_distance;
use crate::error::{Result, SymNmfError};
use crate::vectors::VectorSet;

#[derive(Debug, Copy, Clone)]
pub struct KMeansParams {
    /// number of clusters
    pub nb_cluster: usize,
    /// maximum number of iterations
    pub max_iter: usize,
    /// threshold on centroid displacement
    pub epsil: f64,
} // end of KMeansParams

impl KMeansParams {
    /// max_iter is 300 and epsil 1.0E-4
    pub fn new(nb_cluster: usize) -> Self {
        KMeansParams {
            nb_cluster,
            max_iter: 300,
            epsil: 1.0E-4,
        }
    }

    pub fn get_nb_cluster(&self) -> usize {
        self.nb_cluster
    }

    pub fn get_max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn get_epsil(&self) -> f64 {
        self.epsil
    }
} // end of impl KMeansParams

pub struct KMeansResult<F> {
    /// (k, dim) array of centroids
    centroids: Array2<F>,
    /// label of each point
    labels: Vec<usize>,
    /// number of iterations done
    nb_iter: usize,
}

impl<F> KMeansResult<F> {
    pub fn get_centroids(&self) -> &Array2<F> {
        &self.centroids
    }

    pub fn get_labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn get_nb_iter(&self) -> usize {
        self.nb_iter
    }
}

pub struct KMeans {
    params: KMeansParams,
}

impl KMeans {
    pub fn new(params: KMeansParams) -> Self {
        KMeans { params }
    }

    // index of nearest centroid, first minimum wins
    fn nearest<F>(point: &ndarray::ArrayView1<F>, centroids: &Array2<F>) -> usize
    where
        F: Float + LinalgScalar + Debug,
    {
        let mut best = 0;
        let mut best_dist = F::infinity();
        for (c, centroid) in centroids.rows().into_iter().enumerate() {
            let dist = squared_distance(point, &centroid);
            if dist < best_dist {
                best_dist = dist;
                best = c;
            }
        }
        best
    }

    pub fn fit<F>(&self, vectors: &VectorSet<F>) -> Result<KMeansResult<F>>
    where
        F: Float + LinalgScalar + Debug,
    {
        let nb_points = vectors.get_nb_points();
        let dim = vectors.get_dimension();
        let k = self.params.get_nb_cluster();
        if k == 0 || k >= nb_points {
            return Err(SymNmfError::invalid_param(
                "nb_cluster",
                format!("must satisfy 1 <= k < N = {}, got {}", nb_points, k),
            ));
        }
        let epsil = F::from(self.params.get_epsil())
            .ok_or_else(|| SymNmfError::invalid_param("epsil", "not representable"))?;
        //
        let mut centroids = vectors.view().slice(ndarray::s![0..k, ..]).to_owned();
        let mut nb_iter = 0;
        for _ in 0..self.params.get_max_iter() {
            nb_iter += 1;
            let mut sums = Array2::<F>::zeros((k, dim));
            let mut counts = vec![0usize; k];
            for i in 0..nb_points {
                let point = vectors.get_point(i);
                let c = Self::nearest(&point, &centroids);
                counts[c] += 1;
                ndarray::Zip::from(sums.row_mut(c))
                    .and(&point)
                    .for_each(|s, x| *s = *s + *x);
            }
            let mut converged = true;
            for c in 0..k {
                let new_centroid = match F::from(counts[c]) {
                    Some(count) if counts[c] > 0 => sums.row(c).mapv(|x| x / count),
                    _ => Array1::<F>::zeros(dim),
                };
                let shift = squared_distance(&new_centroid.view(), &centroids.row(c)).sqrt();
                if !(shift < epsil) {
                    converged = false;
                }
                centroids.row_mut(c).assign(&new_centroid);
            }
            if converged {
                break;
            }
        }
        log::debug!("kmeans k : {}, nb iterations : {}", k, nb_iter);
        let labels = (0..nb_points)
            .map(|i| Self::nearest(&vectors.get_point(i), &centroids))
            .collect();
        Ok(KMeansResult {
            centroids,
            labels,
            nb_iter,
        })
    } // end of fit
} // end of impl KMeans

impl<F> ClustererT<F> for KMeans
where
    F: Float + LinalgScalar + Debug,
{
    fn labels(&mut self, vectors: &VectorSet<F>) -> Result<Vec<usize>> {
        self.fit(vectors).map(|res| res.labels)
    }

    fn get_name(&self) -> &str {
        "kmeans"
    }
}

// end of mod tests
