//! Comparison of SymNMF and k-means clusterings by their silhouette score.

use super::kmeans::{KMeans, KMeansParams};
use super::labels::{ClustererT, SymNmfClusterer};
use super::silhouette::silhouette_score;
use crate::error::Result;
use crate::symnmf::{SymNmf, SymNmfParams};
use crate::vectors::VectorSet;

/// silhouette scores obtained by each clusterer
#[derive(Debug, Copy, Clone)]
pub struct ClusteringScores {
    pub nmf: f64,
    pub kmeans: f64,
}

/// labels with a clusterer and score them
pub fn score_clusterer(clusterer: &mut dyn ClustererT<f64>, vectors: &VectorSet<f64>) -> Result<f64> {
    let labels = clusterer.labels(vectors)?;
    let score = silhouette_score(vectors, &labels)?;
    log::info!("clusterer {} silhouette score : {:.4}", clusterer.get_name(), score);
    Ok(score)
}

/// clusters vectors in nb_cluster groups with SymNMF and k-means and returns both silhouette scores
pub fn compare_scores(vectors: &VectorSet<f64>, nb_cluster: usize, params: &SymNmfParams) -> Result<ClusteringScores> {
    let mut nmf = SymNmfClusterer::new(SymNmf::new(*params), nb_cluster);
    let mut kmeans = KMeans::new(KMeansParams::new(nb_cluster));
    let nmf_score = score_clusterer(&mut nmf, vectors)?;
    let kmeans_score = score_clusterer(&mut kmeans, vectors)?;
    Ok(ClusteringScores {
        nmf: nmf_score,
        kmeans: kmeans_score,
    })
} // end of compare_scores

// end of mod tests
