//! Quality of the clustering : hard labels, a reference k-means and the silhouette score.

pub mod compare;
pub mod kmeans;
pub mod labels;
pub mod silhouette;
