//! To ease access to most frequently items
//! 


pub use crate::error::{Result, SymNmfError};
pub use crate::matrix::DenseMat;
pub use crate::vectors::VectorSet;

pub use crate::affinity::{degree, normalized_affinity, similarity};
pub use crate::symnmf::*;
pub use crate::goal::{run_goal, Goal};

pub use crate::io::{csv::*, output::*};

pub use crate::validation::compare::{compare_scores, ClusteringScores};
pub use crate::validation::kmeans::{KMeans, KMeansParams};
pub use crate::validation::labels::{hard_labels, ClustererT, SymNmfClusterer};
pub use crate::validation::silhouette::silhouette_score;
