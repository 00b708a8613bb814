//! Graph construction from raw vectors.
//!
//! - [similarity] : gaussian kernel affinity between points, null diagonal.
//! - [degree] : diagonal matrix of row sums of the similarity matrix.
//! - [normalized_affinity] : similarity normalized symetrically by degrees, the matrix factorized by SymNMF.
//!
//! Each stage returns a newly allocated matrix and releases the intermediate ones it needed.

pub mod degree;
pub mod normalize;
pub mod similarity;

pub use degree::degree;
pub use normalize::normalized_affinity;
pub use similarity::similarity;
