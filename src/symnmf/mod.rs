//! Symetric non negative matrix factorization of the normalized affinity matrix.
//!
//! - params : iterations, threshold, damping and null denominator policy.
//! - init : random initial association matrix.
//! - factorize : the multiplicative update iterations.

pub mod factorize;
pub mod init;
pub mod params;

pub use factorize::{factorize, Convergence, NmfResult, SymNmf};
pub use init::initial_association;
pub use params::{SymNmfParams, ZeroDenominator};
