//! Dense matrix primitive : allocation, product, transposition, difference and Frobenius norm.

pub mod dense;

pub use dense::DenseMat;
