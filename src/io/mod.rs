//! io : loading points from csv, formatted dump of matrices.

pub mod csv;

pub mod output;
