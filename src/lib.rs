//! Graph affinity of a set of points and Symetric Non negative Matrix Factorization (SymNMF) of it,
//! giving a soft clustering of the points.
//!
//! The pipeline is : vectors -> similarity -> degree -> normalized affinity W -> factorization W ~ H * Ht.
//! Each stage returns a newly allocated matrix, with errors reported by [error::SymNmfError].


use env_logger::{Builder};

#[macro_use]
extern crate  lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    let _ = Builder::from_default_env().try_init();
    log::debug!("logger initialized");
    return 1;
}

/// initialize the logger once (from RUST_LOG), can be called many times
pub fn ensure_log() {
    lazy_static::initialize(&LOG);
}

pub mod error;

pub mod matrix;

pub mod vectors;

pub mod affinity;

pub mod symnmf;

pub mod goal;

pub mod io;

pub mod validation;

pub mod prelude;
