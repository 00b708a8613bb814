//! Parameters of the SymNMF factorization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SymNmfError};

/// default maximum number of multiplicative updates
pub const DEFAULT_MAX_ITER: usize = 300;

/// default convergence threshold on the Frobenius norm of successive iterates difference
pub const DEFAULT_EPSIL: f64 = 1.0E-4;

/// default damping of the multiplicative update
pub const DEFAULT_BETA: f64 = 0.5;

/// default seed for the random initial association matrix
pub const DEFAULT_SEED: u64 = 1234;

/// What to do when an entry of the denominator H * Ht * H is null.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroDenominator {
    /// the entry is considered at a fixed point, it is left unchanged
    KeepEntry,
    /// the iteration fails with a NonFiniteResult error
    Fail,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct SymNmfParams {
    /// maximum number of iterations
    pub max_iter: usize,
    /// the iterations stop when the Frobenius norm of H_new - H is less than epsil
    pub epsil: f64,
    /// weight of the multiplicative update. must be in ]0., 1.]
    pub beta: f64,
    /// policy for null denominator entries
    pub zero_denominator: ZeroDenominator,
    /// seed used to generate the initial association matrix
    pub seed: u64,
} // end of SymNmfParams

impl SymNmfParams {
    pub fn new(max_iter: usize, epsil: f64) -> Self {
        SymNmfParams {
            max_iter,
            epsil,
            ..Default::default()
        }
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_zero_denominator(mut self, policy: ZeroDenominator) -> Self {
        self.zero_denominator = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    ///
    pub fn get_max_iter(&self) -> usize {
        self.max_iter
    }

    ///
    pub fn get_epsil(&self) -> f64 {
        self.epsil
    }

    ///
    pub fn get_beta(&self) -> f64 {
        self.beta
    }

    pub fn get_zero_denominator(&self) -> ZeroDenominator {
        self.zero_denominator
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    /// check beta and epsil are in their domain
    pub fn check(&self) -> Result<()> {
        if !(self.beta > 0. && self.beta <= 1.) {
            return Err(SymNmfError::invalid_param(
                "beta",
                format!("must be in ]0., 1.], got {}", self.beta),
            ));
        }
        if !(self.epsil >= 0.) || !self.epsil.is_finite() {
            return Err(SymNmfError::invalid_param(
                "epsil",
                format!("must be a finite non negative value, got {}", self.epsil),
            ));
        }
        Ok(())
    }
} // end of impl SymNmfParams

impl Default for SymNmfParams {
    fn default() -> Self {
        SymNmfParams {
            max_iter: DEFAULT_MAX_ITER,
            epsil: DEFAULT_EPSIL,
            beta: DEFAULT_BETA,
            zero_denominator: ZeroDenominator::KeepEntry,
            seed: DEFAULT_SEED,
        }
    }
}

// end of mod tests
