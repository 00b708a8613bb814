//! Symetric Non negative Matrix Factorization by damped multiplicative updates.
//!
//! Given the normalized affinity W (N,N) and a non negative initial association matrix H (N,k)
//! we search H such that H * Ht approximates W.
//!
//! See *Symmetric Nonnegative Matrix Factorization for Graph Clustering* Kuang, Ding, Park SDM 2012.

use std::fmt::Debug;
use std::time::SystemTime;

use cpu_time::ProcessTime;
use ndarray::LinalgScalar;
use num_traits::float::Float;

use super::init::initial_association;
use super::params::{SymNmfParams, ZeroDenominator};
use crate::affinity::normalized_affinity;
use crate::error::{Result, SymNmfError};
use crate::matrix::DenseMat;
use crate::vectors::VectorSet;

/// terminal state of the iterations
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Convergence {
    /// the norm of the difference of 2 successive iterates went below epsil
    Converged,
    /// the maximum number of iterations was reached, the last iterate is returned
    ExhaustedIterations,
}

/// result of a factorization
#[derive(Debug, Clone)]
pub struct NmfResult<F> {
    /// final association matrix (N,k)
    h: DenseMat<F>,
    /// number of iterations done
    nb_iter: usize,
    /// Frobenius norm of H_new - H at each iteration
    deltas: Vec<f64>,
    ///
    convergence: Convergence,
} // end of NmfResult

impl<F> NmfResult<F> {
    pub fn get_h(&self) -> &DenseMat<F> {
        &self.h
    }

    pub fn into_h(self) -> DenseMat<F> {
        self.h
    }

    pub fn get_nb_iter(&self) -> usize {
        self.nb_iter
    }

    pub fn get_deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn get_convergence(&self) -> Convergence {
        self.convergence
    }
} // end of impl NmfResult

/// The factorizer. It only holds parameters, each call works on its own matrices.
pub struct SymNmf {
    params: SymNmfParams,
}

impl SymNmf {
    pub fn new(params: SymNmfParams) -> Self {
        SymNmf { params }
    }

    pub fn get_params(&self) -> &SymNmfParams {
        &self.params
    }

    // checks w is (N,N), h is (N,k) with 1 <= k < N, both with non negative finite entries.
    fn check_inputs<F>(&self, w: &DenseMat<F>, h: &DenseMat<F>) -> Result<()>
    where
        F: Float + LinalgScalar + Debug,
    {
        let (nb_row, nb_col) = w.shape();
        if nb_row != nb_col {
            return Err(SymNmfError::invalid_dims(format!(
                "symnmf : W must be square, got {:?}",
                w.shape()
            )));
        }
        if w.get_data().iter().any(|x| !(*x >= F::zero()) || !x.is_finite()) {
            log::error!("symnmf : W has negative or non finite entries");
            return Err(SymNmfError::invalid_param(
                "w",
                "entries must be finite and non negative",
            ));
        }
        if h.nb_rows() != nb_row || h.nb_cols() == 0 {
            return Err(SymNmfError::invalid_dims(format!(
                "symnmf : H has shape {:?}, W has shape {:?}",
                h.shape(),
                w.shape()
            )));
        }
        if h.nb_cols() >= nb_row {
            return Err(SymNmfError::invalid_param(
                "initial_h",
                format!("k must satisfy k < N = {}, got {}", nb_row, h.nb_cols()),
            ));
        }
        if h.get_data().iter().any(|x| !(*x >= F::zero()) || !x.is_finite()) {
            return Err(SymNmfError::invalid_param(
                "initial_h",
                "entries must be finite and non negative",
            ));
        }
        self.params.check()
    } // end of check_inputs

    #[cfg_attr(doc, katexit::katexit)]
    /// One multiplicative update written into new_h:
    /// $$ H_{new}(i,j) = H(i,j) (1 - \beta + \beta \frac{(W H)(i,j)}{(H H^t H)(i,j)}) $$
    /// Returns the number of null denominator entries met.
    fn update<F>(
        &self,
        h: &DenseMat<F>,
        numerator: &DenseMat<F>,
        denominator: &DenseMat<F>,
        new_h: &mut DenseMat<F>,
        beta: F,
    ) -> Result<usize>
    where
        F: Float + LinalgScalar + Debug,
    {
        let mut nb_null_den = 0usize;
        let (nb_row, nb_col) = h.shape();
        for i in 0..nb_row {
            for j in 0..nb_col {
                let den = denominator.get(i, j);
                if den == F::zero() {
                    match self.params.get_zero_denominator() {
                        ZeroDenominator::KeepEntry => {
                            nb_null_den += 1;
                            new_h.set(i, j, h.get(i, j));
                            continue;
                        }
                        ZeroDenominator::Fail => {
                            log::error!("symnmf : null denominator at ({}, {})", i, j);
                            return Err(SymNmfError::NonFiniteResult {
                                stage: "symnmf",
                                row: i,
                                col: j,
                            });
                        }
                    }
                }
                let value =
                    h.get(i, j) * (F::one() - beta + beta * numerator.get(i, j) / den);
                if !value.is_finite() {
                    log::error!(
                        "symnmf : non finite update at ({}, {}), num : {:?}, den : {:?}",
                        i,
                        j,
                        numerator.get(i, j),
                        den
                    );
                    return Err(SymNmfError::NonFiniteResult {
                        stage: "symnmf",
                        row: i,
                        col: j,
                    });
                }
                new_h.set(i, j, value);
            }
        }
        Ok(nb_null_den)
    } // end of update

    /// Runs the iterations from initial_h and returns the final matrix with convergence information.
    /// With max_iter = 0 the initial matrix is returned unchanged.
    pub fn factorize_report<F>(&self, w: &DenseMat<F>, initial_h: DenseMat<F>) -> Result<NmfResult<F>>
    where
        F: Float + LinalgScalar + Debug,
    {
        self.check_inputs(w, &initial_h)?;
        let (nb_row, k) = initial_h.shape();
        let max_iter = self.params.get_max_iter();
        log::debug!(
            "symnmf N : {}, k : {}, max_iter : {}, epsil : {:.3e}",
            nb_row,
            k,
            max_iter,
            self.params.get_epsil()
        );
        let beta = F::from(self.params.get_beta())
            .ok_or_else(|| SymNmfError::invalid_param("beta", "not representable"))?;
        let epsil = F::from(self.params.get_epsil())
            .ok_or_else(|| SymNmfError::invalid_param("epsil", "not representable"))?;
        //
        let mut h = initial_h;
        if max_iter == 0 {
            return Ok(NmfResult {
                h,
                nb_iter: 0,
                deltas: Vec::new(),
                convergence: Convergence::ExhaustedIterations,
            });
        }
        //
        let cpu_start = ProcessTime::now();
        let sys_start = SystemTime::now();
        let mut new_h = DenseMat::<F>::zeros(nb_row, k)?;
        let mut deltas = Vec::<f64>::with_capacity(max_iter.min(10_000));
        let mut nb_null_den = 0usize;
        let mut convergence = Convergence::ExhaustedIterations;
        //
        for _ in 0..max_iter {
            // the (N,N) product H * Ht is released at the end of the block
            {
                let numerator = w.multiply(&h)?;
                let denominator = h.multiply(&h.transpose()?)?.multiply(&h)?;
                nb_null_den += self.update(&h, &numerator, &denominator, &mut new_h, beta)?;
            }
            let delta = new_h.subtract(&h)?.frobenius_norm(false);
            let delta_f64 = delta.to_f64().unwrap_or(f64::NAN);
            log::trace!("symnmf iteration {} delta : {:.6e}", deltas.len(), delta_f64);
            deltas.push(delta_f64);
            if delta < epsil {
                convergence = Convergence::Converged;
                break;
            }
            h.assign(&new_h)?;
        }
        //
        if nb_null_den > 0 {
            log::warn!("symnmf : {} null denominator entries left unchanged", nb_null_den);
        }
        log::info!(
            "symnmf {:?} after {} iterations, last delta : {:.3e}, sys time(ms) {:?} cpu time(ms) {:?}",
            convergence,
            deltas.len(),
            deltas.last().copied().unwrap_or(f64::NAN),
            sys_start.elapsed().map(|d| d.as_millis()).unwrap_or(0),
            cpu_start.elapsed().as_millis()
        );
        Ok(NmfResult {
            h: new_h,
            nb_iter: deltas.len(),
            deltas,
            convergence,
        })
    } // end of factorize_report

    /// same as [factorize_report](Self::factorize_report) but returns only the association matrix
    pub fn factorize<F>(&self, w: &DenseMat<F>, initial_h: DenseMat<F>) -> Result<DenseMat<F>>
    where
        F: Float + LinalgScalar + Debug,
    {
        self.factorize_report(w, initial_h).map(|res| res.into_h())
    }

    /// Whole pipeline : normalized affinity of vectors, random initial H with k columns, factorization.
    pub fn cluster<F>(&self, vectors: &VectorSet<F>, k: usize) -> Result<NmfResult<F>>
    where
        F: Float + LinalgScalar + Debug,
    {
        let w = normalized_affinity(vectors)?;
        let h = initial_association(&w, k, self.params.get_seed())?;
        self.factorize_report(&w, h)
    }
} // end of impl SymNmf

/// Factorizes w from initial_h with max_iter iterations and threshold epsil, other parameters are the defaults.
pub fn factorize<F>(w: &DenseMat<F>, initial_h: DenseMat<F>, max_iter: usize, epsil: f64) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    SymNmf::new(SymNmfParams::new(max_iter, epsil)).factorize(w, initial_h)
}

//==========================================================================

// end of mod tests
