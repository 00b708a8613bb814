//! Selection of the stage of the pipeline whose output is asked for.

use std::fmt::Debug;
use std::str::FromStr;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use crate::affinity::{degree, normalized_affinity, similarity};
use crate::error::{Result, SymNmfError};
use crate::matrix::DenseMat;
use crate::symnmf::{SymNmf, SymNmfParams};
use crate::vectors::VectorSet;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Goal {
    /// similarity matrix
    Sym,
    /// diagonal degree matrix
    Ddg,
    /// normalized affinity matrix
    Norm,
    /// association matrix H obtained by factorization
    SymNmf,
}

impl FromStr for Goal {
    type Err = SymNmfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            "symnmf" => Ok(Goal::SymNmf),
            _ => Err(SymNmfError::invalid_param(
                "goal",
                format!("expected sym, ddg, norm or symnmf, got {}", s),
            )),
        }
    }
} // end of impl FromStr for Goal

/// Computes the matrix associated to goal.
/// k (number of clusters) is used only for Goal::SymNmf.
pub fn run_goal<F>(goal: Goal, vectors: &VectorSet<F>, k: usize, params: &SymNmfParams) -> Result<DenseMat<F>>
where
    F: Float + LinalgScalar + Debug,
{
    log::debug!("run_goal {:?}", goal);
    match goal {
        Goal::Sym => similarity(vectors),
        Goal::Ddg => degree(vectors),
        Goal::Norm => normalized_affinity(vectors),
        Goal::SymNmf => {
            let nmf = SymNmf::new(*params);
            nmf.cluster(vectors, k).map(|res| res.into_h())
        }
    }
} // end of run_goal

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!("sym".parse::<Goal>().unwrap(), Goal::Sym);
        assert_eq!("ddg".parse::<Goal>().unwrap(), Goal::Ddg);
        assert_eq!("norm".parse::<Goal>().unwrap(), Goal::Norm);
        assert_eq!("symnmf".parse::<Goal>().unwrap(), Goal::SymNmf);
        assert!("Sym".parse::<Goal>().is_err());
        assert!("kmeans".parse::<Goal>().is_err());
    }

    #[test]
    fn test_run_goal_shapes() {
        log_init_test();
        //
        let rows = vec![vec![0., 0.], vec![1., 0.], vec![0., 1.], vec![4., 4.], vec![4., 5.]];
        let vectors = VectorSet::from_rows(&rows).unwrap();
        let params = SymNmfParams::default();
        for goal in [Goal::Sym, Goal::Ddg, Goal::Norm] {
            let m = run_goal(goal, &vectors, 0, &params).unwrap();
            assert_eq!(m.shape(), (5, 5));
        }
        let h = run_goal(Goal::SymNmf, &vectors, 2, &params).unwrap();
        assert_eq!(h.shape(), (5, 2));
        // k is checked for symnmf
        assert!(run_goal(Goal::SymNmf, &vectors, 5, &params).is_err());
    } // end of test_run_goal_shapes
} // end of mod tests
