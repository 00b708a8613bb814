//! Silhouette score of a clustering with euclidean distance.
//!
//! For a point i in cluster C, a(i) is the mean distance to the other points of C and b(i) the minimum
//! over other clusters of the mean distance to their points. The score of i is (b - a) / max(a, b),
//! 0 if C has only one point. The silhouette score is the mean over all points.

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::float::Float;

use rayon::prelude::*;

use crate::affinity::similarity::squared_distance;
use crate::error::{Result, SymNmfError};
use crate::vectors::VectorSet;

/// maps labels to 0..nb_labels. Returns nb_labels and the compacted labels
fn compact_labels(labels: &[usize]) -> (usize, Vec<usize>) {
    let mut distinct = labels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let compacted = labels
        .iter()
        .map(|l| distinct.binary_search(l).unwrap_or(0))
        .collect();
    (distinct.len(), compacted)
}

/// Requires one label by point and a number of distinct labels between 2 and N-1.
pub fn silhouette_score<F>(vectors: &VectorSet<F>, labels: &[usize]) -> Result<f64>
where
    F: Float + LinalgScalar + Debug + Send + Sync,
{
    let nb_points = vectors.get_nb_points();
    if labels.len() != nb_points {
        return Err(SymNmfError::DimensionMismatch {
            expected: nb_points,
            found: labels.len(),
        });
    }
    let (nb_labels, labels) = compact_labels(labels);
    if nb_labels < 2 || nb_labels + 1 > nb_points {
        log::error!(
            "silhouette_score needs 2 <= nb labels <= N-1, got {} labels for {} points",
            nb_labels,
            nb_points
        );
        return Err(SymNmfError::invalid_param(
            "labels",
            format!("{} distinct labels for {} points", nb_labels, nb_points),
        ));
    }
    let mut sizes = vec![0usize; nb_labels];
    for l in &labels {
        sizes[*l] += 1;
    }
    //
    let point_score = |i: usize| -> f64 {
        let own = labels[i];
        if sizes[own] <= 1 {
            return 0.;
        }
        let point = vectors.get_point(i);
        let mut dist_sums = vec![0f64; nb_labels];
        for j in 0..nb_points {
            if j != i {
                let dist = squared_distance(&point, &vectors.get_point(j)).sqrt();
                dist_sums[labels[j]] += dist.to_f64().unwrap_or(f64::NAN);
            }
        }
        let a = dist_sums[own] / (sizes[own] - 1) as f64;
        let b = (0..nb_labels)
            .filter(|l| *l != own)
            .map(|l| dist_sums[l] / sizes[l] as f64)
            .fold(f64::INFINITY, f64::min);
        let max = a.max(b);
        if max > 0. {
            (b - a) / max
        } else {
            0.
        }
    };
    let scores: Vec<f64> = (0..nb_points).into_par_iter().map(point_score).collect();
    let score = scores.iter().sum::<f64>() / nb_points as f64;
    log::debug!("silhouette score : {:.4}", score);
    Ok(score)
} // end of silhouette_score

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_silhouette_by_hand() {
        log_init_test();
        // points on a line 0, 1 | 4, 5
        let vectors = VectorSet::from_rows(&[vec![0.], vec![1.], vec![4.], vec![5.]]).unwrap();
        let score = silhouette_score(&vectors, &[0, 0, 1, 1]).unwrap();
        // point 0 : a = 1, b = 4.5 ; point 1 : a = 1, b = 3.5
        let s0 = (4.5 - 1.) / 4.5;
        let s1 = (3.5 - 1.) / 3.5;
        let expected = (s0 + s1) / 2.;
        assert!((score - expected).abs() < 1.0E-12);
        // labels values do not matter
        let score_relabel = silhouette_score(&vectors, &[7, 7, 2, 2]).unwrap();
        assert!((score - score_relabel).abs() < 1.0E-12);
    } // end of test_silhouette_by_hand

    #[test]
    fn test_silhouette_singleton_and_bad_labels() {
        log_init_test();
        //
        let vectors = VectorSet::from_rows(&[vec![0.], vec![1.], vec![10.]]).unwrap();
        // singleton cluster scores 0
        let score = silhouette_score(&vectors, &[0, 0, 1]).unwrap();
        let s0 = (10. - 1.) / 10.;
        let s1 = (9. - 1.) / 9.;
        assert!((score - (s0 + s1) / 3.).abs() < 1.0E-12);
        //
        assert!(silhouette_score(&vectors, &[0, 0, 0]).is_err());
        assert!(silhouette_score(&vectors, &[0, 1, 2]).is_err());
        assert!(silhouette_score(&vectors, &[0, 1]).is_err());
    } // end of test_silhouette_singleton_and_bad_labels
} // end of mod tests
