// SPDX-License-Identifier: Apache-2.0

use kiddo::{ImmutableKdTree, Manhattan, SquaredEuclidean};
use ndarray::ArrayView1;
use std::num::NonZeroUsize;

/// Distance metric for the joint (x, y) space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// L-infinity norm, the canonical KSG choice.
    #[default]
    Chebyshev,
    /// L2 norm.
    Euclidean,
}

/// Joint 2D point set for nearest-neighbor statistics.
#[derive(Debug, Clone)]
pub struct JointDataset {
    pub points: Vec<[f64; 2]>,
    pub n: usize,
}

impl JointDataset {
    pub fn from_pair(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        let points: Vec<[f64; 2]> = x.iter().zip(y.iter()).map(|(&a, &b)| [a, b]).collect();
        Self {
            n: points.len(),
            points,
        }
    }

    /// Distance to the k-th nearest neighbor of every point (self excluded),
    /// under the selected metric.
    ///
    /// kiddo's KD-tree search accumulates per-axis `dist1` contributions, so
    /// its pruning bound is only valid for axis-additive metrics. Chebyshev
    /// distances are therefore obtained from a Manhattan query in coordinates
    /// rotated by 45 degrees: max(|dx|, |dy|) = (|dx+dy| + |dx-dy|) / 2, an
    /// exact identity in 2D.
    pub fn kth_neighbor_radii(&self, k: usize, metric: Metric) -> Vec<f64> {
        debug_assert!(k >= 1 && k < self.n);
        let capacity = NonZeroUsize::new(k + 1).expect("k + 1 is nonzero");
        match metric {
            Metric::Chebyshev => {
                let rotated: Vec<[f64; 2]> = self
                    .points
                    .iter()
                    .map(|&[a, b]| [a + b, a - b])
                    .collect();
                let tree = ImmutableKdTree::new_from_slice(&rotated);
                rotated
                    .iter()
                    .map(|p| {
                        let mut neigh = tree.nearest_n::<Manhattan>(p, capacity);
                        let kth = neigh.remove(k);
                        let (dist, _idx): (f64, u64) = kth.into();
                        dist / 2.0
                    })
                    .collect()
            }
            Metric::Euclidean => {
                let tree = ImmutableKdTree::new_from_slice(&self.points);
                self.points
                    .iter()
                    .map(|p| {
                        let mut neigh = tree.nearest_n::<SquaredEuclidean>(p, capacity);
                        let kth = neigh.remove(k);
                        let (dist2, _idx): (f64, u64) = kth.into();
                        dist2.sqrt()
                    })
                    .collect()
            }
        }
    }
}

/// Per-point counts of other points strictly within a radius along one axis.
///
/// Counting is done against a sorted copy with binary searches, O(N log N)
/// overall instead of the naive O(N^2) pairwise scan.
pub fn marginal_counts_within(values: &[f64], radii: &[f64]) -> Vec<usize> {
    debug_assert_eq!(values.len(), radii.len());
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    values
        .iter()
        .zip(radii.iter())
        .map(|(&v, &r)| {
            // Strict window (v - r, v + r); the point itself sits inside it
            // whenever r > 0 and is removed from the count. With r <= 0 the
            // window is empty and right can fall below left.
            let left = sorted.partition_point(|&s| s <= v - r);
            let right = sorted.partition_point(|&s| s < v + r);
            right.saturating_sub(left).saturating_sub(1)
        })
        .collect()
}
