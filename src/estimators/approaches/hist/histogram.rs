// SPDX-License-Identifier: Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Equal-width bin edges over the value range of a sequence.
///
/// Bins follow `numpy.histogram2d` conventions: `bins` half-open intervals
/// of equal width spanning [min, max], with the last bin closed on the right
/// so the maximum lands in bin `bins - 1`. A degenerate range (all values
/// equal) is widened by ±0.5 so every sample falls in a well-defined bin.
#[derive(Debug, Clone, Copy)]
pub struct BinEdges {
    lo: f64,
    width: f64,
    bins: usize,
}

impl BinEdges {
    pub fn from_values(values: ArrayView1<'_, f64>, bins: usize) -> Self {
        debug_assert!(bins >= 1);
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values.iter() {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            // Empty input; any bin placement is unreachable.
            lo = 0.0;
            hi = 1.0;
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        Self {
            lo,
            width: (hi - lo) / bins as f64,
            bins,
        }
    }

    /// Bin index for a value, clamping the inclusive right edge into the last bin.
    #[inline]
    pub fn index(&self, v: f64) -> usize {
        let idx = ((v - self.lo) / self.width) as usize;
        idx.min(self.bins - 1)
    }
}

/// Joint 2D histogram over a pair of equal-length sequences.
///
/// The marginal histograms are derived by summing over one axis, so the
/// closed-form relation H(X) + H(Y) - H(X,Y) = I(X;Y) holds exactly in the
/// discretized space.
#[derive(Debug, Clone)]
pub struct Histogram2d {
    pub counts: Array2<f64>,
    pub n: usize,
}

impl Histogram2d {
    pub fn from_pair(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, bins: usize) -> Self {
        debug_assert_eq!(x.len(), y.len());
        let edges_x = BinEdges::from_values(x, bins);
        let edges_y = BinEdges::from_values(y, bins);
        let mut counts = Array2::<f64>::zeros((bins, bins));
        for (&xv, &yv) in x.iter().zip(y.iter()) {
            counts[(edges_x.index(xv), edges_y.index(yv))] += 1.0;
        }
        Self { counts, n: x.len() }
    }

    pub fn marginal_x(&self) -> Array1<f64> {
        self.counts.sum_axis(Axis(1))
    }

    pub fn marginal_y(&self) -> Array1<f64> {
        self.counts.sum_axis(Axis(0))
    }
}

/// Shannon entropy of a count vector/matrix in units of `base`.
///
/// Zero-count entries are excluded (0 * log 0 = 0); an all-zero histogram is
/// degenerate and has entropy 0.
pub fn entropy_from_counts<'a, I>(counts: I, total: f64, base: f64) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    if total <= 0.0 {
        return 0.0;
    }
    let ln_base = base.ln();
    let mut h = 0.0_f64;
    for &cnt in counts {
        if cnt > 0.0 {
            let p = cnt / total;
            h -= p * p.ln();
        }
    }
    h / ln_base
}

/// Number of nonzero entries, the effective support size used by the
/// Miller-Madow correction.
pub fn nonzero_bins<'a, I>(counts: I) -> usize
where
    I: IntoIterator<Item = &'a f64>,
{
    counts.into_iter().filter(|&&c| c > 0.0).count()
}
