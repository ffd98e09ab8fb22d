// SPDX-License-Identifier: Apache-2.0

use ndarray::ArrayView1;

use super::histogram::{Histogram2d, entropy_from_counts, nonzero_bins};
use crate::errors::Error;
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};
use ndarray::Array1;

/// Marginal and joint entropies of the binned pair, in units of the
/// configured log base. `hxy` carries the Miller-Madow offset so that
/// `hx + hy - hxy` equals the corrected MI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entropies {
    pub hx: f64,
    pub hy: f64,
    pub hxy: f64,
}

/// MI together with its constituent entropies (the "all" output view).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistReport {
    pub mi: f64,
    pub hx: f64,
    pub hy: f64,
    pub hxy: f64,
}

/// Histogram (plug-in) mutual information estimator with a Miller-Madow-style
/// small-sample bias correction.
///
/// Both sequences are discretized onto a shared equal-width 2D grid; marginal
/// distributions are the joint histogram's axis sums. The raw plug-in value
/// H(x) + H(y) - H(x,y) is reduced by
/// `((k_x - 1)(k_y - 1) - (k_xy - 1)) / (2N)` where `k_*` count nonzero bins,
/// then clamped at 0.
///
/// Constant signals and empty input (possible after window masking) are
/// degenerate, not errors: all entropies and the MI are 0.
#[derive(Debug, Clone)]
pub struct HistogramMi {
    joint: Histogram2d,
    base: f64,
}

impl HistogramMi {
    /// Build the estimator from two equal-length sequences.
    pub fn new(
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        bins: usize,
    ) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch(x.len(), y.len()));
        }
        if bins == 0 {
            return Err(Error::InvalidBins);
        }
        Ok(Self {
            joint: Histogram2d::from_pair(x, y, bins),
            base: std::f64::consts::E,
        })
    }

    /// Set the logarithm base (default e, i.e. nats).
    pub fn with_base(mut self, base: f64) -> Result<Self, Error> {
        if !(base > 0.0) || base == 1.0 {
            return Err(Error::InvalidBase(base));
        }
        self.base = base;
        Ok(self)
    }

    /// Miller-Madow-style bias of the plug-in MI, in units of the log base.
    fn bias(&self) -> f64 {
        if self.joint.n == 0 {
            return 0.0;
        }
        let kx = nonzero_bins(self.joint.marginal_x().iter()) as f64;
        let ky = nonzero_bins(self.joint.marginal_y().iter()) as f64;
        let kxy = nonzero_bins(self.joint.counts.iter()) as f64;
        let nats = ((kx - 1.0) * (ky - 1.0) - (kxy - 1.0)) / (2.0 * self.joint.n as f64);
        nats / self.base.ln()
    }

    /// Bias-corrected mutual information, clamped at 0.
    pub fn mi(&self) -> f64 {
        self.report().mi
    }

    /// Marginal and joint entropies, with `hxy` bias-corrected so the
    /// closed-form relation matches [`HistogramMi::mi`].
    pub fn entropies(&self) -> Entropies {
        let r = self.report();
        Entropies {
            hx: r.hx,
            hy: r.hy,
            hxy: r.hxy,
        }
    }

    /// MI and entropies in one pass over the histogram.
    pub fn report(&self) -> HistReport {
        let total = self.joint.n as f64;
        let hx = entropy_from_counts(self.joint.marginal_x().iter(), total, self.base);
        let hy = entropy_from_counts(self.joint.marginal_y().iter(), total, self.base);
        let hxy = entropy_from_counts(self.joint.counts.iter(), total, self.base);
        // MI is bounded by [0, min(Hx, Hy)]; the lower clamp absorbs
        // correction overshoot and the upper one pins constant signals
        // (a single occupied marginal bin) to exactly 0.
        let mi = (hx + hy - hxy - self.bias()).clamp(0.0, hx.min(hy));
        HistReport {
            mi,
            hx,
            hy,
            // Joint entropy is reported bias-corrected, derived from the
            // closed-form relation so hx + hy - hxy == mi exactly.
            hxy: hx + hy - mi,
        }
    }
}

impl GlobalValue for HistogramMi {
    fn global_value(&self) -> f64 {
        self.mi()
    }
}

impl OptionalLocalValues for HistogramMi {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Err("local values are not defined for the binned MI estimator")
    }
}
