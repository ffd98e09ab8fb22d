// SPDX-License-Identifier: Apache-2.0

use ndarray::ArrayView1;

use crate::errors::{Diagnostic, Error};
use crate::estimators::approaches::hist::HistogramMi;
use crate::estimators::approaches::ksg::{KsgMi, Metric};

/// Histogram estimator parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HistOptions {
    /// Number of equal-width bins per axis.
    pub bins: usize,
    /// Logarithm base; e for nats, 2 for bits.
    pub base: f64,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self {
            bins: 64,
            base: std::f64::consts::E,
        }
    }
}

/// KSG estimator parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct KsgOptions {
    /// Neighbor count; must be smaller than the sample count.
    pub k: usize,
    /// Joint-space distance metric.
    pub metric: Metric,
    /// Optional validity mask, applied before jitter. Must match the input
    /// length; the windowed and matrix drivers take their own mask argument
    /// instead, so leave this unset when the method is used in a sweep.
    pub mask: Option<Vec<bool>>,
    /// Optional Gaussian tie-breaking noise scale.
    pub jitter: Option<f64>,
    /// Seed for the jitter RNG.
    pub seed: u64,
}

impl Default for KsgOptions {
    fn default() -> Self {
        Self {
            k: 5,
            metric: Metric::Chebyshev,
            mask: None,
            jitter: None,
            seed: 0,
        }
    }
}

/// Estimator family selection.
///
/// This enum is the whole "device" surface: there is exactly one software
/// implementation per family and no hardware dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum MiMethod {
    Hist(HistOptions),
    Ksg(KsgOptions),
}

impl MiMethod {
    /// Histogram method with default options.
    pub fn hist() -> Self {
        MiMethod::Hist(HistOptions::default())
    }

    /// KSG method with default options.
    pub fn ksg() -> Self {
        MiMethod::Ksg(KsgOptions::default())
    }
}

/// Output selection for [`mutual_info_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Mi,
    Entropies,
    All,
}

/// Result views of [`mutual_info_report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiOutput {
    Mi(f64),
    Entropies { hx: f64, hy: f64, hxy: f64 },
    All { mi: f64, hx: f64, hy: f64, hxy: f64 },
}

fn build_ksg(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    opts: &KsgOptions,
) -> Result<KsgMi, Error> {
    let mut est = KsgMi::new(x, y, opts.k)?.with_metric(opts.metric);
    if let Some(mask) = &opts.mask {
        est = est.with_mask(mask)?;
    }
    if let Some(scale) = opts.jitter {
        est = est.with_jitter(scale, opts.seed)?;
    }
    Ok(est)
}

/// Mutual information between two equal-length sequences.
///
/// Returns a bare value in the method's log units (nats unless a histogram
/// base is configured). Shape and parameter problems fail immediately; for
/// the KSG method `k >= N` (after masking) is treated as caller misuse here,
/// while the batch drivers absorb it per window / per pair.
pub fn mutual_info(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    method: &MiMethod,
) -> Result<f64, Error> {
    match method {
        MiMethod::Hist(opts) => {
            let est = HistogramMi::new(x, y, opts.bins)?.with_base(opts.base)?;
            Ok(est.mi())
        }
        MiMethod::Ksg(opts) => {
            let est = build_ksg(x, y, opts)?;
            let result = est.estimate();
            if result.diagnostic == Some(Diagnostic::InsufficientSamples) {
                return Err(Error::KTooLarge {
                    k: est.k(),
                    n: est.effective_n(),
                });
            }
            Ok(result.value)
        }
    }
}

/// Mutual information with a selectable output view.
///
/// The histogram method supports all views; KSG has no entropy decomposition,
/// so `Entropies` and `All` fail with [`Error::UnsupportedOutput`].
pub fn mutual_info_report(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    method: &MiMethod,
    output: Output,
) -> Result<MiOutput, Error> {
    match method {
        MiMethod::Hist(opts) => {
            let est = HistogramMi::new(x, y, opts.bins)?.with_base(opts.base)?;
            let r = est.report();
            Ok(match output {
                Output::Mi => MiOutput::Mi(r.mi),
                Output::Entropies => MiOutput::Entropies {
                    hx: r.hx,
                    hy: r.hy,
                    hxy: r.hxy,
                },
                Output::All => MiOutput::All {
                    mi: r.mi,
                    hx: r.hx,
                    hy: r.hy,
                    hxy: r.hxy,
                },
            })
        }
        MiMethod::Ksg(_) => match output {
            Output::Mi => Ok(MiOutput::Mi(mutual_info(x, y, method)?)),
            Output::Entropies => Err(Error::UnsupportedOutput {
                method: "ksg",
                output: "entropies",
            }),
            Output::All => Err(Error::UnsupportedOutput {
                method: "ksg",
                output: "all",
            }),
        },
    }
}

/// Estimator-level dispatch that keeps degeneracy diagnostics, used by the
/// windowed and matrix drivers.
pub(crate) fn mutual_info_absorbing(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    method: &MiMethod,
) -> Result<f64, Error> {
    match method {
        MiMethod::Hist(opts) => {
            let est = HistogramMi::new(x, y, opts.bins)?.with_base(opts.base)?;
            Ok(est.mi())
        }
        MiMethod::Ksg(opts) => {
            let est = build_ksg(x, y, opts)?;
            Ok(est.estimate().value)
        }
    }
}
