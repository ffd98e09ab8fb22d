// SPDX-License-Identifier: Apache-2.0

use ndarray::{Array1, ArrayView1};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use statrs::function::gamma::digamma;

use super::joint_dataset::{JointDataset, Metric, marginal_counts_within};
use crate::errors::{Diagnostic, Error, MiEstimate};
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Margin subtracted from each neighbor radius before the strict marginal
/// count, so ties sitting exactly on the boundary are never double-counted.
const BOUNDARY_EPS: f64 = 1e-12;

/// Kraskov-Stögbauer-Grassberger mutual information estimator (variant I).
///
/// For each joint point z_i = (x_i, y_i) the distance to its k-th nearest
/// neighbor (self excluded) gives a radius eps_i; n_x(i) and n_y(i) count the
/// other points strictly within eps_i in each marginal. Then
///
/// I(X;Y) = psi(k) + psi(N) - mean_i[ psi(n_x(i)+1) + psi(n_y(i)+1) ]
///
/// in nats, clamped at 0. Default metric is Chebyshev (L-infinity), for which
/// the joint ball is the product of the marginal intervals and the formula
/// holds as written; under Euclidean distance the joint ball is a disc and the
/// unit-ball volume ratio contributes an extra ln(4/pi) term.
///
/// Degenerate inputs do not fail: N <= k (after masking) and fully duplicated
/// data both produce a 0 estimate carrying a [`Diagnostic`], so matrix and
/// windowed sweeps never abort on one pathological pair.
#[derive(Debug, Clone)]
pub struct KsgMi {
    x: Array1<f64>,
    y: Array1<f64>,
    k: usize,
    metric: Metric,
    mask: Option<Vec<bool>>,
    jitter: Option<(f64, u64)>,
}

impl KsgMi {
    /// Build the estimator from two equal-length sequences and a neighbor count.
    pub fn new(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, k: usize) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch(x.len(), y.len()));
        }
        if k == 0 {
            return Err(Error::InvalidNeighborCount);
        }
        Ok(Self {
            x: x.to_owned(),
            y: y.to_owned(),
            k,
            metric: Metric::default(),
            mask: None,
            jitter: None,
        })
    }

    /// Select the joint-space distance metric (default Chebyshev).
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Restrict estimation to samples where the mask is true. Applied before
    /// jitter.
    pub fn with_mask(mut self, mask: &[bool]) -> Result<Self, Error> {
        if mask.len() != self.x.len() {
            return Err(Error::MaskLengthMismatch {
                mask: mask.len(),
                data: self.x.len(),
            });
        }
        self.mask = Some(mask.to_vec());
        Ok(self)
    }

    /// Add seeded Gaussian noise of the given scale to both channels to break
    /// exact ties. Applied after masking.
    pub fn with_jitter(mut self, scale: f64, seed: u64) -> Result<Self, Error> {
        if !(scale >= 0.0) {
            return Err(Error::InvalidJitter(scale));
        }
        self.jitter = Some((scale, seed));
        Ok(self)
    }

    /// Masked (and jittered) copies of both channels.
    fn preprocessed(&self) -> (Vec<f64>, Vec<f64>) {
        let (mut xs, mut ys): (Vec<f64>, Vec<f64>) = match &self.mask {
            Some(mask) => self
                .x
                .iter()
                .zip(self.y.iter())
                .zip(mask.iter())
                .filter(|&(_, &keep)| keep)
                .map(|((&a, &b), _)| (a, b))
                .unzip(),
            None => (self.x.to_vec(), self.y.to_vec()),
        };
        if let Some((scale, seed)) = self.jitter {
            if scale > 0.0 {
                let mut rng = StdRng::seed_from_u64(seed);
                let normal = Normal::new(0.0, scale).expect("scale is validated non-negative");
                for v in xs.iter_mut().chain(ys.iter_mut()) {
                    *v += normal.sample(&mut rng);
                }
            }
        }
        (xs, ys)
    }

    fn local_terms(&self) -> Result<Array1<f64>, Diagnostic> {
        let (xs, ys) = self.preprocessed();
        let n = xs.len();
        if n <= self.k {
            return Err(Diagnostic::InsufficientSamples);
        }

        let joint = JointDataset::from_pair(
            ArrayView1::from(xs.as_slice()),
            ArrayView1::from(ys.as_slice()),
        );
        let radii = joint.kth_neighbor_radii(self.k, self.metric);
        if radii.iter().all(|&r| r <= BOUNDARY_EPS) {
            return Err(Diagnostic::DegenerateData);
        }

        let strict: Vec<f64> = radii.iter().map(|&r| r - BOUNDARY_EPS).collect();
        let nx = marginal_counts_within(&xs, &strict);
        let ny = marginal_counts_within(&ys, &strict);

        let n_f = n as f64;
        // Unit-ball volume term ln(c_x * c_y / c_xy): zero for the max norm
        // (interval lengths 2, square area 4), ln(4/pi) for Euclidean where
        // the joint ball is a disc of area pi.
        let volume_term = match self.metric {
            Metric::Chebyshev => 0.0,
            Metric::Euclidean => (4.0 / std::f64::consts::PI).ln(),
        };
        let base = digamma(self.k as f64) + digamma(n_f) + volume_term;
        let locals: Vec<f64> = nx
            .iter()
            .zip(ny.iter())
            .map(|(&cx, &cy)| base - digamma(cx as f64 + 1.0) - digamma(cy as f64 + 1.0))
            .collect();
        Ok(Array1::from(locals))
    }

    /// Run the estimator, absorbing degenerate conditions into a diagnostic.
    pub fn estimate(&self) -> MiEstimate {
        match self.local_terms() {
            Ok(locals) => {
                let mean = locals.mean().unwrap_or(0.0);
                MiEstimate::new(mean.max(0.0))
            }
            Err(diag) => MiEstimate::degenerate(diag),
        }
    }

    /// Effective sample count after masking.
    pub fn effective_n(&self) -> usize {
        match &self.mask {
            Some(mask) => mask.iter().filter(|&&m| m).count(),
            None => self.x.len(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl GlobalValue for KsgMi {
    fn global_value(&self) -> f64 {
        self.estimate().value
    }
}

impl LocalValues for KsgMi {
    /// Per-sample psi-combinations; their mean is the (unclamped) global value.
    fn local_values(&self) -> Array1<f64> {
        match self.local_terms() {
            Ok(locals) => locals,
            Err(_) => Array1::zeros(0),
        }
    }
}

impl OptionalLocalValues for KsgMi {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
