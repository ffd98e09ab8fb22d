// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Error types for mutual information estimation.
///
/// Shape and parameter errors indicate caller misuse and abort the whole
/// computation; degenerate-data conditions are not errors and are reported
/// through [`Diagnostic`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("sequences have different lengths: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("mask length {mask} does not match data length {data}")]
    MaskLengthMismatch { mask: usize, data: usize },

    #[error("pair index {index} out of bounds for {ncols} columns")]
    PairIndexOutOfBounds { index: usize, ncols: usize },

    #[error("bins must be >= 1")]
    InvalidBins,

    #[error("logarithm base must be positive and != 1, got {0}")]
    InvalidBase(f64),

    #[error("neighbor count k must be >= 1")]
    InvalidNeighborCount,

    #[error("k = {k} must be smaller than the sample count N = {n}")]
    KTooLarge { k: usize, n: usize },

    #[error("window_size and hop_size must satisfy 0 < hop_size <= window_size, got window_size = {window_size}, hop_size = {hop_size}")]
    InvalidWindow { window_size: usize, hop_size: usize },

    #[error("jitter scale must be non-negative, got {0}")]
    InvalidJitter(f64),

    #[error("block_size must be >= 1")]
    InvalidBlockSize,

    #[error("p-values must lie in [0, 1], got {0}")]
    InvalidPValue(f64),

    #[error("output mode '{output}' is not supported for method '{method}'")]
    UnsupportedOutput {
        method: &'static str,
        output: &'static str,
    },
}

/// Non-fatal conditions attached to an estimate.
///
/// Batch drivers absorb these per pair / per window instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Fewer samples than needed for the requested neighbor count.
    InsufficientSamples,
    /// All pairwise distances are within numerical epsilon of zero
    /// (constant or fully duplicated data).
    DegenerateData,
}

/// A mutual information value plus an optional degeneracy note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiEstimate {
    /// Estimated mutual information in the configured log units (nats by default).
    pub value: f64,
    /// Set when the value is a defined fallback rather than a real estimate.
    pub diagnostic: Option<Diagnostic>,
}

impl MiEstimate {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    pub fn degenerate(diagnostic: Diagnostic) -> Self {
        Self {
            value: 0.0,
            diagnostic: Some(diagnostic),
        }
    }
}
