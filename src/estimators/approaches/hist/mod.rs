// SPDX-License-Identifier: Apache-2.0

pub mod hist_mi;
pub mod histogram;

pub use hist_mi::{Entropies, HistReport, HistogramMi};
pub use histogram::{BinEdges, Histogram2d};
