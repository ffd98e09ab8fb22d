pub mod hist;
pub mod ksg;

// Unified re-exports so callers can import
// itpu::estimators::approaches::* ergonomically.
pub use hist::{Entropies, HistReport, HistogramMi};
pub use ksg::{KsgMi, Metric};
