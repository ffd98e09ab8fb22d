pub mod fdr;
pub mod permutation;
pub mod surrogates;

pub use fdr::fdr_bh;
pub use permutation::{PermTest, perm_test};
pub use surrogates::{block_shuffle, iaaft_surrogate};
