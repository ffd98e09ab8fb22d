pub mod approaches;
pub mod matrix;
pub mod mutual_information;
pub mod traits;
pub mod windowed;

pub use matrix::{mutual_info_matrix, mutual_info_pairs};
pub use mutual_information::{
    HistOptions, KsgOptions, MiMethod, MiOutput, Output, mutual_info, mutual_info_report,
};
pub use traits::{GlobalValue, LocalValues, OptionalLocalValues};
pub use windowed::{WindowedMi, windowed_mi};
