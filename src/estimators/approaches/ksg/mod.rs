// SPDX-License-Identifier: Apache-2.0

pub mod joint_dataset;
pub mod ksg_mi;

pub use joint_dataset::{JointDataset, Metric};
pub use ksg_mi::KsgMi;
