// SPDX-License-Identifier: Apache-2.0

use ndarray::ArrayView1;

use crate::errors::Error;
use crate::estimators::mutual_information::{MiMethod, mutual_info_absorbing};

/// Sliding-window MI series.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedMi {
    /// Position of each window, reported as its end index
    /// `start + window_size - 1`.
    pub positions: Vec<usize>,
    /// MI of each window, in the method's log units.
    pub values: Vec<f64>,
}

impl WindowedMi {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mutual information over sliding windows of a pair of sequences.
///
/// Windows start at 0, `hop_size`, `2 * hop_size`, ... as long as a full
/// `window_size` fits; a trailing partial window is dropped, not padded. Each
/// window re-runs the selected estimator from scratch; no state is carried
/// between windows. The reported position is the window end index
/// `start + window_size - 1`, a stable convention across methods.
///
/// When `mask` is given, each window keeps only samples where the mask is
/// true and both channels are finite; without a mask the raw slice is used.
/// Degenerate windows (empty after masking, or too few samples for the KSG
/// neighbor count) contribute a 0 value instead of aborting the sweep. Shape
/// and parameter errors still fail the whole call.
pub fn windowed_mi(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    window_size: usize,
    hop_size: usize,
    method: &MiMethod,
    mask: Option<&[bool]>,
) -> Result<WindowedMi, Error> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch(x.len(), y.len()));
    }
    if window_size == 0 || hop_size == 0 || hop_size > window_size {
        return Err(Error::InvalidWindow {
            window_size,
            hop_size,
        });
    }
    if let Some(m) = mask {
        if m.len() != x.len() {
            return Err(Error::MaskLengthMismatch {
                mask: m.len(),
                data: x.len(),
            });
        }
    }

    let n = x.len();
    let mut positions = Vec::new();
    let mut values = Vec::new();

    let mut start = 0;
    while start + window_size <= n {
        let end = start + window_size;
        let wx = x.slice(ndarray::s![start..end]);
        let wy = y.slice(ndarray::s![start..end]);

        let value = match mask {
            Some(m) => {
                let (fx, fy): (Vec<f64>, Vec<f64>) = wx
                    .iter()
                    .zip(wy.iter())
                    .zip(m[start..end].iter())
                    .filter(|&((&a, &b), &keep)| keep && a.is_finite() && b.is_finite())
                    .map(|((&a, &b), _)| (a, b))
                    .unzip();
                mutual_info_absorbing(
                    ArrayView1::from(fx.as_slice()),
                    ArrayView1::from(fy.as_slice()),
                    method,
                )?
            }
            None => mutual_info_absorbing(wx, wy, method)?,
        };

        positions.push(end - 1);
        values.push(value);
        start += hop_size;
    }

    Ok(WindowedMi { positions, values })
}
