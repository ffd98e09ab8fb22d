// SPDX-License-Identifier: Apache-2.0

use ndarray::{Array2, ArrayView2, Axis};
use std::collections::HashMap;

use crate::errors::Error;
use crate::estimators::mutual_information::{MiMethod, mutual_info_absorbing};

/// Apply the optional global row mask once, before any pair computation.
fn masked_rows(data: ArrayView2<'_, f64>, mask: Option<&[bool]>) -> Result<Array2<f64>, Error> {
    match mask {
        None => Ok(data.to_owned()),
        Some(m) => {
            if m.len() != data.nrows() {
                return Err(Error::MaskLengthMismatch {
                    mask: m.len(),
                    data: data.nrows(),
                });
            }
            let keep: Vec<usize> = m
                .iter()
                .enumerate()
                .filter(|&(_, &k)| k)
                .map(|(i, _)| i)
                .collect();
            Ok(data.select(Axis(0), &keep))
        }
    }
}

/// MI for every unordered pair of columns of a samples-by-features dataset.
///
/// The result is symmetric with a zero diagonal; self-MI is not computed and
/// the diagonal is not filled with entropy. Degenerate pairs contribute 0,
/// shape and parameter errors abort the whole matrix.
pub fn mutual_info_matrix(
    data: ArrayView2<'_, f64>,
    method: &MiMethod,
    mask: Option<&[bool]>,
) -> Result<Array2<f64>, Error> {
    let data = masked_rows(data, mask)?;
    let d = data.ncols();
    let mut out = Array2::<f64>::zeros((d, d));
    for i in 0..d {
        for j in (i + 1)..d {
            let mi = mutual_info_absorbing(data.column(i), data.column(j), method)?;
            out[(i, j)] = mi;
            out[(j, i)] = mi;
        }
    }
    Ok(out)
}

/// MI for an explicit selection of column pairs, without computing the full
/// matrix. Returns a mapping from each requested (i, j) to its value.
pub fn mutual_info_pairs(
    data: ArrayView2<'_, f64>,
    pairs: &[(usize, usize)],
    method: &MiMethod,
    mask: Option<&[bool]>,
) -> Result<HashMap<(usize, usize), f64>, Error> {
    let data = masked_rows(data, mask)?;
    let d = data.ncols();
    let mut out = HashMap::with_capacity(pairs.len());
    for &(i, j) in pairs {
        let oob = if i >= d { i } else { j };
        if i >= d || j >= d {
            return Err(Error::PairIndexOutOfBounds {
                index: oob,
                ncols: d,
            });
        }
        let mi = mutual_info_absorbing(data.column(i), data.column(j), method)?;
        out.insert((i, j), mi);
    }
    Ok(out)
}
