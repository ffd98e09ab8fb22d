// SPDX-License-Identifier: Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::errors::Error;

/// Benjamini-Hochberg false discovery rate control.
///
/// P-values are sorted ascending and q-values computed stepping down from the
/// largest rank, `q_i = min(q_{i+1}, p_i * n / rank_i)`, which enforces the
/// monotonicity of the step-up procedure. Results are scattered back to the
/// input order, so permuting the input permutes the outputs identically
/// without changing which hypotheses are rejected.
///
/// Returns the rejection flags (`q <= alpha`) and the q-values, both aligned
/// with the input order.
pub fn fdr_bh(
    pvalues: ArrayView1<'_, f64>,
    alpha: f64,
) -> Result<(Array1<bool>, Array1<f64>), Error> {
    for &p in pvalues.iter() {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidPValue(p));
        }
    }

    let n = pvalues.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| pvalues[a].partial_cmp(&pvalues[b]).unwrap());

    let mut qvalues = Array1::<f64>::zeros(n);
    let mut prev = 1.0_f64;
    for i in (0..n).rev() {
        let rank = (i + 1) as f64;
        let q = (pvalues[order[i]] * n as f64 / rank).min(prev);
        prev = q;
        qvalues[order[i]] = q;
    }

    let rejected = qvalues.mapv(|q| q <= alpha);
    Ok((rejected, qvalues))
}
