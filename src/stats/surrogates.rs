// SPDX-License-Identifier: Apache-2.0

//! Surrogate data generation: IAAFT surrogates and autocorrelation-preserving
//! block shuffles, used to build null distributions for dependency tests.

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand::seq::SliceRandom;
use rustfft::{FftPlanner, num_complex::Complex64};

use crate::errors::Error;

/// Amplitude spectrum |FFT(s)| of a real sequence.
fn amplitude_spectrum(s: &[f64], planner: &mut FftPlanner<f64>) -> Vec<f64> {
    let mut buf: Vec<Complex64> = s.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    planner.plan_fft_forward(s.len()).process(&mut buf);
    buf.iter().map(|c| c.norm()).collect()
}

/// Indices that sort `s` ascending.
fn argsort(s: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..s.len()).collect();
    order.sort_by(|&a, &b| s[a].partial_cmp(&s[b]).unwrap());
    order
}

/// Iterative Amplitude Adjusted Fourier Transform (IAAFT) surrogate.
///
/// Starting from a random permutation of `x`, each iteration first enforces
/// the target amplitude spectrum (replace magnitudes, keep current phases,
/// inverse transform) and then enforces the original value distribution by
/// rank matching (the sorted original values scattered into the surrogate's
/// rank order). Iteration stops after `n_iter` rounds, or early once the
/// relative change of the amplitude-spectrum RMSE stays below `tol` for 3
/// consecutive iterations.
///
/// The surrogate keeps the input's power spectrum and value distribution
/// while randomizing phase relationships, destroying nonlinear dependency
/// with any other sequence.
pub fn iaaft_surrogate<R: Rng>(
    x: ArrayView1<'_, f64>,
    n_iter: usize,
    tol: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = x.len();
    if n == 0 {
        return Array1::zeros(0);
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let original = x.to_vec();
    let target_amp = amplitude_spectrum(&original, &mut planner);
    let target_power: f64 =
        (target_amp.iter().map(|a| a * a).sum::<f64>() / n as f64).sqrt();
    let mut sorted_x = original.clone();
    sorted_x.sort_by(|a, b| a.partial_cmp(b).unwrap());

    // Initial guess: a permutation, so the value distribution is exact.
    let mut s = original;
    s.shuffle(rng);

    let mut prev_rmse: Option<f64> = None;
    let mut stable_count = 0;

    for _ in 0..n_iter {
        // Enforce the target amplitude spectrum, keeping current phases.
        let mut buf: Vec<Complex64> = s.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        fft.process(&mut buf);
        for (c, &amp) in buf.iter_mut().zip(target_amp.iter()) {
            let norm = c.norm();
            *c = if norm > 0.0 {
                *c / norm * amp
            } else {
                Complex64::new(amp, 0.0)
            };
        }
        ifft.process(&mut buf);
        // rustfft's inverse is unscaled; the imaginary residue of the real
        // input is discarded.
        for (v, c) in s.iter_mut().zip(buf.iter()) {
            *v = c.re / n as f64;
        }

        // Enforce the value distribution via rank matching.
        let order = argsort(&s);
        for (rank, &idx) in order.iter().enumerate() {
            s[idx] = sorted_x[rank];
        }

        // Relative RMSE between current and target amplitude spectrum.
        let amp = amplitude_spectrum(&s, &mut planner);
        let mse: f64 = amp
            .iter()
            .zip(target_amp.iter())
            .map(|(a, t)| (a - t) * (a - t))
            .sum::<f64>()
            / n as f64;
        let rmse = if target_power > 0.0 {
            mse.sqrt() / target_power
        } else {
            0.0
        };

        if let Some(prev) = prev_rmse {
            let denom = if prev != 0.0 { prev } else { 1.0 };
            if ((prev - rmse) / denom).abs() < tol {
                stable_count += 1;
                if stable_count >= 3 {
                    break;
                }
            } else {
                stable_count = 0;
            }
        }
        prev_rmse = Some(rmse);
    }

    Array1::from(s)
}

/// Shuffle a sequence in contiguous blocks.
///
/// The sequence is partitioned into consecutive blocks of `block_size` (the
/// last block may be shorter); block order is randomly permuted while the
/// order inside each block is kept. Autocorrelation is approximately
/// preserved up to lags of about `block_size / 2`.
pub fn block_shuffle<R: Rng>(
    x: ArrayView1<'_, f64>,
    block_size: usize,
    rng: &mut R,
) -> Result<Array1<f64>, Error> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize);
    }
    let data = x.to_vec();
    let mut blocks: Vec<&[f64]> = data.chunks(block_size).collect();
    blocks.shuffle(rng);
    let mut out = Vec::with_capacity(data.len());
    for block in blocks {
        out.extend_from_slice(block);
    }
    Ok(Array1::from(out))
}
