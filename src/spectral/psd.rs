// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Welch power spectral density estimation

use super::fft::fft_forward;
use super::Spectrum;
use log::debug;
use std::f64::consts::PI;

/// Periodic Hann window of length `n`
fn hann_window(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / n as f64).cos())
        .collect()
}

/// Estimate the power spectral density of a signal with Welch's method.
///
/// The signal is split into segments of `nperseg` samples with 50% overlap;
/// each segment is mean-removed, Hann-windowed and transformed, and the
/// squared magnitudes are averaged across segments. Density scaling is
/// `1 / (fs * Σ w²)` with single-sided doubling everywhere except DC and
/// Nyquist, so the values integrate to the signal power.
///
/// A signal shorter than `nperseg` is analyzed with the largest feasible
/// window (the whole signal) instead of failing; an empty signal yields an
/// empty estimate.
pub fn compute_psd(signal: &[f64], fs: f64, nperseg: usize) -> Spectrum {
    if signal.is_empty() || fs <= 0.0 {
        return Spectrum::default();
    }
    let nperseg = nperseg.clamp(1, signal.len());

    let window = hann_window(nperseg);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1.0 / (fs * window_power);

    let noverlap = nperseg / 2;
    let step = (nperseg - noverlap).max(1);
    let num_bins = nperseg / 2 + 1;
    let nyquist_bin = if nperseg % 2 == 0 { Some(num_bins - 1) } else { None };

    let mut psd = vec![0.0; num_bins];
    let mut num_segments = 0usize;
    let mut start = 0usize;
    while start + nperseg <= signal.len() {
        let segment = &signal[start..start + nperseg];
        let mean = segment.iter().sum::<f64>() / nperseg as f64;
        let windowed: Vec<f64> = segment
            .iter()
            .zip(&window)
            .map(|(&x, &w)| (x - mean) * w)
            .collect();

        let transform = fft_forward(&windowed);
        for (k, bin) in psd.iter_mut().enumerate() {
            let mut power = transform[k].norm_sqr() * scale;
            if k != 0 && Some(k) != nyquist_bin {
                power *= 2.0;
            }
            *bin += power;
        }

        num_segments += 1;
        start += step;
    }

    if num_segments > 1 {
        for bin in &mut psd {
            *bin /= num_segments as f64;
        }
    }
    debug!("welch: averaged {num_segments} segments of {nperseg} samples");

    let df = fs / nperseg as f64;
    Spectrum {
        frequencies: (0..num_bins).map(|k| k as f64 * df).collect(),
        values: psd,
    }
}
