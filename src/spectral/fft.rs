// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Single-sided FFT magnitude spectrum

use super::Spectrum;
use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the two-sided DFT of a real signal.
///
/// Shared by the magnitude spectrum here and by the band-limited SNR metric,
/// which needs access to the negative-frequency half as well.
pub(crate) fn fft_forward(signal: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> =
        signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Compute the single-sided magnitude spectrum of a signal.
///
/// The DFT magnitude is normalized by the signal length, so a pure sinusoid
/// of amplitude `A` lands in a single bin with magnitude `A/2` (its energy is
/// split with the conjugate negative-frequency bin). Only the first `N/2`
/// bins are returned, paired with their bin-center frequencies `k * fs / N`.
///
/// An empty signal degrades to an empty spectrum rather than failing.
pub fn compute_fft(signal: &[f64], fs: f64) -> Spectrum {
    let n = signal.len();
    let half = n / 2;
    if half == 0 {
        return Spectrum::default();
    }

    let transform = fft_forward(signal);
    let df = fs / n as f64;

    Spectrum {
        frequencies: (0..half).map(|k| k as f64 * df).collect(),
        values: transform[..half]
            .iter()
            .map(|c| c.norm() / n as f64)
            .collect(),
    }
}
