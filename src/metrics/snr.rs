// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal-to-noise ratio estimators

use super::MetricsError;
use crate::spectral::fft_forward;

fn mean_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}

/// Compute the broadband SNR in dB between a clean reference and its noisy
/// version.
///
/// The noise is taken as the sample-wise difference `noisy - clean`, so both
/// signals must share the same length and sampling grid. Zero noise power
/// (a perfect match) reports `f64::INFINITY` rather than failing on the
/// division.
pub fn compute_snr(clean: &[f64], noisy: &[f64]) -> Result<f64, MetricsError> {
    if clean.len() != noisy.len() {
        return Err(MetricsError::LengthMismatch {
            clean: clean.len(),
            noisy: noisy.len(),
        });
    }

    let noise: Vec<f64> = noisy.iter().zip(clean).map(|(&n, &c)| n - c).collect();
    let signal_power = mean_power(clean);
    let noise_power = mean_power(&noise);
    if noise_power == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (signal_power / noise_power).log10())
}

/// DFT bin-center frequencies over the full two-sided grid, negative
/// frequencies for the upper half, matching the conjugate-bin layout of a
/// real signal's transform.
fn fft_frequencies(n: usize, fs: f64) -> Vec<f64> {
    let df = fs / n as f64;
    (0..n)
        .map(|k| {
            if k < n.div_ceil(2) {
                k as f64 * df
            } else {
                (k as f64 - n as f64) * df
            }
        })
        .collect()
}

/// Compute the SNR in dB restricted to a frequency band around `center_freq_hz`.
///
/// Both the clean signal and the noise (`noisy - clean`) are transformed to
/// the frequency domain and their power summed over the band
/// `[center - bw/2, center + bw/2]` **and** its negative-frequency mirror.
/// A real signal's energy is split equally between conjugate bins, so masking
/// only the positive band would systematically halve both powers. Band powers
/// are normalized by N²; zero band-noise power reports `f64::INFINITY`.
pub fn compute_bandlimited_snr(
    clean: &[f64],
    noisy: &[f64],
    fs: f64,
    center_freq_hz: f64,
    bandwidth_hz: f64,
) -> Result<f64, MetricsError> {
    if clean.len() != noisy.len() {
        return Err(MetricsError::LengthMismatch {
            clean: clean.len(),
            noisy: noisy.len(),
        });
    }
    let n = clean.len();
    if n == 0 {
        return Ok(f64::INFINITY);
    }

    let noise: Vec<f64> = noisy.iter().zip(clean).map(|(&y, &c)| y - c).collect();
    let clean_fft = fft_forward(clean);
    let noise_fft = fft_forward(&noise);
    let frequencies = fft_frequencies(n, fs);

    let low = center_freq_hz - bandwidth_hz / 2.0;
    let high = center_freq_hz + bandwidth_hz / 2.0;
    let in_band =
        |f: f64| (f >= low && f <= high) || (f <= -low && f >= -high);

    let norm = (n * n) as f64;
    let mut signal_band_power = 0.0;
    let mut noise_band_power = 0.0;
    for (k, &f) in frequencies.iter().enumerate() {
        if in_band(f) {
            signal_band_power += clean_fft[k].norm_sqr() / norm;
            noise_band_power += noise_fft[k].norm_sqr() / norm;
        }
    }

    if noise_band_power == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (signal_band_power / noise_band_power).log10())
}
