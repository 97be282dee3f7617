// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Total harmonic distortion estimation

use crate::spectral::compute_fft;

/// Estimate total harmonic distortion from FFT bin powers.
///
/// The fundamental power is read from the single-sided FFT bin nearest to
/// `fundamental_freq`; the powers of the bins nearest each harmonic
/// `2..=n_harmonics` are summed, and the result is
/// `(sqrt(P_harmonics / P_fundamental), 20 * log10(ratio))`.
///
/// Harmonics beyond the Nyquist frequency clamp to the highest available bin,
/// the same nearest-bin rule as everywhere else. When the fundamental bin
/// carries exactly zero power the distortion ratio is undefined and both
/// outputs are `f64::NAN`; this is a sentinel, not a failure.
pub fn compute_thd(
    signal: &[f64],
    fs: f64,
    fundamental_freq: f64,
    n_harmonics: usize,
) -> (f64, f64) {
    let spectrum = compute_fft(signal, fs);
    let Some(fundamental_bin) = spectrum.nearest_bin(fundamental_freq) else {
        return (f64::NAN, f64::NAN);
    };

    let power = |bin: usize| spectrum.values[bin] * spectrum.values[bin];
    let fundamental_power = power(fundamental_bin);

    let mut harmonic_power = 0.0;
    for h in 2..=n_harmonics {
        if let Some(bin) = spectrum.nearest_bin(fundamental_freq * h as f64) {
            harmonic_power += power(bin);
        }
    }

    if fundamental_power == 0.0 {
        return (f64::NAN, f64::NAN);
    }
    let ratio = (harmonic_power / fundamental_power).sqrt();
    (ratio, 20.0 * ratio.log10())
}
