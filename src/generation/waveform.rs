// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Deterministic waveform generators
//!
//! Time base, pure sine carrier and amplitude-shift-keyed (ASK) carrier.
//! Every signal is a `Vec<f64>` aligned 1:1 with the time vector it was
//! generated from; all generators are pure functions of their inputs.

use super::GenerationError;
use std::f64::consts::PI;

/// Build the sample-time grid shared by all generators.
///
/// Returns `floor(duration_s * fs)` timestamps `t[i] = i / fs`, evenly spaced
/// over the half-open interval `[0, duration_s)`. The endpoint is excluded so
/// that replaying consecutive segments at `fs` Hz never overlaps.
///
/// Non-positive `duration_s` or `fs` is a precondition violation and returns
/// an error. A combination small enough to yield zero samples produces an
/// empty vector, which downstream analysis treats as a degenerate signal.
///
/// # Examples
///
/// ```
/// use rust_channelsim::generation::time_vector;
///
/// let t = time_vector(0.02, 100_000.0).unwrap();
/// assert_eq!(t.len(), 2000);
/// assert_eq!(t[0], 0.0);
/// ```
pub fn time_vector(duration_s: f64, fs: f64) -> Result<Vec<f64>, GenerationError> {
    if !(duration_s > 0.0) || !(fs > 0.0) {
        return Err(GenerationError::InvalidTimeBase { duration_s, fs });
    }
    let num_samples = (duration_s * fs) as usize;
    Ok((0..num_samples).map(|i| i as f64 / fs).collect())
}

/// Generate a sine carrier `amplitude * sin(2π freq t + phase)` over the
/// given time vector.
pub fn carrier_wave(freq_hz: f64, t: &[f64], amplitude: f64, phase: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| amplitude * (2.0 * PI * freq_hz * ti + phase).sin())
        .collect()
}

/// Amplitude-shift-key a sine carrier with a bit sequence.
///
/// Each bit is held for `round(fs / bit_rate)` consecutive samples (minimum
/// one) and maps to the carrier amplitude `amp_low` (bit 0) or `amp_high`
/// (bit 1). The bit sequence is stretched to cover the whole time vector:
/// a short sequence is padded by repeating its last bit, an empty sequence is
/// treated as all zeros, and the upsampled sequence is truncated to exactly
/// `t.len()` samples. Hard amplitude edges between bit intervals are
/// intentional; the resulting spectral sidelobes are part of what the
/// analysis side is meant to expose.
pub fn ask_modulate(
    bits: &[u8],
    bit_rate: f64,
    carrier_freq: f64,
    t: &[f64],
    fs: f64,
    amp_low: f64,
    amp_high: f64,
) -> Vec<f64> {
    let ratio = fs / bit_rate;
    let samples_per_bit = if ratio.is_finite() && ratio >= 1.0 {
        ratio.round() as usize
    } else {
        1
    };

    let num_samples = t.len();
    let required_bits = num_samples.div_ceil(samples_per_bit);

    let mut symbols: Vec<f64> = bits.iter().map(|&b| if b != 0 { 1.0 } else { 0.0 }).collect();
    if symbols.is_empty() {
        symbols = vec![0.0; required_bits];
    } else if symbols.len() < required_bits {
        // Repeat the last bit to reach the required length
        let last = *symbols.last().unwrap();
        symbols.resize(required_bits, last);
    }

    t.iter()
        .enumerate()
        .map(|(i, &ti)| {
            let bit = symbols[i / samples_per_bit];
            (2.0 * PI * carrier_freq * ti).sin() * (amp_low + (amp_high - amp_low) * bit)
        })
        .collect()
}
