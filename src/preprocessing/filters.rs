// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Digital filters for channel cleanup

use std::f64::consts::PI;

/// Trait for implementing digital filters
pub trait Filter: Send + Sync {
    /// Apply the filter to a signal and return the filtered signal
    fn apply(&self, signal: &[f64]) -> Vec<f64>;
}

/// A second-order IIR band-reject (notch) filter applied zero-phase.
///
/// The biquad is centered at `notch_freq` with quality factor `q` controlling
/// the rejection bandwidth (higher Q = narrower notch). `apply` runs the
/// filter forward and backward so the output carries no group delay or phase
/// distortion relative to the input; the later SNR comparison re-aligns the
/// filtered output against the clean reference sample-for-sample, which a
/// causal single pass would break.
pub struct NotchFilter {
    notch_freq: f64,
    q: f64,
    sample_rate: f64,
    b_coeffs: [f64; 3], // Feedforward coefficients, a0-normalized
    a_coeffs: [f64; 2], // Feedback coefficients a1, a2
}

impl NotchFilter {
    /// Create a new notch filter at the given center frequency and quality
    /// factor
    pub fn new(notch_freq: f64, q: f64) -> Self {
        let sample_rate = 48000.0; // Default sample rate

        let mut filter = Self {
            notch_freq,
            q,
            sample_rate,
            b_coeffs: [0.0; 3],
            a_coeffs: [0.0; 2],
        };

        filter.compute_coefficients();
        filter
    }

    /// Set the sample rate for the filter
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self.compute_coefficients();
        self
    }

    /// Compute biquad coefficients based on current parameters
    fn compute_coefficients(&mut self) {
        // Convert to angular frequency
        let w0 = 2.0 * PI * self.notch_freq / self.sample_rate;
        let alpha = w0.sin() / (2.0 * self.q);
        let cos_w0 = w0.cos();

        // Second-order band-reject section
        let b0 = 1.0;
        let b1 = -2.0 * cos_w0;
        let b2 = 1.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        // Normalize by a0
        self.b_coeffs = [b0 / a0, b1 / a0, b2 / a0];
        self.a_coeffs = [a1 / a0, a2 / a0];
    }

    /// Single causal pass over the signal (Direct Form II Transposed)
    fn filter_pass(&self, signal: &[f64]) -> Vec<f64> {
        let [b0, b1, b2] = self.b_coeffs;
        let [a1, a2] = self.a_coeffs;

        let mut filtered = Vec::with_capacity(signal.len());
        let mut z1 = 0.0;
        let mut z2 = 0.0;
        for &x in signal {
            let y = b0 * x + z1;
            z1 = b1 * x - a1 * y + z2;
            z2 = b2 * x - a2 * y;
            filtered.push(y);
        }
        filtered
    }
}

impl Filter for NotchFilter {
    fn apply(&self, signal: &[f64]) -> Vec<f64> {
        if signal.is_empty() {
            return Vec::new();
        }

        // Odd extension at both edges to damp the startup transient of each
        // pass; stripped off after the backward pass.
        let pad_len = 9.min(signal.len() - 1);
        let n = signal.len();
        let mut extended = Vec::with_capacity(n + 2 * pad_len);
        let first = signal[0];
        let last = signal[n - 1];
        for i in (1..=pad_len).rev() {
            extended.push(2.0 * first - signal[i]);
        }
        extended.extend_from_slice(signal);
        for i in 1..=pad_len {
            extended.push(2.0 * last - signal[n - 1 - i]);
        }

        // Forward pass, then backward pass over the reversed output
        let mut forward = self.filter_pass(&extended);
        forward.reverse();
        let mut backward = self.filter_pass(&forward);
        backward.reverse();

        backward[pad_len..pad_len + n].to_vec()
    }
}

/// Remove a narrowband interferer (typically 50 Hz mains hum) from a signal
/// with a zero-phase second-order notch filter.
pub fn notch_filter(signal: &[f64], fs: f64, notch_freq: f64, q: f64) -> Vec<f64> {
    NotchFilter::new(notch_freq, q)
        .with_sample_rate(fs)
        .apply(signal)
}
