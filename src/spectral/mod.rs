// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Spectral analysis module
//!
//! Single-sided FFT magnitude spectra and Welch power spectral density
//! estimation for the simulated channel signals.

mod fft;
mod psd;
#[cfg(test)]
mod spectral_test;

pub use fft::compute_fft;
pub(crate) use fft::fft_forward;
pub use psd::compute_psd;

/// A single-sided spectrum estimate: non-negative frequency bins paired with
/// magnitude (FFT) or power density (Welch) values, index-aligned.
#[derive(Debug, Clone, Default)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub values: Vec<f64>,
}

impl Spectrum {
    /// Number of frequency bins in the estimate
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Index of the bin whose center frequency is nearest to `freq_hz`
    pub fn nearest_bin(&self, freq_hz: f64) -> Option<usize> {
        self.frequencies
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - freq_hz)
                    .abs()
                    .partial_cmp(&(*b - freq_hz).abs())
                    .expect("frequency bins are finite")
            })
            .map(|(i, _)| i)
    }
}
