// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Channel quality metrics module
//!
//! Broadband and band-limited signal-to-noise ratio estimators and total
//! harmonic distortion, the scoring side of the channel simulation.
//!
//! Degenerate-but-meaningful inputs produce sentinel values instead of
//! errors: zero noise power reports `f64::INFINITY` (a perfect channel) and
//! zero fundamental power reports `f64::NAN` (undefined distortion ratio).
//! Errors are reserved for contract violations such as mismatched signal
//! lengths, which always fail fast and never silently truncate.

mod snr;
mod thd;
#[cfg(test)]
mod metrics_test;

pub use snr::{compute_bandlimited_snr, compute_snr};
pub use thd::compute_thd;

use thiserror::Error;

/// Contract violations detected by the metric estimators
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("signals must have the same length for SNR computation (clean: {clean}, noisy: {noisy})")]
    LengthMismatch { clean: usize, noisy: usize },
}
