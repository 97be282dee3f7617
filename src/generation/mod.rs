// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal generation module
//!
//! This module produces the sampled signals fed into the channel model:
//! the shared time base, the clean carrier (optionally ASK data-modulated),
//! and the additive noise sources (mains hum, Gaussian thermal noise and
//! impulse noise). Noise sources are independent signals combined by simple
//! addition at the call site, so callers can mix and match any subset.

pub mod noise;
pub mod waveform;

pub use noise::{gaussian_noise, impulse_noise, mains_noise, random_bits};
pub use waveform::{ask_modulate, carrier_wave, time_vector};

use thiserror::Error;

/// Errors raised when generator preconditions are violated
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("invalid time base: duration {duration_s} s at {fs} Hz (both must be positive)")]
    InvalidTimeBase { duration_s: f64, fs: f64 },
}
