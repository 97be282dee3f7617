// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal cleanup module
//!
//! This module holds the filters applied to the noisy channel output before
//! re-scoring, currently a zero-phase notch filter for mains-hum removal.

pub mod filters;

pub use filters::{notch_filter, Filter, NotchFilter};

/// Create a zero-phase notch filter centered at `notch_freq` with quality
/// factor `q`
pub fn create_notch_filter(notch_freq: f64, q: f64, sample_rate: f64) -> Box<dyn Filter> {
    Box::new(NotchFilter::new(notch_freq, q).with_sample_rate(sample_rate))
}
