// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Noise source generators
//!
//! Three independent additive impairments: a mains-hum tone, Gaussian thermal
//! noise, and sparse impulse noise. The stochastic generators take an explicit
//! random-generator handle instead of touching any global state, so a seeded
//! `StdRng` makes a whole simulation reproducible while `rand::rng()` gives
//! fresh noise on every call.

use super::waveform::carrier_wave;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Sinusoidal mains interferer (electrical hum coupling) at `mains_freq` Hz.
pub fn mains_noise(t: &[f64], amplitude: f64, mains_freq: f64) -> Vec<f64> {
    carrier_wave(mains_freq, t, amplitude, 0.0)
}

/// Zero-mean i.i.d. Gaussian noise with standard deviation `sigma`, one
/// sample per time index.
pub fn gaussian_noise<R: Rng>(t: &[f64], sigma: f64, rng: &mut R) -> Vec<f64> {
    t.iter()
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            sigma * z
        })
        .collect()
}

/// Sparse impulse noise: zero everywhere except at `num_impulses` positions
/// drawn uniformly at random, each set to `±magnitude` with an unbiased sign.
///
/// Positions are drawn without deduplication, so draws may collide and later
/// assignments overwrite earlier ones at that index. The effective impulse
/// count can therefore fall below `num_impulses`; this matches the channel
/// model rather than being a defect to paper over.
pub fn impulse_noise<R: Rng>(
    t: &[f64],
    num_impulses: usize,
    magnitude: f64,
    rng: &mut R,
) -> Vec<f64> {
    let mut samples = vec![0.0; t.len()];
    if samples.is_empty() {
        return samples;
    }
    for _ in 0..num_impulses {
        let position = rng.random_range(0..samples.len());
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        samples[position] = sign * magnitude;
    }
    samples
}

/// Generate a random 0/1 bit sequence for data modulation.
pub fn random_bits<R: Rng>(num_bits: usize, rng: &mut R) -> Vec<u8> {
    (0..num_bits).map(|_| rng.random_range(0..2u8)).collect()
}
