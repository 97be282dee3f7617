// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Noisy channel simulation library
//!
//! This library synthesizes a clean carrier signal (optionally ASK
//! data-modulated), superimposes independent noise sources (mains hum,
//! Gaussian thermal noise, impulse noise), and quantifies the resulting
//! channel quality: FFT magnitude spectra, Welch power spectral density,
//! broadband and band-limited SNR, total harmonic distortion, and the effect
//! of a zero-phase notch cleanup filter.
//!
//! All components are pure functions over fixed-length sample vectors; the
//! stochastic generators take an explicit random-generator handle so seeded
//! runs are fully reproducible.

pub mod config;
pub mod generation;
pub mod metrics;
pub mod preprocessing;
pub mod spectral;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use config::Config;
use generation::{
    ask_modulate, carrier_wave, gaussian_noise, impulse_noise, mains_noise, random_bits,
    time_vector,
};
use metrics::{compute_bandlimited_snr, compute_snr, compute_thd};
use preprocessing::notch_filter;

/// Metrics of one simulated channel run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of samples in the simulated signals
    pub num_samples: usize,
    /// Sampling rate in Hz
    pub sample_rate: f64,
    /// Broadband SNR of the noisy signal in dB
    pub snr_db: f64,
    /// Band-limited SNR around the carrier in dB
    pub bandlimited_snr_db: f64,
    /// THD of the clean signal as a linear ratio
    pub thd_ratio: f64,
    /// THD of the clean signal in dB
    pub thd_db: f64,
    /// Broadband SNR after the notch filter, when enabled
    pub notch_snr_db: Option<f64>,
    /// Band-limited SNR after the notch filter, when enabled
    pub notch_bandlimited_snr_db: Option<f64>,
    /// Timestamp of the run
    pub timestamp: DateTime<Utc>,
}

/// Signals and metrics produced by [`run_simulation`]
#[derive(Debug, Clone)]
pub struct Simulation {
    pub time: Vec<f64>,
    pub clean: Vec<f64>,
    pub noisy: Vec<f64>,
    pub filtered: Option<Vec<f64>>,
    pub report: SimulationReport,
}

/// Run one channel simulation: time base, clean waveform, the three noise
/// sources summed, quality metrics, and optionally the notch cleanup with
/// re-scored metrics.
pub fn run_simulation(config: &Config) -> Result<Simulation> {
    let signal_cfg = &config.signal;
    let noise_cfg = &config.noise;

    let mut rng = match noise_cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let t = time_vector(signal_cfg.duration_s, signal_cfg.sample_rate)?;
    debug!(
        "time base: {} samples at {} Hz",
        t.len(),
        signal_cfg.sample_rate
    );

    let clean = if signal_cfg.modulate_data {
        let num_bits = (signal_cfg.bit_rate * signal_cfg.duration_s) as usize;
        let bits = random_bits(num_bits, &mut rng);
        ask_modulate(
            &bits,
            signal_cfg.bit_rate,
            signal_cfg.carrier_freq,
            &t,
            signal_cfg.sample_rate,
            signal_cfg.amp_low,
            signal_cfg.amp_high,
        )
    } else {
        carrier_wave(signal_cfg.carrier_freq, &t, 1.0, 0.0)
    };

    let mains = mains_noise(&t, noise_cfg.mains_amplitude, noise_cfg.mains_freq);
    let gaussian = gaussian_noise(&t, noise_cfg.gaussian_sigma, &mut rng);
    let impulses = impulse_noise(
        &t,
        noise_cfg.num_impulses,
        noise_cfg.impulse_magnitude,
        &mut rng,
    );

    let noisy: Vec<f64> = clean
        .iter()
        .zip(&mains)
        .zip(&gaussian)
        .zip(&impulses)
        .map(|(((&c, &m), &g), &i)| c + m + g + i)
        .collect();

    let snr_db = compute_snr(&clean, &noisy)?;
    let bandlimited_snr_db = compute_bandlimited_snr(
        &clean,
        &noisy,
        signal_cfg.sample_rate,
        signal_cfg.carrier_freq,
        config.analysis.bandwidth_hz,
    )?;
    let (thd_ratio, thd_db) = compute_thd(
        &clean,
        signal_cfg.sample_rate,
        signal_cfg.carrier_freq,
        config.analysis.n_harmonics,
    );
    info!("SNR (clean vs noisy): {snr_db:.2} dB");
    info!("Band-limited SNR: {bandlimited_snr_db:.2} dB");

    let mut filtered = None;
    let mut notch_snr_db = None;
    let mut notch_bandlimited_snr_db = None;
    if config.notch.enabled {
        let cleaned = notch_filter(
            &noisy,
            signal_cfg.sample_rate,
            config.notch.notch_freq,
            config.notch.q,
        );
        notch_snr_db = Some(compute_snr(&clean, &cleaned)?);
        notch_bandlimited_snr_db = Some(compute_bandlimited_snr(
            &clean,
            &cleaned,
            signal_cfg.sample_rate,
            signal_cfg.carrier_freq,
            config.analysis.bandwidth_hz,
        )?);
        filtered = Some(cleaned);
    }

    let report = SimulationReport {
        num_samples: t.len(),
        sample_rate: signal_cfg.sample_rate,
        snr_db,
        bandlimited_snr_db,
        thd_ratio,
        thd_db,
        notch_snr_db,
        notch_bandlimited_snr_db,
        timestamp: Utc::now(),
    };

    Ok(Simulation {
        time: t,
        clean,
        noisy,
        filtered,
        report,
    })
}
