// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Configuration Management
//!
//! This module implements configuration handling for the channel simulator.
//! Parameters are organized as a nested structure with sections:
//! - `signal`: time base, carrier and ASK modulation parameters
//! - `noise`: amplitudes of the three additive noise sources and the RNG seed
//! - `notch`: cleanup filter parameters
//! - `analysis`: metric and PSD settings
//!
//! Configuration is loaded from a YAML file; a missing file is replaced by a
//! default one so a first run is always possible.
//!
//! ## Usage
//!
//! ```no_run
//! use rust_channelsim::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("channelsim.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(100_000.0), // Sampling rate
//!     Some(0.02),      // Duration
//!     Some(10_000.0),  // Carrier frequency
//!     Some(0),         // RNG seed
//! );
//! ```

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Time base, carrier and data modulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Sampling rate in Hz
    pub sample_rate: f64,
    /// Signal duration in seconds
    pub duration_s: f64,
    /// Carrier frequency in Hz
    pub carrier_freq: f64,
    /// Modulate the carrier with random data instead of sending a pure tone
    pub modulate_data: bool,
    /// ASK bit rate in bits per second
    pub bit_rate: f64,
    /// Carrier amplitude for a 0 bit
    pub amp_low: f64,
    /// Carrier amplitude for a 1 bit
    pub amp_high: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sample_rate: 100_000.0,
            duration_s: 0.02,
            carrier_freq: 10_000.0,
            modulate_data: true,
            bit_rate: 1000.0,
            amp_low: 0.1,
            amp_high: 1.0,
        }
    }
}

/// Additive noise source parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Mains hum amplitude
    pub mains_amplitude: f64,
    /// Mains frequency in Hz
    pub mains_freq: f64,
    /// Standard deviation of the Gaussian thermal noise
    pub gaussian_sigma: f64,
    /// Number of impulse positions drawn
    pub num_impulses: usize,
    /// Impulse magnitude
    pub impulse_magnitude: f64,
    /// Seed for the random generator; omit for fresh noise on every run
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            mains_amplitude: 0.5,
            mains_freq: 50.0,
            gaussian_sigma: 0.2,
            num_impulses: 25,
            impulse_magnitude: 2.0,
            seed: None,
        }
    }
}

/// Cleanup notch filter parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotchConfig {
    /// Apply the notch filter and re-score the channel
    pub enabled: bool,
    /// Notch center frequency in Hz
    pub notch_freq: f64,
    /// Quality factor (higher = narrower notch)
    pub q: f64,
}

impl Default for NotchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            notch_freq: 50.0,
            q: 30.0,
        }
    }
}

/// Metric and spectral estimation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bandwidth in Hz of the band-limited SNR window around the carrier
    pub bandwidth_hz: f64,
    /// Number of harmonics summed in the THD estimate
    pub n_harmonics: usize,
    /// Welch segment length in samples
    pub psd_nperseg: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bandwidth_hz: 2000.0,
            n_harmonics: 6,
            psd_nperseg: 1024,
        }
    }
}

/// Top-level simulator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub signal: SignalConfig,
    pub noise: NoiseConfig,
    pub notch: NotchConfig,
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// If the file does not exist a default configuration is written there
    /// and returned, so a first run always succeeds.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "Configuration file {} not found, creating a default one",
                path.display()
            );
            let config = Config::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration as YAML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yml::to_string(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Apply command line overrides to the loaded configuration
    pub fn apply_args(
        &mut self,
        sample_rate: Option<f64>,
        duration_s: Option<f64>,
        carrier_freq: Option<f64>,
        seed: Option<u64>,
    ) {
        if let Some(fs) = sample_rate {
            self.signal.sample_rate = fs;
        }
        if let Some(duration) = duration_s {
            self.signal.duration_s = duration;
        }
        if let Some(freq) = carrier_freq {
            self.signal.carrier_freq = freq;
        }
        if seed.is_some() {
            self.noise.seed = seed;
        }
    }
}
