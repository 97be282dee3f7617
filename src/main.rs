// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Batch entry point: run one channel simulation with the configured
// parameters, print the quality metrics, and optionally dump the signals and
// a JSON report.

use anyhow::{Context, Result};
use clap::Parser;
use hound::{SampleFormat, WavSpec, WavWriter};
use rust_channelsim::config::Config;
use rust_channelsim::run_simulation;
use rust_channelsim::spectral::{compute_fft, compute_psd};
use std::fs;
use std::path::{Path, PathBuf};

/// Noisy communication channel simulator
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML); created with defaults if missing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sampling rate in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Signal duration in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Carrier frequency in Hz
    #[arg(long)]
    carrier_freq: Option<f64>,

    /// Seed for the noise generators (omit for fresh noise)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for the metrics report (JSON)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the noisy (and filtered, if enabled) signals as WAV files with
    /// this path prefix
    #[arg(long)]
    wav_prefix: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_args(args.sample_rate, args.duration, args.carrier_freq, args.seed);

    let simulation = run_simulation(&config)?;
    let report = &simulation.report;

    println!(
        "Simulated {} samples at {} Hz",
        report.num_samples, report.sample_rate
    );
    println!("SNR (clean vs noisy):   {:.2} dB", report.snr_db);
    println!(
        "Band-limited SNR ({} Hz): {:.2} dB",
        config.analysis.bandwidth_hz, report.bandlimited_snr_db
    );
    println!(
        "THD (clean signal):     ratio={:.4}, {:.2} dB",
        report.thd_ratio, report.thd_db
    );
    if let (Some(snr), Some(bl_snr)) = (report.notch_snr_db, report.notch_bandlimited_snr_db) {
        println!("SNR after notch:        {snr:.2} dB");
        println!("Band-limited after notch: {bl_snr:.2} dB");
    }

    // Spectral summary: strongest PSD component of the noisy signal and the
    // noise-only spectrum peak (reveals low-level components next to a
    // strong carrier)
    let psd = compute_psd(
        &simulation.noisy,
        config.signal.sample_rate,
        config.analysis.psd_nperseg,
    );
    if let Some(peak) = peak_bin(&psd.values) {
        println!("PSD peak:               {:.0} Hz", psd.frequencies[peak]);
    }
    let noise_only: Vec<f64> = simulation
        .noisy
        .iter()
        .zip(&simulation.clean)
        .map(|(&n, &c)| n - c)
        .collect();
    let noise_spectrum = compute_fft(&noise_only, config.signal.sample_rate);
    if let Some(peak) = peak_bin(&noise_spectrum.values) {
        println!(
            "Strongest noise tone:   {:.0} Hz",
            noise_spectrum.frequencies[peak]
        );
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    if let Some(prefix) = &args.wav_prefix {
        let sample_rate = report.sample_rate as u32;
        save_wav(
            &simulation.noisy,
            sample_rate,
            &with_suffix(prefix, "noisy"),
        )?;
        if let Some(filtered) = &simulation.filtered {
            save_wav(filtered, sample_rate, &with_suffix(prefix, "filtered"))?;
        }
    }

    Ok(())
}

fn peak_bin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).expect("spectrum values are finite"))
        .map(|(i, _)| i)
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let stem = prefix
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    prefix.with_file_name(format!("{stem}_{suffix}.wav"))
}

/// Save samples as a 16-bit mono WAV file, peak-normalized to avoid clipping
fn save_wav(samples: &[f64], sample_rate: u32, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let peak = samples.iter().fold(0.0f64, |max, &x| max.max(x.abs()));
    let scale = if peak > 0.0 { 0.95 / peak } else { 1.0 };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file {}", path.display()))?;
    for &sample in samples {
        let amplitude = (sample * scale * 32767.0).clamp(-32768.0, 32767.0) as i16;
        writer.write_sample(amplitude)?;
    }
    writer.finalize()?;
    println!("Saved WAV file to: {}", path.display());

    Ok(())
}
