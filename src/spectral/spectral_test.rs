// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::{compute_fft, compute_psd};
use crate::generation::{carrier_wave, time_vector};

#[test]
fn fft_resolves_a_pure_sinusoid() {
    let fs = 1000.0;
    let t = time_vector(1.0, fs).unwrap(); // 1000 samples, 1 Hz bins
    let amplitude = 1.5;
    let signal = carrier_wave(50.0, &t, amplitude, 0.0);

    let spectrum = compute_fft(&signal, fs);
    assert_eq!(spectrum.len(), 500);
    assert_eq!(spectrum.frequencies[0], 0.0);
    assert!((spectrum.frequencies[1] - fs / 1000.0).abs() < 1e-12);

    // Integer number of periods: a single bin at 50 Hz with magnitude A/2
    let peak = spectrum.nearest_bin(50.0).unwrap();
    assert!((spectrum.frequencies[peak] - 50.0).abs() < 1e-9);
    assert!((spectrum.values[peak] - amplitude / 2.0).abs() < 1e-9);
    for (k, &value) in spectrum.values.iter().enumerate() {
        if k != peak {
            assert!(value < 1e-8, "bin {k} leaked magnitude {value}");
        }
    }
}

#[test]
fn fft_of_empty_signal_is_empty() {
    let spectrum = compute_fft(&[], 1000.0);
    assert!(spectrum.is_empty());
}

#[test]
fn psd_peaks_at_the_tone_frequency() {
    let fs = 10_240.0;
    let t = time_vector(0.8, fs).unwrap(); // 8192 samples
    let signal = carrier_wave(400.0, &t, 1.0, 0.0);

    let psd = compute_psd(&signal, fs, 1024);
    assert_eq!(psd.len(), 513);
    assert!(psd.values.iter().all(|&p| p >= 0.0));

    let peak = psd
        .values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap();
    let df = fs / 1024.0;
    assert!(
        (psd.frequencies[peak] - 400.0).abs() <= df,
        "PSD peak at {} Hz instead of 400 Hz",
        psd.frequencies[peak]
    );
}

#[test]
fn psd_integrates_to_the_signal_power() {
    let fs = 8000.0;
    let t = time_vector(2.0, fs).unwrap();
    let signal = carrier_wave(500.0, &t, 1.0, 0.0);

    let psd = compute_psd(&signal, fs, 1024);
    let df = fs / 1024.0;
    let total_power: f64 = psd.values.iter().map(|&p| p * df).sum();

    // A unit sine carries power 1/2
    assert!(
        (0.4..0.6).contains(&total_power),
        "integrated PSD {total_power} far from 0.5"
    );
}

#[test]
fn psd_clamps_segment_length_to_short_signals() {
    let fs = 1000.0;
    let t = time_vector(0.1, fs).unwrap(); // 100 samples < nperseg
    let signal = carrier_wave(100.0, &t, 1.0, 0.0);

    let psd = compute_psd(&signal, fs, 1024);
    // Degrades to a single whole-signal segment: 100/2 + 1 bins
    assert_eq!(psd.len(), 51);
    assert!((psd.frequencies[psd.len() - 1] - fs / 2.0).abs() < 1e-9);
}

#[test]
fn psd_of_empty_signal_is_empty() {
    assert!(compute_psd(&[], 1000.0, 1024).is_empty());
}
