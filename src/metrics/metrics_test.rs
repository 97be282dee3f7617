// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-channelsim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::{compute_bandlimited_snr, compute_snr, compute_thd, MetricsError};
use crate::generation::{carrier_wave, time_vector};

#[test]
fn snr_of_identical_signals_is_infinite() {
    let t = time_vector(0.1, 1000.0).unwrap();
    let signal = carrier_wave(100.0, &t, 1.0, 0.0);
    assert_eq!(compute_snr(&signal, &signal).unwrap(), f64::INFINITY);
}

#[test]
fn snr_matches_known_power_ratio() {
    let t = time_vector(1.0, 1000.0).unwrap();
    let clean = carrier_wave(100.0, &t, 1.0, 0.0); // power 1/2
    let noisy: Vec<f64> = clean.iter().map(|&x| x + 0.1).collect(); // noise power 0.01

    let snr = compute_snr(&clean, &noisy).unwrap();
    let expected = 10.0 * (0.5f64 / 0.01).log10();
    assert!((snr - expected).abs() < 1e-6, "got {snr}, expected {expected}");
}

#[test]
fn snr_is_invariant_under_common_scaling() {
    let t = time_vector(0.5, 2000.0).unwrap();
    let clean = carrier_wave(250.0, &t, 1.0, 0.0);
    let noisy: Vec<f64> = clean
        .iter()
        .zip(&t)
        .map(|(&x, &ti)| x + 0.2 * (2.0 * std::f64::consts::PI * 60.0 * ti).sin())
        .collect();

    let reference = compute_snr(&clean, &noisy).unwrap();
    let k = 3.7;
    let clean_scaled: Vec<f64> = clean.iter().map(|&x| k * x).collect();
    let noisy_scaled: Vec<f64> = noisy.iter().map(|&x| k * x).collect();
    let scaled = compute_snr(&clean_scaled, &noisy_scaled).unwrap();

    assert!((reference - scaled).abs() < 1e-9);

    let bl_reference =
        compute_bandlimited_snr(&clean, &noisy, 2000.0, 250.0, 100.0).unwrap();
    let bl_scaled =
        compute_bandlimited_snr(&clean_scaled, &noisy_scaled, 2000.0, 250.0, 100.0).unwrap();
    assert!((bl_reference - bl_scaled).abs() < 1e-9);
}

#[test]
fn length_mismatch_is_a_contract_violation() {
    let clean = vec![0.0; 3];
    let noisy = vec![0.0; 4];

    assert_eq!(
        compute_snr(&clean, &noisy),
        Err(MetricsError::LengthMismatch { clean: 3, noisy: 4 })
    );
    assert_eq!(
        compute_bandlimited_snr(&clean, &noisy, 1000.0, 100.0, 50.0),
        Err(MetricsError::LengthMismatch { clean: 3, noisy: 4 })
    );
}

#[test]
fn bandlimited_snr_excludes_out_of_band_noise() {
    let fs = 1000.0;
    let t = time_vector(1.0, fs).unwrap();
    let clean = carrier_wave(100.0, &t, 1.0, 0.0);
    let interferer = carrier_wave(300.0, &t, 0.5, 0.0);
    let noisy: Vec<f64> = clean.iter().zip(&interferer).map(|(&c, &n)| c + n).collect();

    // Around the carrier the 300 Hz interferer contributes almost nothing
    let around_carrier =
        compute_bandlimited_snr(&clean, &noisy, fs, 100.0, 50.0).unwrap();
    assert!(
        around_carrier > 100.0,
        "in-band SNR {around_carrier} should be near-noiseless"
    );

    // Around the interferer there is almost no clean signal energy
    let around_interferer =
        compute_bandlimited_snr(&clean, &noisy, fs, 300.0, 50.0).unwrap();
    assert!(around_interferer < -50.0);
}

#[test]
fn bandlimited_snr_over_the_full_band_matches_broadband() {
    // With a band covering the whole spectrum the symmetric mask must
    // reproduce the time-domain SNR (Parseval); a mask missing the
    // negative-frequency mirror would halve both powers inconsistently.
    let fs = 1000.0;
    let t = time_vector(1.0, fs).unwrap();
    let clean = carrier_wave(100.0, &t, 1.0, 0.0);
    let noisy: Vec<f64> = clean
        .iter()
        .zip(&carrier_wave(260.0, &t, 0.5, 0.3))
        .map(|(&c, &n)| c + n)
        .collect();

    let broadband = compute_snr(&clean, &noisy).unwrap();
    let full_band = compute_bandlimited_snr(&clean, &noisy, fs, 250.0, 500.0).unwrap();
    assert!((broadband - full_band).abs() < 1e-6);
}

#[test]
fn bandlimited_snr_of_identical_signals_is_infinite() {
    let t = time_vector(0.1, 1000.0).unwrap();
    let signal = carrier_wave(100.0, &t, 1.0, 0.0);
    assert_eq!(
        compute_bandlimited_snr(&signal, &signal, 1000.0, 100.0, 50.0).unwrap(),
        f64::INFINITY
    );
}

#[test]
fn thd_of_a_pure_tone_is_negligible() {
    let fs = 8000.0;
    let t = time_vector(1.0, fs).unwrap();
    let signal = carrier_wave(50.0, &t, 1.0, 0.0);

    let (ratio, db) = compute_thd(&signal, fs, 50.0, 5);
    assert!(ratio < 1e-6, "pure tone THD ratio {ratio}");
    assert!(db < -100.0);
}

#[test]
fn thd_recovers_a_known_harmonic_level() {
    let fs = 8000.0;
    let t = time_vector(1.0, fs).unwrap();
    let fundamental = carrier_wave(50.0, &t, 1.0, 0.0);
    let second = carrier_wave(100.0, &t, 0.1, 0.0);
    let signal: Vec<f64> = fundamental.iter().zip(&second).map(|(&f, &h)| f + h).collect();

    let (ratio, db) = compute_thd(&signal, fs, 50.0, 5);
    assert!((ratio - 0.1).abs() < 1e-6, "THD ratio {ratio}");
    assert!((db - (-20.0)).abs() < 1e-4);
}

#[test]
fn thd_of_silence_is_undefined() {
    let signal = vec![0.0; 1024];
    let (ratio, db) = compute_thd(&signal, 8000.0, 50.0, 5);
    assert!(ratio.is_nan());
    assert!(db.is_nan());
}

#[test]
fn thd_of_empty_signal_is_undefined() {
    let (ratio, db) = compute_thd(&[], 8000.0, 50.0, 5);
    assert!(ratio.is_nan() && db.is_nan());
}
