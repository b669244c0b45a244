//! Band-pass filter: keep only the band between two corner frequencies.

use crate::error::{EngineError, EngineResult};
use crate::filter::{butterworth_highpass, butterworth_lowpass, zero_phase, BiquadCoeffs};

/// Band-limits the signal to `(low_hz, high_hz)`.
///
/// Realized as a zero-phase cascade of a 4th-order Butterworth highpass at
/// the lower corner and lowpass at the upper corner. The output replaces the
/// signal - unlike bass boost, nothing of the dry signal outside the band
/// survives.
pub fn apply(samples: &[f64], low_hz: f64, high_hz: f64, sample_rate: u32) -> EngineResult<Vec<f64>> {
    validate_band(low_hz, high_hz, sample_rate)?;

    let rate = sample_rate as f64;
    let highpass = butterworth_highpass(low_hz, rate);
    let lowpass = butterworth_lowpass(high_hz, rate);
    let sections: Vec<BiquadCoeffs> = highpass.iter().chain(lowpass.iter()).copied().collect();

    Ok(zero_phase(&sections, samples))
}

/// Checks band corners against the valid normalized range.
pub fn validate_band(low_hz: f64, high_hz: f64, sample_rate: u32) -> EngineResult<()> {
    let nyquist = sample_rate as f64 / 2.0;
    let valid = low_hz.is_finite()
        && high_hz.is_finite()
        && low_hz > 0.0
        && high_hz < nyquist
        && low_hz < high_hz;
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidFilterBand {
            low_hz,
            high_hz,
            sample_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
        (0..num_samples)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect()
    }

    fn rms(samples: &[f64]) -> f64 {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    }

    #[test]
    fn test_passband_survives_stopband_does_not() {
        let in_band = apply(&sine(1000.0, 44100.0, 44100), 300.0, 3000.0, 44100).unwrap();
        let below = apply(&sine(40.0, 44100.0, 44100), 300.0, 3000.0, 44100).unwrap();
        let above = apply(&sine(12000.0, 44100.0, 44100), 300.0, 3000.0, 44100).unwrap();

        assert!(rms(&in_band) > 0.5, "in-band rms {}", rms(&in_band));
        assert!(rms(&below) < 0.01, "below-band rms {}", rms(&below));
        assert!(rms(&above) < 0.01, "above-band rms {}", rms(&above));
    }

    #[test]
    fn test_silence_is_idempotent() {
        let output = apply(&vec![0.0; 1000], 300.0, 3000.0, 44100).unwrap();
        assert_eq!(output.len(), 1000);
        assert!(output.iter().all(|&s| s == 0.0));
        assert!(output.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_length_preserved() {
        let input = sine(500.0, 44100.0, 7777);
        assert_eq!(
            apply(&input, 300.0, 3400.0, 44100).unwrap().len(),
            input.len()
        );
    }

    #[test]
    fn test_degenerate_bands_rejected() {
        // low corner at or below zero
        assert!(validate_band(0.0, 3000.0, 44100).is_err());
        assert!(validate_band(-10.0, 3000.0, 44100).is_err());
        // high corner at or above Nyquist
        assert!(validate_band(300.0, 22050.0, 44100).is_err());
        assert!(validate_band(300.0, 30000.0, 44100).is_err());
        // inverted or empty band
        assert!(validate_band(3000.0, 300.0, 44100).is_err());
        assert!(validate_band(300.0, 300.0, 44100).is_err());
        // NaN corners
        assert!(validate_band(f64::NAN, 3000.0, 44100).is_err());

        assert!(validate_band(300.0, 3000.0, 44100).is_ok());
    }

    #[test]
    fn test_deterministic() {
        let input = sine(440.0, 44100.0, 4096);
        assert_eq!(
            apply(&input, 200.0, 4000.0, 44100).unwrap(),
            apply(&input, 200.0, 4000.0, 44100).unwrap()
        );
    }
}
