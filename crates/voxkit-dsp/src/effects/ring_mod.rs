//! Ring modulation against a fixed low-frequency carrier.

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Carrier frequency for the robot timbre.
pub const CARRIER_HZ: f64 = 30.0;

/// Multiplies every sample with a 30 Hz sine carrier.
///
/// Ring modulation produces only the sum and difference sidebands of signal
/// and carrier; at 30 Hz the result is the classic flat, robotic timbre.
/// There are no other parameters.
pub fn apply(samples: &[f64], sample_rate: u32) -> Vec<f64> {
    let phase_increment = CARRIER_HZ / sample_rate as f64;
    let mut phase = 0.0_f64;

    samples
        .iter()
        .map(|&sample| {
            let carrier = (TWO_PI * phase).sin();
            phase += phase_increment;
            if phase >= 1.0 {
                phase -= 1.0;
            }
            sample * carrier
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_zero() {
        // Carrier starts at sin(0) = 0
        let output = apply(&[1.0, 1.0, 1.0], 44100);
        assert_eq!(output[0], 0.0);
    }

    #[test]
    fn test_constant_input_traces_carrier() {
        let rate = 44100u32;
        let output = apply(&vec![1.0; rate as usize], rate);

        // Quarter period of 30 Hz: carrier at its positive peak
        let quarter = (rate as f64 / CARRIER_HZ / 4.0).round() as usize;
        assert!((output[quarter] - 1.0).abs() < 1e-3);

        // Half period: back near zero
        let half = quarter * 2;
        assert!(output[half].abs() < 1e-2);
    }

    #[test]
    fn test_length_preserved() {
        assert_eq!(apply(&vec![0.3; 12345], 44100).len(), 12345);
    }

    #[test]
    fn test_silence_stays_silent() {
        let output = apply(&vec![0.0; 1000], 44100);
        assert!(output.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let input: Vec<f64> = (0..5000).map(|i| (i as f64 * 0.013).sin()).collect();
        assert_eq!(apply(&input, 22050), apply(&input, 22050));
    }

    #[test]
    fn test_empty_input() {
        assert!(apply(&[], 44100).is_empty());
    }
}
