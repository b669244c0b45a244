//! The ordered effect chain.
//!
//! [`apply`] is the engine's whole contract: one immutable buffer and one
//! parameter set in, one new normalized buffer out. The step order is fixed -
//! each primitive's output magnitude and shape feeds the next, so reordering
//! changes the sound.

use crate::buffer::SampleBuffer;
use crate::effects::{bandpass, bass, distortion, rasp, reverb, ring_mod};
use crate::error::{EngineError, EngineResult};
use crate::noise::{GaussianNoise, NoiseSource};
use crate::params::VoiceParams;
use crate::resample::resample;
use crate::rng::derive_component_seed;

/// Added to the peak before the final division so silence never divides by
/// zero.
pub const NORMALIZE_EPSILON: f64 = 1e-4;

/// Applies the chain with a freshly-seeded noise source.
///
/// Rasp noise differs between invocations; everything else is deterministic.
/// Use [`apply_seeded`] for reproducible output.
pub fn apply(buffer: &SampleBuffer, params: &VoiceParams) -> EngineResult<SampleBuffer> {
    apply_with_noise(buffer, params, &mut GaussianNoise::from_entropy())
}

/// Applies the chain with rasp noise derived from `seed`.
///
/// Identical buffer, params, and seed reproduce the output exactly.
pub fn apply_seeded(
    buffer: &SampleBuffer,
    params: &VoiceParams,
    seed: u32,
) -> EngineResult<SampleBuffer> {
    let mut noise = GaussianNoise::seeded(derive_component_seed(seed, "rasp"));
    apply_with_noise(buffer, params, &mut noise)
}

/// Applies the chain with an injected noise source.
///
/// Step order:
/// 1. pitch resample (when set and != 1.0)
/// 2. speed resample (when set and != 1.0; custom path only - no preset
///    carries the knob)
/// 3. bass boost (when set and > 1.0)
/// 4. band-pass (when set; replaces the signal)
/// 5. reverb (when set and > 0)
/// 6. ring modulation (when `robotic`)
/// 7. rasp (when the resolved raspy/grit amount is > 0)
/// 8. distortion (when set and > 0)
/// 9. peak normalization
///
/// An empty buffer comes back empty with no error. On any failure the
/// intermediate signal is discarded and the error names the offending step.
pub fn apply_with_noise(
    buffer: &SampleBuffer,
    params: &VoiceParams,
    noise: &mut dyn NoiseSource,
) -> EngineResult<SampleBuffer> {
    let rate = buffer.sample_rate;
    if buffer.is_empty() {
        return Ok(SampleBuffer::new(Vec::new(), rate));
    }

    let mut samples = buffer.samples.clone();

    if let Some(pitch) = params.pitch {
        if pitch != 1.0 {
            samples = resample(&samples, pitch).map_err(|e| EngineError::effect("pitch", e))?;
        }
    }

    if let Some(speed) = params.speed {
        if speed != 1.0 {
            samples = resample(&samples, speed).map_err(|e| EngineError::effect("speed", e))?;
        }
    }

    if let Some(gain) = params.bass {
        if gain > 1.0 {
            samples =
                bass::apply(&samples, gain, rate).map_err(|e| EngineError::effect("bass", e))?;
        }
    }

    if let Some((low_hz, high_hz)) = params.bandpass {
        samples = bandpass::apply(&samples, low_hz, high_hz, rate)
            .map_err(|e| EngineError::effect("bandpass", e))?;
    }

    if let Some(amount) = params.reverb {
        if amount > 0.0 {
            samples = reverb::apply(&samples, amount, rate)
                .map_err(|e| EngineError::effect("reverb", e))?;
        }
    }

    if params.robotic {
        samples = ring_mod::apply(&samples, rate);
    }

    if let Some(amount) = params.rasp_amount() {
        if amount > 0.0 {
            samples = rasp::apply(&samples, amount, noise)
                .map_err(|e| EngineError::effect("rasp", e))?;
        }
    }

    if let Some(amount) = params.distortion {
        if amount > 0.0 {
            samples = distortion::apply(&samples, amount)
                .map_err(|e| EngineError::effect("distortion", e))?;
        }
    }

    normalize(&mut samples);
    Ok(SampleBuffer::new(samples, rate))
}

/// Divides every sample by `peak + NORMALIZE_EPSILON`.
///
/// Output peak stays strictly below 1.0; silence passes through unchanged.
pub fn normalize(samples: &mut [f64]) {
    let peak = samples.iter().fold(0.0_f64, |a, &s| a.max(s.abs()));
    let divisor = peak + NORMALIZE_EPSILON;
    for sample in samples.iter_mut() {
        *sample /= divisor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq: f64, rate: u32, num_samples: usize) -> SampleBuffer {
        let samples = (0..num_samples)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / rate as f64).sin() * 0.8)
            .collect();
        SampleBuffer::new(samples, rate)
    }

    #[test]
    fn test_empty_params_normalizes_only() {
        let input = tone(440.0, 44100, 4410);
        let output = apply(&input, &VoiceParams::default()).unwrap();

        assert_eq!(output.len(), input.len());
        let divisor = input.peak() + NORMALIZE_EPSILON;
        for (o, i) in output.samples.iter().zip(input.samples.iter()) {
            assert!((o - i / divisor).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_buffer_passes_through() {
        let input = SampleBuffer::new(Vec::new(), 44100);
        let params: VoiceParams = serde_json::from_str(r#"{"pitch": 0.5, "reverb": 0.5}"#).unwrap();
        let output = apply(&input, &params).unwrap();
        assert!(output.is_empty());
        assert_eq!(output.sample_rate, 44100);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = tone(220.0, 44100, 2000);
        let snapshot = input.clone();
        let params: VoiceParams =
            serde_json::from_str(r#"{"pitch": 0.7, "bass": 1.5, "robotic": true}"#).unwrap();
        let _ = apply(&input, &params).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_output_peak_bounded() {
        let input = tone(440.0, 44100, 44100);
        for json in [
            r#"{"pitch": 0.5, "bass": 3.0, "distortion": 1.5}"#,
            r#"{"reverb": 1.0}"#,
            r#"{"robotic": true, "grit": 2.0}"#,
            r#"{"bandpass": [300.0, 3000.0]}"#,
        ] {
            let params: VoiceParams = serde_json::from_str(json).unwrap();
            let output = apply_seeded(&input, &params, 42).unwrap();
            assert!(output.peak() <= 1.0, "{json}: peak {}", output.peak());
            assert!(output.samples.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn test_pitch_changes_length_sample_rate_does_not_change() {
        let input = tone(440.0, 44100, 44100);
        let params: VoiceParams = serde_json::from_str(r#"{"pitch": 0.5}"#).unwrap();
        let output = apply(&input, &params).unwrap();

        let expected = (input.len() as f64 / 0.5).floor() as i64;
        assert!((output.len() as i64 - expected).abs() <= 1);
        assert_eq!(output.sample_rate, 44100);
    }

    #[test]
    fn test_speed_applies_after_pitch() {
        let input = tone(440.0, 44100, 44100);
        let params: VoiceParams =
            serde_json::from_str(r#"{"pitch": 0.5, "speed": 2.0}"#).unwrap();
        let output = apply(&input, &params).unwrap();

        // 0.5 then 2.0 lands back near the input length
        assert!((output.len() as i64 - input.len() as i64).abs() <= 2);
    }

    #[test]
    fn test_failed_step_reports_effect_name() {
        let input = tone(440.0, 44100, 1000);
        let params: VoiceParams =
            serde_json::from_str(r#"{"bandpass": [300.0, 90000.0]}"#).unwrap();

        let err = apply(&input, &params).unwrap_err();
        match err {
            EngineError::EffectApplicationFailed { effect, source } => {
                assert_eq!(effect, "bandpass");
                assert!(matches!(*source, EngineError::InvalidFilterBand { .. }));
            }
            other => panic!("expected EffectApplicationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pitch_reports_pitch_step() {
        let input = tone(440.0, 44100, 1000);
        let params: VoiceParams = serde_json::from_str(r#"{"pitch": -2.0}"#).unwrap();

        let err = apply(&input, &params).unwrap_err();
        match err {
            EngineError::EffectApplicationFailed { effect, .. } => assert_eq!(effect, "pitch"),
            other => panic!("expected EffectApplicationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_apply_is_reproducible() {
        let input = tone(330.0, 44100, 8000);
        let params: VoiceParams = serde_json::from_str(r#"{"raspy": 0.4}"#).unwrap();

        let a = apply_seeded(&input, &params, 7).unwrap();
        let b = apply_seeded(&input, &params, 7).unwrap();
        assert_eq!(a, b);

        let c = apply_seeded(&input, &params, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_bass_at_or_below_unity_is_skipped() {
        let input = tone(100.0, 44100, 4000);
        let boosted: VoiceParams = serde_json::from_str(r#"{"bass": 1.0}"#).unwrap();
        let plain = VoiceParams::default();

        let a = apply(&input, &boosted).unwrap();
        let b = apply(&input, &plain).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_silence_stays_zero() {
        let mut samples = vec![0.0; 100];
        normalize(&mut samples);
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}
