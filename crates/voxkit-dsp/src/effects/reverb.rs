//! Multi-tap feedback-free reverb.

use crate::error::{EngineError, EngineResult};

/// Delay of the first tap in seconds.
const TAP_BASE_DELAY: f64 = 0.05;
/// Spacing between consecutive taps in seconds.
const TAP_SPACING: f64 = 0.03;
/// Per-tap decay ratio.
const TAP_DECAY: f64 = 0.6;
/// Number of taps.
const NUM_TAPS: usize = 3;

/// Adds three delayed, decayed copies of the dry signal.
///
/// Tap `i` is delayed by `0.05 + i * 0.03` seconds and scaled by
/// `amount * 0.6^i`. Summation happens in a buffer padded by the largest
/// delay, then the result is truncated back to the input length - long tails
/// are clipped rather than extending the buffer.
pub fn apply(samples: &[f64], amount: f64, sample_rate: u32) -> EngineResult<Vec<f64>> {
    if !amount.is_finite() || !(0.0..=1.0).contains(&amount) {
        return Err(EngineError::invalid_param(
            "reverb",
            format!("amount must be in 0.0-1.0, got {}", amount),
        ));
    }
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let rate = sample_rate as f64;
    let max_delay = ((TAP_BASE_DELAY + (NUM_TAPS - 1) as f64 * TAP_SPACING) * rate) as usize;

    let mut wet = vec![0.0; samples.len() + max_delay];
    wet[..samples.len()].copy_from_slice(samples);

    for i in 0..NUM_TAPS {
        let delay = ((TAP_BASE_DELAY + i as f64 * TAP_SPACING) * rate) as usize;
        let decay = amount * TAP_DECAY.powi(i as i32);
        for (j, &dry) in samples.iter().enumerate() {
            wet[delay + j] += dry * decay;
        }
    }

    wet.truncate(samples.len());
    Ok(wet)
}
