//! Rasp: blend of dry signal, tanh saturation, and Gaussian noise.

use crate::error::{EngineError, EngineResult};
use crate::noise::NoiseSource;

/// Fraction of the saturated signal blended in per unit of amount.
const SATURATION_MIX: f64 = 0.3;
/// Noise standard deviation per unit of amount.
const NOISE_SIGMA: f64 = 0.05;

/// Roughens the signal.
///
/// `out = dry * (1 - 0.3*amount) + tanh(dry * (1 + amount)) * 0.3*amount + n`
/// where `n` is drawn per-sample from the injected noise source scaled to a
/// standard deviation of `0.05 * amount`. The noise source is the only
/// non-deterministic input to the whole chain; callers wanting reproducible
/// output pass a seeded source.
pub fn apply(
    samples: &[f64],
    amount: f64,
    noise: &mut dyn NoiseSource,
) -> EngineResult<Vec<f64>> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EngineError::invalid_param(
            "rasp",
            format!("amount must be finite and >= 0.0, got {}", amount),
        ));
    }

    let mix = SATURATION_MIX * amount;
    let drive = 1.0 + amount;
    let sigma = NOISE_SIGMA * amount;

    Ok(samples
        .iter()
        .map(|&dry| {
            let saturated = (dry * drive).tanh();
            dry * (1.0 - mix) + saturated * mix + noise.next_sample() * sigma
        })
        .collect())
}
