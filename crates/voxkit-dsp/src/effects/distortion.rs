//! Distortion: pure tanh waveshaping.

use crate::error::{EngineError, EngineResult};

/// Applies `out = tanh(s * (1 + 2*amount))` per sample.
///
/// Full replacement - no dry blend and no noise component, unlike rasp.
pub fn apply(samples: &[f64], amount: f64) -> EngineResult<Vec<f64>> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EngineError::invalid_param(
            "distortion",
            format!("amount must be finite and >= 0.0, got {}", amount),
        ));
    }

    let drive = 1.0 + 2.0 * amount;
    Ok(samples.iter().map(|&s| (s * drive).tanh()).collect())
}
