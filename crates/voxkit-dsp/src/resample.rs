//! Nearest-index resampling used by the pitch and speed knobs.

use crate::error::{EngineError, EngineResult};

/// Resamples by nearest-index mapping: output index `k` reads input index
/// `round(k * ratio)`; indices past the end are dropped.
///
/// Output length is `len / ratio` to within a sample. This changes pitch and
/// duration together - it is the intentionally simple approximation, not a
/// phase-preserving pitch shifter.
pub fn resample(samples: &[f64], ratio: f64) -> EngineResult<Vec<f64>> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(EngineError::invalid_param(
            "ratio",
            format!("must be a positive finite number, got {}", ratio),
        ));
    }

    let mut output = Vec::with_capacity((samples.len() as f64 / ratio).ceil() as usize);
    let mut k = 0u64;
    loop {
        let src = (k as f64 * ratio).round() as usize;
        if src >= samples.len() {
            break;
        }
        output.push(samples[src]);
        k += 1;
    }
    Ok(output)
}
