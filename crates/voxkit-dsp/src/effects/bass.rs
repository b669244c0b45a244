//! Bass boost: add back a scaled low-frequency component.

use crate::error::{EngineError, EngineResult};
use crate::filter::{butterworth_lowpass, zero_phase};

/// Fixed lowpass cutoff separating the "bass" band.
pub const BASS_CUTOFF_HZ: f64 = 200.0;

/// Boosts low frequencies by `gain`.
///
/// The low band is isolated with a zero-phase 4th-order Butterworth lowpass
/// at [`BASS_CUTOFF_HZ`] and added back on top of the dry signal:
/// `out = dry + low * (gain - 1)`. Unlike the band-pass effect this is
/// additive - the dry signal is kept.
pub fn apply(samples: &[f64], gain: f64, sample_rate: u32) -> EngineResult<Vec<f64>> {
    if !gain.is_finite() || gain < 1.0 {
        return Err(EngineError::invalid_param(
            "bass",
            format!("gain must be finite and >= 1.0, got {}", gain),
        ));
    }
    let nyquist = sample_rate as f64 / 2.0;
    if BASS_CUTOFF_HZ >= nyquist {
        return Err(EngineError::InvalidFilterBand {
            low_hz: 0.0,
            high_hz: BASS_CUTOFF_HZ,
            sample_rate,
        });
    }

    let sections = butterworth_lowpass(BASS_CUTOFF_HZ, sample_rate as f64);
    let low = zero_phase(&sections, samples);

    Ok(samples
        .iter()
        .zip(low.iter())
        .map(|(&dry, &low)| dry + low * (gain - 1.0))
        .collect())
}
