//! Effect knobs driving one invocation of the chain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parameter set for the effect chain.
///
/// Every knob is optional; an absent knob means the corresponding chain step
/// is skipped. Presets carry additional descriptive keys (`authority`,
/// `warmth`, `dramatic`, ...) that land in [`tags`](Self::tags) and are
/// intentionally ignored by the engine - they describe the voice, they do
/// not process it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VoiceParams {
    /// Resampling ratio for pitch change; 1.0 is a no-op. Changes duration
    /// too (see [`crate::resample`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,

    /// Resampling ratio for duration change; 1.0 is a no-op. Only the
    /// custom-parameter path sets this - no preset carries it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,

    /// Low-frequency gain multiplier; only values above 1.0 boost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass: Option<f64>,

    /// Band-limiting corners `(low_hz, high_hz)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandpass: Option<(f64, f64)>,

    /// Echo intensity in [0, 1]; values above 0 trigger reverb.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverb: Option<f64>,

    /// Roughness amount; takes precedence over `grit` when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raspy: Option<f64>,

    /// Alternate roughness knob; some presets carry it instead of `raspy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grit: Option<f64>,

    /// Waveshaping drive amount; values above 0 trigger distortion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distortion: Option<f64>,

    /// Enables the 30 Hz ring-modulation robot timbre.
    #[serde(default, skip_serializing_if = "is_false")]
    pub robotic: bool,

    /// Descriptive flavor tags; ignored by the engine.
    #[serde(flatten)]
    pub tags: BTreeMap<String, serde_json::Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl VoiceParams {
    /// The effective roughness amount: `raspy` if present, else `grit`.
    pub fn rasp_amount(&self) -> Option<f64> {
        self.raspy.or(self.grit)
    }
}
