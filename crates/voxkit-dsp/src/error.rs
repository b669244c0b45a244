//! Error types for the voice engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while applying the effect chain.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session was asked to process before any audio was loaded.
    #[error("no audio loaded")]
    NoAudioLoaded,

    /// Band-pass corners outside the valid range for the buffer's sample rate.
    #[error("invalid filter band {low_hz}-{high_hz} Hz at {sample_rate} Hz sample rate")]
    InvalidFilterBand {
        /// Lower corner in Hz.
        low_hz: f64,
        /// Upper corner in Hz.
        high_hz: f64,
        /// Sample rate of the buffer being filtered.
        sample_rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A primitive failed while the chain was running.
    #[error("effect '{effect}' failed")]
    EffectApplicationFailed {
        /// Name of the chain step that failed.
        effect: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<EngineError>,
    },

    /// Preset lookup miss.
    #[error("preset not found: {category}/{name}")]
    PresetNotFound {
        /// Category display name.
        category: String,
        /// Preset display name.
        name: String,
    },
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps a primitive failure with the name of the chain step it came from.
    pub fn effect(effect: &'static str, source: EngineError) -> Self {
        Self::EffectApplicationFailed {
            effect,
            source: Box::new(source),
        }
    }
}
