//! Voxkit DSP engine
//!
//! This crate implements the character-voice effect engine: it takes a
//! complete in-memory mono buffer plus a parameter set and returns a new
//! buffer with the ordered effect chain applied.
//!
//! # Overview
//!
//! A [`VoiceParams`] value - from the built-in [`presets`] catalog or built
//! by a caller - selects which primitives run:
//!
//! - **Pitch / speed** - nearest-index resampling (changes duration too)
//! - **Bass boost** - zero-phase Butterworth low band, added back scaled
//! - **Band-pass** - zero-phase Butterworth band limit, replaces the signal
//! - **Reverb** - three feedback-free delay taps, tail truncated
//! - **Robot** - ring modulation against a fixed 30 Hz carrier
//! - **Rasp** - tanh saturation blend plus Gaussian noise
//! - **Distortion** - pure tanh waveshaping
//!
//! Every invocation ends with peak normalization, so output never exceeds
//! full scale.
//!
//! # Determinism
//!
//! All primitives except rasp are pure functions of their inputs. Rasp draws
//! Gaussian noise: [`chain::apply`] seeds it freshly per invocation,
//! [`chain::apply_seeded`] derives the stream from a caller seed (PCG32,
//! BLAKE3 seed derivation), and tests inject a [`NoiseSource`] stub.
//!
//! # Example
//!
//! ```ignore
//! use voxkit_dsp::{chain, presets, SampleBuffer};
//!
//! let buffer = SampleBuffer::new(samples, 44100);
//! let preset = presets::find("Fun & Creative", "Robot")?;
//! let output = chain::apply(&buffer, &preset.params)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`chain`] - effect ordering and parameter dispatch
//! - [`effects`] - the individual signal-processing primitives
//! - [`filter`] - biquad sections and zero-phase Butterworth cascades
//! - [`presets`] - the built-in character-voice catalog
//! - [`session`] - loaded/processed buffer state for shells
//! - [`rng`] / [`noise`] - seeded randomness for the rasp effect

pub mod buffer;
pub mod chain;
pub mod effects;
pub mod error;
pub mod filter;
pub mod noise;
pub mod params;
pub mod presets;
pub mod resample;
pub mod rng;
pub mod session;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use chain::{apply, apply_seeded, apply_with_noise};
pub use error::{EngineError, EngineResult};
pub use noise::{GaussianNoise, NoiseSource};
pub use params::VoiceParams;
pub use presets::{catalog, find, Preset, PresetCatalog, PresetCategory};
pub use session::Session;
