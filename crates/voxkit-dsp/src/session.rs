//! Session state: the loaded buffer and the last processed result.

use crate::buffer::SampleBuffer;
use crate::chain;
use crate::error::{EngineError, EngineResult};
use crate::params::VoiceParams;

/// Holds one loaded buffer and the most recent processed output.
///
/// The loaded buffer is never mutated by processing; each process call reads
/// it fresh, so applying a second preset starts from the original audio, not
/// from the previous result. A failed process leaves the previous processed
/// buffer untouched.
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<SampleBuffer>,
    processed: Option<SampleBuffer>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a buffer, discarding any previous processed output.
    pub fn load(&mut self, buffer: SampleBuffer) {
        self.loaded = Some(buffer);
        self.processed = None;
    }

    /// The loaded buffer, if any.
    pub fn loaded(&self) -> Option<&SampleBuffer> {
        self.loaded.as_ref()
    }

    /// The last successful processing result, if any.
    pub fn processed(&self) -> Option<&SampleBuffer> {
        self.processed.as_ref()
    }

    /// True once audio has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Runs the chain over the loaded buffer.
    pub fn process(&mut self, params: &VoiceParams) -> EngineResult<&SampleBuffer> {
        let buffer = self.loaded.as_ref().ok_or(EngineError::NoAudioLoaded)?;
        let output = chain::apply(buffer, params)?;
        Ok(self.processed.insert(output))
    }

    /// Runs the chain with a fixed seed for the rasp noise stream.
    pub fn process_seeded(&mut self, params: &VoiceParams, seed: u32) -> EngineResult<&SampleBuffer> {
        let buffer = self.loaded.as_ref().ok_or(EngineError::NoAudioLoaded)?;
        let output = chain::apply_seeded(buffer, params, seed)?;
        Ok(self.processed.insert(output))
    }
}
