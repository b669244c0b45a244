//! Mono sample buffer shared by every effect primitive.

/// An in-memory mono audio signal plus its sample rate.
///
/// Every primitive consumes a buffer (or its sample slice) and produces a new
/// one; the engine never mutates a buffer it was handed. The sample rate is
/// fixed for the lifetime of a buffer - filters derive their normalized
/// cutoffs from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Mono samples, one per time step, nominally in [-1.0, 1.0].
    pub samples: Vec<f64>,
    /// Samples per second.
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a buffer from mono samples.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Folds interleaved multi-channel frames to mono by averaging channels.
    ///
    /// A trailing partial frame is dropped. Zero channels yields an empty
    /// buffer.
    pub fn from_interleaved(interleaved: &[f64], channels: u16, sample_rate: u32) -> Self {
        if channels <= 1 {
            return Self::new(interleaved.to_vec(), sample_rate);
        }
        let channels = channels as usize;
        let samples = interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect();
        Self::new(samples, sample_rate)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Peak absolute sample value (0.0 for an empty buffer).
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |a, &s| a.max(s.abs()))
    }
}
