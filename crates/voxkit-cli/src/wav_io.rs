//! WAV decode/encode at the engine boundary.
//!
//! Decode folds multi-channel input to mono by averaging channels and
//! converts integer PCM to f64 in [-1, 1]. Encode writes mono 16-bit PCM at
//! the buffer's sample rate.

use std::path::Path;

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use voxkit_dsp::SampleBuffer;

/// Reads a WAV file into a mono sample buffer.
pub fn read_mono(path: &Path) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)
        .with_context(|| format!("failed to open WAV file {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()
            .with_context(|| format!("failed to decode {}", path.display()))?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()
                .with_context(|| format!("failed to decode {}", path.display()))?
        }
    };

    Ok(SampleBuffer::from_interleaved(
        &interleaved,
        spec.channels,
        spec.sample_rate,
    ))
}

/// Writes a mono sample buffer as 16-bit PCM.
///
/// Samples outside [-1, 1] are clipped.
pub fn write_mono(path: &Path, buffer: &SampleBuffer) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create WAV file {}", path.display()))?;
    for &sample in &buffer.samples {
        let clipped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clipped * 32767.0).round() as i16)?;
    }
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", path.display()))?;

    Ok(())
}
