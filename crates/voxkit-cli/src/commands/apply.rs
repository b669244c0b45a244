//! Apply a preset or custom parameters to a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use voxkit_dsp::{chain, presets, VoiceParams};

use crate::wav_io;

/// Where the parameter set comes from.
pub enum ParamsSource<'a> {
    /// A catalog entry looked up by category and display name.
    Preset {
        category: &'a str,
        name: &'a str,
    },
    /// A JSON file deserialized into [`VoiceParams`].
    File(&'a Path),
    /// Knob flags assembled by the argument parser.
    Custom(VoiceParams),
}

/// Parses a `LOW:HIGH` band-pass argument into corner frequencies.
pub fn parse_band(arg: &str) -> Result<(f64, f64)> {
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .with_context(|| format!("invalid band corner '{}'", part))
    };
    match arg.split_once(':') {
        Some((low, high)) => Ok((parse(low)?, parse(high)?)),
        None => bail!("band must be LOW:HIGH in Hz, got '{}'", arg),
    }
}

/// Runs the apply command.
pub fn run(
    input: &str,
    output: &str,
    source: ParamsSource<'_>,
    seed: Option<u32>,
    json: bool,
) -> Result<ExitCode> {
    let buffer = wav_io::read_mono(Path::new(input))?;

    let (label, params) = match source {
        ParamsSource::Preset { category, name } => {
            let preset = presets::find(category, name)?;
            (preset.name.clone(), preset.params.clone())
        }
        ParamsSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read params file {}", path.display()))?;
            let params: VoiceParams = serde_json::from_str(&text)
                .with_context(|| format!("invalid params file {}", path.display()))?;
            ("custom (file)".to_string(), params)
        }
        ParamsSource::Custom(params) => ("custom".to_string(), params),
    };

    let processed = match seed {
        Some(seed) => chain::apply_seeded(&buffer, &params, seed)?,
        None => chain::apply(&buffer, &params)?,
    };

    wav_io::write_mono(Path::new(output), &processed)?;

    if json {
        let report = serde_json::json!({
            "input": input,
            "output": output,
            "effect": label,
            "sample_rate": processed.sample_rate,
            "input_samples": buffer.len(),
            "output_samples": processed.len(),
            "duration_seconds": processed.duration_seconds(),
            "peak": processed.peak(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} -> {}",
            "Applied".green().bold(),
            label.cyan(),
            output
        );
        println!(
            "  {}: {:.2}s @ {} Hz ({} samples)",
            "Output".dimmed(),
            processed.duration_seconds(),
            processed.sample_rate,
            processed.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}
