//! Print buffer facts about a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::wav_io;

/// Runs the info command.
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let buffer = wav_io::read_mono(Path::new(input))?;

    if json {
        let report = serde_json::json!({
            "input": input,
            "sample_rate": buffer.sample_rate,
            "samples": buffer.len(),
            "duration_seconds": buffer.duration_seconds(),
            "peak": buffer.peak(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", input.cyan().bold());
        println!("  {}: {} Hz", "Sample rate".dimmed(), buffer.sample_rate);
        println!(
            "  {}: {:.2}s ({} samples, folded to mono)",
            "Duration".dimmed(),
            buffer.duration_seconds(),
            buffer.len()
        );
        println!("  {}: {:.3}", "Peak".dimmed(), buffer.peak());
    }

    Ok(ExitCode::SUCCESS)
}
