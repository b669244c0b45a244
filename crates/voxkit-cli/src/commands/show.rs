//! Show one preset's parameter set.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use voxkit_dsp::presets;

/// Runs the show command.
pub fn run(category: &str, name: &str, json: bool) -> Result<ExitCode> {
    let preset = presets::find(category, name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(preset)?);
    } else {
        println!("{} ({})", preset.name.cyan().bold(), category.dimmed());
        println!("{}", serde_json::to_string_pretty(&preset.params)?);
    }

    Ok(ExitCode::SUCCESS)
}
