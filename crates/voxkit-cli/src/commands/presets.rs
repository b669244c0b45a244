//! List the built-in preset catalog.

use std::process::ExitCode;

use anyhow::{bail, Result};
use colored::Colorize;
use voxkit_dsp::presets;

/// Runs the presets command.
pub fn run(category: Option<&str>, json: bool) -> Result<ExitCode> {
    let catalog = presets::catalog();

    if let Some(wanted) = category {
        let Some(found) = catalog.categories.iter().find(|c| c.name == wanted) else {
            bail!("unknown category '{}'", wanted);
        };
        if json {
            println!("{}", serde_json::to_string_pretty(found)?);
        } else {
            print_category(found);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        for category in &catalog.categories {
            print_category(category);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_category(category: &presets::PresetCategory) {
    println!("{}", category.name.cyan().bold());
    for preset in &category.presets {
        println!("  {}", preset.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all() {
        run(None, false).unwrap();
        run(None, true).unwrap();
    }

    #[test]
    fn test_list_one_category() {
        run(Some("Atmospheric"), false).unwrap();
        run(Some("Atmospheric"), true).unwrap();
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = run(Some("Nope"), false).unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }
}
