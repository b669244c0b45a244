//! Voxkit CLI - character-voice processing for WAV files
//!
//! This binary provides commands for applying voice presets or custom effect
//! parameters to audio files and inspecting the built-in preset catalog.

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use voxkit_cli::commands;
use voxkit_cli::commands::apply::ParamsSource;
use voxkit_dsp::VoiceParams;

/// Voxkit - Character Voice Effects
#[derive(Parser)]
#[command(name = "voxkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a preset or custom parameters to a WAV file
    Apply {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Path to the output WAV file
        #[arg(short, long)]
        output: String,

        /// Preset category, e.g. "Fun & Creative"
        #[arg(long, requires = "preset")]
        category: Option<String>,

        /// Preset display name, e.g. "Robot"
        #[arg(long, requires = "category", conflicts_with = "params")]
        preset: Option<String>,

        /// Path to a JSON file holding a parameter set
        #[arg(long)]
        params: Option<String>,

        /// Pitch ratio; below 1.0 is deeper (changes duration too)
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        pitch: Option<f64>,

        /// Playback speed ratio
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        speed: Option<f64>,

        /// Bass boost gain; values above 1.0 boost
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        bass: Option<f64>,

        /// Reverb amount (0.0-1.0)
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        reverb: Option<f64>,

        /// Voice roughness amount
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        grit: Option<f64>,

        /// Distortion drive amount
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        distortion: Option<f64>,

        /// Band-pass corners as LOW:HIGH in Hz, e.g. 300:3400
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        bandpass: Option<String>,

        /// Enable the robot ring-modulation timbre
        #[arg(long, conflicts_with_all = ["preset", "params"])]
        robotic: bool,

        /// Seed for reproducible rasp noise
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in preset catalog
    Presets {
        /// Only list one category
        #[arg(long)]
        category: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show one preset's parameter set
    Show {
        /// Preset category
        #[arg(long)]
        category: String,

        /// Preset display name
        #[arg(long)]
        preset: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print duration, sample rate, and peak level of a WAV file
    Info {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn run_command(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Apply {
            input,
            output,
            category,
            preset,
            params,
            pitch,
            speed,
            bass,
            reverb,
            grit,
            distortion,
            bandpass,
            robotic,
            seed,
            json,
        } => {
            let source = if let (Some(category), Some(name)) =
                (category.as_deref(), preset.as_deref())
            {
                ParamsSource::Preset { category, name }
            } else if let Some(path) = params.as_deref() {
                ParamsSource::File(Path::new(path))
            } else {
                let bandpass = bandpass
                    .as_deref()
                    .map(commands::apply::parse_band)
                    .transpose()?;
                ParamsSource::Custom(VoiceParams {
                    pitch,
                    speed,
                    bass,
                    bandpass,
                    reverb,
                    grit,
                    distortion,
                    robotic,
                    ..VoiceParams::default()
                })
            };
            commands::apply::run(&input, &output, source, seed, json)
        }
        Commands::Presets { category, json } => commands::presets::run(category.as_deref(), json),
        Commands::Show {
            category,
            preset,
            json,
        } => commands::show::run(&category, &preset, json),
        Commands::Info { input, json } => commands::info::run(&input, json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
