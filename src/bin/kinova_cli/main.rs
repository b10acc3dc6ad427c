// ABOUTME: Kinova CLI - run gait evaluations over JSON snapshots from the terminal
// ABOUTME: Handles one-off analysis runs and ideal-parameter lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kinova Gait Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate a readings file with the default profile
//! kinova-cli analyze --readings readings.json
//!
//! # Evaluate with a saved profile and an ML snapshot
//! kinova-cli analyze --readings readings.json --profile profile.json --ml ml.json
//!
//! # Show the personalized ideal parameters for a subject
//! kinova-cli ideal --height 182 --weight 76
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use kinova_gait_engine::intelligence::{compute_ideal_parameters, evaluate};
use kinova_gait_engine::{GaitReading, MlInsights, UserProfile};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kinova-cli",
    about = "Kinova gait analysis CLI",
    long_about = "Runs the Kinova gait analysis pipeline over JSON snapshots: \
                  a profile, a chronological readings array, and an optional ML snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate a readings snapshot
    Analyze {
        /// Path to a JSON array of gait readings, chronological order
        #[arg(long)]
        readings: PathBuf,

        /// Path to a JSON user profile; platform default when omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Path to a JSON ML snapshot; local composite score when omitted
        #[arg(long)]
        ml: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the personalized ideal parameters for a subject
    Ideal {
        /// Body height in centimeters
        #[arg(long)]
        height: f64,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,
    },
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn run_analyze(
    readings_path: &Path,
    profile_path: Option<&Path>,
    ml_path: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let readings: Vec<GaitReading> = read_json(readings_path).await?;
    let profile = match profile_path {
        Some(path) => {
            let profile: UserProfile = read_json(path).await?;
            profile.validate()?;
            profile
        }
        None => UserProfile::default(),
    };
    let ml: Option<MlInsights> = match ml_path {
        Some(path) => Some(read_json(path).await?),
        None => None,
    };

    info!(
        readings = readings.len(),
        ml = ml.is_some(),
        "running evaluation"
    );
    let evaluation = evaluate(&profile, &readings, ml.as_ref());

    let rendered = if compact {
        serde_json::to_string(&evaluation)?
    } else {
        serde_json::to_string_pretty(&evaluation)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_ideal(height: f64, weight: f64) -> Result<()> {
    let profile = UserProfile { height, weight };
    if let Err(err) = profile.validate() {
        bail!("profile rejected: {err}");
    }
    let ideal = compute_ideal_parameters(&profile);
    println!("{}", serde_json::to_string_pretty(&ideal)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Command::Analyze {
            readings,
            profile,
            ml,
            compact,
        } => run_analyze(&readings, profile.as_deref(), ml.as_deref(), compact).await,
        Command::Ideal { height, weight } => run_ideal(height, weight),
    }
}
