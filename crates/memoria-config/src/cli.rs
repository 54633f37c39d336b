//! Command-line argument parsing for the memoria tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Memoria scene generator command-line arguments.
///
/// CLI values override settings loaded from `memoria.ron`.
#[derive(Parser, Debug)]
#[command(name = "memoria", about = "Memorial tribute-wall scene generator")]
pub struct CliArgs {
    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target star count.
    #[arg(long)]
    pub stars: Option<u32>,

    /// Target cloud count.
    #[arg(long)]
    pub clouds: Option<u32>,

    /// Star taper exponent.
    #[arg(long)]
    pub taper_exponent: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path for the generated scene JSON.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(stars) = args.stars {
            self.stars.star_count = stars;
        }
        if let Some(clouds) = args.clouds {
            self.clouds.cloud_count = clouds;
        }
        if let Some(exponent) = args.taper_exponent {
            self.stars.taper_exponent = exponent;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
