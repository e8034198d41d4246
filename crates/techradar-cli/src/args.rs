//! Command-line argument definitions for the Tech Radar CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the note and vault, the output page,
//! configuration and settings files, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Tech Radar renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the markdown note holding `tech-radar` blocks
    #[arg(help = "Path to the input note")]
    pub input: String,

    /// Vault directory searched for tagged notes (defaults to the note's directory)
    #[arg(long)]
    pub vault: Option<String>,

    /// Path to the output HTML file
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the persisted settings file (JSON)
    #[arg(long)]
    pub settings: Option<String>,

    /// Where the page loads the visualization scripts from
    #[arg(long)]
    pub asset_base: Option<String>,

    /// Render radars at full size instead of as thumbnails
    #[arg(long)]
    pub full_scale: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
