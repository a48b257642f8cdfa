//! Command-line argument definitions for the Easel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each subcommand selects a generator; the shared
//! [`GenerateArgs`] control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Easel design-system tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Which artifact to generate
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// The shared generation arguments of whichever subcommand was used.
    pub fn generate(&self) -> &GenerateArgs {
        match &self.command {
            Command::Tokens(args) | Command::Interfaces(args) | Command::Props(args) => args,
        }
    }
}

/// The artifact to generate from the input file
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract design tokens as pretty-printed JSON
    Tokens(GenerateArgs),
    /// Emit TypeScript namespace declarations for component variants
    Interfaces(GenerateArgs),
    /// Emit the TypeScript variant constant table and literal types
    Props(GenerateArgs),
}

/// Arguments shared by every generator subcommand
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Path to the captured Figma file JSON
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file, `-` for standard output
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
