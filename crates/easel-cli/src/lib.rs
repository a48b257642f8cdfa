//! CLI logic for the Easel design-system tool.
//!
//! This module contains the core CLI logic for the Easel design-system
//! tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, GenerateArgs};

use std::{
    fs,
    io::{self, Write as _},
};

use log::{info, warn};

use easel::{EaselError, ExportBuilder};

/// Run the Easel CLI application
///
/// This function decodes the input file, runs the selected generator, and
/// writes the artifact to the output file or standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `EaselError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Decoding errors
/// - Generation errors
pub fn run(args: &Args) -> Result<(), EaselError> {
    let generate = args.generate();

    info!(
        input_path = generate.input,
        output_path = generate.output;
        "Processing file"
    );

    // Load configuration
    let app_config = config::load_config(generate.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&generate.input)?;

    // Process the file using the ExportBuilder API
    let builder = ExportBuilder::new(app_config);
    let file = builder.decode(&source)?;

    let export = match &args.command {
        Command::Tokens(_) => builder.design_tokens(&file)?,
        Command::Interfaces(_) => builder.component_interfaces(&file)?,
        Command::Props(_) => builder.component_props(&file)?,
    };

    // Content findings are not fatal; surface them and keep the artifact.
    for diagnostic in export.diagnostics() {
        warn!("{diagnostic}");
    }

    // Write output
    if generate.output == "-" {
        io::stdout().write_all(export.text().as_bytes())?;
    } else {
        fs::write(&generate.output, export.text())?;
    }

    info!(output_file = generate.output; "Artifact exported successfully");

    Ok(())
}
