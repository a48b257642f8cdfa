//! Easel - Figma document schema and design-system code generation.
//!
//! Decoding, token extraction, and TypeScript generation for captured
//! Figma file responses. The document model lives in [`easel_schema`] and
//! the generators in [`easel_codegen`]; this crate ties them together
//! behind a configured builder API.

pub mod config;

mod error;

pub use easel_schema::{
    color, component, constraint, easing, effect, file, geometry, layout, node, paint, style,
    text,
};

pub use easel_codegen::error::{Diagnostic, Severity};

pub use error::EaselError;

use log::{debug, info, trace};

use easel_codegen::{
    write_component_interfaces, write_component_props, write_design_tokens,
};

use config::AppConfig;
use file::File;

/// A generated artifact plus the diagnostics collected while producing it.
#[derive(Debug)]
pub struct Export {
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl Export {
    /// The generated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content findings collected during generation. These never abort a
    /// run; an entry here means some input was skipped or collided.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the export, returning the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Builder for decoding files and generating artifacts.
///
/// # Examples
///
/// ```rust,no_run
/// use easel::{ExportBuilder, config::AppConfig};
///
/// let source = std::fs::read_to_string("design-system.json")
///     .expect("Failed to read file");
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ExportBuilder::new(config);
///
/// // Decode the captured API response
/// let file = builder.decode(&source)
///     .expect("Failed to decode");
///
/// // Generate artifacts from the decoded file
/// let tokens = builder.design_tokens(&file)
///     .expect("Failed to generate tokens");
/// println!("{}", tokens.text());
///
/// // Or use default config
/// let builder = ExportBuilder::default();
/// ```
#[derive(Default)]
pub struct ExportBuilder {
    config: AppConfig,
}

impl ExportBuilder {
    /// Create a new export builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including token and
    ///   TypeScript settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Decode a captured file response into the document model.
    ///
    /// # Arguments
    ///
    /// * `source` - The file response JSON as a string
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Decode`] when the JSON is malformed or does
    /// not match the file schema (unknown enum tag, missing required
    /// field). The error keeps the source text for span reporting.
    pub fn decode(&self, source: &str) -> Result<File, EaselError> {
        info!("Decoding file");

        let file: File = serde_json::from_str(source)
            .map_err(|err| EaselError::new_decode_error(err, source))?;

        debug!(name = file.name, version = file.version; "File decoded successfully");
        trace!(document_id = file.document.id; "Decoded document root");

        Ok(file)
    }

    /// Extract design tokens from a decoded file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `EaselError` when the token tree cannot be generated or
    /// encoded.
    pub fn design_tokens(&self, file: &File) -> Result<Export, EaselError> {
        info!("Generating design tokens");

        let options = self.config.tokens().to_options();
        let mut out = Vec::new();
        let diagnostics = write_design_tokens(file, &options, &mut out)?;

        debug!(bytes = out.len(), diagnostics = diagnostics.len(); "Design tokens generated");
        Ok(Export {
            text: String::from_utf8_lossy(&out).into_owned(),
            diagnostics,
        })
    }

    /// Generate TypeScript namespace and interface declarations for the
    /// component variant space of a decoded file.
    ///
    /// # Errors
    ///
    /// Returns `EaselError` when a component or property name cannot
    /// become a TypeScript identifier.
    pub fn component_interfaces(&self, file: &File) -> Result<Export, EaselError> {
        info!("Generating component interfaces");

        let mut out = Vec::new();
        let diagnostics = write_component_interfaces(file, &mut out)?;

        debug!(bytes = out.len(), diagnostics = diagnostics.len(); "Component interfaces generated");
        Ok(Export {
            text: String::from_utf8_lossy(&out).into_owned(),
            diagnostics,
        })
    }

    /// Generate the component variant constant table and literal types of
    /// a decoded file.
    ///
    /// # Errors
    ///
    /// Returns `EaselError` when the file or a property name cannot become
    /// a TypeScript identifier.
    pub fn component_props(&self, file: &File) -> Result<Export, EaselError> {
        info!("Generating component props");

        let options = self.config.typescript().to_options();
        let mut out = Vec::new();
        let diagnostics = write_component_props(file, &options, &mut out)?;

        debug!(bytes = out.len(), diagnostics = diagnostics.len(); "Component props generated");
        Ok(Export {
            text: String::from_utf8_lossy(&out).into_owned(),
            diagnostics,
        })
    }
}
