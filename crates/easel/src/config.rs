//! Configuration types for Easel generators.
//!
//! This module provides configuration structures that control how tokens
//! are discovered and how the TypeScript artifacts are named. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining token and TypeScript settings.
//! - [`TokenConfig`] - Controls the marker and name prefixes of token extraction.
//! - [`TypescriptConfig`] - Controls the identifiers of the generated TypeScript declarations.
//!
//! # Example
//!
//! ```
//! # use easel::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.tokens().marker(), "_tokens");
//! ```

use serde::Deserialize;

use easel_codegen::{PropsOptions, TokenOptions};

/// Top-level application configuration combining token and TypeScript
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Token extraction section.
    #[serde(default)]
    tokens: TokenConfig,

    /// TypeScript naming section.
    #[serde(default)]
    typescript: TypescriptConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified token and TypeScript
    /// configurations.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Token discovery settings.
    /// * `typescript` - TypeScript naming settings.
    pub fn new(tokens: TokenConfig, typescript: TypescriptConfig) -> Self {
        Self { tokens, typescript }
    }

    /// Returns the token configuration.
    pub fn tokens(&self) -> &TokenConfig {
        &self.tokens
    }

    /// Returns the TypeScript configuration.
    pub fn typescript(&self) -> &TypescriptConfig {
        &self.typescript
    }
}

/// Token discovery configuration.
///
/// The defaults match the naming conventions the extractor expects in a
/// design file: a `_tokens` page or frame marking the token subtree and
/// category frames named `size/...`, `spacing/...`, and so on.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// First name segment of a node that marks its subtree as token
    /// material.
    #[serde(default = "default_marker")]
    marker: String,
    /// Name prefixes of size tokens.
    #[serde(default = "default_size")]
    size: Vec<String>,
    /// Name prefixes of breakpoint tokens.
    #[serde(default = "default_breakpoints")]
    breakpoints: Vec<String>,
    /// Name prefixes of spacing tokens.
    #[serde(default = "default_spacing")]
    spacing: Vec<String>,
    /// Name prefixes of border tokens.
    #[serde(default = "default_border")]
    border: Vec<String>,
    /// Name prefixes of radius tokens.
    #[serde(default = "default_radius")]
    radius: Vec<String>,
    /// Name prefixes of motion tokens.
    #[serde(default = "default_motion")]
    motion: Vec<String>,
    /// Name prefixes of opacity tokens.
    #[serde(default = "default_opacity")]
    opacity: Vec<String>,
}

fn default_marker() -> String {
    "_tokens".to_string()
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn default_size() -> Vec<String> {
    names(&["size", "sizes"])
}

fn default_breakpoints() -> Vec<String> {
    names(&["breakpoints"])
}

fn default_spacing() -> Vec<String> {
    names(&["spacing"])
}

fn default_border() -> Vec<String> {
    names(&["borders", "border"])
}

fn default_radius() -> Vec<String> {
    names(&["radius", "radii"])
}

fn default_motion() -> Vec<String> {
    names(&["motion"])
}

fn default_opacity() -> Vec<String> {
    names(&["opacities", "opacity"])
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            size: default_size(),
            breakpoints: default_breakpoints(),
            spacing: default_spacing(),
            border: default_border(),
            radius: default_radius(),
            motion: default_motion(),
            opacity: default_opacity(),
        }
    }
}

impl TokenConfig {
    /// Returns the marker name that opts a subtree into token extraction.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Builds the generator options for this configuration.
    pub fn to_options(&self) -> TokenOptions {
        TokenOptions {
            marker: self.marker.clone(),
            size: self.size.clone(),
            breakpoints: self.breakpoints.clone(),
            spacing: self.spacing.clone(),
            border: self.border.clone(),
            radius: self.radius.clone(),
            motion: self.motion.clone(),
            opacity: self.opacity.clone(),
        }
    }
}

/// TypeScript naming configuration for generated declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct TypescriptConfig {
    /// Suffix of the constant identifier derived from the file name.
    #[serde(default = "default_const_suffix")]
    const_suffix: String,
    /// Suffix of the interface identifier derived from the file name.
    #[serde(default = "default_types_suffix")]
    types_suffix: String,
}

fn default_const_suffix() -> String {
    "Consts".to_string()
}

fn default_types_suffix() -> String {
    "Types".to_string()
}

impl Default for TypescriptConfig {
    fn default() -> Self {
        Self {
            const_suffix: default_const_suffix(),
            types_suffix: default_types_suffix(),
        }
    }
}

impl TypescriptConfig {
    /// Returns the constant identifier suffix.
    pub fn const_suffix(&self) -> &str {
        &self.const_suffix
    }

    /// Returns the interface identifier suffix.
    pub fn types_suffix(&self) -> &str {
        &self.types_suffix
    }

    /// Builds the generator options for this configuration.
    pub fn to_options(&self) -> PropsOptions {
        PropsOptions {
            const_suffix: self.const_suffix.clone(),
            types_suffix: self.types_suffix.clone(),
        }
    }
}
