//! Design-token extraction.
//!
//! Walks the document tree and turns nodes living under a `_tokens`-marked
//! subtree into a nested JSON object of design tokens, grouped by the
//! `/`-separated node-name path. Named styles from the file-level style
//! table contribute color, grid, font, and effect export entries.

mod border;
mod breakpoint;
mod motion;
mod opacity;
mod radius;
mod size;
mod spacing;
mod style;

use std::{borrow::Cow, io::Write, iter::once};

use log::debug;
use serde_json::Value;

use easel_schema::{
    file::File,
    node::{Node, NodeType},
    style::StyleType,
};

use crate::{
    error::{CodegenError, Diagnostic, DiagnosticCollector, ErrorCode},
    tree::NameTree,
    variants::variant_values,
};

/// Which node-name prefixes feed each token category, and the marker name
/// that opts a subtree into extraction.
#[derive(Debug, Clone)]
pub struct TokenOptions {
    /// First name segment of an ancestor that marks its subtree as token
    /// material.
    pub marker: String,
    /// Name prefixes of size tokens.
    pub size: Vec<String>,
    /// Name prefixes of breakpoint tokens.
    pub breakpoints: Vec<String>,
    /// Name prefixes of spacing tokens.
    pub spacing: Vec<String>,
    /// Name prefixes of border tokens.
    pub border: Vec<String>,
    /// Name prefixes of radius tokens.
    pub radius: Vec<String>,
    /// Name prefixes of motion tokens.
    pub motion: Vec<String>,
    /// Name prefixes of opacity tokens.
    pub opacity: Vec<String>,
}

impl Default for TokenOptions {
    fn default() -> Self {
        fn names(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }

        Self {
            marker: "_tokens".to_string(),
            size: names(&["size", "sizes"]),
            breakpoints: names(&["breakpoints"]),
            spacing: names(&["spacing"]),
            border: names(&["borders", "border"]),
            radius: names(&["radius", "radii"]),
            motion: names(&["motion"]),
            opacity: names(&["opacities", "opacity"]),
        }
    }
}

/// Extracts design tokens from `file` and writes them to `out` as
/// pretty-printed JSON.
///
/// Name collisions are reported as diagnostics and do not abort the run;
/// the first entry at a path wins.
///
/// # Errors
///
/// Returns [`CodegenError`] when the sink fails or the token tree cannot
/// be encoded.
pub fn write_design_tokens<W: Write>(
    file: &File,
    options: &TokenOptions,
    out: &mut W,
) -> Result<Vec<Diagnostic>, CodegenError> {
    let mut output = NameTree::branch();
    let mut collector = DiagnosticCollector::new();

    document_tokens(
        file,
        options,
        &options.size,
        &mut output,
        &mut collector,
        size::as_size_token,
    );
    document_tokens(
        file,
        options,
        &options.breakpoints,
        &mut output,
        &mut collector,
        |node, _| breakpoint::as_breakpoint_token(node),
    );
    document_tokens(
        file,
        options,
        &options.spacing,
        &mut output,
        &mut collector,
        |node, _| spacing::as_spacing_token(node),
    );
    document_tokens(
        file,
        options,
        &options.border,
        &mut output,
        &mut collector,
        |node, _| border::as_border_token(node),
    );
    document_tokens(
        file,
        options,
        &options.radius,
        &mut output,
        &mut collector,
        |node, _| radius::as_radius_token(node),
    );
    document_tokens(
        file,
        options,
        &options.motion,
        &mut output,
        &mut collector,
        |node, _| motion::as_motion_token(node),
    );
    document_tokens(
        file,
        options,
        &options.opacity,
        &mut output,
        &mut collector,
        |node, _| opacity::as_opacity_token(node),
    );

    style_tokens(file, "color", StyleType::Fill, &mut output, &mut collector);
    style_tokens(file, "grid", StyleType::Grid, &mut output, &mut collector);
    style_tokens(file, "font", StyleType::Text, &mut output, &mut collector);
    style_tokens(
        file,
        "effect",
        StyleType::Effect,
        &mut output,
        &mut collector,
    );

    serde_json::to_writer_pretty(out, &output)?;

    debug!(diagnostics = collector.len(); "Design tokens written");
    Ok(collector.into_diagnostics())
}

fn first_segment(name: &str) -> &str {
    name.split('/').next().unwrap_or_default().trim()
}

fn matches_prefix(prefixes: &[String], name: &str) -> bool {
    let prefix = first_segment(name);
    prefixes.iter().any(|p| p == prefix)
}

/// Token name of a node: children of a component set take the set name
/// plus their variant values, everything else uses the node name as-is.
fn token_name<'a>(node: &'a Node, stack: &[&'a Node]) -> Cow<'a, str> {
    let parent = stack.iter().nth_back(1).copied();
    match parent {
        Some(parent) if parent.r#type == NodeType::ComponentSet => Cow::Owned(
            once(parent.name.as_str())
                .chain(variant_values(&node.name))
                .collect::<Vec<_>>()
                .join("/"),
        ),
        _ => Cow::Borrowed(node.name.as_str()),
    }
}

fn document_tokens(
    file: &File,
    options: &TokenOptions,
    prefixes: &[String],
    output: &mut NameTree<String, Value>,
    collector: &mut DiagnosticCollector,
    transformer: impl Fn(&Node, &File) -> Option<Value>,
) {
    for (node, stack) in file.document.depth_first_stack_iter() {
        let name = token_name(node, &stack);

        // Only subtrees below a marker node contribute tokens.
        if !stack
            .iter()
            .rev()
            .skip(1)
            .any(|ancestor| first_segment(&ancestor.name) == options.marker)
        {
            continue;
        }
        if !matches_prefix(prefixes, &name) {
            continue;
        }
        if let Some(json) = transformer(node, file) {
            let path: Vec<String> = name
                .split('/')
                .map(|segment| segment.trim().to_lowercase())
                .collect();
            if !output.insert(&path, json) {
                collector.push(
                    Diagnostic::warning(format!("duplicate token path {name:?}"))
                        .with_code(ErrorCode::E100)
                        .with_path(stack.iter().map(|n| n.name.clone()))
                        .with_help("the first definition wins; rename one of the entries"),
                );
            }
        }
    }
}

fn style_tokens(
    file: &File,
    category: &str,
    style_type: StyleType,
    output: &mut NameTree<String, Value>,
    collector: &mut DiagnosticCollector,
) {
    for style in file.styles.values() {
        if style.style_type != style_type {
            continue;
        }
        // Leading punctuation marks a style as internal.
        if style.name.trim_start().starts_with(['.', '_', '*']) {
            continue;
        }
        let path: Vec<String> = once(category)
            .chain(style.name.split('/'))
            .map(|segment| segment.trim().to_lowercase())
            .collect();
        if !output.insert(&path, style::as_style_token(category, style)) {
            collector.push(
                Diagnostic::warning(format!(
                    "duplicate token path \"{category}/{}\"",
                    style.name
                ))
                .with_code(ErrorCode::E100)
                .with_path([category, style.name.as_str()])
                .with_help("the first definition wins; rename one of the styles"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> File {
        serde_json::from_value(serde_json::json!({
            "document": {
                "id": "0:0", "name": "Document", "type": "DOCUMENT",
                "children": [{
                    "id": "0:1", "name": "Page", "type": "CANVAS",
                    "children": [{
                        "id": "1:1", "name": "_tokens/demo", "type": "FRAME",
                        "children": [
                            {
                                "id": "1:2", "name": "size/Small", "type": "FRAME",
                                "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0}
                            },
                            {
                                "id": "1:3", "name": "size/Small", "type": "FRAME",
                                "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 20.0, "height": 20.0}
                            },
                            {
                                "id": "1:4", "name": "opacity/faint", "type": "FRAME",
                                "opacity": 0.25
                            }
                        ]
                    }, {
                        "id": "2:1", "name": "size/outside", "type": "FRAME",
                        "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 99.0, "height": 10.0}
                    }]
                }]
            },
            "components": {},
            "styles": {
                "S:1": {"key": "a", "name": "Brand/Mulberry", "description": "Primary brand colour", "remote": false, "styleType": "FILL"},
                "S:2": {"key": "b", "name": "_Old", "description": "", "remote": false, "styleType": "FILL"}
            },
            "name": "Demo", "schemaVersion": 0, "version": "1"
        }))
        .expect("valid fixture")
    }

    fn tokens_json(file: &File) -> (Value, Vec<Diagnostic>) {
        let mut out = Vec::new();
        let diagnostics = write_design_tokens(file, &TokenOptions::default(), &mut out)
            .expect("generation succeeds");
        let value = serde_json::from_slice(&out).expect("output is JSON");
        (value, diagnostics)
    }

    #[test]
    fn test_paths_are_lowercased() {
        let (value, _) = tokens_json(&fixture());
        assert_eq!(value["size"]["small"]["value"], 16.0);
        assert_eq!(value["size"]["small"]["unit"], "pixel");
    }

    #[test]
    fn test_nodes_outside_marker_are_ignored() {
        let (value, _) = tokens_json(&fixture());
        assert!(value["size"].get("outside").is_none());
    }

    #[test]
    fn test_duplicate_path_reports_diagnostic_and_keeps_first() {
        let (value, diagnostics) = tokens_json(&fixture());
        assert_eq!(value["size"]["small"]["value"], 16.0);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E100));
        assert!(diagnostics[0].message().contains("size/Small"));
    }

    #[test]
    fn test_style_tokens_skip_internal_names() {
        let (value, _) = tokens_json(&fixture());
        assert_eq!(value["color"]["brand"]["mulberry"]["category"], "color");
        assert_eq!(
            value["color"]["brand"]["mulberry"]["comment"],
            "Primary brand colour"
        );
        assert!(value["color"].get("_old").is_none());
    }

    #[test]
    fn test_opacity_token_value() {
        let (value, _) = tokens_json(&fixture());
        assert_eq!(value["opacity"]["faint"]["value"], 0.25);
    }
}
