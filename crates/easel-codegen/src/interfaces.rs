//! TypeScript declarations for the component variant space.
//!
//! Every component set becomes an `export interface` with one member per
//! variant property; the document hierarchy above it becomes nested
//! `namespace` blocks. Value sets of exactly `True`/`False` collapse to
//! `boolean`, all-numeric sets to numeric literal unions, and everything
//! else to string literal unions.

use std::io::Write;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use easel_schema::{
    file::File,
    node::NodeType,
};

use crate::{
    emit::{indent, json_quoted},
    error::{CodegenError, Diagnostic, DiagnosticCollector, ErrorCode},
    identifier::to_identifier,
    tree::NameTree,
    variants::variant_properties,
};

type Properties<'a> = IndexMap<&'a str, IndexSet<&'a str>>;

/// Emits TypeScript namespace and interface declarations for every
/// component set in `file`.
///
/// # Errors
///
/// Returns [`CodegenError`] when the sink fails or a name cannot become a
/// TypeScript identifier.
pub fn write_component_interfaces<W: Write>(
    file: &File,
    out: &mut W,
) -> Result<Vec<Diagnostic>, CodegenError> {
    let mut collector = DiagnosticCollector::new();
    let mut tree: NameTree<&str, Properties<'_>> = NameTree::branch();

    for (node, stack) in file.document.depth_first_stack_iter() {
        if node.r#type != NodeType::ComponentSet {
            continue;
        }
        let path: Vec<&str> = stack[1..].iter().map(|n| n.name.trim()).collect();
        if !tree.insert(&path, variant_properties(node)) {
            collector.push(
                Diagnostic::warning(format!(
                    "duplicate component path \"{}\"",
                    path.join("/")
                ))
                .with_code(ErrorCode::E101)
                .with_path(stack.iter().map(|n| n.name.clone()))
                .with_help("the first component set wins; rename or move one of them"),
            );
        }
    }

    write_tree(&tree, out, 0)?;

    debug!(diagnostics = collector.len(); "Component interfaces written");
    Ok(collector.into_diagnostics())
}

fn write_tree<W: Write>(
    tree: &NameTree<&str, Properties<'_>>,
    out: &mut W,
    indentation: u16,
) -> Result<(), CodegenError> {
    match tree {
        NameTree::Branch(mapping) => {
            for (i, (&key, value)) in mapping.iter().enumerate() {
                if i != 0 {
                    writeln!(out)?;
                }
                indent(out, indentation)?;
                writeln!(
                    out,
                    "{} {} {{",
                    match value {
                        NameTree::Branch(_) => "namespace",
                        NameTree::Leaf(_) => "export interface",
                    },
                    to_identifier(key, true)?
                )?;
                write_tree(value, out, indentation + 1)?;
                indent(out, indentation)?;
                writeln!(out, "}}")?;
            }
        }
        NameTree::Leaf(properties) => {
            for (&key, values) in properties.iter() {
                indent(out, indentation)?;
                write!(out, "{}: ", to_identifier(key, false)?)?;
                write_union(values, out)?;
                writeln!(out, ",")?;
            }
        }
    }
    Ok(())
}

fn write_union<W: Write>(values: &IndexSet<&str>, out: &mut W) -> Result<(), CodegenError> {
    if values.contains("True") && values.contains("False") && values.len() == 2 {
        write!(out, "boolean")?;
    } else if let Ok(numbers) = values
        .iter()
        .map(|&v| v.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
    {
        for (i, number) in numbers.iter().enumerate() {
            if i != 0 {
                write!(out, " | ")?;
            }
            write!(out, "{number}")?;
        }
    } else {
        for (i, &value) in values.iter().enumerate() {
            if i != 0 {
                write!(out, " | ")?;
            }
            write!(out, "{}", json_quoted(value)?)?;
        }
    }
    Ok(())
}
