//! The component variant constant table and its literal types.
//!
//! Emits one nested `as const` object mapping document hierarchy to each
//! component set's property value arrays, plus a mirrored interface whose
//! members index into the const, so consumers get literal-union types
//! derived from the design file itself.

use std::{borrow::Cow, io::Write};

use indexmap::{IndexMap, IndexSet};
use log::debug;

use easel_schema::{
    file::File,
    node::{Node, NodeType},
};

use crate::{
    emit::{indent, json_quoted},
    error::{CodegenError, Diagnostic, DiagnosticCollector, ErrorCode},
    identifier::to_identifier,
    tree::NameTree,
    variants::variant_properties,
};

/// Naming options for the generated declarations.
#[derive(Debug, Clone)]
pub struct PropsOptions {
    /// Suffix of the constant identifier derived from the file name.
    pub const_suffix: String,
    /// Suffix of the interface identifier derived from the file name.
    pub types_suffix: String,
}

impl Default for PropsOptions {
    fn default() -> Self {
        Self {
            const_suffix: "Consts".to_string(),
            types_suffix: "Types".to_string(),
        }
    }
}

/// One component set's variant space plus its position in the document.
struct Interface<'a> {
    properties: IndexMap<&'a str, IndexSet<&'a str>>,
    /// Ancestor chain from the document root to the set itself.
    ancestors: Vec<&'a Node>,
}

/// Emits the variant constant table and literal types for every component
/// set in `file`.
///
/// # Errors
///
/// Returns [`CodegenError`] when the sink fails or a name cannot become a
/// TypeScript identifier.
pub fn write_component_props<W: Write>(
    file: &File,
    options: &PropsOptions,
    out: &mut W,
) -> Result<Vec<Diagnostic>, CodegenError> {
    let mut collector = DiagnosticCollector::new();
    let mut tree: NameTree<&str, Interface<'_>> = NameTree::branch();

    for (node, stack) in file.document.depth_first_stack_iter() {
        if node.r#type != NodeType::ComponentSet {
            continue;
        }
        let path: Vec<&str> = stack[1..].iter().map(|n| n.name.trim()).collect();
        let interface = Interface {
            properties: variant_properties(node),
            ancestors: stack.clone(),
        };
        if !tree.insert(&path, interface) {
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

    let main_identifier = to_identifier(&file.name, true)?;
    let const_identifier = format!("{main_identifier}{}", options.const_suffix);
    let types_identifier = format!("{main_identifier}{}", options.types_suffix);

    writeln!(out, "// Generated by `easel props`")?;
    writeln!(out, "// Using file version {}", file.version)?;
    writeln!(out)?;
    writeln!(out, "/**")?;
    writeln!(out, " * Component consts for Figma file {}", file.name)?;
    writeln!(out, " */")?;
    writeln!(out, "export const {const_identifier} = {{")?;
    write_consts(&tree, out, 1)?;
    writeln!(out, "}} as const;")?;
    writeln!(out)?;
    writeln!(out, "/**")?;
    writeln!(out, " * Component types for Figma file {}", file.name)?;
    writeln!(out, " */")?;
    writeln!(out, "export interface {types_identifier} {{")?;
    write_types(&tree, out, 1, &const_identifier)?;
    writeln!(out, "}};")?;

    debug!(diagnostics = collector.len(); "Component props written");
    Ok(collector.into_diagnostics())
}

fn write_consts<W: Write>(
    tree: &NameTree<&str, Interface<'_>>,
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
                writeln!(out, "{}: {{", json_quoted(key.trim())?)?;
                write_consts(value, out, indentation + 1)?;
                indent(out, indentation)?;
                writeln!(out, "}},")?;
            }
        }
        NameTree::Leaf(interface) => {
            for (&key, values) in interface.properties.iter() {
                indent(out, indentation)?;
                write!(out, "{}: [", to_identifier(key, false)?)?;
                for (i, value) in const_values(values)?.iter().enumerate() {
                    if i != 0 {
                        write!(out, ", ")?;
                    }
                    write!(out, "{value}")?;
                }
                writeln!(out, "],")?;
            }
        }
    }
    Ok(())
}

fn write_types<W: Write>(
    tree: &NameTree<&str, Interface<'_>>,
    out: &mut W,
    indentation: u16,
    const_identifier: &str,
) -> Result<(), CodegenError> {
    match tree {
        NameTree::Branch(mapping) => {
            for (i, (&key, value)) in mapping.iter().enumerate() {
                if i != 0 {
                    writeln!(out)?;
                }
                indent(out, indentation)?;
                writeln!(out, "{}: {{", json_quoted(key.trim())?)?;
                write_types(value, out, indentation + 1, const_identifier)?;
                indent(out, indentation)?;
                writeln!(out, "}};")?;
            }
        }
        NameTree::Leaf(interface) => {
            for &key in interface.properties.keys() {
                let key_identifier = to_identifier(key, false)?;
                indent(out, indentation)?;
                write!(out, "{key_identifier}: typeof {const_identifier}")?;
                for node in interface.ancestors.iter().skip(1) {
                    write!(out, "[{}]", json_quoted(node.name.trim())?)?;
                }
                writeln!(out, "[\"{key_identifier}\"][number];")?;
            }
        }
    }
    Ok(())
}

/// Property values as TypeScript literals: booleans when every value is
/// `True`/`False`, raw text when every value is numeric, JSON strings
/// otherwise.
fn const_values<'a>(values: &IndexSet<&'a str>) -> Result<Vec<Cow<'a, str>>, CodegenError> {
    let booleans: Option<Vec<Cow<'_, str>>> = values
        .iter()
        .map(|&v| match v {
            "True" => Some(Cow::Borrowed("true")),
            "False" => Some(Cow::Borrowed("false")),
            _ => None,
        })
        .collect();
    if let Some(values) = booleans {
        return Ok(values);
    }

    let numbers: Option<Vec<Cow<'_, str>>> = values
        .iter()
        .map(|&v| v.parse::<f64>().ok().map(|_| Cow::Borrowed(v)))
        .collect();
    if let Some(values) = numbers {
        return Ok(values);
    }

    values
        .iter()
        .map(|&v| Ok(Cow::Owned(json_quoted(v)?)))
        .collect()
}
