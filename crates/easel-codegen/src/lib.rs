//! # Easel Codegen
//!
//! Generators that turn a decoded Figma file into design-system artifacts:
//!
//! - [`write_design_tokens`] - nested design-token JSON extracted from
//!   `_tokens`-marked subtrees and the file-level style table
//! - [`write_component_interfaces`] - TypeScript namespace and interface
//!   declarations for the component variant space
//! - [`write_component_props`] - the variant constant table plus literal
//!   types indexing into it
//!
//! All generators walk the tree through
//! [`Node::depth_first_stack_iter`](easel_schema::node::Node::depth_first_stack_iter),
//! report content problems as [`error::Diagnostic`]s without aborting, and
//! write UTF-8 text to any [`std::io::Write`] sink.

pub mod error;
pub mod variants;

mod emit;
mod identifier;
mod interfaces;
mod props;
mod tokens;
mod tree;

pub use identifier::to_identifier;
pub use interfaces::write_component_interfaces;
pub use props::{PropsOptions, write_component_props};
pub use tokens::{TokenOptions, write_design_tokens};
