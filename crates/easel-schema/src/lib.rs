//! Easel Schema Types
//!
//! This crate provides the serde data model for the Figma REST API file
//! format. It mirrors the wire format exactly: every enumeration serializes
//! to its documented string tag and every optional field is omitted when
//! absent, so a captured API response round-trips without loss.
//!
//! - **Files**: the top-level container ([`file::File`])
//! - **Nodes**: the recursive document tree ([`node::Node`], [`node::NodeType`])
//! - **Appearance**: paints, effects, and colors ([`paint`], [`effect`], [`color`])
//! - **Layout**: constraints and auto-layout enums ([`constraint`], [`layout`])
//! - **Text**: character-level formatting ([`text::TypeStyle`])
//! - **Metadata**: named styles and components ([`style`], [`component`])

pub mod color;
pub mod component;
pub mod constraint;
pub mod easing;
pub mod effect;
pub mod file;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod paint;
pub mod style;
pub mod text;
