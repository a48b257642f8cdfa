//! The component variant name grammar.
//!
//! Children of a component set are named after their variant properties:
//! `Key=Value, Key=Value, ...`. This module parses that grammar and
//! collects the variant property space of a whole set.

use indexmap::{IndexMap, IndexSet};
use winnow::{
    Parser as _,
    combinator::{delimited, separated},
    error::ModalResult,
    token::{take_till, take_while},
};

use easel_schema::node::Node;

type Input<'s> = &'s str;

/// One comma-delimited run of a variant name.
fn segment<'s>(input: &mut Input<'s>) -> ModalResult<&'s str> {
    take_till(1.., ',').parse_next(input)
}

/// One or more commas between segments. Runs of commas collapse, so empty
/// segments never reach the caller.
fn commas(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(1.., ',').void().parse_next(input)
}

fn name_segments<'s>(input: &mut Input<'s>) -> ModalResult<Vec<&'s str>> {
    delimited(
        take_while(0.., ','),
        separated(0.., segment, commas),
        take_while(0.., ','),
    )
    .parse_next(input)
}

fn split_name(name: &str) -> Vec<&str> {
    // The grammar is total over arbitrary input, so this cannot fail.
    name_segments.parse(name).unwrap_or_default()
}

/// Parses a node name into its `Key=Value` variant pairs.
///
/// Segments without a `=` are not variant properties and are skipped.
///
/// # Examples
///
/// ```
/// use easel_codegen::variants::variant_pairs;
///
/// let pairs = variant_pairs("viewport=Desktop, colour=Grey");
/// assert_eq!(pairs, [("viewport", "Desktop"), ("colour", "Grey")]);
/// ```
pub fn variant_pairs(name: &str) -> Vec<(&str, &str)> {
    split_name(name)
        .into_iter()
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            Some((key.trim(), value.trim()))
        })
        .collect()
}

/// Extracts the variant values of a node name for token-path building.
///
/// Segments beginning with `_` or `.` mark internal variants and are
/// dropped; the remaining segments contribute the text after their first
/// `=` (up to the next `=`, if any).
pub fn variant_values(name: &str) -> Vec<&str> {
    split_name(name)
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.starts_with('_') && !segment.starts_with('.'))
        .filter_map(|segment| segment.split('=').nth(1))
        .map(str::trim)
        .collect()
}

/// Collects the variant property space of a component set: each property
/// name mapped to the ordered set of values its children use.
pub fn variant_properties<'a>(set: &'a Node) -> IndexMap<&'a str, IndexSet<&'a str>> {
    let mut properties: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    for instance in set.children() {
        for (key, value) in variant_pairs(&instance.name) {
            properties.entry(key).or_default().insert(value);
        }
    }
    properties
}
