//! A nested name tree for grouping generated entries.
//!
//! Generators place each entry at a path derived from node or style names.
//! The tree rejects inserts that would overwrite an existing entry or
//! descend through a leaf, so the first definition of a path always wins
//! and callers can report the collision.

use std::hash::Hash;

use indexmap::{IndexMap, map::Entry};
use serde::Serialize;

/// A tree of named branches with values at the leaves.
///
/// Serializes transparently: branches become JSON objects and leaves
/// become their value.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NameTree<K: Eq + Hash, V> {
    /// An inner grouping level keyed by name.
    Branch(IndexMap<K, NameTree<K, V>>),
    /// A generated entry.
    Leaf(V),
}

impl<K: Eq + Hash + Clone, V> NameTree<K, V> {
    /// Creates an empty branch to serve as the tree root.
    pub fn branch() -> Self {
        NameTree::Branch(IndexMap::new())
    }

    /// Inserts `value` at `path`, creating intermediate branches as needed.
    ///
    /// Returns `false` without modifying the tree when the path is empty,
    /// already occupied, or passes through an existing leaf.
    pub fn insert(&mut self, path: &[K], value: V) -> bool {
        match self {
            NameTree::Branch(map) => {
                let Some((head, rest)) = path.split_first() else {
                    return false;
                };
                if rest.is_empty() {
                    match map.entry(head.clone()) {
                        Entry::Occupied(_) => false,
                        Entry::Vacant(vacancy) => {
                            vacancy.insert(NameTree::Leaf(value));
                            true
                        }
                    }
                } else {
                    map.entry(head.clone())
                        .or_insert_with(NameTree::branch)
                        .insert(rest, value)
                }
            }
            NameTree::Leaf(..) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_creates_intermediate_branches() {
        let mut tree: NameTree<String, u32> = NameTree::branch();
        assert!(tree.insert(&path(&["size", "small"]), 16));
        assert!(tree.insert(&path(&["size", "large"]), 44));

        let json = serde_json::to_value(&tree).expect("serializable");
        assert_eq!(json["size"]["small"], 16);
        assert_eq!(json["size"]["large"], 44);
    }

    #[test]
    fn test_first_definition_wins() {
        let mut tree: NameTree<String, u32> = NameTree::branch();
        assert!(tree.insert(&path(&["size", "small"]), 16));
        assert!(!tree.insert(&path(&["size", "small"]), 20));

        let json = serde_json::to_value(&tree).expect("serializable");
        assert_eq!(json["size"]["small"], 16);
    }

    #[test]
    fn test_insert_cannot_descend_through_a_leaf() {
        let mut tree: NameTree<String, u32> = NameTree::branch();
        assert!(tree.insert(&path(&["size"]), 16));
        assert!(!tree.insert(&path(&["size", "small"]), 20));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut tree: NameTree<String, u32> = NameTree::branch();
        assert!(!tree.insert(&[], 16));
    }
}
