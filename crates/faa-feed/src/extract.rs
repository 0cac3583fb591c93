//! Key search over the parsed feed tree.

use crate::tree::Node;

/// Collect every value stored under `key` at any depth.
///
/// Traversal is pre-order and depth-first: within a mapping, each entry's
/// value is collected (when its key matches) before its own subtree is
/// searched; sequence items are visited in index order. Text and empty
/// values are skipped without stopping the walk.
pub fn find_all_key<'a>(node: &'a Node, key: &str) -> Vec<&'a Node> {
    let mut found = Vec::new();
    collect(node, key, &mut found);
    found
}

fn collect<'a>(node: &'a Node, key: &str, found: &mut Vec<&'a Node>) {
    match node {
        Node::Mapping(mapping) => {
            for (name, value) in mapping.iter() {
                if name == key {
                    found.push(value);
                }
                collect(value, key, found);
            }
        }
        Node::Sequence(items) => {
            for item in items {
                collect(item, key, found);
            }
        }
        Node::Text(_) | Node::Empty => {}
    }
}

/// View a possibly repeated value as a list.
///
/// Nothing or an empty element yields no items, a sequence yields its
/// items, and any other value yields itself.
pub fn ensure_list(node: Option<&Node>) -> Vec<&Node> {
    match node {
        None | Some(Node::Empty) => Vec::new(),
        Some(Node::Sequence(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}
