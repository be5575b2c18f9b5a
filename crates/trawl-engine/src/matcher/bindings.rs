//! Capture bindings recorded during one top-level match attempt.
//!
//! A binding maps a wildcard's capture name to the node (or sibling list)
//! it was first matched against.  Bindings live for the duration of one
//! top-level attempt and are never shared across sibling attempts; the
//! sequence matcher snapshots them before each speculative extension and
//! restores the snapshot verbatim on backtrack.

use std::collections::HashMap;

use trawl_core::Node;

/// The capture environment for one in-flight match attempt.
///
/// A snapshot is a full clone of the map.  Re-binding an existing name
/// overwrites; consistency against the previous value is the matcher's
/// responsibility, enforced through a recursive structural match before the
/// overwrite.
#[derive(Debug, Clone, Default)]
pub(crate) struct Bindings {
    values: HashMap<String, Node>,
}

impl Bindings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Node> {
        self.values.get(name)
    }

    pub(crate) fn record(&mut self, name: &str, node: Node) {
        self.values.insert(name.to_owned(), node);
    }
}
