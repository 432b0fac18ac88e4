//! Translation tree: the nested key/value data of one locale bundle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A node of a translation tree.
///
/// Bundles deserialize straight into this type; any JSON value that is not a
/// string or an object is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

impl Node {
    /// An empty branch, used for locales without a bundle.
    pub fn empty() -> Node {
        Node::Branch(BTreeMap::new())
    }

    /// Descend along a dotted key path.
    ///
    /// Every segment must name a child of a branch. Returns the node reached
    /// after the last segment, or `None` as soon as a segment is missing or a
    /// leaf is hit before the path ends.
    pub fn walk(&self, key: &str) -> Option<&Node> {
        key.split('.').try_fold(self, |node, segment| match node {
            Node::Branch(children) => children.get(segment),
            Node::Leaf(_) => None,
        })
    }

    /// Like [`Node::walk`], but only yields string leaves.
    pub fn leaf(&self, key: &str) -> Option<&str> {
        match self.walk(key)? {
            Node::Leaf(text) => Some(text),
            Node::Branch(_) => None,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

/// Leaves print as their text; branches print as compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(text) => f.write_str(text),
            Node::Branch(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
