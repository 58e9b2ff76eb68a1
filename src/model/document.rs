//! Document-level types.

use super::Node;
use serde::{Deserialize, Serialize};

/// A parsed rich-text document: an ordered sequence of top-level nodes.
///
/// Editors persist documents as `{"type": "doc", "content": [...]}`;
/// the document-level tag carries no rendering meaning and is ignored
/// on input. A `Document` is a pure value with no identity — it is
/// deserialized, rendered once, and discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level nodes in document order.
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from top-level nodes.
    pub fn from_nodes(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: Node) {
        self.content.push(node);
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of top-level nodes.
    pub fn node_count(&self) -> usize {
        self.content.len()
    }

    /// Get the raw (unescaped) text content of the whole document.
    ///
    /// Useful for excerpts and search indexing; for display always use
    /// the HTML renderer.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(Node::plain_text)
            .collect::<Vec<_>>()
            .join("")
    }
}
