//! # richdoc
//!
//! Render rich-text editor document trees to semantic HTML.
//!
//! Rich-text editors persist their output as a JSON tree of typed,
//! nested nodes. This library deserializes that tree into a typed
//! model and deterministically renders it to an HTML string that is
//! safe to embed directly in a page: every author-controlled value is
//! entity-escaped, only the structural markup the renderer itself
//! emits is trusted.
//!
//! ## Quick Start
//!
//! ```
//! use richdoc::{from_json, render_html};
//!
//! fn main() -> richdoc::Result<()> {
//!     let doc = from_json(
//!         r#"{"type":"doc","content":[
//!             {"type":"paragraph","content":[
//!                 {"type":"text","text":"Hi <b>","marks":[{"type":"bold"}]}
//!             ]}
//!         ]}"#,
//!     )?;
//!
//!     let html = render_html(&doc);
//!     assert_eq!(html, "<p><strong>Hi &lt;b&gt;</strong></p>");
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Pure rendering**: `render_html` is a stateless, synchronous
//!   function of the input tree. Concurrent calls need no locking.
//! - **Lenient data handling**: missing `src` attributes, unknown node
//!   or mark types, and unparsable heading levels never fail a render;
//!   they produce empty output, a pass-through, or a default.
//! - **Forward-compatible model**: unknown JSON fields and unknown
//!   node tags deserialize without error, so newer editor output stays
//!   renderable.

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Attrs, Document, Mark, MarkType, Node, NodeType};
pub use render::{render_html, render_nodes, HtmlRenderer};

use std::path::Path;

/// Deserialize a document from its persisted JSON form.
///
/// Unknown fields and unknown node/mark type tags are accepted, so
/// documents written by newer editor versions still load.
///
/// # Example
///
/// ```
/// let doc = richdoc::from_json(r#"{"content":[{"type":"horizontalRule"}]}"#).unwrap();
/// assert_eq!(doc.node_count(), 1);
/// ```
pub fn from_json(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!("deserialized document with {} top-level nodes", doc.node_count());
    Ok(doc)
}

/// Deserialize a document from an already-parsed JSON value.
pub fn from_json_value(value: serde_json::Value) -> Result<Document> {
    let doc: Document = serde_json::from_value(value)?;
    Ok(doc)
}

/// Read and deserialize a document from a JSON file.
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}

/// Deserialize a JSON document and render it to HTML in one step.
///
/// # Example
///
/// ```
/// let html = richdoc::render_json(r#"{"content":[{"type":"hardBreak"}]}"#).unwrap();
/// assert_eq!(html, "<br>");
/// ```
pub fn render_json(json: &str) -> Result<String> {
    let doc = from_json(json)?;
    Ok(render_html(&doc))
}
