//! Document model types for rich-text content representation.
//!
//! This module defines the tree shape produced by the rich-text editor
//! and persisted as JSON. The model is behavior-free: it mirrors the
//! editor's output so a document can be deserialized and handed to the
//! renderer. Unknown JSON fields are ignored, keeping the model
//! forward-compatible with editor fields this crate does not use.

mod document;
mod mark;
mod node;

pub use document::Document;
pub use mark::{Mark, MarkType};
pub use node::{Attrs, Node, NodeType};
