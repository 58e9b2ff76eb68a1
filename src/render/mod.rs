//! Rendering module for converting documents to embeddable HTML.

mod attr;
mod escape;
mod grid;
mod html;
mod marks;
mod style;

pub use escape::{escape_attr, escape_text};
pub use grid::render_photo_grid;
pub use html::{render_html, render_nodes, HtmlRenderer};
pub use marks::apply_marks;
pub use style::block_style;
