//! Photo-grid layout reconstruction.
//!
//! A `photoGrid` node persists its images under `attrs.items` and the
//! author's drag-and-drop placement under `attrs.savedLayouts`, keyed
//! by breakpoint. Only the `lg` breakpoint is consulted server-side;
//! the full map is echoed on the wrapper as `data-layouts` for the
//! client-side grid script.

use crate::model::Attrs;
use serde_json::Value;

use super::attr::{attr, value_text};
use super::escape::escape_attr;
use super::style::{css_dimension, push_declaration, style_attr};

/// Render a photo grid node from its attribute bag.
pub fn render_photo_grid(attrs: Option<&Attrs>) -> String {
    let items = match attr(attrs, "items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => return String::new(),
    };

    let saved_layouts = attr(attrs, "savedLayouts")
        .and_then(Value::as_object)
        .filter(|m| !m.is_empty());
    let lg_entries = saved_layouts
        .and_then(|m| m.get("lg"))
        .and_then(Value::as_array);

    let mut out = String::new();
    out.push_str("<div class=\"photo-grid ");
    out.push_str(&escape_attr(&layout_class(attrs)));
    out.push('"');
    if let Some(layouts) = saved_layouts {
        // Opaque to the renderer; the client grid script re-reads it.
        let raw = Value::Object(layouts.clone()).to_string();
        out.push_str(" data-layouts=\"");
        out.push_str(&escape_attr(&raw));
        out.push('"');
    }
    out.push('>');

    for (index, item) in items.iter().enumerate() {
        // Items without a source are dropped, but the original index
        // keeps counting so saved placements stay aligned.
        let Some(src) = item.get("src").and_then(value_text).filter(|s| !s.is_empty()) else {
            continue;
        };
        let style = placement_style(lg_entries, index).unwrap_or_else(|| flow_style(item));

        out.push_str("<div class=\"grid-item\"");
        out.push_str(&style_attr(&style));
        out.push_str("><img src=\"");
        out.push_str(&escape_attr(&src));
        out.push_str("\" alt=\"");
        if let Some(alt) = item.get("alt").and_then(value_text) {
            out.push_str(&escape_attr(&alt));
        }
        out.push_str("\"></div>");
    }

    out.push_str("</div>");
    out
}

/// Normalize the persisted layout name into a `grid-` CSS class.
fn layout_class(attrs: Option<&Attrs>) -> String {
    let layout = attr(attrs, "layout")
        .and_then(value_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "2-cols".to_string());
    if layout.starts_with("grid-") {
        layout
    } else {
        format!("grid-{layout}")
    }
}

/// Explicit CSS Grid placement for the item at `index`, if the saved
/// `lg` layout has an entry for it. Entry indices are persisted as
/// strings and matched by string equality.
fn placement_style(lg_entries: Option<&Vec<Value>>, index: usize) -> Option<String> {
    let entries = lg_entries?;
    let wanted = index.to_string();
    let entry = entries
        .iter()
        .find(|e| e.get("i").and_then(value_text).as_deref() == Some(wanted.as_str()))?;

    let x = entry_coord(entry, "x", 0);
    let y = entry_coord(entry, "y", 0);
    let w = entry_coord(entry, "w", 1);
    let h = entry_coord(entry, "h", 1);

    let mut css = String::new();
    push_declaration(&mut css, "grid-column", &format!("{} / span {}", x + 1, w));
    push_declaration(&mut css, "grid-row", &format!("{} / span {}", y + 1, h));
    Some(css)
}

fn entry_coord(entry: &Value, key: &str, default: i64) -> i64 {
    match entry.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .unwrap_or(default)
}

/// Natural-flow fallback: no grid placement, just any literal item
/// dimensions copied to inline style.
fn flow_style(item: &Value) -> String {
    let mut css = String::new();
    for (key, property) in [("width", "width"), ("height", "height")] {
        if let Some(dim) = item.get(key).and_then(css_dimension) {
            push_declaration(&mut css, property, &dim);
        }
    }
    css
}
