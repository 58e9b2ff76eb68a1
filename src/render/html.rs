//! HTML rendering for rich-text documents.

use crate::model::{Attrs, Document, Node, NodeType};
use serde_json::Value;

use super::attr::{attr, attr_text, attr_text_nonempty};
use super::escape::{escape_attr, escape_text};
use super::grid::render_photo_grid;
use super::marks::apply_marks;
use super::style::{block_style, css_dimension, push_declaration, style_attr};

/// Heading level used when `attrs.level` is absent or unusable.
const DEFAULT_HEADING_LEVEL: i64 = 2;

/// Spacer height used when `attrs.height` is absent.
const DEFAULT_SPACER_HEIGHT: &str = "2rem";

/// Language options offered by the code block widget, first is default.
const CODE_LANGUAGES: [&str; 7] = [
    "auto",
    "java",
    "python",
    "javascript",
    "typescript",
    "html",
    "css",
];

/// Convert a document to HTML.
pub fn render_html(doc: &Document) -> String {
    HtmlRenderer::new().render(doc)
}

/// Convert a slice of nodes to HTML.
pub fn render_nodes(nodes: &[Node]) -> String {
    HtmlRenderer::new().render_nodes(nodes)
}

/// HTML renderer.
///
/// Rendering is a pure single-pass tree walk: children are rendered
/// first, then wrapped according to the current node's type. The
/// renderer holds no state, so one instance may serve any number of
/// concurrent calls. Data-shape problems (missing `src`, unknown
/// tags, unparsable heading levels) degrade to empty output or a
/// documented default; they never fail the render.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a document to an HTML string safe for page embedding.
    pub fn render(&self, doc: &Document) -> String {
        self.render_nodes(&doc.content)
    }

    /// Render a node list to HTML. Empty input yields `""`.
    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.render_node(node, &mut out);
        }
        out
    }

    fn render_node(&self, node: &Node, out: &mut String) {
        let inner = node
            .content
            .as_deref()
            .map(|children| self.render_nodes(children))
            .unwrap_or_default();
        let attrs = node.attrs.as_ref();

        match node.kind {
            NodeType::Text => {
                let escaped = escape_text(node.text.as_deref().unwrap_or(""));
                let marks = node.marks.as_deref().unwrap_or(&[]);
                out.push_str(&apply_marks(escaped, marks));
            }
            NodeType::Paragraph => {
                out.push_str("<p");
                out.push_str(&block_style(attrs));
                out.push('>');
                out.push_str(if inner.is_empty() { "&nbsp;" } else { &inner });
                out.push_str("</p>");
            }
            NodeType::Heading => {
                let level = heading_level(attrs);
                out.push_str(&format!("<h{level}{}>{inner}</h{level}>", block_style(attrs)));
            }
            NodeType::Image => render_image(attrs, out),
            NodeType::CodeBlockNode => render_code_block(attrs, &inner, out),
            NodeType::Audio => render_media(MediaTag::Audio, attrs, out),
            NodeType::Video => render_media(MediaTag::Video, attrs, out),
            NodeType::Iframe => render_media(MediaTag::Iframe, attrs, out),
            NodeType::HorizontalRule => out.push_str("<hr>"),
            NodeType::HardBreak => out.push_str("<br>"),
            NodeType::BulletList => {
                out.push_str("<ul>");
                out.push_str(&inner);
                out.push_str("</ul>");
            }
            NodeType::OrderedList => {
                out.push_str("<ol>");
                out.push_str(&inner);
                out.push_str("</ol>");
            }
            NodeType::ListItem => {
                out.push_str("<li>");
                out.push_str(&inner);
                out.push_str("</li>");
            }
            // Renders nothing; content gating happens in the caller,
            // siblings after the paywall are not suppressed here.
            NodeType::Paywall => {}
            NodeType::SpacerNode => {
                let height = attr_text_nonempty(attrs, "height")
                    .unwrap_or_else(|| DEFAULT_SPACER_HEIGHT.to_string());
                out.push_str("<div data-type=\"spacer\" style=\"height: ");
                out.push_str(&escape_attr(&height));
                out.push_str(";\"></div>");
            }
            NodeType::PhotoGrid => out.push_str(&render_photo_grid(attrs)),
            // Pass-through: children only, no wrapping tag.
            NodeType::Unknown => out.push_str(&inner),
        }
    }
}

/// Resolve a heading level from `attrs.level`.
///
/// Integers and floats are truncated and clamped to 1..=6; numeric
/// strings are parsed, with parse failures and out-of-range values
/// falling back to the default. Absent means the default.
fn heading_level(attrs: Option<&Attrs>) -> i64 {
    match attr(attrs, "level") {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|f| (f as i64).clamp(1, 6))
            .unwrap_or(DEFAULT_HEADING_LEVEL),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) => {
                let level = f as i64;
                if (1..=6).contains(&level) {
                    level
                } else {
                    DEFAULT_HEADING_LEVEL
                }
            }
            Err(_) => DEFAULT_HEADING_LEVEL,
        },
        _ => DEFAULT_HEADING_LEVEL,
    }
}

fn render_image(attrs: Option<&Attrs>, out: &mut String) {
    let Some(src) = attr_text_nonempty(attrs, "src") else {
        return;
    };

    let mut css = String::new();
    if let Some(width) = attr(attrs, "width").and_then(css_dimension) {
        push_declaration(&mut css, "width", &width);
    }
    if let Some(float) = attr_text(attrs, "data-float") {
        push_declaration(&mut css, "float", &float);
    }

    let alt = attr_text(attrs, "alt").unwrap_or_default();
    let img = format!(
        "<img src=\"{}\" alt=\"{}\"{}>",
        escape_attr(&src),
        escape_attr(&alt),
        style_attr(&css)
    );

    let text_align = attr_text_nonempty(attrs, "textAlign");
    if let Some(caption) = attr_text_nonempty(attrs, "caption") {
        let mut caption_css = String::new();
        if let Some(ref align) = text_align {
            push_declaration(&mut caption_css, "text-align", align);
        }
        out.push_str("<figure>");
        out.push_str(&img);
        out.push_str("<figcaption");
        out.push_str(&style_attr(&caption_css));
        out.push('>');
        out.push_str(&escape_text(&caption));
        out.push_str("</figcaption></figure>");
    } else if let Some(align) = text_align {
        let mut align_css = String::new();
        push_declaration(&mut align_css, "text-align", &align);
        out.push_str("<div class=\"has-text-align-");
        out.push_str(&escape_attr(&align));
        out.push('"');
        out.push_str(&style_attr(&align_css));
        out.push('>');
        out.push_str(&img);
        out.push_str("</div>");
    } else {
        out.push_str(&img);
    }
}

/// Fixed-structure code block widget: language selector and toolbar in
/// a header, then the code itself. The toolbar buttons are static
/// markup wired up by client-side script.
fn render_code_block(attrs: Option<&Attrs>, inner: &str, out: &mut String) {
    let language = attr_text(attrs, "language").unwrap_or_default();
    let selected = if CODE_LANGUAGES.contains(&language.as_str()) {
        language.as_str()
    } else {
        CODE_LANGUAGES[0]
    };

    out.push_str("<div class=\"code-block\"><div class=\"code-block-header\">");
    out.push_str("<select class=\"code-block-language\">");
    for lang in CODE_LANGUAGES {
        out.push_str("<option value=\"");
        out.push_str(lang);
        out.push('"');
        if lang == selected {
            out.push_str(" selected");
        }
        out.push('>');
        out.push_str(lang);
        out.push_str("</option>");
    }
    out.push_str("</select>");
    out.push_str("<div class=\"code-block-toolbar\">");
    out.push_str("<button type=\"button\" class=\"code-block-copy\">Copy</button>");
    out.push_str("<button type=\"button\" class=\"code-block-caption\">Caption</button>");
    out.push_str("<button type=\"button\" class=\"code-block-delete\">Delete</button>");
    out.push_str("</div></div><pre><code>");
    // Child text nodes were escaped when rendered; not re-escaped here.
    out.push_str(inner);
    out.push_str("</code></pre></div>");
}

#[derive(Clone, Copy, PartialEq)]
enum MediaTag {
    Audio,
    Video,
    Iframe,
}

fn render_media(tag: MediaTag, attrs: Option<&Attrs>, out: &mut String) {
    let Some(src) = attr_text_nonempty(attrs, "src") else {
        return;
    };

    let width = attr(attrs, "width")
        .and_then(css_dimension)
        .unwrap_or_else(|| "100%".to_string());
    let align = attr_text_nonempty(attrs, "textAlign").unwrap_or_else(|| "center".to_string());

    let mut css = String::new();
    push_declaration(&mut css, "width", &width);
    match tag {
        MediaTag::Audio => push_declaration(&mut css, "text-align", &align),
        MediaTag::Video | MediaTag::Iframe => {
            let (left, right) = match align.as_str() {
                "left" => ("0", "auto"),
                "right" => ("auto", "0"),
                _ => ("auto", "auto"),
            };
            push_declaration(&mut css, "margin-left", left);
            push_declaration(&mut css, "margin-right", right);
        }
    }

    out.push_str("<div");
    out.push_str(&style_attr(&css));
    out.push('>');
    let src = escape_attr(&src);
    match tag {
        MediaTag::Audio => {
            out.push_str("<audio controls src=\"");
            out.push_str(&src);
            out.push_str("\"></audio>");
        }
        MediaTag::Video => {
            out.push_str("<video controls src=\"");
            out.push_str(&src);
            out.push_str("\"></video>");
        }
        MediaTag::Iframe => {
            out.push_str("<iframe src=\"");
            out.push_str(&src);
            out.push_str("\" frameborder=\"0\" allowfullscreen></iframe>");
        }
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mark;
    use serde_json::json;

    fn node(kind: NodeType) -> Node {
        Node::new(kind)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_nodes(&[]), "");
        assert_eq!(render_html(&Document::new()), "");
    }

    #[test]
    fn test_paragraph_with_bold_text() {
        let doc = Document::from_nodes(vec![Node::paragraph(vec![
            Node::text("Hi <b>").with_marks(vec![Mark::bold()]),
        ])]);
        assert_eq!(render_html(&doc), "<p><strong>Hi &lt;b&gt;</strong></p>");
    }

    #[test]
    fn test_empty_paragraph_keeps_height() {
        assert_eq!(render_nodes(&[Node::paragraph(vec![])]), "<p>&nbsp;</p>");
        assert_eq!(render_nodes(&[node(NodeType::Paragraph)]), "<p>&nbsp;</p>");
        // Children that render to nothing count as empty too.
        let para = Node::paragraph(vec![node(NodeType::Paywall)]);
        assert_eq!(render_nodes(&[para]), "<p>&nbsp;</p>");
    }

    #[test]
    fn test_paragraph_style() {
        let para = Node::paragraph(vec![Node::text("x")]).with_attr("textAlign", "right");
        assert_eq!(
            render_nodes(&[para]),
            "<p style=\"text-align: right;\">x</p>"
        );
    }

    #[test]
    fn test_heading_level_matrix() {
        for (level, tag) in [
            (json!(3), "h3"),
            (json!(3.0), "h3"),
            (json!("3"), "h3"),
            (json!("bogus"), "h2"),
            (json!(9), "h6"),
            (json!("9"), "h2"),
        ] {
            let heading = node(NodeType::Heading)
                .with_content(vec![Node::text("T")])
                .with_attr("level", level.clone());
            assert_eq!(
                render_nodes(&[heading]),
                format!("<{tag}>T</{tag}>"),
                "level {level:?}"
            );
        }
        let heading = node(NodeType::Heading).with_content(vec![Node::text("T")]);
        assert_eq!(render_nodes(&[heading]), "<h2>T</h2>");
    }

    #[test]
    fn test_image_requires_src() {
        assert_eq!(render_nodes(&[node(NodeType::Image)]), "");
        let image = node(NodeType::Image).with_attr("src", "");
        assert_eq!(render_nodes(&[image]), "");
    }

    #[test]
    fn test_bare_image() {
        let image = node(NodeType::Image)
            .with_attr("src", "a.jpg")
            .with_attr("alt", "A & B")
            .with_attr("width", 320);
        assert_eq!(
            render_nodes(&[image]),
            "<img src=\"a.jpg\" alt=\"A &amp; B\" style=\"width: 320px;\">"
        );
    }

    #[test]
    fn test_image_float() {
        let image = node(NodeType::Image)
            .with_attr("src", "a.jpg")
            .with_attr("data-float", "left");
        assert_eq!(
            render_nodes(&[image]),
            "<img src=\"a.jpg\" alt=\"\" style=\"float: left;\">"
        );
    }

    #[test]
    fn test_captioned_image() {
        let image = node(NodeType::Image)
            .with_attr("src", "a.jpg")
            .with_attr("caption", "Fig <1>")
            .with_attr("textAlign", "center");
        assert_eq!(
            render_nodes(&[image]),
            "<figure><img src=\"a.jpg\" alt=\"\">\
             <figcaption style=\"text-align: center;\">Fig &lt;1&gt;</figcaption></figure>"
        );
    }

    #[test]
    fn test_aligned_image_without_caption() {
        let image = node(NodeType::Image)
            .with_attr("src", "a.jpg")
            .with_attr("textAlign", "center");
        assert_eq!(
            render_nodes(&[image]),
            "<div class=\"has-text-align-center\" style=\"text-align: center;\">\
             <img src=\"a.jpg\" alt=\"\"></div>"
        );
    }

    #[test]
    fn test_code_block_language_selection() {
        let code = node(NodeType::CodeBlockNode)
            .with_content(vec![Node::text("let x = 1 < 2;")])
            .with_attr("language", "typescript");
        let html = render_nodes(&[code]);
        assert!(html.contains("<option value=\"typescript\" selected>typescript</option>"));
        assert!(html.contains("<pre><code>let x = 1 &lt; 2;</code></pre>"));
        assert!(html.contains("code-block-copy"));
    }

    #[test]
    fn test_code_block_defaults_to_auto() {
        let code = node(NodeType::CodeBlockNode).with_attr("language", "ruby");
        let html = render_nodes(&[code]);
        assert!(html.contains("<option value=\"auto\" selected>auto</option>"));
        assert!(!html.contains("ruby"));
    }

    #[test]
    fn test_media_requires_src() {
        for kind in [NodeType::Audio, NodeType::Video, NodeType::Iframe] {
            assert_eq!(render_nodes(&[node(kind)]), "");
        }
    }

    #[test]
    fn test_audio_alignment() {
        let audio = node(NodeType::Audio).with_attr("src", "a.mp3");
        assert_eq!(
            render_nodes(&[audio]),
            "<div style=\"width: 100%;text-align: center;\">\
             <audio controls src=\"a.mp3\"></audio></div>"
        );
    }

    #[test]
    fn test_video_margin_pairs() {
        for (align, left, right) in [
            ("left", "0", "auto"),
            ("center", "auto", "auto"),
            ("right", "auto", "0"),
        ] {
            let video = node(NodeType::Video)
                .with_attr("src", "v.mp4")
                .with_attr("textAlign", align)
                .with_attr("width", "640");
            let html = render_nodes(&[video]);
            assert!(
                html.contains(&format!(
                    "width: 640px;margin-left: {left};margin-right: {right};"
                )),
                "align {align}: {html}"
            );
        }
    }

    #[test]
    fn test_iframe_fixed_attributes() {
        let iframe = node(NodeType::Iframe).with_attr("src", "https://e.com/embed?a=1&b=2");
        let html = render_nodes(&[iframe]);
        assert!(html.contains("<iframe src=\"https://e.com/embed?a=1&amp;b=2\" frameborder=\"0\" allowfullscreen></iframe>"));
    }

    #[test]
    fn test_leaf_tags() {
        assert_eq!(render_nodes(&[node(NodeType::HorizontalRule)]), "<hr>");
        assert_eq!(render_nodes(&[node(NodeType::HardBreak)]), "<br>");
    }

    #[test]
    fn test_lists() {
        let list = node(NodeType::BulletList).with_content(vec![
            node(NodeType::ListItem).with_content(vec![Node::paragraph(vec![Node::text("a")])]),
            node(NodeType::ListItem).with_content(vec![Node::paragraph(vec![Node::text("b")])]),
        ]);
        assert_eq!(
            render_nodes(&[list]),
            "<ul><li><p>a</p></li><li><p>b</p></li></ul>"
        );

        let list = node(NodeType::OrderedList)
            .with_content(vec![node(NodeType::ListItem).with_content(vec![Node::text("x")])]);
        assert_eq!(render_nodes(&[list]), "<ol><li>x</li></ol>");
    }

    #[test]
    fn test_paywall_renders_nothing_and_suppresses_nothing() {
        let nodes = vec![
            Node::paragraph(vec![Node::text("before")]),
            node(NodeType::Paywall),
            Node::paragraph(vec![Node::text("after")]),
        ];
        assert_eq!(render_nodes(&nodes), "<p>before</p><p>after</p>");
    }

    #[test]
    fn test_spacer_height() {
        assert_eq!(
            render_nodes(&[node(NodeType::SpacerNode)]),
            "<div data-type=\"spacer\" style=\"height: 2rem;\"></div>"
        );
        let spacer = node(NodeType::SpacerNode).with_attr("height", "4rem");
        assert_eq!(
            render_nodes(&[spacer]),
            "<div data-type=\"spacer\" style=\"height: 4rem;\"></div>"
        );
    }

    #[test]
    fn test_unknown_node_is_pass_through() {
        let unknown = node(NodeType::Unknown).with_content(vec![
            Node::paragraph(vec![Node::text("a")]),
            Node::paragraph(vec![Node::text("b")]),
        ]);
        assert_eq!(render_nodes(&[unknown.clone()]), "<p>a</p><p>b</p>");
        // Idempotent with respect to wrapping: same as children alone.
        assert_eq!(
            render_nodes(&[unknown]),
            render_nodes(&[
                Node::paragraph(vec![Node::text("a")]),
                Node::paragraph(vec![Node::text("b")])
            ])
        );
    }

    #[test]
    fn test_text_node_without_text_field() {
        assert_eq!(render_nodes(&[node(NodeType::Text)]), "");
    }
}
