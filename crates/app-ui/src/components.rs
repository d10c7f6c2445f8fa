//! Component tree
//!
//! Views build a small serializable tree of [`Node`]s instead of writing
//! markup directly. The same tree renders to escaped HTML for the browser
//! output and to plain text for the terminal.
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::{Element, Node};
//!
//! let node: Node = Element::new("p")
//!     .with_class("summary")
//!     .text("Fish & chips")
//!     .into();
//!
//! assert_eq!(node.render_html(), r#"<p class="summary">Fish &amp; chips</p>"#);
//! assert_eq!(node.render_text(), "Fish & chips");
//! ```

use crate::navigation::Route;
use crate::sanitize::SafeHtml;
use serde::Serialize;

// =============================================================================
// Escaping
// =============================================================================

/// Escape text content
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (double-quoted)
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Node Tree
// =============================================================================

const VOID_TAGS: &[&str] = &["br", "hr", "img", "meta"];

const BLOCK_TAGS: &[&str] = &[
    "article", "blockquote", "button", "div", "footer", "h1", "h2", "h3", "h4", "header", "li",
    "main", "nav", "ol", "p", "section", "ul",
];

/// Class marking an element that keeps its layout slot but is not shown
pub const INVISIBLE: &str = "invisible";

/// Class marking a loading placeholder
pub const SKELETON: &str = "skeleton";

/// A node in the component tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// An element with children
    Element(Element),
    /// Plain text, escaped on render
    Text {
        /// Text content
        content: String,
    },
    /// Sanitized markup, emitted verbatim
    Markup {
        /// Sanitized HTML
        html: SafeHtml,
    },
}

/// An element
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Element id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Other attributes, in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Default::default() }
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more whitespace-separated classes
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Add a class when `condition` holds
    pub fn with_class_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.with_class(classes)
        } else {
            self
        }
    }

    /// Set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Whether the element carries `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<SafeHtml> for Node {
    fn from(html: SafeHtml) -> Self {
        Node::Markup { html }
    }
}

impl Node {
    /// Text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text { content: content.into() }
    }

    /// Element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Depth-first search for an element by id
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.id.as_deref() == Some(id) {
            return Some(element);
        }
        element.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// All elements matching `predicate`, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&predicate, &mut found);
        found
    }

    fn walk<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.walk(predicate, found);
            }
        }
    }

    /// Every link target, in document order
    pub fn links(&self) -> Vec<&str> {
        self.find_all(|e| e.tag == "a")
            .into_iter()
            .filter_map(|e| e.attr("href"))
            .collect()
    }

    /// Concatenated text of this subtree, markup included as plain text
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { content } => content.clone(),
            Node::Markup { html } => html.to_plain_text(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }

    // -------------------------------------------------------------------------
    // HTML
    // -------------------------------------------------------------------------

    /// Render as HTML
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(&escape_text(content)),
            Node::Markup { html } => out.push_str(html.as_str()),
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                if let Some(id) = &element.id {
                    out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
                }
                if !element.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape_attr(&element.classes.join(" "))));
                }
                for (name, value) in &element.attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
                }
                out.push('>');

                if VOID_TAGS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    // -------------------------------------------------------------------------
    // Terminal text
    // -------------------------------------------------------------------------

    /// Render as plain text for a terminal
    ///
    /// Invisible elements and icons are skipped; links show their target.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);

        let mut lines: Vec<&str> = Vec::new();
        for line in out.lines().map(str::trim_end) {
            if line.trim().is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
                continue;
            }
            lines.push(if line.trim().is_empty() { "" } else { line });
        }
        while lines.last() == Some(&"") {
            lines.pop();
        }
        lines.join("\n")
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(content),
            Node::Markup { html } => {
                out.push('\n');
                out.push_str(&html.to_plain_text());
                out.push('\n');
            }
            Node::Element(element) => element.write_text(out),
        }
    }
}

impl Element {
    fn write_text(&self, out: &mut String) {
        if self.has_class(INVISIBLE) || self.tag == "svg" {
            return;
        }
        if self.has_class(SKELETON) {
            out.push_str("\n░░░░░░░░░░░░\n");
            return;
        }

        let tag = self.tag.as_str();
        let block = BLOCK_TAGS.contains(&tag);
        if block {
            out.push('\n');
        }
        match tag {
            "h1" => out.push_str("\n# "),
            "h2" => out.push_str("\n## "),
            "h3" | "h4" => out.push_str("### "),
            "li" => out.push_str("- "),
            "hr" => out.push_str("\n────────────────\n"),
            "br" => out.push('\n'),
            "button" => out.push('['),
            _ => {}
        }

        for child in &self.children {
            child.write_text(out);
        }

        match tag {
            "a" => {
                if let Some(href) = self.attr("href") {
                    out.push_str(&format!(" <{}>", href));
                }
            }
            "button" => out.push(']'),
            "blockquote" => out.push('\n'),
            _ => {}
        }
        if block {
            out.push('\n');
        }
    }
}

// =============================================================================
// Common Pieces
// =============================================================================

/// Link to a route
pub fn link(route: &Route, label: impl Into<String>) -> Element {
    Element::new("a")
        .with_attr("href", route.to_path())
        .text(label)
}

/// Heading of the given level (1-4)
pub fn heading(level: u8, content: impl Into<String>) -> Element {
    Element::new(format!("h{}", level.clamp(1, 4))).text(content)
}

/// Paragraph of plain text
pub fn paragraph(content: impl Into<String>) -> Element {
    Element::new("p").text(content)
}

/// Loading placeholder with extra classes for its shape
pub fn skeleton(classes: &str) -> Element {
    Element::new("div").with_class(SKELETON).with_class(classes)
}

/// Centered error block: message plus a way back to the chapter list
pub fn error_panel(message: &str, with_chapters_link: bool) -> Element {
    let panel = Element::new("div")
        .with_class("error-panel")
        .child(Element::new("h1").with_class("error").text(message));

    if with_chapters_link {
        panel.child(link(&Route::Chapters, "View All Chapters").with_class("button"))
    } else {
        panel
    }
}
