//! Commentary markup sanitizer
//!
//! Commentary bodies arrive as HTML from the API. Before they are rendered
//! they pass through an allowlist: known formatting tags are kept without
//! attributes (links keep a safe `href`), unknown tags are unwrapped to their
//! text, and script-like elements are dropped with their content.

use crate::components::{escape_attr, escape_text};
use scraper::node::Node as HtmlNode;
use scraper::{ElementRef, Html};
use serde::Serialize;
use std::fmt;

const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "div", "em", "h3", "h4", "h5", "h6", "hr", "i", "li",
    "ol", "p", "pre", "span", "strong", "sub", "sup", "u", "ul",
];

const DROPPED_TAGS: &[&str] = &[
    "embed", "form", "head", "iframe", "math", "noscript", "object", "script", "select", "style",
    "svg", "template", "textarea", "title",
];

const VOID_TAGS: &[&str] = &["br", "hr"];

const BLOCK_TAGS: &[&str] =
    &["blockquote", "div", "h3", "h4", "h5", "h6", "hr", "li", "ol", "p", "pre", "ul"];

/// HTML that has been through [`sanitize_html`]
///
/// The only way to obtain one is to sanitize, so holding a `SafeHtml` means
/// the markup may be emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Sanitized markup
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether there is no markup at all
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Text content with block elements on separate lines
    pub fn to_plain_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.0);
        let mut out = String::new();
        collect_text(fragment.root_element(), &mut out);

        out.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce untrusted markup to the allowlisted subset
pub fn sanitize_html(input: &str) -> SafeHtml {
    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    write_children(fragment.root_element(), &mut out);
    SafeHtml(out)
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            HtmlNode::Text(text) => out.push_str(&escape_text(text)),
            HtmlNode::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(child, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_TAGS.contains(&name) {
        tracing::debug!(tag = name, "dropped element from commentary");
        return;
    }
    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    if name == "a" {
        if let Some(href) = element.value().attr("href").filter(|h| is_safe_href(h)) {
            out.push_str(" href=\"");
            out.push_str(&escape_attr(href.trim()));
            out.push_str("\" rel=\"noopener noreferrer\"");
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn is_safe_href(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    match href.split_once(':') {
        None => true,
        // A colon after the first path, query or fragment delimiter is not a scheme
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => matches!(scheme, "http" | "https" | "mailto"),
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(el) => {
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}
