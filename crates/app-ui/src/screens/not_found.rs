//! Fallback for unknown paths

use crate::components::{heading, link, paragraph, Element};
use crate::navigation::Route;

/// Document title for unknown paths
pub const NOT_FOUND_TITLE: &str = "Page Not Found - Bhagavad Gita";

/// Any path the router does not recognise
pub fn not_found(path: &str) -> Element {
    Element::new("main").with_class("not-found").child(
        Element::new("div")
            .with_class("error-panel")
            .child(heading(1, "Page Not Found"))
            .child(paragraph(format!("Nothing lives at {}.", path)).with_class("muted"))
            .child(link(&Route::Home, "Go Home").with_class("button")),
    )
}
