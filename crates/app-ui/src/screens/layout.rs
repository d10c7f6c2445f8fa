//! Header shell and HTML document wrapper

use crate::components::{link, Element, Node};
use crate::navigation::{NavigationTab, Route};
use crate::theme::ThemeName;

/// Title shown in the header brand link
pub const BRAND: &str = "Bhagavad Gita";

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

fn icon(id: &str, path: &str) -> Element {
    Element::new("svg")
        .with_id(id)
        .with_class("icon")
        .with_attr("fill", "none")
        .with_attr("viewBox", "0 0 24 24")
        .with_attr("stroke", "currentColor")
        .child(
            Element::new("path")
                .with_attr("stroke-linecap", "round")
                .with_attr("stroke-linejoin", "round")
                .with_attr("stroke-width", "2")
                .with_attr("d", path),
        )
}

/// Theme toggle button; shows a sun while dark, a moon while light
pub fn theme_toggle(theme: ThemeName) -> Element {
    let (icon_node, label) = if theme.is_dark() {
        (icon("theme-icon-light", SUN_PATH), "Light mode")
    } else {
        (icon("theme-icon-dark", MOON_PATH), "Dark mode")
    };

    Element::new("button")
        .with_id("theme-toggle")
        .with_attr("type", "button")
        .with_attr("aria-label", label)
        .child(icon_node)
        .text(label)
}

/// Site header: brand link, navigation, theme toggle
pub fn header(active: &Route, theme: ThemeName) -> Element {
    let nav = Element::new("nav").children(NavigationTab::all().into_iter().map(|tab| {
        link(&tab.root_route(), tab.label())
            .with_class("nav-link")
            .with_class_if(tab.is_active(active), "active")
    }));

    Element::new("header")
        .with_class("site-header")
        .child(link(&Route::Home, BRAND).with_class("brand"))
        .child(nav)
        .child(theme_toggle(theme))
}

/// Header followed by the page body
pub fn shell(active: &Route, theme: ThemeName, body: Element) -> Node {
    Element::new("div")
        .with_class("app")
        .child(header(active, theme))
        .child(body)
        .into()
}

/// Standalone HTML document
pub fn render_document(title: &str, theme: ThemeName, root_classes: &[String], body: &Node) -> String {
    let p = theme.palette();
    let style = format!(
        ":root{{color-scheme:{scheme};--bg:{bg};--surface:{surface};--text:{text};--muted:{muted};--accent:{accent};--border:{border}}}\
body{{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--text)}}\
a{{color:var(--accent)}}main{{max-width:64rem;margin:0 auto;padding:2.5rem 1rem}}\
.site-header{{display:flex;gap:1rem;align-items:center;padding:1rem;border-bottom:1px solid var(--border)}}\
.brand{{font-weight:700;font-size:1.5rem;margin-right:auto}}.nav-link.active{{font-weight:700}}\
.card{{background:var(--surface);border:1px solid var(--border);border-radius:.5rem;padding:1.5rem;margin:.75rem 0}}\
.skeleton{{background:var(--border);border-radius:.5rem;min-height:3rem;margin:.75rem 0}}\
.invisible{{visibility:hidden}}.error{{color:#DC2626}}.muted{{color:var(--muted)}}\
#verse-index{{display:grid;grid-template-columns:repeat(10,1fr);gap:.75rem}}\
.icon{{width:1.5rem;height:1.5rem}}",
        scheme = theme.color_scheme(),
        bg = p.background,
        surface = p.surface,
        text = p.text,
        muted = p.muted,
        accent = p.accent,
        border = p.border,
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" class=\"{}\"><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}</body></html>\n",
        crate::components::escape_attr(&root_classes.join(" ")),
        crate::components::escape_text(title),
        style,
        body.render_html()
    )
}
