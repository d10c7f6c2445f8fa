//! User interface for the Gita reader
//!
//! Views are pure functions from a page's [`app_state::ViewState`] to a
//! [`components::Node`] tree. A tree renders either to escaped HTML or to
//! plain text for the terminal.
//!
//! # Modules
//!
//! - [`theme`] - Light/dark theme store and palettes
//! - [`navigation`] - Routes, path matching and the nav bar tabs
//! - [`components`] - Node tree and shared building blocks
//! - [`sanitize`] - Allow-list cleaning of commentary markup
//! - [`screens`] - One function per page plus the layout shell
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Route, Router};
//!
//! let router = Router::new();
//! assert_eq!(router.match_path("/verse/2/47"), Route::verse(2, 47));
//! assert_eq!(Route::chapter(3).to_path(), "/chapter/3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod sanitize;
pub mod screens;
pub mod theme;

pub use components::{Element, Node};
pub use navigation::{NavigationTab, Route, RouteParams, Router};
pub use sanitize::{sanitize_html, SafeHtml};
pub use theme::{
    AppearanceSource, DocumentRoot, FixedAppearance, Palette, SystemAppearance, ThemeName,
    ThemeStore, DARK_CLASS,
};
