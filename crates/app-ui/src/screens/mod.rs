//! Application screens
//!
//! Each screen is a pure function of its page's view-state returning a
//! component tree. [`layout`] wraps a screen in the shared header shell.

pub mod about;
pub mod chapter_detail;
pub mod chapters;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod verse_detail;

pub use about::{about, ABOUT_TITLE};
pub use chapter_detail::chapter_detail;
pub use chapters::chapters;
pub use home::home;
pub use layout::{header, render_document, shell};
pub use not_found::{not_found, NOT_FOUND_TITLE};
pub use verse_detail::{verse_detail, VerseNav};

/// `"english"` → `"English"`
pub(crate) fn language_label(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
