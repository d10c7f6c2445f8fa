//! Page loaders for each route
//!
//! - [`ChapterListPage`] - `/chapters` and the home page chapter grid
//! - [`VerseOfTheDayPage`] - the home page's random verse
//! - [`ChapterDetailPage`] - `/chapter/{id}`
//! - [`VerseDetailPage`] - `/verse/{chapterId}/{verseId}`

pub mod chapter_detail;
pub mod chapters;
pub mod home;
pub mod verse_detail;

pub use chapter_detail::ChapterDetailPage;
pub use chapters::ChapterListPage;
pub use home::{FixedPicker, RandomPicker, VerseOfTheDayPage, VersePicker};
pub use verse_detail::{VerseDetail, VerseDetailPage};

use gita_client::types::CHAPTER_COUNT;

/// Parse a route segment as a positive integer
pub(crate) fn parse_positive(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// Parse a route segment as a chapter number (1-18)
pub(crate) fn parse_chapter(raw: &str) -> Option<u32> {
    parse_positive(raw).filter(|n| *n <= CHAPTER_COUNT)
}
