//! Home page: Verse of the Day
//!
//! A chapter is picked first, then a verse within that chapter's verse count,
//! so the second request depends on the first. The chapter grid on the same
//! page is a separate [`ChapterListPage`](super::ChapterListPage) with its own
//! view-state.

use crate::view_state::Page;
use crate::{PageError, Result};
use async_trait::async_trait;
use gita_client::types::CHAPTER_COUNT;
use gita_client::{GitaApi, Verse};
use rand::Rng;
use std::sync::Arc;

/// Shown when either step of the Verse of the Day fails
pub const VERSE_OF_THE_DAY_ERROR: &str =
    "Could not load Verse of the Day. Please check your API key or network connection.";

/// Source of the chapter and verse numbers for the Verse of the Day
pub trait VersePicker: Send + Sync {
    /// Chapter number in `1..=CHAPTER_COUNT`
    fn pick_chapter(&self) -> u32;

    /// Verse number in `1..=verses_count`; `verses_count` is at least 1
    fn pick_verse(&self, verses_count: u32) -> u32;
}

/// Uniformly random picks
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl VersePicker for RandomPicker {
    fn pick_chapter(&self) -> u32 {
        rand::thread_rng().gen_range(1..=CHAPTER_COUNT)
    }

    fn pick_verse(&self, verses_count: u32) -> u32 {
        rand::thread_rng().gen_range(1..=verses_count)
    }
}

/// Always picks the same chapter and verse; the verse is clamped to the
/// chapter's count
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker {
    /// Chapter to pick
    pub chapter: u32,
    /// Verse to pick
    pub verse: u32,
}

impl VersePicker for FixedPicker {
    fn pick_chapter(&self) -> u32 {
        self.chapter
    }

    fn pick_verse(&self, verses_count: u32) -> u32 {
        self.verse.clamp(1, verses_count)
    }
}

/// Loads a random verse for the home page
pub struct VerseOfTheDayPage {
    api: Arc<dyn GitaApi>,
    picker: Box<dyn VersePicker>,
}

impl VerseOfTheDayPage {
    /// Create a loader with uniformly random picks
    pub fn new(api: Arc<dyn GitaApi>) -> Self {
        Self::with_picker(api, RandomPicker)
    }

    /// Create a loader with a custom picker
    pub fn with_picker(api: Arc<dyn GitaApi>, picker: impl VersePicker + 'static) -> Self {
        Self { api, picker: Box::new(picker) }
    }
}

#[async_trait]
impl Page for VerseOfTheDayPage {
    type Params = ();
    type Request = ();
    type Data = Verse;

    fn name(&self) -> &'static str {
        "verse_of_the_day"
    }

    fn validate(&self, _params: &()) -> Result<()> {
        Ok(())
    }

    async fn load(&self, _request: ()) -> Result<Verse> {
        let chapter_number = self.picker.pick_chapter();
        let chapter = self.api.chapter(chapter_number).await?;

        if chapter.verses_count == 0 {
            return Err(PageError::PartialFailure(format!(
                "chapter {} reports no verses",
                chapter_number
            )));
        }

        let verse_number = self.picker.pick_verse(chapter.verses_count);
        tracing::debug!(chapter = chapter_number, verse = verse_number, "verse of the day");

        Ok(self.api.verse(chapter_number, verse_number).await?)
    }

    fn error_message(&self, _error: &PageError) -> &'static str {
        VERSE_OF_THE_DAY_ERROR
    }
}
