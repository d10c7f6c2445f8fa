//! Verse detail: one verse plus its chapter, fetched together

use super::{parse_chapter, parse_positive};
use crate::view_state::Page;
use crate::{PageError, Result};
use async_trait::async_trait;
use gita_client::{Chapter, GitaApi, Verse};
use std::sync::Arc;

/// Shown when either route id is malformed
pub const INVALID_VERSE: &str = "Invalid Chapter/Verse ID.";

/// Shown when either request fails
pub const VERSE_LOAD_ERROR: &str =
    "Could not load verse data. The verse may not exist or an API error occurred.";

/// A verse together with its parent chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseDetail {
    /// The verse being shown
    pub verse: Verse,
    /// Its chapter, for the verse count
    pub chapter: Chapter,
}

impl VerseDetail {
    /// Whether a previous verse exists in this chapter
    pub fn show_prev(&self) -> bool {
        self.verse.verse_number > 1
    }

    /// Whether a next verse exists in this chapter
    pub fn show_next(&self) -> bool {
        self.verse.verse_number < self.chapter.verses_count
    }

    /// Previous verse number, if shown
    pub fn prev(&self) -> Option<u32> {
        self.show_prev().then(|| self.verse.verse_number - 1)
    }

    /// Next verse number, if shown
    pub fn next(&self) -> Option<u32> {
        self.show_next().then(|| self.verse.verse_number + 1)
    }
}

/// Loads `/verse/{chapterId}/{verseId}`
pub struct VerseDetailPage {
    api: Arc<dyn GitaApi>,
}

impl VerseDetailPage {
    /// Create the loader
    pub fn new(api: Arc<dyn GitaApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Page for VerseDetailPage {
    type Params = (String, String);
    type Request = (u32, u32);
    type Data = VerseDetail;

    fn name(&self) -> &'static str {
        "verse_detail"
    }

    fn validate(&self, (chapter, verse): &(String, String)) -> Result<(u32, u32)> {
        match (parse_chapter(chapter), parse_positive(verse)) {
            (Some(c), Some(v)) => Ok((c, v)),
            _ => Err(PageError::InvalidParameter(format!("verse id {:?}/{:?}", chapter, verse))),
        }
    }

    async fn load(&self, (chapter, verse): (u32, u32)) -> Result<VerseDetail> {
        // Both requests run to completion before either outcome is inspected.
        let (verse_result, chapter_result) =
            tokio::join!(self.api.verse(chapter, verse), self.api.chapter(chapter));

        match (verse_result, chapter_result) {
            (Ok(verse), Ok(chapter)) => Ok(VerseDetail { verse, chapter }),
            (Err(verse_err), Err(chapter_err)) => {
                tracing::debug!(%chapter_err, "chapter request also failed");
                Err(PageError::NetworkFailure(verse_err))
            }
            (Err(err), Ok(_)) => Err(PageError::PartialFailure(format!("verse request: {}", err))),
            (Ok(_), Err(err)) => Err(PageError::PartialFailure(format!("chapter request: {}", err))),
        }
    }

    fn title(&self, detail: &VerseDetail) -> Option<String> {
        Some(format!(
            "Gita {}.{} - Bhagavad Gita",
            detail.verse.chapter_number, detail.verse.verse_number
        ))
    }

    fn error_message(&self, error: &PageError) -> &'static str {
        match error {
            PageError::InvalidParameter(_) => INVALID_VERSE,
            _ => VERSE_LOAD_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{not_found, MockApi};
    use crate::view_state::{DocumentTitle, PageController, ViewState};
    use gita_client::fixtures;
    use mockall::predicate::eq;

    fn controller(api: MockApi) -> PageController<VerseDetailPage> {
        PageController::new(VerseDetailPage::new(Arc::new(api)), DocumentTitle::default())
    }

    fn params(c: &str, v: &str) -> (String, String) {
        (c.to_string(), v.to_string())
    }

    #[tokio::test]
    async fn test_success_joins_both_records() {
        let mut api = MockApi::new();
        api.expect_verse()
            .with(eq(2), eq(47))
            .times(1)
            .returning(|c, v| Ok(fixtures::verse(c, v)));
        api.expect_chapter()
            .with(eq(2))
            .times(1)
            .returning(|n| Ok(fixtures::canonical_chapter(n)));

        let controller = controller(api);
        let state = controller.navigate(params("2", "47")).await;

        let detail = state.data().unwrap();
        assert_eq!(detail.verse.verse_number, 47);
        assert_eq!(detail.chapter.verses_count, 72);
        assert_eq!(controller.document_title().get(), "Gita 2.47 - Bhagavad Gita");
    }

    #[tokio::test]
    async fn test_invalid_ids_make_no_request() {
        for (c, v) in [("abc", "1"), ("1", "x"), ("0", "1"), ("1", "0"), ("19", "1"), ("", "")] {
            let mut api = MockApi::new();
            api.expect_verse().never();
            api.expect_chapter().never();

            let state = controller(api).navigate(params(c, v)).await;
            assert_eq!(state, ViewState::Error(INVALID_VERSE.to_string()), "{}/{}", c, v);
        }
    }

    #[tokio::test]
    async fn test_verse_failure_is_error() {
        let mut api = MockApi::new();
        api.expect_verse().returning(|_, _| Err(not_found()));
        api.expect_chapter()
            .times(1)
            .returning(|n| Ok(fixtures::canonical_chapter(n)));

        let state = controller(api).navigate(params("2", "999")).await;
        assert_eq!(state, ViewState::Error(VERSE_LOAD_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_chapter_failure_is_error() {
        let mut api = MockApi::new();
        api.expect_verse()
            .times(1)
            .returning(|c, v| Ok(fixtures::verse(c, v)));
        api.expect_chapter().returning(|_| Err(not_found()));

        let state = controller(api).navigate(params("3", "1")).await;
        assert_eq!(state, ViewState::Error(VERSE_LOAD_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_both_failures_is_error() {
        let mut api = MockApi::new();
        api.expect_verse().returning(|_, _| Err(not_found()));
        api.expect_chapter().returning(|_| Err(not_found()));

        let state = controller(api).navigate(params("3", "1")).await;
        assert_eq!(state.error(), Some(VERSE_LOAD_ERROR));
    }

    #[test]
    fn test_prev_next_bounds() {
        let chapter = fixtures::canonical_chapter(2);

        let first = VerseDetail { verse: fixtures::verse(2, 1), chapter: chapter.clone() };
        assert!(!first.show_prev());
        assert!(first.show_next());
        assert_eq!(first.next(), Some(2));

        let last = VerseDetail { verse: fixtures::verse(2, 72), chapter: chapter.clone() };
        assert!(last.show_prev());
        assert!(!last.show_next());
        assert_eq!(last.prev(), Some(71));
        assert_eq!(last.next(), None);

        let middle = VerseDetail { verse: fixtures::verse(2, 47), chapter };
        assert_eq!((middle.prev(), middle.next()), (Some(46), Some(48)));
    }
}
