//! Chapter detail: summary and verse index for one chapter

use super::parse_chapter;
use crate::view_state::Page;
use crate::{PageError, Result};
use async_trait::async_trait;
use gita_client::{Chapter, GitaApi};
use std::sync::Arc;

/// Shown when the route id is not a chapter number
pub const INVALID_CHAPTER: &str = "Invalid Chapter ID. Please select a chapter from 1 to 18.";

/// Shown when the chapter request fails
pub const CHAPTER_LOAD_ERROR: &str =
    "Could not load chapter data. The API request failed. Please check your API key and network connection.";

/// Loads `/chapter/{id}`
pub struct ChapterDetailPage {
    api: Arc<dyn GitaApi>,
}

impl ChapterDetailPage {
    /// Create the loader
    pub fn new(api: Arc<dyn GitaApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Page for ChapterDetailPage {
    type Params = String;
    type Request = u32;
    type Data = Chapter;

    fn name(&self) -> &'static str {
        "chapter_detail"
    }

    fn validate(&self, id: &String) -> Result<u32> {
        parse_chapter(id).ok_or_else(|| PageError::InvalidParameter(format!("chapter id {:?}", id)))
    }

    async fn load(&self, number: u32) -> Result<Chapter> {
        Ok(self.api.chapter(number).await?)
    }

    fn title(&self, chapter: &Chapter) -> Option<String> {
        Some(format!("{} - Bhagavad Gita", chapter.name_transliterated))
    }

    fn error_message(&self, error: &PageError) -> &'static str {
        match error {
            PageError::InvalidParameter(_) => INVALID_CHAPTER,
            _ => CHAPTER_LOAD_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{not_found, MockApi};
    use crate::view_state::{DocumentTitle, PageController, ViewState, DEFAULT_TITLE};
    use gita_client::fixtures;
    use mockall::predicate::eq;

    fn controller(api: MockApi) -> PageController<ChapterDetailPage> {
        PageController::new(ChapterDetailPage::new(Arc::new(api)), DocumentTitle::default())
    }

    #[tokio::test]
    async fn test_every_chapter_id_loads() {
        for n in 1..=18u32 {
            let mut api = MockApi::new();
            api.expect_chapter()
                .with(eq(n))
                .times(1)
                .returning(|n| Ok(fixtures::canonical_chapter(n)));

            let controller = controller(api);
            let state = controller.navigate(n.to_string()).await;

            let chapter = state.data().unwrap();
            assert_eq!(chapter.chapter_number, n);
            assert_eq!(
                controller.document_title().get(),
                format!("{} - Bhagavad Gita", fixtures::CHAPTER_NAMES[(n - 1) as usize])
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_ids_make_no_request() {
        for raw in ["0", "19", "abc", "", "-1", "1.5"] {
            let mut api = MockApi::new();
            api.expect_chapter().never();

            let controller = controller(api);
            let state = controller.navigate(raw.to_string()).await;

            assert_eq!(state, ViewState::Error(INVALID_CHAPTER.to_string()), "id {:?}", raw);
            assert_eq!(controller.document_title().get(), DEFAULT_TITLE);
        }
    }

    #[tokio::test]
    async fn test_request_failure() {
        let mut api = MockApi::new();
        api.expect_chapter().returning(|_| Err(not_found()));

        let state = controller(api).navigate("4".to_string()).await;
        assert_eq!(state, ViewState::Error(CHAPTER_LOAD_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_renavigate_replaces_state() {
        let mut api = MockApi::new();
        api.expect_chapter()
            .returning(|n| Ok(fixtures::canonical_chapter(n)));

        let controller = controller(api);
        controller.navigate("2".to_string()).await;
        let state = controller.navigate("nope".to_string()).await;

        assert_eq!(state.error(), Some(INVALID_CHAPTER));
        // Title from the earlier success is left in place
        assert_eq!(controller.document_title().get(), "Sānkhya Yog - Bhagavad Gita");
    }
}
