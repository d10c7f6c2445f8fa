//! Chapter listing

use crate::view_state::Page;
use crate::{PageError, Result};
use async_trait::async_trait;
use gita_client::{Chapter, GitaApi};
use std::sync::Arc;

/// Failure message on the chapters page
pub const CHAPTERS_ERROR: &str =
    "Could not load chapters. Please check your API key and network connection.";

/// Failure message for the home page chapter grid
pub const HOME_CHAPTERS_ERROR: &str =
    "Could not load chapters. Please check your API key or network connection.";

/// Loads all eighteen chapters with a single request
pub struct ChapterListPage {
    api: Arc<dyn GitaApi>,
    message: &'static str,
}

impl ChapterListPage {
    /// Loader for the `/chapters` route
    pub fn chapters(api: Arc<dyn GitaApi>) -> Self {
        Self { api, message: CHAPTERS_ERROR }
    }

    /// Loader for the home page chapter grid
    pub fn home(api: Arc<dyn GitaApi>) -> Self {
        Self { api, message: HOME_CHAPTERS_ERROR }
    }
}

#[async_trait]
impl Page for ChapterListPage {
    type Params = ();
    type Request = ();
    type Data = Vec<Chapter>;

    fn name(&self) -> &'static str {
        "chapters"
    }

    fn validate(&self, _params: &()) -> Result<()> {
        Ok(())
    }

    async fn load(&self, _request: ()) -> Result<Vec<Chapter>> {
        let chapters = self.api.chapters().await?;
        tracing::debug!(count = chapters.len(), "chapters loaded");
        Ok(chapters)
    }

    fn error_message(&self, _error: &PageError) -> &'static str {
        self.message
    }
}
