//! Application state for Gita Reader
//!
//! This crate provides the page view-state machine shared by every route and
//! the loaders for the home, chapter listing, chapter detail and verse detail
//! pages.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pages;
pub mod view_state;

pub use pages::{
    ChapterDetailPage, ChapterListPage, FixedPicker, RandomPicker, VerseDetail, VerseDetailPage,
    VerseOfTheDayPage, VersePicker,
};
pub use view_state::{DocumentTitle, FetchTicket, Page, PageController, ViewState};

use thiserror::Error;

/// Page load errors
///
/// Each page collapses these into its own fixed user-visible message; the
/// detail is only ever logged.
#[derive(Debug, Error)]
pub enum PageError {
    /// Route parameters failed validation; no request was made
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A request failed outright
    #[error("Request failed: {0}")]
    NetworkFailure(#[from] gita_client::Error),

    /// One of several joined requests failed
    #[error("Partial failure: {0}")]
    PartialFailure(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use gita_client::{Chapter, GitaApi, Verse};

    mockall::mock! {
        pub Api {}

        #[async_trait]
        impl GitaApi for Api {
            async fn chapters(&self) -> gita_client::Result<Vec<Chapter>>;
            async fn chapter(&self, number: u32) -> gita_client::Result<Chapter>;
            async fn verse(&self, chapter: u32, verse: u32) -> gita_client::Result<Verse>;
        }
    }

    pub fn not_found() -> gita_client::Error {
        gita_client::Error::Api { status: 404, message: "Not Found".to_string() }
    }
}
