//! Application wiring
//!
//! [`App`] owns one [`PageController`] per page, the router, the shared
//! document title and the theme store. [`App::show`] runs one navigation and
//! returns the rendered tree; the home route drives its two controllers
//! concurrently so that each section settles on its own.

use app_state::{
    ChapterDetailPage, ChapterListPage, DocumentTitle, PageController, VerseDetailPage,
    VerseOfTheDayPage, VersePicker,
};
use app_ui::navigation::{Route, Router};
use app_ui::screens::{self, render_document, shell, ABOUT_TITLE, NOT_FOUND_TITLE};
use app_ui::{Node, ThemeStore};
use gita_client::types::DEFAULT_LANGUAGE;
use gita_client::GitaApi;
use std::str::FromStr;
use std::sync::Arc;

/// How a page is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal text
    #[default]
    Text,
    /// Standalone HTML document
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Invalid output format: '{}'. Valid options: text, html", s)),
        }
    }
}

/// Result of one navigation
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Route the path matched
    pub route: Route,
    /// Document title after the navigation settled
    pub title: String,
    /// Header shell plus page body
    pub body: Node,
}

/// The reader: controllers, router, theme
pub struct App {
    router: Router,
    theme: Arc<ThemeStore>,
    title: DocumentTitle,
    language: String,
    home_verse: PageController<VerseOfTheDayPage>,
    home_chapters: PageController<ChapterListPage>,
    chapters: PageController<ChapterListPage>,
    chapter: PageController<ChapterDetailPage>,
    verse: PageController<VerseDetailPage>,
}

impl App {
    /// Create an app with a random Verse of the Day
    pub fn new(api: Arc<dyn GitaApi>, theme: Arc<ThemeStore>) -> Self {
        let verse_of_the_day = VerseOfTheDayPage::new(api.clone());
        Self::build(api, theme, verse_of_the_day)
    }

    /// Create an app whose Verse of the Day comes from `picker`
    pub fn with_picker(
        api: Arc<dyn GitaApi>,
        theme: Arc<ThemeStore>,
        picker: impl VersePicker + 'static,
    ) -> Self {
        let verse_of_the_day = VerseOfTheDayPage::with_picker(api.clone(), picker);
        Self::build(api, theme, verse_of_the_day)
    }

    fn build(api: Arc<dyn GitaApi>, theme: Arc<ThemeStore>, verse_of_the_day: VerseOfTheDayPage) -> Self {
        let title = DocumentTitle::default();

        Self {
            router: Router::new(),
            theme,
            language: DEFAULT_LANGUAGE.to_string(),
            home_verse: PageController::new(verse_of_the_day, title.clone()),
            home_chapters: PageController::new(ChapterListPage::home(api.clone()), title.clone()),
            chapters: PageController::new(ChapterListPage::chapters(api.clone()), title.clone()),
            chapter: PageController::new(ChapterDetailPage::new(api.clone()), title.clone()),
            verse: PageController::new(VerseDetailPage::new(api), title.clone()),
            title,
        }
    }

    /// Translation language for the home and verse pages
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Theme store
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// Current document title
    pub fn title(&self) -> String {
        self.title.get()
    }

    /// Route a path without navigating
    pub fn route(&self, path: &str) -> Route {
        self.router.match_path(path)
    }

    /// Navigate to `path` and render the settled page
    pub async fn show(&self, path: &str) -> RenderedPage {
        let route = self.router.match_path(path);
        tracing::info!(path, ?route, "navigate");

        let body = match &route {
            Route::Home => {
                let (verse, chapters) = tokio::join!(
                    self.home_verse.navigate(()),
                    self.home_chapters.navigate(())
                );
                screens::home(&verse, &chapters, &self.language)
            }
            Route::Chapters => screens::chapters(&self.chapters.navigate(()).await),
            Route::Chapter { id } => screens::chapter_detail(&self.chapter.navigate(id.clone()).await),
            Route::Verse { chapter_id, verse_id } => {
                let state = self
                    .verse
                    .navigate((chapter_id.clone(), verse_id.clone()))
                    .await;
                screens::verse_detail(&state, &self.language)
            }
            Route::About => {
                self.title.set(ABOUT_TITLE);
                screens::about()
            }
            Route::NotFound => {
                self.title.set(NOT_FOUND_TITLE);
                screens::not_found(path)
            }
        };

        RenderedPage {
            body: shell(&route, self.theme.current(), body),
            title: self.title.get(),
            route,
        }
    }

    /// Write a rendered page in `format`
    pub fn render(&self, page: &RenderedPage, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => render_document(
                &page.title,
                self.theme.current(),
                &self.theme.document_root().classes(),
                &page.body,
            ),
            OutputFormat::Text => format!("{}\n\n{}", page.title, page.body.render_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::pages::chapter_detail::INVALID_CHAPTER;
    use app_state::FixedPicker;
    use app_ui::{DocumentRoot, FixedAppearance};
    use async_trait::async_trait;
    use gita_client::{fixtures, Chapter, Verse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storage::MemoryPreferences;

    /// Serves fixtures and counts requests
    #[derive(Default)]
    struct FixtureApi {
        requests: AtomicUsize,
    }

    #[async_trait]
    impl GitaApi for FixtureApi {
        async fn chapters(&self) -> gita_client::Result<Vec<Chapter>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::all_chapters())
        }

        async fn chapter(&self, number: u32) -> gita_client::Result<Chapter> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::canonical_chapter(number))
        }

        async fn verse(&self, chapter: u32, verse: u32) -> gita_client::Result<Verse> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::verse(chapter, verse))
        }
    }

    fn app(api: Arc<FixtureApi>, dark: bool) -> App {
        let theme = ThemeStore::initialize(
            Arc::new(MemoryPreferences::new()),
            &FixedAppearance(dark),
            DocumentRoot::new(),
        );
        App::with_picker(api, Arc::new(theme), FixedPicker { chapter: 2, verse: 47 })
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[tokio::test]
    async fn test_home_renders_both_sections() {
        let api = Arc::new(FixtureApi::default());
        let page = app(api.clone(), false).show("/").await;

        assert_eq!(page.route, Route::Home);
        let text = page.body.text_content();
        assert!(text.contains("Translation of 2.47"));
        assert!(page.body.links().contains(&"/chapter/18"));
        // chapter + verse for the verse of the day, chapters for the grid
        assert_eq!(api.requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_titles_follow_navigation() {
        let app = app(Arc::new(FixtureApi::default()), false);

        assert_eq!(app.show("/chapter/2").await.title, "Sānkhya Yog - Bhagavad Gita");
        assert_eq!(app.show("/verse/2/47").await.title, "Gita 2.47 - Bhagavad Gita");
        assert_eq!(app.show("/about").await.title, ABOUT_TITLE);
        // The chapter list does not set a title of its own.
        assert_eq!(app.show("/chapters").await.title, ABOUT_TITLE);
    }

    #[tokio::test]
    async fn test_invalid_chapter_makes_no_request() {
        let api = Arc::new(FixtureApi::default());
        let page = app(api.clone(), false).show("/chapter/abc").await;

        assert!(page.body.text_content().contains(INVALID_CHAPTER));
        assert_eq!(api.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let api = Arc::new(FixtureApi::default());
        let page = app(api.clone(), false).show("/nowhere").await;

        assert_eq!(page.route, Route::NotFound);
        assert_eq!(page.title, NOT_FOUND_TITLE);
        assert_eq!(api.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_html_carries_theme_marker() {
        let app = app(Arc::new(FixtureApi::default()), true);
        let page = app.show("/about").await;
        let html = app.render(&page, OutputFormat::Html);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("<title>About - Bhagavad Gita</title>"));
        assert!(html.contains("theme-icon-light"));
    }

    #[tokio::test]
    async fn test_text_output_starts_with_title() {
        let app = app(Arc::new(FixtureApi::default()), false);
        let page = app.show("/about").await;
        let text = app.render(&page, OutputFormat::Text);

        assert!(text.starts_with("About - Bhagavad Gita\n\n"));
        assert!(text.contains("About the Bhagavad Gita"));
    }

    #[tokio::test]
    async fn test_language_selects_translations() {
        let app = app(Arc::new(FixtureApi::default()), false).with_language("hindi");
        let page = app.show("/verse/2/47").await;
        assert!(page.body.text_content().contains("No Hindi translations available."));
    }
}
