//! Routes and path matching
//!
//! Paths map onto a closed set of routes. Parameters stay as raw strings here;
//! whether `/chapter/abc` is a valid chapter is the page's decision, so a
//! malformed id still reaches the chapter page and renders its error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters captured from a path
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Landing page with Verse of the Day and chapter grid
    #[default]
    Home,
    /// All eighteen chapters
    Chapters,
    /// One chapter's summary and verse index
    Chapter {
        /// Raw chapter id segment
        id: String,
    },
    /// One verse with translations and commentaries
    Verse {
        /// Raw chapter id segment
        chapter_id: String,
        /// Raw verse id segment
        verse_id: String,
    },
    /// Static about page
    About,
    /// Anything else
    NotFound,
}

impl Route {
    /// Route for a chapter number
    pub fn chapter(number: u32) -> Self {
        Route::Chapter { id: number.to_string() }
    }

    /// Route for a chapter/verse pair
    pub fn verse(chapter: u32, verse: u32) -> Self {
        Route::Verse { chapter_id: chapter.to_string(), verse_id: verse.to_string() }
    }

    /// Path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Chapters => "/chapters".to_string(),
            Route::Chapter { id } => format!("/chapter/{}", urlencoding::encode(id)),
            Route::Verse { chapter_id, verse_id } => format!(
                "/verse/{}/{}",
                urlencoding::encode(chapter_id),
                urlencoding::encode(verse_id)
            ),
            Route::About => "/about".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Every path pattern the router understands, for display
    pub fn patterns() -> [&'static str; 5] {
        ["/", "/chapters", "/chapter/:id", "/verse/:chapterId/:verseId", "/about"]
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Header navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home link
    Home,
    /// Chapters link
    Chapters,
    /// About link
    About,
}

impl NavigationTab {
    /// Route the link points to
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Chapters => Route::Chapters,
            NavigationTab::About => Route::About,
        }
    }

    /// Link text
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Chapters => "Chapters",
            NavigationTab::About => "About",
        }
    }

    /// Whether the link is highlighted on `route`
    ///
    /// Matching is exact: the chapters link is not active on `/chapter/2`.
    pub fn is_active(&self, route: &Route) -> bool {
        self.root_route() == *route
    }

    /// All links in header order
    pub fn all() -> [NavigationTab; 3] {
        [NavigationTab::Home, NavigationTab::Chapters, NavigationTab::About]
    }
}

// =============================================================================
// Router
// =============================================================================

#[derive(Debug, Clone)]
enum PatternSegment {
    Literal(&'static str),
    Param(&'static str),
}

type RouteBuilder = fn(&RouteParams) -> Option<Route>;

struct RoutePattern {
    segments: Vec<PatternSegment>,
    builder: RouteBuilder,
}

/// Path router
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with every route registered
    pub fn new() -> Self {
        let mut router = Self { patterns: Vec::new() };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/chapters", |_| Some(Route::Chapters));
        router.add_route("/chapter/:id", |params| {
            Some(Route::Chapter { id: params.get("id")?.clone() })
        });
        router.add_route("/verse/:chapterId/:verseId", |params| {
            Some(Route::Verse {
                chapter_id: params.get("chapterId")?.clone(),
                verse_id: params.get("verseId")?.clone(),
            })
        });
        router.add_route("/about", |_| Some(Route::About));

        router
    }

    fn add_route(&mut self, pattern: &'static str, builder: RouteBuilder) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => PatternSegment::Param(name),
                None => PatternSegment::Literal(s),
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route; unknown paths yield [`Route::NotFound`]
    pub fn match_path(&self, path: &str) -> Route {
        let pathname = path.split(&['?', '#'][..]).next().unwrap_or_default();
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        self.patterns
            .iter()
            .find_map(|pattern| {
                let params = Self::match_pattern(&pattern.segments, &segments)?;
                (pattern.builder)(&params)
            })
            .unwrap_or(Route::NotFound)
    }

    fn match_pattern(pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, actual) in pattern.iter().zip(path) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.to_string(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }
        Some(params)
    }
}
