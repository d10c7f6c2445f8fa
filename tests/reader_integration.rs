//! End-to-end tests: real HTTP client against a wiremock gateway, through
//! the page controllers, down to rendered output

use app_state::pages::chapter_detail::{CHAPTER_LOAD_ERROR, INVALID_CHAPTER};
use app_state::pages::chapters::{CHAPTERS_ERROR, HOME_CHAPTERS_ERROR};
use app_state::pages::verse_detail::VERSE_LOAD_ERROR;
use app_state::FixedPicker;
use app_ui::components::INVISIBLE;
use app_ui::{DocumentRoot, FixedAppearance, Node, ThemeStore};
use gita_client::{fixtures, ApiClient};
use gita_reader::{App, Config, OutputFormat};
use secrecy::SecretString;
use std::sync::Arc;
use storage::{DeviceStore, KvConfig, KvStore, MemoryPreferences, PreferenceStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Arc<ApiClient> {
    let config = Config::from_toml_str(&format!("[api]\nbase_url = \"{}/v2\"", server.uri())).unwrap();
    Arc::new(ApiClient::new(config.api_config(SecretString::from("it-key".to_string()))).unwrap())
}

fn app_with(server: &MockServer, preferences: Arc<dyn PreferenceStore>) -> App {
    let theme = ThemeStore::initialize(preferences, &FixedAppearance(false), DocumentRoot::new());
    App::with_picker(client(server), Arc::new(theme), FixedPicker { chapter: 2, verse: 47 })
}

fn app(server: &MockServer) -> App {
    app_with(server, Arc::new(MemoryPreferences::new()))
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-RapidAPI-Key", "it-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn element_text(node: &Node, id: &str) -> String {
    Node::from(node.find_by_id(id).unwrap().clone()).text_content()
}

// =============================================================================
// Chapters
// =============================================================================

#[tokio::test]
async fn test_chapters_page() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/chapters/", serde_json::to_value(fixtures::all_chapters()).unwrap()).await;

    let page = app(&server).show("/chapters").await;

    let grid = Node::from(page.body.find_by_id("chapters-grid").unwrap().clone());
    assert_eq!(grid.links().len(), 18);
    assert!(grid.text_content().contains("Mokṣha Sanyās Yog"));
}

#[tokio::test]
async fn test_chapters_page_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/chapters/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let page = app(&server).show("/chapters").await;
    assert!(page.body.text_content().contains(CHAPTERS_ERROR));
}

// =============================================================================
// Chapter detail
// =============================================================================

#[tokio::test]
async fn test_chapter_detail() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/chapters/2/", serde_json::to_value(fixtures::canonical_chapter(2)).unwrap()).await;

    let page = app(&server).show("/chapter/2").await;

    assert_eq!(page.title, "Sānkhya Yog - Bhagavad Gita");
    let index = Node::from(page.body.find_by_id("verse-index").unwrap().clone());
    assert_eq!(index.links().len(), 72);
    assert_eq!(index.links()[71], "/verse/2/72");
}

#[tokio::test]
async fn test_chapter_out_of_range_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = app(&server);
    for path in ["/chapter/0", "/chapter/19", "/chapter/2.5", "/chapter/abc"] {
        let page = app.show(path).await;
        assert!(page.body.text_content().contains(INVALID_CHAPTER), "{}", path);
        assert!(page.body.links().contains(&"/chapters"));
    }
}

#[tokio::test]
async fn test_chapter_fetch_failure_keeps_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/chapters/4/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = app(&server).show("/chapter/4").await;

    assert!(page.body.text_content().contains(CHAPTER_LOAD_ERROR));
    assert_eq!(page.title, "Bhagavad Gita");
}

// =============================================================================
// Verse detail
// =============================================================================

#[tokio::test]
async fn test_verse_detail() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/chapters/2/", serde_json::to_value(fixtures::canonical_chapter(2)).unwrap()).await;

    let mut verse = fixtures::verse(2, 47);
    verse.commentaries = vec![fixtures::commentary(
        "Swami Sivananda",
        "<p>Do your duty.</p><img src=x onerror=alert(1)><script>alert(2)</script>",
    )];
    mount_json(&server, "/v2/chapters/2/verses/47/", serde_json::to_value(&verse).unwrap()).await;

    let app = app(&server);
    let page = app.show("/verse/2/47").await;
    let html = app.render(&page, OutputFormat::Html);

    assert_eq!(page.title, "Gita 2.47 - Bhagavad Gita");
    assert!(html.contains("<title>Gita 2.47 - Bhagavad Gita</title>"));
    assert!(html.contains("Do your duty."));
    assert!(!html.contains("<script"));
    assert!(!html.contains("onerror"));

    let prev = page.body.find_by_id("prev-verse").unwrap();
    let next = page.body.find_by_id("next-verse").unwrap();
    assert_eq!(prev.attr("href"), Some("/verse/2/46"));
    assert_eq!(next.attr("href"), Some("/verse/2/48"));
    assert!(!prev.has_class(INVISIBLE));
    assert!(!next.has_class(INVISIBLE));
}

#[tokio::test]
async fn test_verse_missing_is_error_even_when_chapter_loads() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/chapters/2/", serde_json::to_value(fixtures::canonical_chapter(2)).unwrap()).await;
    Mock::given(method("GET"))
        .and(path("/v2/chapters/2/verses/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let page = app(&server).show("/verse/2/999").await;

    assert!(page.body.text_content().contains(VERSE_LOAD_ERROR));
    assert!(page.body.find_by_id("prev-verse").is_none());
}

// =============================================================================
// Home
// =============================================================================

#[tokio::test]
async fn test_home_sections_settle_independently() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/chapters/2/", serde_json::to_value(fixtures::canonical_chapter(2)).unwrap()).await;
    mount_json(&server, "/v2/chapters/2/verses/47/", serde_json::to_value(fixtures::verse(2, 47)).unwrap()).await;
    Mock::given(method("GET"))
        .and(path("/v2/chapters/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let page = app(&server).show("/").await;

    assert!(element_text(&page.body, "verse-of-the-day").contains("Translation of 2.47"));
    assert!(page.body.text_content().contains(HOME_CHAPTERS_ERROR));
}

// =============================================================================
// Theme persistence
// =============================================================================

#[tokio::test]
async fn test_theme_toggle_persists_across_sessions() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("prefs");
    let open = || -> Arc<dyn PreferenceStore> {
        let kv = KvStore::new(KvConfig::new(&prefs_path).flush_every_ms(None)).unwrap();
        Arc::new(DeviceStore::new(Arc::new(kv)))
    };

    {
        let app = app_with(&server, open());
        assert!(!app.theme().is_dark());
        app.theme().toggle();
    }

    let app = app_with(&server, open());
    assert!(app.theme().is_dark());

    let page = app.show("/about").await;
    let html = app.render(&page, OutputFormat::Html);
    assert!(html.contains("class=\"dark\""));
    assert!(html.contains("theme-icon-light"));
}
