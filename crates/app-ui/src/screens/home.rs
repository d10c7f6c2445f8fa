//! Home screen: hero, Verse of the Day, chapter grid

use super::chapters::chapter_grid;
use crate::components::{heading, link, paragraph, skeleton, Element};
use crate::navigation::Route;
use app_state::ViewState;
use gita_client::{Chapter, Verse};

/// Placeholder cards in the home chapter grid
pub const SKELETON_CARDS: usize = 6;

/// Summary line when no translation matches the target language
pub const TRANSLATION_MISSING: &str = "Translation not available.";

fn hero() -> Element {
    Element::new("section")
        .with_class("hero")
        .child(heading(1, "BHAGAVAD GITA"))
        .child(paragraph("The Song of God"))
        .child(
            Element::new("div")
                .with_class("hero-actions")
                .child(link(&Route::Chapters, "Read The Gita").with_class("button"))
                .child(
                    Element::new("a")
                        .with_class("button")
                        .with_attr("href", "#verse-of-the-day")
                        .text("Random Verse"),
                ),
        )
}

fn verse_of_the_day(state: &ViewState<Verse>, language: &str) -> Element {
    let section = Element::new("section").with_id("verse-of-the-day");

    match state {
        ViewState::Loading => section.child(skeleton("card verse")),
        ViewState::Error(message) => section.child(paragraph(message).with_class("error")),
        ViewState::Success(verse) => {
            let translation = verse
                .first_translation(language)
                .map(|t| t.description.as_str())
                .unwrap_or(TRANSLATION_MISSING);

            section.child(
                Element::new("div")
                    .with_class("card")
                    .child(heading(
                        2,
                        format!(
                            "Verse of the Day (Chapter {}, Verse {})",
                            verse.chapter_number, verse.verse_number
                        ),
                    ))
                    .child(
                        Element::new("blockquote")
                            .child(paragraph(format!("\"{}\"", verse.text)).with_class("sanskrit"))
                            .child(paragraph(format!("\"{}\"", translation)).with_class("translation")),
                    )
                    .child(link(
                        &Route::verse(verse.chapter_number, verse.verse_number),
                        "Read Commentary →",
                    )),
            )
        }
    }
}

/// `/`; the two sections settle independently
pub fn home(verse: &ViewState<Verse>, chapters: &ViewState<Vec<Chapter>>, language: &str) -> Element {
    Element::new("main")
        .child(hero())
        .child(verse_of_the_day(verse, language))
        .child(
            Element::new("section")
                .child(heading(2, "Chapters"))
                .child(chapter_grid(chapters, SKELETON_CARDS, false)),
        )
}
