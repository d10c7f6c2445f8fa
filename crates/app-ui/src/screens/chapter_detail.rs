//! Chapter detail screen: summary and verse index

use crate::components::{error_panel, heading, link, paragraph, skeleton, Element};
use crate::navigation::Route;
use app_state::ViewState;
use gita_client::Chapter;

/// `/chapter/{id}`
pub fn chapter_detail(state: &ViewState<Chapter>) -> Element {
    let main = Element::new("main").with_class("chapter-detail");

    match state {
        ViewState::Loading => main
            .child(skeleton("title"))
            .child(skeleton("card summary")),
        ViewState::Error(message) => main.child(error_panel(message, true)),
        ViewState::Success(chapter) => main
            .child(
                Element::new("div")
                    .with_class("page-intro")
                    .child(
                        paragraph(format!("Chapter {}", chapter.chapter_number)).with_class("accent"),
                    )
                    .child(heading(1, &chapter.name_transliterated))
                    .child(paragraph(&chapter.name).with_class("sanskrit")),
            )
            .child(
                Element::new("section")
                    .with_class("card")
                    .child(heading(2, "Summary"))
                    .child(paragraph(&chapter.chapter_summary)),
            )
            .child(
                Element::new("section")
                    .child(heading(2, format!("Verses ({})", chapter.verses_count)))
                    .child(verse_index(chapter)),
            ),
    }
}

/// One link per verse, `1..=verses_count`
fn verse_index(chapter: &Chapter) -> Element {
    Element::new("div").with_id("verse-index").children(
        chapter
            .verse_numbers()
            .map(|v| link(&Route::verse(chapter.chapter_number, v), v.to_string())),
    )
}
