//! Chapter listing screen

use crate::components::{heading, paragraph, skeleton, Element};
use crate::navigation::Route;
use app_state::ViewState;
use gita_client::Chapter;

/// Placeholder cards shown while the chapter list loads
pub const SKELETON_CARDS: usize = 18;

/// Card linking to one chapter; `with_summary` adds the summary text
pub fn chapter_card(chapter: &Chapter, with_summary: bool) -> Element {
    let card = Element::new("a")
        .with_class("card chapter-card")
        .with_attr("href", Route::chapter(chapter.chapter_number).to_path())
        .child(
            Element::new("p")
                .with_class("accent")
                .text(format!("Chapter {}", chapter.chapter_number)),
        )
        .child(heading(3, &chapter.name_transliterated))
        .child(
            paragraph(format!("{} Verses", chapter.verses_count)).with_class("muted"),
        );

    if with_summary {
        card.child(paragraph(&chapter.chapter_summary).with_class("summary"))
    } else {
        card
    }
}

/// Grid of chapter cards for a chapter-list view-state
pub fn chapter_grid(state: &ViewState<Vec<Chapter>>, skeletons: usize, with_summary: bool) -> Element {
    let grid = Element::new("div").with_id("chapters-grid").with_class("grid");

    match state {
        ViewState::Loading => grid.children((0..skeletons).map(|_| skeleton("card"))),
        ViewState::Error(message) => grid.child(paragraph(message).with_class("error")),
        ViewState::Success(chapters) => {
            grid.children(chapters.iter().map(|c| chapter_card(c, with_summary)))
        }
    }
}

/// `/chapters`
pub fn chapters(state: &ViewState<Vec<Chapter>>) -> Element {
    Element::new("main")
        .child(
            Element::new("div")
                .with_class("page-intro")
                .child(heading(1, "The 18 Chapters of the Gita"))
                .child(
                    paragraph("Click on a chapter to read its verses and summary.")
                        .with_class("muted"),
                ),
        )
        .child(chapter_grid(state, SKELETON_CARDS, true))
}
