//! Verse detail screen: text, translations, commentaries, prev/next

use super::language_label;
use crate::components::{error_panel, heading, link, paragraph, skeleton, Element, INVISIBLE};
use crate::navigation::Route;
use crate::sanitize::sanitize_html;
use app_state::{VerseDetail, ViewState};
use gita_client::Verse;

/// Shown when a verse has no commentary records
pub const NO_COMMENTARIES: &str = "No commentaries available for this verse.";

/// Shown for a commentary with an empty body
pub const COMMENTARY_MISSING: &str = "Commentary not available.";

/// Previous/next links for a verse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseNav {
    /// Chapter both links stay within
    pub chapter: u32,
    /// Current verse
    pub verse: u32,
    /// Whether a previous verse exists
    pub show_prev: bool,
    /// Whether a next verse exists
    pub show_next: bool,
}

impl VerseNav {
    /// Navigation for a loaded verse
    pub fn for_detail(detail: &VerseDetail) -> Self {
        Self {
            chapter: detail.verse.chapter_number,
            verse: detail.verse.verse_number,
            show_prev: detail.show_prev(),
            show_next: detail.show_next(),
        }
    }

    /// Both links are always laid out; a missing neighbour is made invisible
    pub fn render(&self) -> Element {
        Element::new("div")
            .with_class("verse-nav")
            .child(
                link(&Route::verse(self.chapter, self.verse.saturating_sub(1)), "← Previous")
                    .with_id("prev-verse")
                    .with_class("button")
                    .with_class_if(!self.show_prev, INVISIBLE),
            )
            .child(
                link(&Route::verse(self.chapter, self.verse.saturating_add(1)), "Next →")
                    .with_id("next-verse")
                    .with_class("button")
                    .with_class_if(!self.show_next, INVISIBLE),
            )
    }
}

fn translations(verse: &Verse, language: &str) -> Element {
    let label = language_label(language);
    let section = Element::new("section")
        .with_class("translations")
        .child(heading(3, format!("Translations ({})", label)));

    let entries: Vec<Element> = verse
        .translations_in(language)
        .map(|t| {
            Element::new("div")
                .with_class("translation")
                .child(heading(4, &t.author_name))
                .child(paragraph(format!("\"{}\"", t.description)))
        })
        .collect();

    if entries.is_empty() {
        section.child(
            paragraph(format!("No {} translations available.", label)).with_class("muted"),
        )
    } else {
        section.children(entries)
    }
}

fn commentaries(verse: &Verse) -> Element {
    let section = Element::new("section")
        .with_class("commentaries")
        .child(heading(3, "Commentaries"));

    if verse.commentaries.is_empty() {
        return section.child(paragraph(NO_COMMENTARIES).with_class("muted"));
    }

    section.children(verse.commentaries.iter().map(|c| {
        let body = sanitize_html(&c.description);
        let content = if body.is_empty() {
            paragraph(COMMENTARY_MISSING)
        } else {
            Element::new("div").child(body)
        };

        Element::new("div")
            .with_class("commentary")
            .child(heading(4, &c.author_name))
            .child(content.with_class("commentary-body"))
    }))
}

/// `/verse/{chapterId}/{verseId}`
pub fn verse_detail(state: &ViewState<VerseDetail>, language: &str) -> Element {
    let main = Element::new("main").with_class("verse-detail");

    match state {
        ViewState::Loading => main
            .child(skeleton("title"))
            .child(skeleton("card verse")),
        ViewState::Error(message) => main.child(error_panel(message, true)),
        ViewState::Success(detail) => {
            let verse = &detail.verse;
            main.child(
                Element::new("div")
                    .with_class("page-intro")
                    .child(link(
                        &Route::chapter(verse.chapter_number),
                        format!("← Back to Chapter {}", verse.chapter_number),
                    ))
                    .child(heading(
                        1,
                        format!("Bhagavad Gita {}.{}", verse.chapter_number, verse.verse_number),
                    )),
            )
            .child(
                Element::new("article")
                    .with_class("card")
                    .child(paragraph(&verse.text).with_class("sanskrit"))
                    .child(Element::new("hr"))
                    .child(translations(verse, language))
                    .child(Element::new("hr"))
                    .child(commentaries(verse)),
            )
            .child(VerseNav::for_detail(detail).render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Node;
    use gita_client::fixtures;

    fn detail(chapter: u32, verse: u32) -> VerseDetail {
        VerseDetail {
            verse: fixtures::verse(chapter, verse),
            chapter: fixtures::canonical_chapter(chapter),
        }
    }

    fn render(detail: VerseDetail) -> Node {
        verse_detail(&ViewState::Success(detail), "english").into()
    }

    #[test]
    fn test_first_verse_hides_previous() {
        let node = render(detail(2, 1));

        let prev = node.find_by_id("prev-verse").unwrap();
        let next = node.find_by_id("next-verse").unwrap();
        assert!(prev.has_class(INVISIBLE));
        assert!(!next.has_class(INVISIBLE));
        assert_eq!(next.attr("href"), Some("/verse/2/2"));
    }

    #[test]
    fn test_last_verse_hides_next() {
        let node = render(detail(2, 72));

        assert!(!node.find_by_id("prev-verse").unwrap().has_class(INVISIBLE));
        assert!(node.find_by_id("next-verse").unwrap().has_class(INVISIBLE));
        assert_eq!(node.find_by_id("prev-verse").unwrap().attr("href"), Some("/verse/2/71"));
    }

    #[test]
    fn test_hidden_nav_not_in_text_output() {
        let text = render(detail(18, 78)).render_text();
        assert!(text.contains("← Previous"));
        assert!(!text.contains("Next →"));
    }

    #[test]
    fn test_translations_filtered_by_language() {
        let mut d = detail(2, 47);
        d.verse.translations = vec![
            fixtures::translation("english", "Swami Sivananda", "Thy right is to work only"),
            fixtures::translation("hindi", "Swami Ramsukhdas", "कर्म में ही"),
            fixtures::translation("english", "Shri Purohit Swami", "Only the action concerns thee"),
        ];
        let node = render(d);

        let text = node.text_content();
        assert!(text.contains("Translations (English)"));
        assert!(text.contains("Swami Sivananda"));
        assert!(text.contains("Shri Purohit Swami"));
        assert!(!text.contains("Swami Ramsukhdas"));
    }

    #[test]
    fn test_no_translation_placeholder() {
        let mut d = detail(2, 47);
        d.verse.translations.clear();
        assert!(render(d).text_content().contains("No English translations available."));
    }

    #[test]
    fn test_no_commentary_placeholder() {
        let mut d = detail(2, 47);
        d.verse.commentaries.clear();
        assert!(render(d).text_content().contains(NO_COMMENTARIES));
    }

    #[test]
    fn test_empty_commentary_placeholder() {
        let mut d = detail(2, 47);
        d.verse.commentaries = vec![fixtures::commentary("Swami Sivananda", "")];
        assert!(render(d).text_content().contains(COMMENTARY_MISSING));
    }

    #[test]
    fn test_commentary_is_sanitized() {
        let mut d = detail(2, 47);
        d.verse.commentaries = vec![fixtures::commentary(
            "Swami Sivananda",
            r#"<p onmouseover="x()">Work <b>without</b> attachment.</p><script>steal()</script>"#,
        )];
        let html = render(d).render_html();

        assert!(html.contains("<p>Work <b>without</b> attachment.</p>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("steal"));
        assert!(!html.contains("onmouseover"));
    }

    #[test]
    fn test_back_link_and_heading() {
        let node = render(detail(2, 47));
        assert!(node.links().contains(&"/chapter/2"));
        assert!(node.text_content().contains("Bhagavad Gita 2.47"));
    }

    #[test]
    fn test_error_state() {
        let message = "Invalid Chapter/Verse ID.";
        let node: Node = verse_detail(&ViewState::Error(message.to_string()), "english").into();

        assert!(node.text_content().contains(message));
        assert_eq!(node.links(), vec!["/chapters"]);
        assert!(node.find_by_id("prev-verse").is_none());
    }

    #[test]
    fn test_nav_at_numeric_limit() {
        let d = VerseDetail {
            verse: fixtures::verse(2, u32::MAX),
            chapter: fixtures::chapter(2, u32::MAX),
        };
        let node = render(d);

        let next = node.find_by_id("next-verse").unwrap();
        assert!(next.has_class(INVISIBLE));
        assert_eq!(next.attr("href"), Some(format!("/verse/2/{}", u32::MAX).as_str()));
        let prev = node.find_by_id("prev-verse").unwrap();
        assert_eq!(prev.attr("href"), Some(format!("/verse/2/{}", u32::MAX - 1).as_str()));
    }

    #[test]
    fn test_nav_for_single_verse_chapter() {
        let d = VerseDetail {
            verse: fixtures::verse(1, 1),
            chapter: fixtures::chapter(1, 1),
        };
        let nav = VerseNav::for_detail(&d);
        assert!(!nav.show_prev);
        assert!(!nav.show_next);
    }
}
