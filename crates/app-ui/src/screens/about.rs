//! Static about page

use crate::components::{heading, paragraph, Element};

/// Document title while the about page is shown
pub const ABOUT_TITLE: &str = "About - Bhagavad Gita";

/// `/about`
pub fn about() -> Element {
    let intro = Element::new("p")
        .text("The ")
        .child(Element::new("strong").text("Bhagavad Gita"))
        .text(
            ", often referred to as the Gita, is a 700-verse Hindu scripture that is part of \
             the ancient Sanskrit epic, the Mahabharata. This scripture contains a conversation \
             between Prince Arjuna and his charioteer Krishna, who is an avatar of the god Vishnu.",
        );

    Element::new("main").with_class("about").child(
        Element::new("article")
            .with_class("card prose")
            .child(heading(1, "About the Bhagavad Gita"))
            .child(intro)
            .child(paragraph(
                "Set in a narrative framework of a dialogue between Pandava prince Arjuna and his \
                 guide and charioteer Krishna, the Bhagavad Gita presents a synthesis of different \
                 ideas about dharma, theistic bhakti, and the yogic paths to moksha (liberation).",
            ))
            .child(Element::new("blockquote").child(paragraph(
                "It is a discourse on the nature of reality, the purpose of life, and the path to \
                 spiritual enlightenment.",
            )))
            .child(paragraph(
                "The Gita's call for selfless action inspired many leaders of the Indian \
                 independence movement, including Mahatma Gandhi, who referred to the Gita as his \
                 \"spiritual dictionary.\" This website is a humble effort to make the profound \
                 wisdom of the Gita accessible to everyone.",
            )),
    )
}
