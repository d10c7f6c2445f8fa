//! Test fixtures for chapter and verse records
//!
//! Shared by the unit and integration tests of every crate in the workspace
//! so that the record shapes stay in one place.

use crate::types::{Chapter, Commentary, Translation, Verse};

/// Verse counts for all eighteen chapters, in order
pub const VERSE_COUNTS: [u32; 18] = [47, 72, 43, 42, 29, 47, 30, 28, 34, 42, 55, 20, 35, 27, 20, 24, 28, 78];

/// Transliterated chapter names, in order
pub const CHAPTER_NAMES: [&str; 18] = [
    "Arjun Viṣhād Yog",
    "Sānkhya Yog",
    "Karm Yog",
    "Jñāna Karm Sanyās Yog",
    "Karm Sanyās Yog",
    "Dhyān Yog",
    "Jñāna Vijñāna Yog",
    "Akṣhar Brahma Yog",
    "Rāja Vidyā Yog",
    "Vibhūti Yog",
    "Viśhwarūp Darśhan Yog",
    "Bhakti Yog",
    "Kṣhetra Kṣhetrajña Vibhāg Yog",
    "Guṇa Traya Vibhāg Yog",
    "Puruṣhottam Yog",
    "Daivāsura Sampad Vibhāg Yog",
    "Śhraddhā Traya Vibhāg Yog",
    "Mokṣha Sanyās Yog",
];

/// Build a chapter record with the given number and verse count
pub fn chapter(number: u32, verses_count: u32) -> Chapter {
    let name = CHAPTER_NAMES
        .get(number.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown Yog");

    Chapter {
        id: number,
        chapter_number: number,
        name: format!("अध्याय {}", number),
        name_transliterated: name.to_string(),
        name_translated: None,
        name_meaning: None,
        slug: Some(format!("chapter-{}", number)),
        chapter_summary: format!("Summary of chapter {}.", number),
        chapter_summary_hindi: None,
        verses_count,
    }
}

/// The canonical record for chapter `number` (1-18)
pub fn canonical_chapter(number: u32) -> Chapter {
    let count = VERSE_COUNTS
        .get(number.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(0);
    chapter(number, count)
}

/// All eighteen canonical chapters
pub fn all_chapters() -> Vec<Chapter> {
    (1..=18).map(canonical_chapter).collect()
}

/// Build a translation record
pub fn translation(language: &str, author: &str, description: &str) -> Translation {
    Translation {
        id: None,
        language: language.to_string(),
        author_name: author.to_string(),
        description: description.to_string(),
    }
}

/// Build a commentary record
pub fn commentary(author: &str, description: &str) -> Commentary {
    Commentary {
        id: None,
        author_name: author.to_string(),
        description: description.to_string(),
        language: Some("english".to_string()),
    }
}

/// Build a verse with one English translation and one commentary
pub fn verse(chapter_number: u32, verse_number: u32) -> Verse {
    Verse {
        id: chapter_number.saturating_mul(100).saturating_add(verse_number),
        chapter_number,
        verse_number,
        slug: None,
        text: format!("श्लोक {}.{}", chapter_number, verse_number),
        transliteration: None,
        word_meanings: None,
        translations: vec![translation(
            "english",
            "Swami Sivananda",
            &format!("Translation of {}.{}", chapter_number, verse_number),
        )],
        commentaries: vec![commentary(
            "Swami Sivananda",
            &format!("<p>Commentary on {}.{}</p>", chapter_number, verse_number),
        )],
    }
}
