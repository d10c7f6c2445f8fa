//! Chapter and verse records as returned by the API
//!
//! These are pass-through projections: nothing here is validated beyond the
//! JSON shape, and nothing is mutated after it is fetched.

use serde::{Deserialize, Serialize};

/// Default language used when picking translations for display
pub const DEFAULT_LANGUAGE: &str = "english";

/// Number of chapters in the text
pub const CHAPTER_COUNT: u32 = 18;

/// One of the eighteen chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Record identifier
    pub id: u32,
    /// Ordinal number, 1-18
    pub chapter_number: u32,
    /// Name in Devanagari
    pub name: String,
    /// Name in Latin transliteration
    pub name_transliterated: String,
    /// English rendering of the name
    #[serde(default)]
    pub name_translated: Option<String>,
    /// Short meaning of the name
    #[serde(default)]
    pub name_meaning: Option<String>,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Free-text summary
    #[serde(default)]
    pub chapter_summary: String,
    /// Summary in Hindi
    #[serde(default)]
    pub chapter_summary_hindi: Option<String>,
    /// Number of verses in this chapter
    pub verses_count: u32,
}

impl Chapter {
    /// Verse numbers in this chapter, in order
    pub fn verse_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.verses_count
    }
}

/// A language-tagged rendering of a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Record identifier
    #[serde(default)]
    pub id: Option<u32>,
    /// Language tag, e.g. "english"
    pub language: String,
    /// Translator
    pub author_name: String,
    /// Translated text
    pub description: String,
}

/// Author-attributed explanatory prose for a verse
///
/// `description` may contain HTML and must be sanitized before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// Record identifier
    #[serde(default)]
    pub id: Option<u32>,
    /// Commentator
    pub author_name: String,
    /// Commentary body (HTML-bearing)
    #[serde(default)]
    pub description: String,
    /// Language tag
    #[serde(default)]
    pub language: Option<String>,
}

/// A single numbered verse with its translations and commentaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Record identifier
    pub id: u32,
    /// Parent chapter number
    pub chapter_number: u32,
    /// Ordinal verse number within the chapter
    pub verse_number: u32,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Verse text in Devanagari
    pub text: String,
    /// Latin transliteration
    #[serde(default)]
    pub transliteration: Option<String>,
    /// Word-by-word meanings
    #[serde(default)]
    pub word_meanings: Option<String>,
    /// Translations in API order
    #[serde(default)]
    pub translations: Vec<Translation>,
    /// Commentaries in API order
    #[serde(default)]
    pub commentaries: Vec<Commentary>,
}

impl Verse {
    /// First translation in `language`, used for summary display
    pub fn first_translation(&self, language: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.language == language)
    }

    /// All translations in `language`, in API order
    pub fn translations_in<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a Translation> {
        self.translations.iter().filter(move |t| t.language == language)
    }
}
