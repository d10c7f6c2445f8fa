//! Theme store
//!
//! One process-wide light/dark preference. It is seeded once from persisted
//! storage (falling back to the platform appearance), toggled by the user,
//! and mirrored onto the document root as the `dark` class.
//!
//! Storage failures are never fatal: a failed read falls back to the platform
//! appearance and a failed write still flips the in-memory theme.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use storage::{PreferenceStore, THEME_KEY};

/// Class placed on the document root while the dark theme is active
pub const DARK_CLASS: &str = "dark";

// =============================================================================
// Theme Name
// =============================================================================

/// Light or dark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Persisted and CSS color-scheme value
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Whether this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Colors for this theme
    pub fn palette(&self) -> Palette {
        match self {
            ThemeName::Light => Palette {
                background: "#F9FAFB",
                surface: "#FFFFFF",
                text: "#111827",
                muted: "#6B7280",
                accent: "#EA580C",
                border: "#E5E7EB",
            },
            ThemeName::Dark => Palette {
                background: "#030712",
                surface: "#1F2937",
                text: "#F9FAFB",
                muted: "#9CA3AF",
                accent: "#FB923C",
                border: "#374151",
            },
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Theme colors used by the document stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Page background
    pub background: &'static str,
    /// Card background
    pub surface: &'static str,
    /// Body text
    pub text: &'static str,
    /// Secondary text
    pub muted: &'static str,
    /// Links and highlights
    pub accent: &'static str,
    /// Card borders and rules
    pub border: &'static str,
}

// =============================================================================
// Platform Appearance
// =============================================================================

/// The platform's dark-mode preference
pub trait AppearanceSource: Send + Sync {
    /// Whether the platform prefers a dark appearance
    fn prefers_dark(&self) -> bool;
}

/// A fixed answer (tests, or an explicit override)
#[derive(Debug, Clone, Copy)]
pub struct FixedAppearance(pub bool);

impl AppearanceSource for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reads `GITA_COLOR_SCHEME` (`dark` or `light`); anything else means light
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAppearance;

impl SystemAppearance {
    /// Environment variable consulted
    pub const ENV_VAR: &'static str = "GITA_COLOR_SCHEME";

    fn interpret(value: Option<&str>) -> bool {
        value.is_some_and(|v| v.trim().eq_ignore_ascii_case("dark"))
    }
}

impl AppearanceSource for SystemAppearance {
    fn prefers_dark(&self) -> bool {
        Self::interpret(std::env::var(Self::ENV_VAR).ok().as_deref())
    }
}

// =============================================================================
// Document Root
// =============================================================================

/// Class list of the document's root element
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    classes: Arc<RwLock<BTreeSet<String>>>,
}

impl DocumentRoot {
    /// Empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a class
    pub fn set_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.write();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    /// Whether a class is present
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().contains(class)
    }

    /// All classes, sorted
    pub fn classes(&self) -> Vec<String> {
        self.classes.read().iter().cloned().collect()
    }
}

// =============================================================================
// Theme Store
// =============================================================================

/// Process-wide theme preference
pub struct ThemeStore {
    current: RwLock<ThemeName>,
    // Orders toggles so the last one persisted is the one left in `current`.
    persist: Mutex<()>,
    preferences: Arc<dyn PreferenceStore>,
    root: DocumentRoot,
}

impl ThemeStore {
    /// Seed the theme from persisted storage, else from the platform
    ///
    /// A persisted `"dark"` selects dark; any other persisted value selects
    /// light; no persisted value defers to the platform.
    pub fn initialize(
        preferences: Arc<dyn PreferenceStore>,
        platform: &dyn AppearanceSource,
        root: DocumentRoot,
    ) -> Self {
        let theme = match preferences.get_string(THEME_KEY) {
            Ok(Some(stored)) => {
                if stored == ThemeName::Dark.color_scheme() {
                    ThemeName::Dark
                } else {
                    ThemeName::Light
                }
            }
            Ok(None) => Self::from_platform(platform),
            Err(error) => {
                tracing::warn!(%error, "could not read theme preference, using platform appearance");
                Self::from_platform(platform)
            }
        };

        tracing::debug!(theme = theme.color_scheme(), "theme initialized");
        root.set_class(DARK_CLASS, theme.is_dark());

        Self { current: RwLock::new(theme), persist: Mutex::new(()), preferences, root }
    }

    fn from_platform(platform: &dyn AppearanceSource) -> ThemeName {
        if platform.prefers_dark() {
            ThemeName::Dark
        } else {
            ThemeName::Light
        }
    }

    /// Current theme
    pub fn current(&self) -> ThemeName {
        *self.current.read()
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// The document root this store drives
    pub fn document_root(&self) -> &DocumentRoot {
        &self.root
    }

    /// Flip the theme, persist it, and update the document root
    ///
    /// Readers are not blocked while the preference is written.
    pub fn toggle(&self) -> ThemeName {
        let _persist = self.persist.lock();
        let next = {
            let mut current = self.current.write();
            *current = current.toggled();
            *current
        };

        // The marker is set from the new value rather than flipped, so it
        // cannot drift from `current`.
        self.root.set_class(DARK_CLASS, next.is_dark());

        if let Err(error) = self.preferences.set_string(THEME_KEY, next.color_scheme()) {
            tracing::warn!(%error, "could not persist theme preference");
        }

        tracing::info!(theme = next.color_scheme(), "theme toggled");
        next
    }
}
