//! Typed translation maps for localized page content.
//!
//! A `Translation` is an insertion-ordered list of per-language strings.
//! Resolution prefers the current language and otherwise falls back to
//! the first inserted entry — that rule is deliberate and tests depend
//! on it, so it must not be "fixed" into alphabetical or declaration
//! order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Languages the portal under test can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// BCP 47 primary language subtag, as the browser locale uses it.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One localized string, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    entries: Vec<(Language, String)>,
}

impl Translation {
    pub fn new() -> Self {
        Translation::default()
    }

    /// Adds (or replaces, keeping its position) the entry for
    /// `language`.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        let text = text.into();
        match self.entries.iter_mut().find(|(lang, _)| *lang == language) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((language, text)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `language`, falling back to the first inserted
    /// entry when that language is absent.
    pub fn resolve(&self, language: Language) -> Option<&str> {
        self.entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .or_else(|| self.entries.first())
            .map(|(_, text)| text.as_str())
    }
}

/// The current display language, passed explicitly into whatever needs
/// translated content. One context per fixture instead of a hidden
/// global, so parallel workers cannot race on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageContext {
    current: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        LanguageContext { current: language }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Resolves a translation against the current language; an empty
    /// translation yields an empty string.
    pub fn translate<'a>(&self, translation: &'a Translation) -> &'a str {
        translation.resolve(self.current).unwrap_or("")
    }

    /// Looks up a domain key in an enum-keyed translation map. A missing
    /// key warns and falls back to the key's debug form, so untranslated
    /// values stay visible in assertions instead of vanishing.
    pub fn translate_keyed<K>(&self, key: &K, translations: &HashMap<K, Translation>) -> String
    where
        K: Eq + Hash + fmt::Debug,
    {
        match translations.get(key) {
            Some(translation) => self.translate(translation).to_string(),
            None => {
                eprintln!("No translation found for key: {key:?}");
                format!("{key:?}")
            }
        }
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        LanguageContext::new(Language::En)
    }
}
