//! Per-faction keyword catalogs of unit and building names

use std::collections::BTreeMap;

use crate::error::SourceError;
use crate::models::Faction;
use crate::sources::SourceProvider;

/// Ordered, lowercase, alphabetic-only name fragments for one faction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set from a freeform list, one name per line
    ///
    /// Every non-alphabetic character is stripped and lines that end up
    /// empty are skipped. Line order is kept; duplicates are allowed.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Normalize a single entry, returning `None` if nothing is left
    pub fn normalize(entry: &str) -> Option<String> {
        let cleaned: String = entry
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }

    /// Iterate keywords in source order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet {
            keywords: iter
                .into_iter()
                .filter_map(|entry| KeywordSet::normalize(entry.as_ref()))
                .collect(),
        }
    }
}

/// Keyword sets for every race
#[derive(Debug, Clone, Default)]
pub struct KeywordCatalog {
    sets: BTreeMap<Faction, KeywordSet>,
}

impl KeywordCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one keyword list per race from a source provider
    ///
    /// Fails with [`SourceError::NotFound`] if any race's list is missing.
    pub fn load(sources: &dyn SourceProvider) -> Result<Self, SourceError> {
        let mut catalog = KeywordCatalog::new();

        for race in Faction::RACES {
            let text = sources.read_keywords(race)?;
            let set = KeywordSet::from_text(&text);
            if set.is_empty() {
                tracing::warn!(faction = %race, "Keyword list is empty; only its race name will match");
            } else {
                tracing::debug!(faction = %race, keywords = set.len(), "Loaded keyword list");
            }
            catalog.sets.insert(race, set);
        }

        Ok(catalog)
    }

    /// Build a catalog from in-memory keyword lists
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = (Faction, &'a str)>) -> Self {
        let mut catalog = KeywordCatalog::new();
        for (faction, text) in texts {
            catalog.sets.insert(faction, KeywordSet::from_text(text));
        }
        catalog
    }

    /// Replace a faction's keywords, normalizing each entry
    pub fn with_keywords<S: AsRef<str>>(
        mut self,
        faction: Faction,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.sets.insert(faction, keywords.into_iter().collect());
        self
    }

    /// Keywords for a faction, empty if none were loaded
    pub fn keywords(&self, faction: Faction) -> Option<&KeywordSet> {
        self.sets.get(&faction)
    }

    /// Total number of keywords across all factions
    pub fn len(&self) -> usize {
        self.sets.values().map(KeywordSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
