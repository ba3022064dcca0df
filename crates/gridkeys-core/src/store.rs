//! Raw pairing storage and faction filtering

use crate::classifier::FactionClassifier;
use crate::error::{GenerateError, PairingError, SourceError};
use crate::models::{Faction, Pairing};
use crate::sources::SourceProvider;

/// Keep the pairings that belong to `target` or are shared by all races
///
/// Order is preserved and nothing is deduplicated.
pub fn filter_by_faction(
    pairings: &[Pairing],
    target: Faction,
    classifier: &FactionClassifier,
) -> Vec<Pairing> {
    pairings
        .iter()
        .filter(|pairing| classifier.classify_pairing(pairing).is_retained_for(target))
        .cloned()
        .collect()
}

/// The full raw set of ability-to-key pairings
#[derive(Debug, Clone, Default)]
pub struct PairingStore {
    pairings: Vec<Pairing>,
}

impl PairingStore {
    /// Create a store from parsed pairings
    pub fn new(pairings: Vec<Pairing>) -> Self {
        PairingStore { pairings }
    }

    /// Load the raw pairing document from a source provider
    pub fn load(sources: &dyn SourceProvider) -> Result<Self, GenerateError> {
        let content = sources.read_raw_pairings()?;
        let store = Self::from_json(&content)?;
        tracing::debug!(pairings = store.len(), "Loaded raw pairings");
        Ok(store)
    }

    /// Parse a `{"raw": ["label=KEY", ...]}` document
    pub fn from_json(content: &str) -> Result<Self, GenerateError> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| SourceError::InvalidJson(e.to_string()))?;

        let raw = value
            .get("raw")
            .and_then(|v| v.as_array())
            .ok_or_else(|| SourceError::MissingField("raw".to_string()))?;

        let mut pairings = Vec::with_capacity(raw.len());
        for (idx, item) in raw.iter().enumerate() {
            let text = item.as_str().ok_or_else(|| PairingError::EntryError {
                index: idx,
                message: format!("expected a string, got {}", item),
            })?;
            pairings.push(Pairing::parse(text)?);
        }

        Ok(PairingStore { pairings })
    }

    /// Parse raw pairing strings
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Result<Self, PairingError> {
        let pairings = raw
            .iter()
            .map(|s| Pairing::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PairingStore { pairings })
    }

    /// Pairings relevant to `target`, in their original order
    pub fn filter_by_faction(&self, target: Faction, classifier: &FactionClassifier) -> Vec<Pairing> {
        filter_by_faction(&self.pairings, target, classifier)
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}
