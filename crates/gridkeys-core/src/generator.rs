//! Profile generation pipeline: classify, filter, remap

use crate::catalog::KeywordCatalog;
use crate::classifier::FactionClassifier;
use crate::error::GenerateError;
use crate::grid::{Grid, GridRemapper};
use crate::models::{Faction, Modifier};
use crate::sources::SourceProvider;
use crate::store::PairingStore;
use crate::writer::Profile;

/// Parameters of one profile generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub faction: Faction,
    /// Destination grid; the default grid is used when `None`
    pub grid: Option<Grid>,
    /// Prepended to every remapped key, e.g. `Shift+`
    pub prefix: String,
    pub profile_name: String,
}

impl GenerationRequest {
    /// Create a request for the default grid with no prefix
    pub fn new(faction: Faction, profile_name: impl Into<String>) -> Self {
        GenerationRequest {
            faction,
            grid: None,
            prefix: String::new(),
            profile_name: profile_name.into(),
        }
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Prefix every key with a modifier, e.g. `Shift+Q`
    pub fn with_modifier(self, modifier: Modifier) -> Self {
        self.with_prefix(modifier.prefix())
    }
}

/// Counts reported after a generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Raw pairings available
    pub loaded: usize,
    /// Pairings kept for the requested faction
    pub retained: usize,
    /// Retained pairings whose key was on the grid
    pub remapped: usize,
}

/// Generates hotkey profiles from a keyword catalog and raw pairings
#[derive(Debug, Clone)]
pub struct HotkeyGenerator {
    classifier: FactionClassifier,
    store: PairingStore,
}

impl HotkeyGenerator {
    /// Create a generator from already loaded inputs
    pub fn new(catalog: KeywordCatalog, store: PairingStore) -> Self {
        HotkeyGenerator {
            classifier: FactionClassifier::new(catalog),
            store,
        }
    }

    /// Load every input from a source provider
    pub fn load(sources: &dyn SourceProvider) -> Result<Self, GenerateError> {
        let catalog = KeywordCatalog::load(sources)?;
        let store = PairingStore::load(sources)?;
        tracing::info!(
            keywords = catalog.len(),
            pairings = store.len(),
            "Loaded hotkey sources"
        );
        Ok(Self::new(catalog, store))
    }

    /// Trace the classification of every pairing
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.classifier = self.classifier.verbose(verbose);
        self
    }

    /// Generate the profile described by `request`
    pub fn generate(&self, request: &GenerationRequest) -> Result<Profile, GenerateError> {
        self.generate_with_summary(request).map(|(profile, _)| profile)
    }

    /// Generate a profile and report how many pairings survived each stage
    pub fn generate_with_summary(
        &self,
        request: &GenerationRequest,
    ) -> Result<(Profile, GenerationSummary), GenerateError> {
        // Reject a bad name before doing any work
        let profile = Profile::new(request.profile_name.clone(), Vec::new())?;

        let retained = self.store.filter_by_faction(request.faction, &self.classifier);
        let remapper = GridRemapper::new(request.grid.clone(), request.prefix.clone());
        let hotkeys = remapper.remap(&retained);

        let summary = GenerationSummary {
            loaded: self.store.len(),
            retained: retained.len(),
            remapped: hotkeys.len(),
        };
        tracing::info!(
            faction = %request.faction,
            loaded = summary.loaded,
            retained = summary.retained,
            remapped = summary.remapped,
            "Generated profile {}",
            profile.name
        );

        Ok((Profile { hotkeys, ..profile }, summary))
    }

    pub fn classifier(&self) -> &FactionClassifier {
        &self.classifier
    }

    pub fn store(&self) -> &PairingStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pairing;
    use crate::sources::InMemorySources;

    #[test]
    fn test_generate_protoss_with_identity_grid() {
        let catalog = KeywordCatalog::new()
            .with_keywords(Faction::Protoss, ["probe"])
            .with_keywords(Faction::Terran, Vec::<&str>::new())
            .with_keywords(Faction::Zerg, Vec::<&str>::new());
        let store = PairingStore::from_raw(&["Probe=Q", "Build=A"]).unwrap();
        let generator = HotkeyGenerator::new(catalog, store);

        let profile = generator
            .generate(&GenerationRequest::new(Faction::Protoss, "protoss"))
            .unwrap();

        assert_eq!(
            profile.hotkeys,
            vec![Pairing::new("Probe", "Q"), Pairing::new("Build", "A")]
        );
    }

    #[test]
    fn test_load_from_memory_with_prefix() {
        let sources = InMemorySources::new()
            .with_keywords(Faction::Protoss, "Probe\n")
            .with_keywords(Faction::Terran, "SCV\n")
            .with_keywords(Faction::Zerg, "Drone\n")
            .with_raw_pairings(r#"{"raw": ["Probe=E", "SCV=S", "Stop=S", "Chat=Enter"]}"#);
        let generator = HotkeyGenerator::load(&sources).unwrap();

        let request = GenerationRequest::new(Faction::Terran, "TerranShift")
            .with_modifier(Modifier::Shift);
        let (profile, summary) = generator.generate_with_summary(&request).unwrap();

        assert_eq!(
            profile.hotkeys,
            vec![Pairing::new("SCV", "Shift+S"), Pairing::new("Stop", "Shift+S")]
        );
        assert_eq!(
            summary,
            GenerationSummary {
                loaded: 4,
                retained: 3,
                remapped: 2
            }
        );
    }

    #[test]
    fn test_generate_rejects_bad_name() {
        let generator = HotkeyGenerator::new(KeywordCatalog::new(), PairingStore::default());
        let result = generator.generate(&GenerationRequest::new(Faction::Zerg, ""));
        assert!(matches!(result, Err(GenerateError::Profile(_))));
    }
}
