//! Faction classification of pairing labels
//!
//! Classification is a substring heuristic over the label parts of a
//! pairing. A literal race name in a part wins outright. Otherwise every
//! keyword of every race is searched, and the first race to match is
//! kept unless a different race also matches, in which case the pairing
//! is treated as shared and classified as [`Faction::All`].
//!
//! Substring containment means a keyword buried inside an unrelated word
//! still matches. That is a known limitation of the heuristic.

use crate::catalog::KeywordCatalog;
use crate::models::{Faction, Pairing};

/// Classify a label, already split into its `/`-separated parts
///
/// Parts are scanned in order and races in [`Faction::RACES`] order.
/// Returns as soon as a race name is found or a second race's keyword
/// matches; otherwise returns the single matched race, or `All` if
/// nothing matched.
pub fn classify<S: AsRef<str>>(label_parts: &[S], catalog: &KeywordCatalog) -> Faction {
    let mut matched: Option<Faction> = None;

    for part in label_parts {
        let part = part.as_ref().to_lowercase();

        for race in Faction::RACES {
            if part.contains(race.name()) {
                return race;
            }

            let Some(keywords) = catalog.keywords(race) else {
                continue;
            };

            for keyword in keywords.iter() {
                if !part.contains(keyword) {
                    continue;
                }

                match matched {
                    Some(previous) if previous != race => {
                        tracing::debug!(
                            part = %part,
                            keyword,
                            first = %previous,
                            second = %race,
                            "Keywords of several factions matched, treating as shared"
                        );
                        return Faction::All;
                    }
                    _ => matched = Some(race),
                }
            }
        }
    }

    matched.unwrap_or(Faction::All)
}

/// Classifies pairings against a keyword catalog
#[derive(Debug, Clone, Default)]
pub struct FactionClassifier {
    catalog: KeywordCatalog,
    verbose: bool,
}

impl FactionClassifier {
    /// Create a classifier over a catalog
    pub fn new(catalog: KeywordCatalog) -> Self {
        FactionClassifier {
            catalog,
            verbose: false,
        }
    }

    /// Trace every classified pairing and its faction
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Classify a pairing by its label
    pub fn classify_pairing(&self, pairing: &Pairing) -> Faction {
        let faction = classify(&pairing.label_parts(), &self.catalog);
        self.trace(&pairing.to_string(), faction);
        faction
    }

    /// Classify a raw label string, splitting it on `/`
    pub fn classify_label(&self, label: &str) -> Faction {
        let parts: Vec<&str> = label.split('/').collect();
        let faction = classify(&parts, &self.catalog);
        self.trace(label, faction);
        faction
    }

    fn trace(&self, input: &str, faction: Faction) {
        if self.verbose {
            tracing::info!(input, faction = %faction, "Classified hotkey");
        }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> KeywordCatalog {
        KeywordCatalog::new()
            .with_keywords(Faction::Protoss, ["Probe", "Nexus", "Zealot"])
            .with_keywords(Faction::Terran, ["SCV", "Marine", "Barracks"])
            .with_keywords(Faction::Zerg, ["Drone", "Hatchery", "Zergling"])
    }

    #[test]
    fn test_single_keyword_match() {
        assert_eq!(classify(&["WarpInZealot"], &catalog()), Faction::Protoss);
    }

    #[test]
    fn test_race_name_short_circuits() {
        assert_eq!(classify(&["Terran Marine Build"], &catalog()), Faction::Terran);
        // Earlier parts matching another race do not matter once a name appears
        assert_eq!(classify(&["Probe", "ZergBuild"], &catalog()), Faction::Zerg);
    }

    #[test]
    fn test_keywords_of_two_races_are_shared() {
        assert_eq!(classify(&["Probe", "SCV"], &catalog()), Faction::All);
    }

    #[test]
    fn test_unmatched_and_empty_parts_are_shared() {
        assert_eq!(classify(&["Build"], &catalog()), Faction::All);
        assert_eq!(classify(&[""], &catalog()), Faction::All);
        assert_eq!(classify::<&str>(&[], &catalog()), Faction::All);
    }

    #[test]
    fn test_same_race_in_several_parts() {
        assert_eq!(classify(&["Probe", "Nexus"], &catalog()), Faction::Protoss);
    }

    #[test]
    fn test_classify_label_splits_on_slash() {
        let classifier = FactionClassifier::new(catalog());
        assert_eq!(classifier.classify_label("Hatchery/Drone"), Faction::Zerg);
        assert_eq!(classifier.classify_label("Hatchery/Barracks"), Faction::All);
    }
}
