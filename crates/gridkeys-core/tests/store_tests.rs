use gridkeys_core::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> FactionClassifier {
        FactionClassifier::new(
            KeywordCatalog::new()
                .with_keywords(Faction::Protoss, ["Probe", "Nexus"])
                .with_keywords(Faction::Terran, ["SCV", "Barracks"])
                .with_keywords(Faction::Zerg, ["Drone", "Hatchery"]),
        )
    }

    fn store() -> PairingStore {
        PairingStore::from_raw(&[
            "Probe=E",
            "Stop=S",
            "SCV=S",
            "Hatchery/Drone=D",
            "Nexus/Barracks=B",
            "Attack=A",
        ])
        .unwrap()
    }

    fn labels(pairings: &[Pairing]) -> Vec<&str> {
        pairings.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn test_filter_keeps_faction_and_shared_in_order() {
        let filtered = store().filter_by_faction(Faction::Protoss, &classifier());
        assert_eq!(labels(&filtered), vec!["Probe", "Stop", "Nexus/Barracks", "Attack"]);

        let filtered = store().filter_by_faction(Faction::Zerg, &classifier());
        assert_eq!(labels(&filtered), vec!["Stop", "Hatchery/Drone", "Nexus/Barracks", "Attack"]);
    }

    #[test]
    fn test_filter_all_keeps_only_shared() {
        let filtered = store().filter_by_faction(Faction::All, &classifier());
        assert_eq!(labels(&filtered), vec!["Stop", "Nexus/Barracks", "Attack"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let classifier = classifier();
        let once = store().filter_by_faction(Faction::Terran, &classifier);
        let twice = filter_by_faction(&once, Faction::Terran, &classifier);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let store = PairingStore::from_raw(&["Stop=S", "Stop=S"]).unwrap();
        assert_eq!(store.filter_by_faction(Faction::Zerg, &classifier()).len(), 2);
    }

    #[test]
    fn test_target_parsed_case_insensitively() {
        let target: Faction = "TERRAN".parse().unwrap();
        let filtered = store().filter_by_faction(target, &classifier());
        assert_eq!(labels(&filtered), vec!["Stop", "SCV", "Nexus/Barracks", "Attack"]);
    }
}
