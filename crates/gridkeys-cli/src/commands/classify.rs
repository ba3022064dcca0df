// Faction classification command

use std::path::PathBuf;

use gridkeys_core::{Faction, HotkeyGenerator, Pairing};

use super::Command;
use crate::config::GridkeysConfig;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Show which faction each pairing is classified as
pub struct ClassifyCommand {
    /// Pairings or bare labels; every raw pairing when empty
    pub labels: Vec<String>,
    pub data_dir: Option<PathBuf>,
    pub config: GridkeysConfig,
}

impl ClassifyCommand {
    pub fn new(labels: Vec<String>, data_dir: Option<PathBuf>, config: GridkeysConfig) -> Self {
        Self {
            labels,
            data_dir,
            config,
        }
    }

    /// Classify the requested labels, or every raw pairing
    pub fn classify_all(&self, generator: &HotkeyGenerator) -> Vec<(String, Faction)> {
        let classifier = generator.classifier();

        if self.labels.is_empty() {
            return generator
                .store()
                .pairings()
                .iter()
                .map(|pairing| (pairing.to_string(), classifier.classify_pairing(pairing)))
                .collect();
        }

        self.labels
            .iter()
            .map(|text| {
                let faction = match Pairing::parse(text) {
                    Ok(pairing) => classifier.classify_pairing(&pairing),
                    Err(_) => classifier.classify_label(text),
                };
                (text.clone(), faction)
            })
            .collect()
    }
}

impl Command for ClassifyCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let sources = self.config.sources(self.data_dir.as_deref())?;
        let generator = HotkeyGenerator::load(&sources)?;

        let results = self.classify_all(&generator);
        let width = results.iter().map(|(text, _)| text.len()).max().unwrap_or(0);
        for (text, faction) in &results {
            println!("{:<width$}  {}", text, style.faction(faction.name()), width = width);
        }

        Ok(())
    }
}
