// Configuration file loading
//
// Example `config.yaml`:
//
//   data_dir: ~/sc2/data
//   output_dir: ~/Documents/StarCraft II/Accounts/Hotkeys
//   prefix: shift
//   grid:
//     - "q w e r t"
//     - "a s d f g"
//     - "z x c v b"

use std::fs;
use std::path::{Path, PathBuf};

use gridkeys_core::{Faction, FileSystemSources, GenerateError, Grid, Modifier};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Data directory used when neither flags nor config name one
pub const DEFAULT_DATA_DIR: &str = "data";

/// Explicit keyword list locations, one per race
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordPaths {
    pub protoss: Option<PathBuf>,
    pub terran: Option<PathBuf>,
    pub zerg: Option<PathBuf>,
}

impl KeywordPaths {
    fn get(&self, faction: Faction) -> Option<&PathBuf> {
        match faction {
            Faction::Protoss => self.protoss.as_ref(),
            Faction::Terran => self.terran.as_ref(),
            Faction::Zerg => self.zerg.as_ref(),
            Faction::All => None,
        }
    }
}

/// Settings read from the optional YAML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridkeysConfig {
    pub data_dir: Option<PathBuf>,
    pub keywords: KeywordPaths,
    pub raw_pairings: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Modifier name, e.g. `shift`
    pub prefix: Option<String>,
    /// Three rows of five whitespace-separated keys
    pub grid: Option<Vec<String>>,
}

impl GridkeysConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gridkeys").join("config.yaml"))
    }

    /// Load the config file
    ///
    /// An explicitly given path must exist. The default path is optional.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> CliResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the hotkey data sources
    ///
    /// Explicit paths win; anything left unset is discovered in the data
    /// directory (`data_dir_override`, then `data_dir`, then `./data`).
    pub fn sources(&self, data_dir_override: Option<&Path>) -> CliResult<FileSystemSources> {
        let explicit: Option<Vec<&PathBuf>> = Faction::RACES
            .iter()
            .map(|race| self.keywords.get(*race))
            .chain(std::iter::once(self.raw_pairings.as_ref()))
            .collect();

        if let Some(paths) = explicit {
            return Ok(FileSystemSources::new(
                paths[0].clone(),
                paths[1].clone(),
                paths[2].clone(),
                paths[3].clone(),
            ));
        }

        let data_dir = data_dir_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let mut sources = FileSystemSources::discover(&data_dir).map_err(GenerateError::from)?;
        for race in Faction::RACES {
            if let Some(path) = self.keywords.get(race) {
                sources = sources.with_keyword_path(race, path.clone());
            }
        }
        if let Some(path) = &self.raw_pairings {
            sources = sources.with_raw_path(path.clone());
        }

        Ok(sources)
    }

    /// The configured destination grid, if any
    pub fn grid(&self) -> CliResult<Option<Grid>> {
        self.grid
            .as_ref()
            .map(|rows| Grid::from_rows(rows).map_err(|e| CliError::Config(e.to_string())))
            .transpose()
    }

    /// The configured prefix modifier, if any
    pub fn modifier(&self) -> CliResult<Option<Modifier>> {
        self.prefix
            .as_deref()
            .map(|name| {
                name.parse::<Modifier>()
                    .map_err(|e| CliError::Config(e.to_string()))
            })
            .transpose()
    }
}
