//! Source providers for keyword lists and raw pairing data
//!
//! # Data Layout
//!
//! [`FileSystemSources::discover`] expects the bundled data directory
//! layout:
//!
//! ```text
//! data/
//! ├── raw-hotkeys.json          # {"raw": ["label/label=KEY", ...]}
//! └── units-buildings/
//!     ├── protoss.txt           # one unit or building name per line
//!     ├── terran.txt
//!     └── zerg.txt
//! ```
//!
//! Files are matched by name fragment, so `protoss-units-v2.txt` works as
//! well. Callers that know their paths should use
//! [`FileSystemSources::new`] instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::models::Faction;

/// Subdirectory of a data directory holding the keyword lists
pub const KEYWORD_SUBDIR: &str = "units-buildings";

/// Trait for reading the raw inputs of profile generation
pub trait SourceProvider: Send + Sync {
    /// Read the keyword list text for a race
    fn read_keywords(&self, faction: Faction) -> Result<String, SourceError>;

    /// Read the raw pairing JSON document
    fn read_raw_pairings(&self) -> Result<String, SourceError>;
}

/// File system backed sources with explicit paths
#[derive(Debug, Clone)]
pub struct FileSystemSources {
    keyword_paths: BTreeMap<Faction, PathBuf>,
    raw_path: PathBuf,
}

impl FileSystemSources {
    /// Create sources from explicit file paths
    pub fn new(
        protoss: impl Into<PathBuf>,
        terran: impl Into<PathBuf>,
        zerg: impl Into<PathBuf>,
        raw: impl Into<PathBuf>,
    ) -> Self {
        let mut keyword_paths = BTreeMap::new();
        keyword_paths.insert(Faction::Protoss, protoss.into());
        keyword_paths.insert(Faction::Terran, terran.into());
        keyword_paths.insert(Faction::Zerg, zerg.into());

        FileSystemSources {
            keyword_paths,
            raw_path: raw.into(),
        }
    }

    /// Locate every source inside a data directory by file name
    ///
    /// Keyword lists are the first file (by name) in `units-buildings/`
    /// whose name contains the race name. The raw pairings are the first
    /// file in the data directory whose name contains both `raw` and `json`.
    pub fn discover(data_dir: impl AsRef<Path>) -> Result<Self, SourceError> {
        let data_dir = data_dir.as_ref();
        let keyword_dir = data_dir.join(KEYWORD_SUBDIR);

        let mut keyword_paths = BTreeMap::new();
        for race in Faction::RACES {
            let path = find_file(&keyword_dir, &[race.name()])?;
            tracing::debug!(faction = %race, path = %path.display(), "Discovered keyword list");
            keyword_paths.insert(race, path);
        }

        let raw_path = find_file(data_dir, &["raw", "json"])?;
        tracing::debug!(path = %raw_path.display(), "Discovered raw pairings");

        Ok(FileSystemSources {
            keyword_paths,
            raw_path,
        })
    }

    /// Override the keyword list path of one race
    pub fn with_keyword_path(mut self, faction: Faction, path: impl Into<PathBuf>) -> Self {
        self.keyword_paths.insert(faction, path.into());
        self
    }

    /// Override the raw pairings path
    pub fn with_raw_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_path = path.into();
        self
    }

    pub fn keyword_path(&self, faction: Faction) -> Option<&Path> {
        self.keyword_paths.get(&faction).map(PathBuf::as_path)
    }

    pub fn raw_path(&self) -> &Path {
        &self.raw_path
    }
}

impl SourceProvider for FileSystemSources {
    fn read_keywords(&self, faction: Faction) -> Result<String, SourceError> {
        let path = self
            .keyword_paths
            .get(&faction)
            .ok_or_else(|| SourceError::NotFound(format!("{} keyword list", faction)))?;
        read_source(path)
    }

    fn read_raw_pairings(&self) -> Result<String, SourceError> {
        read_source(&self.raw_path)
    }
}

/// In-memory sources, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct InMemorySources {
    keywords: BTreeMap<Faction, String>,
    raw: Option<String>,
}

impl InMemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(mut self, faction: Faction, text: impl Into<String>) -> Self {
        self.keywords.insert(faction, text.into());
        self
    }

    pub fn with_raw_pairings(mut self, json: impl Into<String>) -> Self {
        self.raw = Some(json.into());
        self
    }
}

impl SourceProvider for InMemorySources {
    fn read_keywords(&self, faction: Faction) -> Result<String, SourceError> {
        self.keywords
            .get(&faction)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("{} keyword list", faction)))
    }

    fn read_raw_pairings(&self) -> Result<String, SourceError> {
        self.raw
            .clone()
            .ok_or_else(|| SourceError::NotFound("raw pairings".to_string()))
    }
}

/// Read a source file, mapping IO failures onto source errors
fn read_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
        std::io::ErrorKind::PermissionDenied => {
            SourceError::PermissionDenied(path.display().to_string())
        }
        _ => SourceError::IoError(e),
    })
}

/// First file in `dir`, by name, whose name contains every keyword
fn find_file(dir: &Path, keywords: &[&str]) -> Result<PathBuf, SourceError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(dir.display().to_string())
        } else {
            SourceError::IoError(e)
        }
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if keywords.iter().all(|keyword| name.contains(keyword)) {
                candidates.push(path);
            }
        }
    }

    candidates.sort();
    candidates.into_iter().next().ok_or_else(|| {
        SourceError::NotFound(format!(
            "no file matching {:?} in {}",
            keywords,
            dir.display()
        ))
    })
}
