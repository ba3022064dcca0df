//! Grid hotkey profile generation
//!
//! This crate turns a catalog of raw `ability/unit=KEY` pairings into a
//! faction-specific `.SC2Hotkeys` profile laid out on a 3x5 key grid:
//! - Keyword catalogs of per-faction unit and building names
//! - Faction classification of free-text pairing labels
//! - Faction filtering of the raw pairing set
//! - Remapping of grid-resident keys onto a custom or default grid
//! - Rendering and saving of the final profile document

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod grid;
pub mod models;
pub mod sources;
pub mod store;
pub mod writer;

// Re-export public types
pub use catalog::{KeywordCatalog, KeywordSet};
pub use classifier::{classify, FactionClassifier};
pub use error::{
    FactionError, GenerateError, GridError, ModifierError, PairingError, ProfileError, SourceError,
};
pub use generator::{GenerationRequest, GenerationSummary, HotkeyGenerator};
pub use grid::{Grid, GridRemapper, DEFAULT_GRID, GRID_COLUMNS, GRID_ROWS, GRID_SIZE, REFERENCE_GRID};
pub use models::{Faction, Modifier, Pairing};
pub use sources::{FileSystemSources, InMemorySources, SourceProvider};
pub use store::{filter_by_faction, PairingStore};
pub use writer::{Profile, ProfileWriter, PROFILE_EXTENSION, PROFILE_HEADER};
