//! Error types for hotkey profile generation

use thiserror::Error;

/// Errors that can occur while reading keyword lists or raw pairing data
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid JSON syntax: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur when parsing a raw `label=KEY` pairing
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("Malformed pairing (missing '='): {0}")]
    Malformed(String),

    #[error("Malformed pairing at entry {index}: {message}")]
    EntryError { index: usize, message: String },
}

/// Errors that can occur when building a key grid
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Grid must have exactly {expected} keys, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Grid key at position {0} is empty")]
    EmptyKey(usize),
}

/// Errors that can occur when parsing faction names
#[derive(Debug, Error)]
pub enum FactionError {
    #[error("Unknown faction: {0} (expected protoss, terran, zerg or all)")]
    Unknown(String),
}

/// Errors that can occur when parsing key prefix modifiers
#[derive(Debug, Error)]
pub enum ModifierError {
    #[error("Unknown modifier: {0} (expected shift, control or alt)")]
    Unknown(String),
}

/// Errors that can occur when naming or saving a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid profile name: {0}")]
    InvalidName(String),

    #[error("Failed to write profile {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur in the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Faction error: {0}")]
    Faction(#[from] FactionError),

    #[error("Modifier error: {0}")]
    Modifier(#[from] ModifierError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}
