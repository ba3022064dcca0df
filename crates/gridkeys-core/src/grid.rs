//! Key grids and grid remapping
//!
//! A grid is 15 keys in row-major order, 5 columns by 3 rows:
//!
//! ```text
//!  1  2  3  4  5
//!  6  7  8  9 10
//! 11 12 13 14 15
//! ```
//!
//! Source pairings are laid out on [`REFERENCE_GRID`]. Remapping moves a
//! key from its reference position to the same position on the
//! destination grid.

use std::fmt;

use crate::error::GridError;
use crate::models::Pairing;

pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROWS: usize = 3;
pub const GRID_SIZE: usize = GRID_COLUMNS * GRID_ROWS;

/// Layout the raw pairings were authored against
pub const REFERENCE_GRID: [&str; GRID_SIZE] = [
    "q", "w", "e", "r", "t", //
    "a", "s", "d", "f", "g", //
    "y", "x", "c", "v", "b",
];

/// Destination layout used when no custom grid is given
pub const DEFAULT_GRID: [&str; GRID_SIZE] = [
    "q", "w", "e", "r", "t", //
    "a", "s", "d", "f", "g", //
    "z", "x", "c", "v", "b",
];

/// Fifteen key identifiers in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    keys: Vec<String>,
}

impl Grid {
    /// Create a grid, requiring exactly [`GRID_SIZE`] non-empty keys
    pub fn new<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Result<Self, GridError> {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

        if keys.len() != GRID_SIZE {
            return Err(GridError::InvalidLength {
                expected: GRID_SIZE,
                actual: keys.len(),
            });
        }

        if let Some(pos) = keys.iter().position(|k| k.trim().is_empty()) {
            return Err(GridError::EmptyKey(pos + 1));
        }

        Ok(Grid { keys })
    }

    /// Build a grid from whitespace-separated rows, e.g. `["q w e r t", ...]`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        Grid::new(
            rows.iter()
                .flat_map(|row| row.as_ref().split_whitespace().map(str::to_string)),
        )
    }

    /// The layout raw pairings assume
    pub fn reference() -> Self {
        Grid {
            keys: REFERENCE_GRID.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Zero-based position of a key, ignoring case
    pub fn position(&self, key: &str) -> Option<usize> {
        let key = key.to_lowercase();
        self.keys.iter().position(|k| k.to_lowercase() == key)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.keys.chunks(GRID_COLUMNS)
    }

    /// Render the grid as a 3x5 diagram
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|k| format!("{:<3}", k))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            keys: DEFAULT_GRID.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Moves grid-resident hotkeys from the reference grid to a destination grid
#[derive(Debug, Clone)]
pub struct GridRemapper {
    reference: Grid,
    destination: Grid,
    prefix: String,
}

impl GridRemapper {
    /// Create a remapper onto `destination`, or the default grid if `None`
    pub fn new(destination: Option<Grid>, prefix: impl Into<String>) -> Self {
        GridRemapper {
            reference: Grid::reference(),
            destination: destination.unwrap_or_default(),
            prefix: prefix.into(),
        }
    }

    /// Remap a single pairing, or `None` if its key is not on the reference grid
    pub fn remap_one(&self, pairing: &Pairing) -> Option<Pairing> {
        let index = self.reference.position(&pairing.key)?;
        let key = self.destination.get(index)?;
        Some(pairing.with_key(format!("{}{}", self.prefix, key.to_uppercase())))
    }

    /// Remap pairings, dropping every pairing whose key is off the grid
    pub fn remap(&self, pairings: &[Pairing]) -> Vec<Pairing> {
        pairings
            .iter()
            .filter_map(|pairing| {
                let remapped = self.remap_one(pairing);
                if remapped.is_none() {
                    tracing::debug!(pairing = %pairing, "Key is off the grid, dropping");
                }
                remapped
            })
            .collect()
    }

    pub fn reference(&self) -> &Grid {
        &self.reference
    }

    pub fn destination(&self) -> &Grid {
        &self.destination
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for GridRemapper {
    fn default() -> Self {
        Self::new(None, "")
    }
}
