//! Core data models for hotkey pairings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FactionError, ModifierError, PairingError};

/// A playable race, or `All` for pairings shared between races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Protoss,
    Terran,
    Zerg,
    /// Faction-agnostic, or matched keywords of more than one race
    All,
}

impl Faction {
    /// The three races in classification order
    pub const RACES: [Faction; 3] = [Faction::Protoss, Faction::Terran, Faction::Zerg];

    /// Lowercase name as it appears in labels and keyword file names
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Protoss => "protoss",
            Faction::Terran => "terran",
            Faction::Zerg => "zerg",
            Faction::All => "all",
        }
    }

    /// Check if a pairing classified as `self` belongs in a profile for `target`
    pub fn is_retained_for(&self, target: Faction) -> bool {
        *self == Faction::All || *self == target
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Faction {
    type Err = FactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protoss" => Ok(Faction::Protoss),
            "terran" => Ok(Faction::Terran),
            "zerg" => Ok(Faction::Zerg),
            "all" => Ok(Faction::All),
            _ => Err(FactionError::Unknown(s.to_string())),
        }
    }
}

/// A modifier key that can prefix every grid hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}

impl Modifier {
    /// Prefix string as written in front of a key, e.g. `Shift+`
    pub fn prefix(&self) -> String {
        format!("{}+", self)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Shift => write!(f, "Shift"),
            Modifier::Control => write!(f, "Control"),
            Modifier::Alt => write!(f, "Alt"),
        }
    }
}

impl FromStr for Modifier {
    type Err = ModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('+').to_lowercase().as_str() {
            "shift" => Ok(Modifier::Shift),
            "ctrl" | "control" => Ok(Modifier::Control),
            "alt" => Ok(Modifier::Alt),
            _ => Err(ModifierError::Unknown(s.to_string())),
        }
    }
}

/// A single `label=KEY` hotkey assignment
///
/// The label may hold several ability or unit names joined by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub label: String,
    pub key: String,
}

impl Pairing {
    /// Create a new pairing
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Pairing {
            label: label.into(),
            key: key.into(),
        }
    }

    /// Parse a raw pairing string
    ///
    /// The key is whatever follows the final `=`. Any other `=` in the
    /// label is dropped, so the label is re-joined with no separator.
    pub fn parse(raw: &str) -> Result<Self, PairingError> {
        let (head, key) = raw
            .rsplit_once('=')
            .ok_or_else(|| PairingError::Malformed(raw.to_string()))?;

        Ok(Pairing {
            label: head.split('=').collect(),
            key: key.to_string(),
        })
    }

    /// The `/`-separated parts of the label
    pub fn label_parts(&self) -> Vec<&str> {
        self.label.split('/').collect()
    }

    /// Same label bound to a different key
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Pairing {
            label: self.label.clone(),
            key: key.into(),
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.key)
    }
}

impl FromStr for Pairing {
    type Err = PairingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pairing::parse(s)
    }
}
