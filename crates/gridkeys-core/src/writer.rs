//! Profile rendering and saving in the `.SC2Hotkeys` format
//!
//! # File Format
//!
//! ```text
//! [Settings]
//!
//! [Hotkeys]
//! CameraCenter=
//!
//! [Commands]
//! Probe=Q
//! Build/BuildAdvanced=Shift+A
//! ```
//!
//! `CameraCenter` is always written unbound.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::models::Pairing;

/// File extension of generated profiles
pub const PROFILE_EXTENSION: &str = "SC2Hotkeys";

/// Fixed preamble preceding the command bindings
pub const PROFILE_HEADER: &str = "[Settings]\n\n[Hotkeys]\nCameraCenter=\n\n[Commands]\n";

/// A named, remapped set of hotkeys ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub hotkeys: Vec<Pairing>,
}

impl Profile {
    /// Create a profile, validating its name
    pub fn new(name: impl Into<String>, hotkeys: Vec<Pairing>) -> Result<Self, ProfileError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Profile { name, hotkeys })
    }

    /// Render the complete profile document
    pub fn render(&self) -> String {
        ProfileWriter::write(&self.name, &self.hotkeys)
    }

    /// File name the profile is saved under
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, PROFILE_EXTENSION)
    }

    /// Save the profile into `dir`, returning the written path
    ///
    /// The document is rendered first and written to a temporary sibling,
    /// then renamed into place.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ProfileError> {
        let dir = dir.as_ref();
        let path = dir.join(self.file_name());
        let tmp_path = dir.join(format!(".{}.tmp", self.file_name()));
        let content = self.render();

        let write_failed = |path: &Path, source: std::io::Error| ProfileError::WriteFailed {
            path: path.display().to_string(),
            source,
        };

        fs::write(&tmp_path, content).map_err(|e| write_failed(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_failed(&path, e));
        }

        tracing::info!(path = %path.display(), hotkeys = self.hotkeys.len(), "Saved profile");
        Ok(path)
    }
}

/// Serializes remapped pairings into profile text
pub struct ProfileWriter;

impl ProfileWriter {
    /// Render the header followed by one `label=KEY` line per pairing
    ///
    /// The profile name is not part of the document; it names the file.
    pub fn write(profile_name: &str, pairings: &[Pairing]) -> String {
        tracing::debug!(profile = profile_name, hotkeys = pairings.len(), "Rendering profile");

        let mut out = String::from(PROFILE_HEADER);
        for pairing in pairings {
            out.push_str(&pairing.to_string());
            out.push('\n');
        }
        out
    }
}

fn validate_name(name: &str) -> Result<(), ProfileError> {
    if name.is_empty() {
        return Err(ProfileError::InvalidName(
            "Profile name cannot be empty".to_string(),
        ));
    }

    if name.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(ProfileError::InvalidName(format!(
            "Profile name cannot contain spaces or path separators: {}",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_profile() {
        assert_eq!(ProfileWriter::write("empty", &[]), PROFILE_HEADER);
    }

    #[test]
    fn test_write_lines() {
        let text = ProfileWriter::write(
            "mine",
            &[Pairing::new("Probe", "Q"), Pairing::new("Build/BuildAdvanced", "Shift+A")],
        );
        assert!(text.ends_with("[Commands]\nProbe=Q\nBuild/BuildAdvanced=Shift+A\n"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(Profile::new("", vec![]).is_err());
        assert!(Profile::new("my grid", vec![]).is_err());
        assert!(Profile::new("../grid", vec![]).is_err());
        assert!(Profile::new("MyGrid", vec![]).is_ok());
    }
}
