//! # Chord Specification
//!
//! `ChordSpec` is the structured form of a chord symbol, produced by the parser
//! and consumed by the expander.
//!
//! ```text
//! "F#m7b9/A"
//!   ├── root:     "F#"
//!   ├── quality:  Some("m7")
//!   ├── tensions: ["b9"]
//!   └── bass:     Some("A")
//! ```
//!
//! - `quality` is `None` only for a bare root (`"C"`), which plays as a major triad
//! - `bass` is `None` when the root is also the lowest note
//!
//! The spec serializes to the same shape the parse details are displayed in:
//! absent fields are left out.

use crate::error::ChordError;
use crate::quality::ChordQuality;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSpec {
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bass: Option<String>,
}

impl Default for ChordSpec {
    /// C major triad
    fn default() -> Self {
        Self {
            root: "C".to_string(),
            quality: Some("major".to_string()),
            tensions: Vec::new(),
            bass: None,
        }
    }
}

impl ChordSpec {
    /// Spec for a bare root: major triad, no tensions, root in the bass
    pub fn from_root(root: &str) -> Self {
        Self {
            root: root.to_string(),
            quality: None,
            tensions: Vec::new(),
            bass: None,
        }
    }

    /// The chord family, defaulting to major when no quality was written.
    pub fn chord_quality(&self) -> Result<ChordQuality, ChordError> {
        match &self.quality {
            None => Ok(ChordQuality::Major),
            Some(token) => ChordQuality::from_token(token)
                .ok_or_else(|| ChordError::ExpansionError(token.clone())),
        }
    }

    /// Lowest note spelling: the bass clause or else the root
    pub fn bass_note(&self) -> &str {
        self.bass.as_deref().unwrap_or(&self.root)
    }
}

/// Re-renders the chord symbol, e.g. "Cmaj7#11/G"
impl fmt::Display for ChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(quality) = &self.quality {
            write!(f, "{}", quality)?;
        }
        for tension in &self.tensions {
            write!(f, "{}", tension)?;
        }
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_c_major() {
        let spec = ChordSpec::default();
        assert_eq!(spec.root, "C");
        assert_eq!(spec.chord_quality(), Ok(ChordQuality::Major));
        assert_eq!(spec.bass_note(), "C");
    }

    #[test]
    fn test_missing_quality_is_major() {
        let spec = ChordSpec::from_root("Eb");
        assert_eq!(spec.chord_quality(), Ok(ChordQuality::Major));
    }

    #[test]
    fn test_unknown_quality() {
        let spec = ChordSpec {
            quality: Some("sus4".to_string()),
            ..ChordSpec::default()
        };
        assert_eq!(
            spec.chord_quality(),
            Err(ChordError::ExpansionError("sus4".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let spec = ChordSpec {
            root: "C".to_string(),
            quality: Some("maj7".to_string()),
            tensions: vec!["#11".to_string()],
            bass: Some("G".to_string()),
        };
        assert_eq!(spec.to_string(), "Cmaj7#11/G");
        assert_eq!(ChordSpec::from_root("F#").to_string(), "F#");
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let json = serde_json::to_string(&ChordSpec::from_root("A")).unwrap();
        assert_eq!(json, r#"{"root":"A"}"#);

        let spec: ChordSpec = serde_json::from_str(r#"{"root":"D","quality":"m7"}"#).unwrap();
        assert_eq!(spec.quality.as_deref(), Some("m7"));
        assert!(spec.tensions.is_empty());
        assert_eq!(spec.bass, None);
    }
}
