//! Playback data type definitions
//!
//! Configuration, note values and the scheduled events handed to synthesizers.

use crate::error::ChordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a played chord, in the "<n>n" notation synthesizers accept
/// ("4n" = quarter note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NoteValue {
    #[serde(rename = "1n")]
    Whole,
    #[serde(rename = "2n")]
    Half,
    #[default]
    #[serde(rename = "4n")]
    Quarter,
    #[serde(rename = "8n")]
    Eighth,
    #[serde(rename = "16n")]
    Sixteenth,
}

impl NoteValue {
    /// Parse "1n", "2n", "4n", "8n" or "16n"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1n" => Some(NoteValue::Whole),
            "2n" => Some(NoteValue::Half),
            "4n" => Some(NoteValue::Quarter),
            "8n" => Some(NoteValue::Eighth),
            "16n" => Some(NoteValue::Sixteenth),
            _ => None,
        }
    }

    /// Length in quarter-note beats
    pub fn as_beats(&self) -> f64 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
        }
    }

    /// Length in seconds at `tempo` quarter notes per minute
    pub fn as_seconds(&self, tempo: u16) -> f64 {
        self.as_beats() * 60.0 / tempo as f64
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoteValue::Whole => "1n",
            NoteValue::Half => "2n",
            NoteValue::Quarter => "4n",
            NoteValue::Eighth => "8n",
            NoteValue::Sixteenth => "16n",
        };
        write!(f, "{}", s)
    }
}

/// Playback settings
///
/// # Fields
/// - `tempo`: BPM, where beat = quarter note
/// - `note_value`: how long each chord rings
/// - `voices`: number of synthesizers pitches are spread across
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    pub tempo: u16,
    pub note_value: NoteValue,
    pub voices: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tempo: 120,
            note_value: NoteValue::Quarter,
            voices: 2,
        }
    }
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawPlaybackConfig {
    pub tempo: Option<u16>,
    pub note_value: Option<String>,
    pub voices: Option<usize>,
}

impl PlaybackConfig {
    /// Load settings from YAML. Missing keys keep their defaults.
    ///
    /// ```
    /// use chordplay::playback::{NoteValue, PlaybackConfig};
    ///
    /// let config = PlaybackConfig::from_yaml("tempo: 90\nnote-value: 2n\n")?;
    /// assert_eq!(config.tempo, 90);
    /// assert_eq!(config.note_value, NoteValue::Half);
    /// assert_eq!(config.voices, 2);
    /// # Ok::<(), chordplay::ChordError>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ChordError> {
        let raw: RawPlaybackConfig = if source.trim().is_empty() {
            RawPlaybackConfig::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| ChordError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPlaybackConfig) -> Result<Self, ChordError> {
        let defaults = Self::default();

        let tempo = raw.tempo.unwrap_or(defaults.tempo);
        if tempo == 0 {
            return Err(ChordError::ConfigError("tempo must be greater than 0".to_string()));
        }

        let note_value = match raw.note_value {
            Some(s) => NoteValue::from_str(&s).ok_or_else(|| {
                ChordError::ConfigError(format!(
                    "note-value must be one of 1n, 2n, 4n, 8n, 16n (got '{}')",
                    s
                ))
            })?,
            None => defaults.note_value,
        };

        let voices = raw.voices.unwrap_or(defaults.voices);
        if voices == 0 {
            return Err(ChordError::ConfigError("voices must be at least 1".to_string()));
        }

        Ok(Self {
            tempo,
            note_value,
            voices,
        })
    }
}

/// One pitch scheduled on one voice
///
/// # Fields
/// - `pitch`: rendered pitch, e.g. "C#4"
/// - `midi_note`: MIDI note number (C4 = 60)
/// - `frequency`: equal-tempered frequency in Hz
/// - `voice`: index of the synthesizer that plays it
/// - `start_time`: seconds from the caller's reference time
/// - `duration`: seconds
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub pitch: String,
    pub midi_note: i32,
    pub frequency: f64,
    pub voice: usize,
    pub start_time: f64,
    pub duration: f64,
}
