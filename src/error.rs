//! # Error Types
//!
//! This module defines all error types for the chord engine.
//!
//! Parse errors carry the character position where scanning stopped so a caller
//! can point at the offending part of the chord symbol.
//!
//! ## Error Types
//! - `ParseError` - Chord symbol grammar errors with character position
//! - `InvalidInterval` - Tension token missing from the interval map
//! - `ExpansionError` - Quality token with no known chord family
//! - `InvalidNote` - Note spelling missing from both pitch tables
//! - `ConfigError` - Invalid playback configuration
//!
//! ## Usage
//! ```rust
//! use chordplay::{parse, ChordError};
//!
//! match parse("Cxyz") {
//!     Ok(spec) => println!("Parsed {}", spec),
//!     Err(ChordError::ParseError { position, message }) => {
//!         eprintln!("Parse error at {}: {}", position, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// Chord symbol grammar error.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::ParseError {
    ///     position: 1,
    ///     message: "Invalid chord quality".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Parse error at position 1: Invalid chord quality");
    /// ```
    #[error("Parse error at position {position}: {message}")]
    ParseError { position: usize, message: String },

    /// A tension token that has no entry in the interval map.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A quality token reached the expander without matching a chord family.
    #[error("Cannot expand chord quality: {0}")]
    ExpansionError(String),

    /// A note spelling that appears in neither pitch table.
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// Playback configuration could not be read or holds unsupported values.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::ConfigError("voices must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: voices must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ChordError {
    pub(crate) fn parse(position: usize, message: &str) -> Self {
        ChordError::ParseError {
            position,
            message: message.to_string(),
        }
    }
}
