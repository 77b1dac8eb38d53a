//! # Playback Module
//!
//! Hands expanded chords to synthesizers.
//!
//! ## Purpose
//! The chord engine stops at an ordered list of pitches. This module is the
//! boundary to whatever makes sound:
//! 1. **Scheduling** - each pitch gets a voice, a start time and a duration
//! 2. **Triggering** - each voice's [`Synth`] plays its share of the chord
//!
//! ## Sub-modules
//! - `types` - PlaybackConfig, NoteValue, PlaybackEvent type definitions
//! - `engine` - Synth trait, scheduling and the ChordPlayer
//!
//! ## Voice Assignment
//! Pitches are dealt to voices round-robin from the lowest pitch up. With the
//! default two voices, the bass, third-lowest, fifth-lowest... pitches go to
//! voice 0 and the rest to voice 1.
//!
//! ## Example
//! ```rust
//! use chordplay::playback::{schedule, PlaybackConfig};
//! use chordplay::chord_pitches;
//!
//! let pitches = chord_pitches("Cmajor")?;
//! let events = schedule(&pitches, &PlaybackConfig::default(), 0.0);
//!
//! assert_eq!(events.len(), 4);
//! assert_eq!(events[0].pitch, "C3");
//! assert_eq!(events[0].voice, 0);
//! assert_eq!(events[1].voice, 1);
//! assert_eq!(events[0].duration, 0.5); // quarter note at 120 BPM
//! # Ok::<(), chordplay::ChordError>(())
//! ```

mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{schedule, ChordPlayer, Synth};
pub use types::{NoteValue, PlaybackConfig, PlaybackEvent, RawPlaybackConfig};
