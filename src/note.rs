//! # Note Module
//!
//! A `Note` is one concrete pitch: a spelling from the pitch tables plus an octave.
//!
//! ## Transposition
//! Notes are immutable values. Every transposition returns a new `Note`, so one
//! root can be transposed many times to build the tones of a chord.
//!
//! - Input spellings may come from either table (`Db4`, `C#4`), or be one of
//!   `B#`, `E#`, `Fb`, `Cb`
//! - Output spellings are always taken from the sharp table
//! - Octave carry and borrow use floored division, so lowering `C4` by one
//!   semitone gives `B3`
//!
//! ## Example
//! ```rust
//! use chordplay::Note;
//!
//! let b4 = Note::new("B", 4)?;
//! assert_eq!(b4.raise_semitones(1).to_string(), "C5");
//!
//! let db4 = Note::new("Db", 4)?;
//! assert_eq!(db4.raise_interval("b9")?.to_string(), "D5");
//! # Ok::<(), chordplay::ChordError>(())
//! ```

use crate::error::ChordError;
use crate::tables::{self, SEMITONES, SHARP_NOTES};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A single pitch: table spelling + octave (C4 = middle C)
///
/// Equality and ordering compare the sounding pitch, so enharmonic spellings
/// such as `Db4` and `C#4` are equal. Use [`Note::name`] to tell them apart.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    name: &'static str,
    octave: i32,
}

/// Output element of chord expansion
pub type Pitch = Note;

impl Note {
    /// Create a note, rejecting spellings that appear in neither pitch table.
    pub fn new(name: &str, octave: i32) -> Result<Self, ChordError> {
        if name.is_empty() {
            return Err(ChordError::InvalidNote("note name is required".to_string()));
        }
        let name = tables::canonical_spelling(name)
            .ok_or_else(|| ChordError::InvalidNote(format!("unknown spelling '{}'", name)))?;
        Ok(Self { name, octave })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Semitone position within the octave (C = 0, B = 11)
    pub fn pitch_class(&self) -> usize {
        // The constructor only admits table spellings
        tables::pitch_class_index(self.name).unwrap_or(0)
    }

    /// Key used to order pitches: (octave, chromatic position)
    pub fn sort_key(&self) -> (i32, usize) {
        (self.octave, self.pitch_class())
    }

    /// MIDI note number, C4 = 60
    pub fn midi_number(&self) -> i32 {
        (self.octave + 1) * SEMITONES + self.pitch_class() as i32
    }

    /// Equal-tempered frequency in Hz, A4 = 440
    pub fn frequency(&self) -> f64 {
        440.0 * 2.0_f64.powf((self.midi_number() - 69) as f64 / 12.0)
    }

    /// The note `semitones` higher, respelled from the sharp table.
    /// Negative values lower the note. The octave saturates at the `i32` bounds.
    pub fn raise_semitones(&self, semitones: i32) -> Note {
        self.shift(i64::from(semitones))
    }

    pub fn lower_semitones(&self, semitones: i32) -> Note {
        self.shift(-i64::from(semitones))
    }

    fn shift(&self, semitones: i64) -> Note {
        let per_octave = i64::from(SEMITONES);
        let absolute = self.pitch_class() as i64 + semitones;
        let octave = i64::from(self.octave) + absolute.div_euclid(per_octave);
        Note {
            name: SHARP_NOTES[absolute.rem_euclid(per_octave) as usize],
            octave: octave.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }

    /// Transpose up by a tension token such as "b9" or "#11".
    pub fn raise_interval(&self, interval: &str) -> Result<Note, ChordError> {
        let semitones = tables::interval_semitones(interval)
            .ok_or_else(|| ChordError::InvalidInterval(interval.to_string()))?;
        Ok(self.raise_semitones(semitones))
    }

    pub fn lower_interval(&self, interval: &str) -> Result<Note, ChordError> {
        let semitones = tables::interval_semitones(interval)
            .ok_or_else(|| ChordError::InvalidInterval(interval.to_string()))?;
        Ok(self.lower_semitones(semitones))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

/// Orders by (octave, chromatic position)
impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders as "<spelling><octave>", e.g. "C#4"
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Parses the "<spelling><octave>" form, e.g. "Bb3" or "C-1"
impl FromStr for Note {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| ChordError::InvalidNote(format!("missing octave in '{}'", s)))?;
        let (name, octave) = trimmed.split_at(split);
        let octave: i32 = octave
            .parse()
            .map_err(|_| ChordError::InvalidNote(format!("invalid octave in '{}'", s)))?;
        Note::new(name, octave)
    }
}
