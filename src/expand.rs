//! # Chord Expansion
//!
//! Turns a [`ChordSpec`] into concrete, octave-assigned pitches.
//!
//! ## Voicing
//! 1. Root at octave 4
//! 2. Chord tones from the quality template, each transposed from the root
//! 3. One note per tension, transposed from the root by the tension interval
//! 4. Bass note (bass clause or root) one octave below the root, at octave 3
//! 5. Sort ascending by (octave, chromatic position)
//!
//! The bass always lands at octave 3 regardless of its pitch class, so `C/B`
//! puts B3 under C4 while `C/D` puts D3 under C4.
//!
//! ## Example
//! ```rust
//! use chordplay::{expand, parse};
//!
//! let pitches = expand(&parse("Cmajor")?)?;
//! let names: Vec<String> = pitches.iter().map(|p| p.to_string()).collect();
//! assert_eq!(names, ["C3", "C4", "E4", "G4"]);
//! # Ok::<(), chordplay::ChordError>(())
//! ```

use crate::chord::ChordSpec;
use crate::error::ChordError;
use crate::note::{Note, Pitch};

/// Octave the root is voiced in
pub const ROOT_OCTAVE: i32 = 4;

/// Expand a parsed chord into its pitches, lowest first.
///
/// # Errors
/// - [`ChordError::InvalidNote`] when the root or bass is not a table spelling
/// - [`ChordError::ExpansionError`] when the quality names no chord family
/// - [`ChordError::InvalidInterval`] when a tension is not in the interval map
pub fn expand(spec: &ChordSpec) -> Result<Vec<Pitch>, ChordError> {
    let root = Note::new(&spec.root, ROOT_OCTAVE)?;
    let quality = spec.chord_quality()?;

    let mut pitches = vec![root];
    pitches.extend(
        quality
            .intervals()
            .iter()
            .map(|&semitones| root.raise_semitones(semitones)),
    );

    for tension in &spec.tensions {
        pitches.push(root.raise_interval(tension)?);
    }

    let bass = Note::new(spec.bass_note(), root.octave() - 1)?;
    pitches.insert(0, bass);

    let pitches = sort_pitches(pitches);
    log::debug!(
        "expanded {} ({}) into {} pitches",
        spec,
        quality,
        pitches.len()
    );
    Ok(pitches)
}

/// Sort by (octave, chromatic position) and drop repeated pitches.
///
/// Enharmonic spellings of one pitch (`Db4`, `C#4`) count as the same pitch;
/// the first one in sorted order is kept.
pub fn sort_pitches(mut pitches: Vec<Pitch>) -> Vec<Pitch> {
    pitches.sort();
    pitches.dedup();
    pitches
}
