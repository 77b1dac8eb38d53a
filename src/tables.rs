//! # Pitch-Class Tables
//!
//! Fixed lookup data shared by the parser, the note arithmetic and the expander.
//!
//! ## Enharmonic Tables
//! `SHARP_NOTES` and `FLAT_NOTES` are positionally aligned: index `i` in both
//! tables is the same semitone above C.
//!
//! ```text
//! index   0  1   2  3   4  5  6   7  8   9  10  11
//! sharp   C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flat    C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//!
//! `B#`, `E#`, `Fb` and `Cb` are also read, as the same index within the
//! written octave (`Cb4` sorts with `B4`). Output is always table-spelled.
//!
//! ## Interval Map
//! Altered and extended tensions resolve to a semitone offset above the root.
//! Every offset lies past the octave (13-20 semitones).

/// Number of pitch classes in the 12-tone system
pub const SEMITONES: i32 = 12;

/// Sharp-preferred spellings, indexed by semitone above C
pub const SHARP_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred spellings, aligned with `SHARP_NOTES`
pub const FLAT_NOTES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Alternate input spellings and the index they share with the tables.
/// Accepted when reading notes, never produced by transposition.
pub const ALTERNATE_SPELLINGS: &[(&str, usize)] =
    &[("B#", 0), ("Fb", 4), ("E#", 5), ("Cb", 11)];

/// Tension token -> semitones above the root
pub const INTERVAL_SEMITONES: &[(&str, i32)] = &[
    ("b9", 13),
    ("9", 14),
    ("#9", 15),
    ("#11", 18),
    ("b13", 20),
];

/// Index of a spelling in the sharp table, then the flat table, then the
/// alternate spellings.
pub fn pitch_class_index(spelling: &str) -> Option<usize> {
    SHARP_NOTES
        .iter()
        .position(|&n| n == spelling)
        .or_else(|| FLAT_NOTES.iter().position(|&n| n == spelling))
        .or_else(|| {
            ALTERNATE_SPELLINGS
                .iter()
                .find(|(n, _)| *n == spelling)
                .map(|(_, index)| *index)
        })
}

/// The table entry for a spelling, so notes can hold `&'static str` names.
pub fn canonical_spelling(spelling: &str) -> Option<&'static str> {
    SHARP_NOTES
        .iter()
        .chain(FLAT_NOTES.iter())
        .chain(ALTERNATE_SPELLINGS.iter().map(|(n, _)| n))
        .find(|&&n| n == spelling)
        .copied()
}

/// Semitone offset for a tension token like "b9" or "#11".
pub fn interval_semitones(token: &str) -> Option<i32> {
    INTERVAL_SEMITONES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, semitones)| *semitones)
}
