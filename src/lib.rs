pub mod chord;
pub mod error;
pub mod expand;
pub mod note;
pub mod parser;
pub mod playback;
pub mod quality;
pub mod tables;

pub use chord::ChordSpec;
pub use error::*;
pub use expand::{expand, sort_pitches, ROOT_OCTAVE};
pub use note::{Note, Pitch};
pub use parser::{is_valid, parse};
pub use quality::ChordQuality;

/// Parse a chord symbol and expand it into pitches, lowest first.
/// This is the main entry point for the library.
///
/// ```rust
/// let pitches = chordplay::chord_pitches("Cmaj7/G")?;
/// assert_eq!(pitches[0].to_string(), "G3");
/// # Ok::<(), chordplay::ChordError>(())
/// ```
pub fn chord_pitches(chord_name: &str) -> Result<Vec<Pitch>, ChordError> {
    let spec = parse(chord_name)?;
    expand(&spec)
}

/// True when the symbol both parses and expands, i.e. it can be played.
/// Unlike [`is_valid`], this also checks the root against the pitch tables.
pub fn is_playable(chord_name: &str) -> bool {
    chord_pitches(chord_name).is_ok()
}
