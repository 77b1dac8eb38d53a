//! # Parser Module
//!
//! Parses a chord symbol such as `Cmaj7#11/G` into a [`ChordSpec`].
//!
//! ## Grammar
//! ```text
//! chord    := root [quality tension* ] ["/" bass]
//! root     := any character, optionally followed by "#" or "b"
//! quality  := one of QUALITY_TOKENS
//! tension  := one of the interval map keys (b9 9 #9 #11 b13)
//! bass     := one of SHARP_NOTES
//! ```
//!
//! ## Longest-Match Scanning
//! The grammar is ambiguous when read one character at a time: `m` is a quality
//! on its own but also the start of `maj7`, `major` and `major7`. Every field is
//! therefore matched against its vocabulary at a fixed list of lengths, longest
//! first, and the first length with a hit wins. Near the end of the symbol a
//! window holds whatever characters are left. `Cmajor7` reads as `major7`,
//! `C7b13` reads as tension `b13`, and `Cmaj7/G#` reads as bass `G#`.
//!
//! The root is not checked against the pitch tables here; that happens when the
//! chord is expanded into notes.
//!
//! ## Example
//! ```rust
//! use chordplay::parse;
//!
//! let spec = parse("Cmaj7/G")?;
//! assert_eq!(spec.root, "C");
//! assert_eq!(spec.quality.as_deref(), Some("maj7"));
//! assert_eq!(spec.bass.as_deref(), Some("G"));
//! # Ok::<(), chordplay::ChordError>(())
//! ```

use crate::chord::ChordSpec;
use crate::error::ChordError;
use crate::quality::QUALITY_TOKENS;
use crate::tables::{INTERVAL_SEMITONES, SHARP_NOTES};

/// Quality token lengths, longest first
const QUALITY_LENGTHS: &[usize] = &[6, 5, 4, 3, 2, 1];

/// Tension lookups read 3 then 2 characters. The one-character key `9` is only
/// reached when it is the last character of the symbol.
const TENSION_LENGTHS: &[usize] = &[3, 2];

const BASS_LENGTHS: &[usize] = &[2, 1];

/// Cursor over a chord symbol
struct Scanner<'a> {
    input: &'a str,
    position: usize, // byte offset
    column: usize,   // character offset, reported in errors
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            column: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    /// Up to `len` characters; shorter only when the input ends first
    fn prefix(&self, len: usize) -> &'a str {
        let rest = self.remaining();
        match rest.char_indices().nth(len) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    fn consume(&mut self, token: &str) {
        for _ in token.chars() {
            self.advance();
        }
    }

    /// Try each length in `lengths` in order and return the first vocabulary
    /// entry equal to the input prefix of that length.
    fn longest_match<'v, T>(
        &self,
        vocabulary: &'v [T],
        lengths: &[usize],
        token: impl Fn(&T) -> &str,
    ) -> Option<&'v T> {
        lengths.iter().find_map(|&len| {
            let window = self.prefix(len);
            vocabulary.iter().find(|entry| token(*entry) == window)
        })
    }

    fn error(&self, message: &str) -> ChordError {
        ChordError::parse(self.column, message)
    }
}

/// Parse a chord symbol into its root, quality, tensions and bass.
///
/// # Errors
/// Returns [`ChordError::ParseError`] for an empty symbol, an unknown quality or
/// tension, or a bass clause that is not `/` followed by a sharp-table spelling.
pub fn parse(chord_name: &str) -> Result<ChordSpec, ChordError> {
    let mut scanner = Scanner::new(chord_name);

    // Root: letter plus optional accidental
    let mut root = String::new();
    match scanner.advance() {
        Some(c) => root.push(c),
        None => return Err(scanner.error("Chord name is empty")),
    }
    if let Some(accidental @ ('#' | 'b')) = scanner.peek() {
        root.push(accidental);
        scanner.advance();
    }

    let mut spec = ChordSpec::from_root(&root);
    if scanner.is_at_end() {
        log::trace!("parsed bare root '{}'", root);
        return Ok(spec);
    }

    // Quality
    let (quality, _) = scanner
        .longest_match(QUALITY_TOKENS, QUALITY_LENGTHS, |(t, _)| *t)
        .ok_or_else(|| scanner.error("Invalid chord quality"))?;
    scanner.consume(quality);
    spec.quality = Some(quality.to_string());

    // Tensions
    while !scanner.is_at_end() && scanner.peek() != Some('/') {
        let (tension, _) = scanner
            .longest_match(INTERVAL_SEMITONES, TENSION_LENGTHS, |(t, _)| *t)
            .ok_or_else(|| scanner.error("Invalid tension"))?;
        scanner.consume(tension);
        spec.tensions.push(tension.to_string());
    }

    // Bass
    if scanner.is_at_end() {
        log::trace!("parsed '{}' as {:?}", chord_name, spec);
        return Ok(spec);
    }
    if scanner.peek() != Some('/') {
        return Err(scanner.error("Invalid bass note"));
    }
    scanner.advance();
    let bass = scanner
        .longest_match(&SHARP_NOTES, BASS_LENGTHS, |n| *n)
        .ok_or_else(|| scanner.error("Invalid bass note"))?;
    scanner.consume(bass);
    spec.bass = Some(bass.to_string());

    if !scanner.is_at_end() {
        return Err(scanner.error("Unexpected trailing input"));
    }

    log::trace!("parsed '{}' as {:?}", chord_name, spec);
    Ok(spec)
}

/// True when `parse` would succeed.
pub fn is_valid(chord_name: &str) -> bool {
    parse(chord_name).is_ok()
}
