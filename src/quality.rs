//! # Chord Quality Vocabulary
//!
//! Every accepted quality spelling and the chord family it names. The parser
//! matches against `QUALITY_TOKENS` and the expander resolves through the same
//! table, so the two can never disagree about a token.
//!
//! ## Families
//! ```text
//! Major           M ^ maj major                   +4 +7
//! Minor           m - min minor                   +3 +7
//! MajorSeventh    M7 ^7 maj7 major7               +4 +7 +11
//! MinorSeventh    m7 -7 min7 minor7               +3 +7 +10
//! DominantSeventh 7 dom dom7 (dominant)           +4 +7 +10
//! Ninth           9                               +4 +7 +10 +14
//! Eleventh        11                              +4 +7 +10 +14 +17
//! Thirteenth      13                              +4 +7 +10 +14 +17 +21
//! ```

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    Major,
    Minor,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

/// Quality spellings accepted in chord symbols.
///
/// Within one length no token is repeated, which is what makes longest-first
/// matching unambiguous.
pub const QUALITY_TOKENS: &[(&str, ChordQuality)] = &[
    ("major7", ChordQuality::MajorSeventh),
    ("minor7", ChordQuality::MinorSeventh),
    ("major", ChordQuality::Major),
    ("minor", ChordQuality::Minor),
    ("maj7", ChordQuality::MajorSeventh),
    ("min7", ChordQuality::MinorSeventh),
    ("dom7", ChordQuality::DominantSeventh),
    ("maj", ChordQuality::Major),
    ("min", ChordQuality::Minor),
    ("dom", ChordQuality::DominantSeventh),
    ("M7", ChordQuality::MajorSeventh),
    ("^7", ChordQuality::MajorSeventh),
    ("m7", ChordQuality::MinorSeventh),
    ("-7", ChordQuality::MinorSeventh),
    ("11", ChordQuality::Eleventh),
    ("13", ChordQuality::Thirteenth),
    ("M", ChordQuality::Major),
    ("^", ChordQuality::Major),
    ("m", ChordQuality::Minor),
    ("-", ChordQuality::Minor),
    ("7", ChordQuality::DominantSeventh),
    ("9", ChordQuality::Ninth),
];

/// Long-form aliases accepted when expanding a hand-built `ChordSpec`, never
/// produced by the parser.
const EXPANSION_ALIASES: &[(&str, ChordQuality)] = &[("dominant", ChordQuality::DominantSeventh)];

impl ChordQuality {
    /// Resolve a quality token to its family.
    pub fn from_token(token: &str) -> Option<ChordQuality> {
        QUALITY_TOKENS
            .iter()
            .chain(EXPANSION_ALIASES.iter())
            .find(|(t, _)| *t == token)
            .map(|(_, quality)| *quality)
    }

    /// Semitone offsets above the root (root itself is implicit)
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            ChordQuality::Major => &[4, 7],
            ChordQuality::Minor => &[3, 7],
            ChordQuality::MajorSeventh => &[4, 7, 11],
            ChordQuality::MinorSeventh => &[3, 7, 10],
            ChordQuality::DominantSeventh => &[4, 7, 10],
            ChordQuality::Ninth => &[4, 7, 10, 14],
            ChordQuality::Eleventh => &[4, 7, 10, 14, 17],
            ChordQuality::Thirteenth => &[4, 7, 10, 14, 17, 21],
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::MajorSeventh => "major seventh",
            ChordQuality::MinorSeventh => "minor seventh",
            ChordQuality::DominantSeventh => "dominant seventh",
            ChordQuality::Ninth => "ninth",
            ChordQuality::Eleventh => "eleventh",
            ChordQuality::Thirteenth => "thirteenth",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_unique() {
        let tokens: HashSet<_> = QUALITY_TOKENS.iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens.len(), QUALITY_TOKENS.len());
    }

    #[test]
    fn test_aliases_share_family() {
        for token in ["minor7", "min7", "m7", "-7"] {
            assert_eq!(ChordQuality::from_token(token), Some(ChordQuality::MinorSeventh));
        }
        for token in ["M", "^", "maj", "major"] {
            assert_eq!(ChordQuality::from_token(token), Some(ChordQuality::Major));
        }
        assert_eq!(ChordQuality::from_token("dominant"), Some(ChordQuality::DominantSeventh));
        assert_eq!(ChordQuality::from_token("sus4"), None);
    }

    #[test]
    fn test_dominant_alias_not_in_grammar() {
        assert!(!QUALITY_TOKENS.iter().any(|(t, _)| *t == "dominant"));
    }

    #[test]
    fn test_templates() {
        assert_eq!(ChordQuality::Major.intervals(), &[4, 7]);
        assert_eq!(ChordQuality::Thirteenth.intervals(), &[4, 7, 10, 14, 17, 21]);
        // Extended chords build on the dominant seventh
        let dom = ChordQuality::DominantSeventh.intervals();
        assert!(ChordQuality::Ninth.intervals().starts_with(dom));
        assert!(ChordQuality::Eleventh.intervals().starts_with(ChordQuality::Ninth.intervals()));
    }
}
