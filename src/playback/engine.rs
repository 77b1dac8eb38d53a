//! Playback scheduling
//!
//! Spreads the pitches of an expanded chord over a set of synthesizer voices and
//! triggers them together.

use super::types::{NoteValue, PlaybackConfig, PlaybackEvent};
use crate::chord::ChordSpec;
use crate::error::ChordError;
use crate::expand::expand;
use crate::note::Pitch;
use crate::parser::parse;

/// A sound source that can play one pitch for a note value.
///
/// `pitch` is rendered as "<spelling><octave>" (e.g. "C#4") and `start` is in
/// seconds on the synthesizer's own clock.
pub trait Synth {
    fn trigger_attack_release(&mut self, pitch: &str, duration: NoteValue, start: f64);
}

/// Assign each pitch to a voice, round-robin from the lowest pitch up.
///
/// All events start at `start`; the input order decides voice assignment, so
/// pass the ascending output of [`expand()`](crate::expand()) for a stable split.
pub fn schedule(pitches: &[Pitch], config: &PlaybackConfig, start: f64) -> Vec<PlaybackEvent> {
    let voices = config.voices.max(1);
    let duration = config.note_value.as_seconds(config.tempo);

    pitches
        .iter()
        .enumerate()
        .map(|(index, pitch)| PlaybackEvent {
            pitch: pitch.to_string(),
            midi_note: pitch.midi_number(),
            frequency: pitch.frequency(),
            voice: index % voices,
            start_time: start,
            duration,
        })
        .collect()
}

/// Plays chord symbols on a fixed set of voices
pub struct ChordPlayer {
    config: PlaybackConfig,
    voices: Vec<Box<dyn Synth>>,
}

impl ChordPlayer {
    /// The number of synthesizers must match `config.voices`, which must be at least 1.
    pub fn new(config: PlaybackConfig, voices: Vec<Box<dyn Synth>>) -> Result<Self, ChordError> {
        if config.voices == 0 {
            return Err(ChordError::ConfigError(
                "voices must be at least 1".to_string(),
            ));
        }
        if voices.len() != config.voices {
            return Err(ChordError::ConfigError(format!(
                "expected {} voices, got {}",
                config.voices,
                voices.len()
            )));
        }
        Ok(Self { config, voices })
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Parse, expand and play a chord symbol starting at `start`.
    ///
    /// Nothing is triggered unless the whole chord expands, so a bad symbol never
    /// plays a partial chord.
    pub fn play(&mut self, chord_name: &str, start: f64) -> Result<Vec<PlaybackEvent>, ChordError> {
        let spec = parse(chord_name).map_err(|e| {
            log::warn!("not playing '{}': {}", chord_name, e);
            e
        })?;
        self.play_spec(&spec, start)
    }

    /// Expand and play an already parsed chord starting at `start`.
    pub fn play_spec(
        &mut self,
        spec: &ChordSpec,
        start: f64,
    ) -> Result<Vec<PlaybackEvent>, ChordError> {
        let pitches = expand(spec).map_err(|e| {
            log::warn!("not playing '{}': {}", spec, e);
            e
        })?;

        let events = schedule(&pitches, &self.config, start);
        for event in &events {
            self.voices[event.voice].trigger_attack_release(
                &event.pitch,
                self.config.note_value,
                event.start_time,
            );
        }

        log::debug!(
            "played '{}' as {} events on {} voices",
            spec,
            events.len(),
            self.voices.len()
        );
        Ok(events)
    }
}
