use super::*;
use crate::{chord_pitches, ChordError, ChordSpec};
use std::cell::RefCell;
use std::rc::Rc;

type Played = Rc<RefCell<Vec<(usize, String, NoteValue, f64)>>>;

/// Synth that records what it was asked to play
struct RecordingSynth {
    id: usize,
    played: Played,
}

impl Synth for RecordingSynth {
    fn trigger_attack_release(&mut self, pitch: &str, duration: NoteValue, start: f64) {
        self.played
            .borrow_mut()
            .push((self.id, pitch.to_string(), duration, start));
    }
}

fn recording_player(config: PlaybackConfig) -> (ChordPlayer, Played) {
    let played: Played = Rc::new(RefCell::new(Vec::new()));
    let voices: Vec<Box<dyn Synth>> = (0..config.voices)
        .map(|id| {
            Box::new(RecordingSynth {
                id,
                played: Rc::clone(&played),
            }) as Box<dyn Synth>
        })
        .collect();
    let player = ChordPlayer::new(config, voices).unwrap();
    (player, played)
}

#[test]
fn test_schedule_alternates_voices() {
    let pitches = chord_pitches("Cmaj7").unwrap();
    let events = schedule(&pitches, &PlaybackConfig::default(), 1.5);

    let voices: Vec<usize> = events.iter().map(|e| e.voice).collect();
    assert_eq!(voices, vec![0, 1, 0, 1, 0]);
    assert!(events.iter().all(|e| e.start_time == 1.5));
}

#[test]
fn test_schedule_midi_notes() {
    let pitches = chord_pitches("Am").unwrap();
    let events = schedule(&pitches, &PlaybackConfig::default(), 0.0);

    // A3=57, A4=69, C5=72, E5=76
    let midi: Vec<i32> = events.iter().map(|e| e.midi_note).collect();
    assert_eq!(midi, vec![57, 69, 72, 76]);
    assert!((events[1].frequency - 440.0).abs() < 1e-9);
}

#[test]
fn test_schedule_duration_follows_tempo() {
    let pitches = chord_pitches("C").unwrap();
    let config = PlaybackConfig {
        tempo: 60,
        note_value: NoteValue::Half,
        voices: 1,
    };
    let events = schedule(&pitches, &config, 0.0);
    assert!(events.iter().all(|e| e.duration == 2.0 && e.voice == 0));
}

#[test]
fn test_player_triggers_each_pitch_once() {
    let (mut player, played) = recording_player(PlaybackConfig::default());
    let events = player.play("Cmajor", 3.0).unwrap();

    let played = played.borrow();
    assert_eq!(events.len(), 4);
    assert_eq!(played.len(), 4);
    assert_eq!(played[0], (0, "C3".to_string(), NoteValue::Quarter, 3.0));
    assert_eq!(played[1], (1, "C4".to_string(), NoteValue::Quarter, 3.0));
    assert_eq!(played[2], (0, "E4".to_string(), NoteValue::Quarter, 3.0));
    assert_eq!(played[3], (1, "G4".to_string(), NoteValue::Quarter, 3.0));
}

#[test]
fn test_player_plays_nothing_for_bad_symbol() {
    let (mut player, played) = recording_player(PlaybackConfig::default());

    assert!(matches!(
        player.play("Cxyz", 0.0),
        Err(ChordError::ParseError { .. })
    ));
    assert!(matches!(
        player.play("Hm", 0.0),
        Err(ChordError::InvalidNote(_))
    ));
    assert!(played.borrow().is_empty());
}

#[test]
fn test_player_rejects_voice_mismatch() {
    let config = PlaybackConfig {
        voices: 3,
        ..PlaybackConfig::default()
    };
    let result = ChordPlayer::new(config, Vec::new());
    assert!(matches!(result, Err(ChordError::ConfigError(_))));
}

#[test]
fn test_player_rejects_zero_voices() {
    let config = PlaybackConfig {
        voices: 0,
        ..PlaybackConfig::default()
    };
    let result = ChordPlayer::new(config, Vec::new());
    assert_eq!(
        result.err(),
        Some(ChordError::ConfigError("voices must be at least 1".to_string()))
    );
}

#[test]
fn test_play_spec_skips_reparse() {
    let (mut player, played) = recording_player(PlaybackConfig::default());
    let spec = ChordSpec {
        root: "F".to_string(),
        quality: Some("dominant".to_string()),
        tensions: vec!["#9".to_string()],
        bass: None,
    };
    let events = player.play_spec(&spec, 0.5).unwrap();
    let pitches: Vec<&str> = events.iter().map(|e| e.pitch.as_str()).collect();
    assert_eq!(pitches, ["F3", "F4", "A4", "C5", "D#5", "G#5"]);
    assert_eq!(played.borrow().len(), 6);
    assert!(played.borrow().iter().all(|(_, _, _, start)| *start == 0.5));
}

#[test]
fn test_play_spec_unknown_quality_triggers_nothing() {
    let (mut player, played) = recording_player(PlaybackConfig::default());
    let spec = ChordSpec {
        quality: Some("sus4".to_string()),
        ..ChordSpec::default()
    };
    assert!(matches!(
        player.play_spec(&spec, 0.0),
        Err(ChordError::ExpansionError(_))
    ));
    assert!(played.borrow().is_empty());
}

#[test]
fn test_config_defaults() {
    let config = PlaybackConfig::from_yaml("").unwrap();
    assert_eq!(config, PlaybackConfig::default());
    assert_eq!(config.tempo, 120);
    assert_eq!(config.note_value, NoteValue::Quarter);
    assert_eq!(config.voices, 2);
}

#[test]
fn test_config_from_yaml() {
    let source = r#"
tempo: 96
note-value: 8n
voices: 3
"#;
    let config = PlaybackConfig::from_yaml(source).unwrap();
    assert_eq!(config.tempo, 96);
    assert_eq!(config.note_value, NoteValue::Eighth);
    assert_eq!(config.voices, 3);
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        PlaybackConfig::from_yaml("note-value: 3n"),
        Err(ChordError::ConfigError(_))
    ));
    assert!(matches!(
        PlaybackConfig::from_yaml("voices: 0"),
        Err(ChordError::ConfigError(_))
    ));
    assert!(matches!(
        PlaybackConfig::from_yaml("tempo: 0"),
        Err(ChordError::ConfigError(_))
    ));
    assert!(matches!(
        PlaybackConfig::from_yaml("tempo: fast"),
        Err(ChordError::ConfigError(_))
    ));
}

#[test]
fn test_note_value_round_trip_text() {
    for text in ["1n", "2n", "4n", "8n", "16n"] {
        assert_eq!(NoteValue::from_str(text).unwrap().to_string(), text);
    }
    assert_eq!(NoteValue::from_str("32n"), None);
}

#[test]
fn test_event_json_shape() {
    let pitches = chord_pitches("C").unwrap();
    let events = schedule(&pitches[..1], &PlaybackConfig::default(), 0.0);
    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["pitch"], "C3");
    assert_eq!(json["midiNote"], 48);
    assert_eq!(json["startTime"], 0.0);
}
