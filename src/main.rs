use chordplay::playback::{ChordPlayer, NoteValue, PlaybackConfig, PlaybackEvent, Synth};
use chordplay::{parse, ChordSpec};
use std::env;
use std::fs;
use std::process;

const USAGE: &str = "Usage: chordplay [--config <playback.yaml>] [--json] <chord>...";

/// Writes log records to stderr; level from CHORDPLAY_LOG (default warn)
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var("CHORDPLAY_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Stand-in synthesizer: reports each triggered pitch through the logger
struct ConsoleSynth {
    id: usize,
}

impl Synth for ConsoleSynth {
    fn trigger_attack_release(&mut self, pitch: &str, duration: NoteValue, start: f64) {
        log::info!("voice {}: {} for {} at {:.3}s", self.id, pitch, duration, start);
    }
}

struct Options {
    config_path: Option<String>,
    json: bool,
    chords: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config_path: None,
        json: false,
        chords: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--config" => match iter.next() {
                Some(path) => options.config_path = Some(path.clone()),
                None => return Err("--config needs a file path".to_string()),
            },
            "-h" | "--help" => return Err(String::new()),
            _ => options.chords.push(arg.clone()),
        }
    }

    if options.chords.is_empty() {
        return Err("no chord symbols given".to_string());
    }
    Ok(options)
}

fn load_config(path: Option<&str>) -> PlaybackConfig {
    let Some(path) = path else {
        return PlaybackConfig::default();
    };

    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading config '{}': {}", path, e);
            process::exit(1);
        }
    };

    match PlaybackConfig::from_yaml(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error in config '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn print_text(symbol: &str, spec: &ChordSpec, events: &[PlaybackEvent], voices: usize) {
    println!("{}", symbol);
    match serde_json::to_string(spec) {
        Ok(details) => println!("  details: {}", details),
        Err(e) => eprintln!("  details unavailable: {}", e),
    }
    let pitches: Vec<&str> = events.iter().map(|e| e.pitch.as_str()).collect();
    println!("  pitches: {}", pitches.join(" "));
    for voice in 0..voices {
        let assigned: Vec<&str> = events
            .iter()
            .filter(|e| e.voice == voice)
            .map(|e| e.pitch.as_str())
            .collect();
        println!("  voice {}: {}", voice, assigned.join(" "));
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("Error: {}", message);
            }
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let config = load_config(options.config_path.as_deref());
    let voices: Vec<Box<dyn Synth>> = (0..config.voices)
        .map(|id| Box::new(ConsoleSynth { id }) as Box<dyn Synth>)
        .collect();
    let voice_count = config.voices;
    let mut player = match ChordPlayer::new(config, voices) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut failed = false;
    let mut report = Vec::new();

    for symbol in &options.chords {
        let spec = match parse(symbol) {
            Ok(spec) => spec,
            Err(e) => {
                eprintln!("Invalid chord '{}': {}", symbol, e);
                failed = true;
                continue;
            }
        };

        let events = match player.play_spec(&spec, 0.0) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("Cannot play '{}': {}", symbol, e);
                failed = true;
                continue;
            }
        };

        if options.json {
            let pitches: Vec<String> = events.iter().map(|e| e.pitch.clone()).collect();
            report.push(serde_json::json!({
                "symbol": symbol,
                "details": spec,
                "pitches": pitches,
                "events": events,
            }));
        } else {
            print_text(symbol, &spec, &events, voice_count);
        }
    }

    if options.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing JSON: {}", e);
                process::exit(1);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

