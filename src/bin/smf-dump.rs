//! Prints the header and every event of a Standard MIDI File

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use smf_reader::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Dump the contents of a Standard MIDI File")]
struct Args {
    /// Path to a .mid file
    path: PathBuf,
    /// Only print this track
    #[arg(short, long)]
    track: Option<usize>,
    /// Read sysex payloads by their stored length instead of scanning for F7
    #[arg(long)]
    length_prefixed_sysex: bool,
    /// Skip over corrupt tracks instead of stopping at the first one
    #[arg(long)]
    resync: bool,
    /// Report unknown codes and skipped tracks on stderr
    #[arg(short, long)]
    verbose: bool,
}

struct StderrSink;

impl DecodeSink for StderrSink {
    fn unknown(&mut self, offset: usize, unknown: UnknownEvent) {
        eprintln!("@{offset}: {unknown}");
    }

    fn track_skipped(&mut self, index: usize, error: &ReaderError) {
        eprintln!("skipped track {index}: {error}");
    }

    fn track_count_mismatch(&mut self, declared: u16, found: usize) {
        eprintln!("header declares {declared} tracks, found {found}");
    }

    fn trailing_bytes(&mut self, offset: usize, len: usize) {
        eprintln!("@{offset}: {len} bytes after the last track");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;

    let mut options = DecodeOptions::new();
    if args.length_prefixed_sysex {
        options = options.with_sysex_framing(SysexFraming::LengthPrefixed);
    }
    if args.resync {
        options = options.with_track_recovery(TrackRecovery::Resync);
    }

    let decoded = if args.verbose {
        Decoder::new()
            .with_options(options)
            .with_sink(StderrSink)
            .decode(&bytes)
    } else {
        Decoder::new().with_options(options).decode(&bytes)
    };
    let file = decoded.with_context(|| format!("decoding {}", args.path.display()))?;

    let header = file.header();
    println!(
        "format {} ({}), {} tracks declared",
        header.format_code(),
        header.format_type(),
        header.track_count()
    );
    match file.timing() {
        Ok(Timing::TicksPerQuarterNote(tpqn)) => {
            println!("{} ticks per quarter note", tpqn.ticks_per_quarter_note())
        }
        Ok(Timing::Smpte(smpte)) => println!(
            "{} fps, {} ticks per frame",
            smpte.fps().as_f64(),
            smpte.ticks_per_frame()
        ),
        Err(e) => println!("invalid time division: {e}"),
    }

    for (index, track) in file.tracks().iter().enumerate() {
        if args.track.is_some_and(|only| only != index) {
            continue;
        }
        dump_track(index, track);
    }
    for skipped in file.skipped() {
        println!("== track {} skipped: {} ==", skipped.index(), skipped.error());
    }
    Ok(())
}

fn dump_track(index: usize, track: &Track<'_>) {
    match track.name() {
        Some(name) => println!("== track {index}: {name} =="),
        None => println!("== track {index} =="),
    }
    for event in track.events() {
        println!("+{} {}", event.delta_time(), describe(event.kind()));
    }
}

fn describe(kind: &EventKind<'_>) -> String {
    match kind {
        EventKind::Channel(channel) => {
            let ch = channel.channel();
            match channel.message() {
                VoiceMessage::NoteOff { note, velocity } => {
                    format!("[{ch}] off {note} vel {}", velocity.byte())
                }
                VoiceMessage::NoteOn { note, velocity } => {
                    format!("[{ch}] on {note} vel {}", velocity.byte())
                }
                VoiceMessage::PolyPressure { note, pressure } => {
                    format!("[{ch}] pressure {note} {pressure}")
                }
                VoiceMessage::ControlChange(change) => format!("[{ch}] {change:?}"),
                VoiceMessage::ProgramChange { program } => {
                    format!("[{ch}] program {} ({})", program.byte(), program.instrument())
                }
                VoiceMessage::ChannelPressure { pressure } => {
                    format!("[{ch}] channel pressure {pressure}")
                }
                VoiceMessage::PitchBend(bend) => format!("[{ch}] bend {}", bend.value_signed()),
            }
        }
        EventKind::Meta(meta) => match meta.message() {
            MetaMessage::Text(text) => {
                format!("{:?} '{}'", text.kind(), text.to_string_lossy())
            }
            MetaMessage::Tempo(tempo) => format!(
                "tempo {} us/qn ({:.2} bpm)",
                tempo.micros_per_quarter_note(),
                tempo.beats_per_minute().unwrap_or(0.)
            ),
            MetaMessage::TimeSignature(sig) => format!(
                "time signature {}/{}",
                sig.numerator(),
                sig.denominator().unwrap_or(0)
            ),
            MetaMessage::KeySignature(sig) => match sig.musical_key() {
                Some(key) => format!("key signature {key}"),
                None => format!("key signature {} {}", sig.sharps_flats(), sig.mode()),
            },
            MetaMessage::EndOfTrack => "end of track".to_string(),
            MetaMessage::Undefined(data) => {
                format!("meta {:#06X} ({} bytes)", meta.tag(), data.len())
            }
            other => format!("{other:?}"),
        },
        EventKind::Common(SystemCommon::SysEx(sysex)) => {
            format!("sysex {:02X?}", sysex.payload())
        }
        EventKind::Common(SystemCommon::Escape(sysex)) => {
            format!("escape {:02X?}", sysex.payload())
        }
        EventKind::Common(common) => format!("{common:?}"),
        EventKind::Realtime(realtime) => format!("{realtime:?}"),
    }
}
