#![doc = r#"
Delta-time prefixed events, as they appear inside a track chunk.

The status byte selects the decoder:

| Status | Decoder |
|---|---|
| `FF` | [`MetaEvent`] |
| `F8`-`FE` | [`SystemRealtime`] |
| `F0`-`F7` | [`SystemCommon`] |
| `80`-`EF` | [`ChannelEvent`] |
| `00`-`7F` | running status, the previous channel status is reused |
"#]

mod unknown;
pub use unknown::*;

use crate::{
    ParseError,
    file::{DecodeOptions, MetaEvent},
    message::{
        channel::ChannelEvent,
        system::{SystemCommon, SystemRealtime, is_realtime_status},
    },
    reader::{ReadResult, Reader, ReaderError},
};

/// The channel status byte a data byte in status position is decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunningStatus(Option<u8>);

impl RunningStatus {
    /// The status byte in effect, if any
    pub const fn get(&self) -> Option<u8> {
        self.0
    }

    fn set(&mut self, status: u8) {
        self.0 = Some(status);
    }

    fn clear(&mut self) {
        self.0 = None;
    }
}

/// A decoded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind<'a> {
    /// A channel voice or mode message
    Channel(ChannelEvent),
    /// A meta event, borrowing from the file buffer
    Meta(MetaEvent<'a>),
    /// A system exclusive or other system common message
    Common(SystemCommon),
    /// A real-time message
    Realtime(SystemRealtime),
}

#[doc = r#"
An event and the delta time preceding it.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [0x00, 0x90, 0x3C, 0x40, 0x60, 0x3C, 0x00];
let mut reader = Reader::from_byte_slice(&bytes);
let mut running = RunningStatus::default();
let options = DecodeOptions::new();

let first = Event::read(&mut reader, &mut running, &options).unwrap();
// a data byte where the status should be reuses the last channel status
let second = Event::read(&mut reader, &mut running, &options).unwrap();

assert_eq!(first.delta_time(), 0);
assert_eq!(second.delta_time(), 0x60);
assert_eq!(second.offset(), 5);
let EventKind::Channel(note) = second.kind() else {
    panic!("expected a channel event");
};
assert_eq!(note.kind(), VoiceKind::NoteOn);
```
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<'a> {
    delta_time: u32,
    offset: usize,
    kind: EventKind<'a>,
}

impl<'a> Event<'a> {
    /// Reads a delta time and the event after it
    pub fn read(
        reader: &mut Reader<'a>,
        running: &mut RunningStatus,
        options: &DecodeOptions,
    ) -> ReadResult<Self> {
        let delta_time = reader.read_varlen()?.value();
        let offset = reader.buffer_position();
        let lead = reader.peek_byte()?;

        let kind = match lead {
            0xFF => {
                running.clear();
                EventKind::Meta(MetaEvent::read(reader)?)
            }
            status if is_realtime_status(status) => {
                reader.read_next()?;
                EventKind::Realtime(SystemRealtime::from_status(lead))
            }
            0xF0..=0xF7 => {
                reader.read_next()?;
                running.clear();
                EventKind::Common(SystemCommon::read(lead, reader, options.sysex_framing())?)
            }
            0x80..=0xEF => {
                reader.read_next()?;
                running.set(lead);
                EventKind::Channel(ChannelEvent::read(lead, reader)?)
            }
            _ => match running.get() {
                Some(status) if options.running_status() => {
                    EventKind::Channel(ChannelEvent::read(status, reader)?)
                }
                _ => {
                    return Err(ReaderError::parse_error(
                        offset,
                        ParseError::UnexpectedDataByte(lead),
                    ));
                }
            },
        };

        Ok(Self {
            delta_time,
            offset,
            kind,
        })
    }

    /// Ticks since the previous event of the track
    pub const fn delta_time(&self) -> u32 {
        self.delta_time
    }

    /// Offset of the status byte, or of the first data byte under running status
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The decoded event
    pub const fn kind(&self) -> &EventKind<'a> {
        &self.kind
    }

    /// True for the `FF 2F 00` closing a track
    pub const fn is_end_of_track(&self) -> bool {
        matches!(&self.kind, EventKind::Meta(meta) if meta.is_end_of_track())
    }

    /// The undecodable part of this event, if there is one
    pub fn unknown(&self) -> Option<UnknownEvent> {
        UnknownEvent::from_kind(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Channel,
        file::MetaMessage,
        message::{
            channel::{ChannelMode, ControlChange, VoiceMessage},
            system::{SysexEvent, SysexFraming},
        },
        reader::ReaderErrorKind,
    };
    use pretty_assertions::assert_eq;

    fn read_all<'a>(bytes: &'a [u8], options: &DecodeOptions) -> ReadResult<Vec<Event<'a>>> {
        let mut reader = Reader::from_byte_slice(bytes);
        let mut running = RunningStatus::default();
        let mut events = Vec::new();
        while !reader.is_exhausted() {
            events.push(Event::read(&mut reader, &mut running, options)?);
        }
        Ok(events)
    }

    #[test]
    fn note_on() {
        let events = read_all(&[0x00, 0x90, 0x3C, 0x40], &DecodeOptions::new()).unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.delta_time(), 0);
        assert_eq!(event.offset(), 1);
        let EventKind::Channel(channel) = event.kind() else {
            panic!("expected a channel event, got {event:?}");
        };
        assert_eq!(channel.channel(), Channel::One);
        assert_eq!(channel.status(), 0x90);
        assert_eq!(event.unknown(), None);
    }

    #[test]
    fn running_status_is_reused() {
        let bytes = [
            0x00, 0x91, 0x3C, 0x40, // note on
            0x10, 0x3E, 0x40, // running status
            0x10, 0xFE, // active sensing keeps it
            0x10, 0x40, 0x00, // running status
        ];
        let events = read_all(&bytes, &DecodeOptions::new()).unwrap();
        assert_eq!(events.len(), 4);
        for index in [1, 3] {
            let EventKind::Channel(channel) = events[index].kind() else {
                panic!("expected a channel event at {index}");
            };
            assert_eq!(channel.channel(), Channel::Two);
            assert_eq!(channel.kind(), crate::message::channel::VoiceKind::NoteOn);
        }
        assert_eq!(events[1].offset(), 5);
        assert_eq!(
            events[2].kind(),
            &EventKind::Realtime(SystemRealtime::ActiveSensing)
        );
    }

    #[test]
    fn meta_and_sysex_cancel_running_status() {
        let bytes = [0x00, 0x90, 0x3C, 0x40, 0x00, 0xFF, 0x01, 0x00, 0x00, 0x3C, 0x40];
        let err = read_all(&bytes, &DecodeOptions::new()).unwrap_err();
        assert_eq!(err.position(), 9);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::ParseError(ParseError::UnexpectedDataByte(0x3C))
        );

        let bytes = [0x00, 0x90, 0x3C, 0x40, 0x00, 0xF0, 0x01, 0xF7, 0x00, 0x3C, 0x40];
        assert!(read_all(&bytes, &DecodeOptions::new()).unwrap_err().is_desync_risk());
    }

    #[test]
    fn running_status_can_be_disabled() {
        let bytes = [0x00, 0x90, 0x3C, 0x40, 0x00, 0x3C, 0x00];
        let options = DecodeOptions::new().with_running_status(false);
        let err = read_all(&bytes, &options).unwrap_err();
        assert_eq!(err.position(), 5);
        assert!(err.is_desync_risk());
    }

    #[test]
    fn sysex_framing_follows_the_options() {
        let bytes = [0x00, 0xF0, 0x02, 0x7D, 0xF7];
        let events = read_all(&bytes, &DecodeOptions::new()).unwrap();
        assert_eq!(
            events[0].kind(),
            &EventKind::Common(SystemCommon::SysEx(SysexEvent::new(vec![0x02, 0x7D])))
        );

        let options = DecodeOptions::new().with_sysex_framing(SysexFraming::LengthPrefixed);
        let events = read_all(&bytes, &options).unwrap();
        assert_eq!(
            events[0].kind(),
            &EventKind::Common(SystemCommon::SysEx(SysexEvent::new(vec![0x7D])))
        );
    }

    #[test]
    fn all_notes_off() {
        let events = read_all(&[0x00, 0xB3, 0x7B, 0x00], &DecodeOptions::new()).unwrap();
        let EventKind::Channel(channel) = events[0].kind() else {
            panic!("expected a channel event");
        };
        assert_eq!(
            channel.message(),
            &VoiceMessage::ControlChange(ControlChange::Mode(ChannelMode::AllNotesOff))
        );
    }

    #[test]
    fn unknown_parts_are_reported() {
        let bytes = [
            0x00, 0xB0, 0x03, 0x10, // undefined controller
            0x00, 0xB0, 0x7C, 0x01, // omni off with a value
            0x00, 0xF4, // undefined system common
            0x00, 0xF9, // undefined real-time
            0x00, 0xFF, 0x60, 0x01, 0x00, // undefined meta
        ];
        let events = read_all(&bytes, &DecodeOptions::new()).unwrap();
        let unknown: Vec<_> = events.iter().map(Event::unknown).collect();
        assert_eq!(
            unknown,
            [
                Some(UnknownEvent::Controller(0x03)),
                Some(UnknownEvent::ChannelMode {
                    controller: 0x7C,
                    value: 0x01
                }),
                Some(UnknownEvent::SystemCommon(0xF4)),
                Some(UnknownEvent::Realtime(0xF9)),
                Some(UnknownEvent::Meta(0xFF60)),
            ]
        );
    }

    #[test]
    fn end_of_track() {
        let events = read_all(&[0x00, 0xFF, 0x2F, 0x00], &DecodeOptions::new()).unwrap();
        assert!(events[0].is_end_of_track());
        let EventKind::Meta(meta) = events[0].kind() else {
            panic!("expected a meta event");
        };
        assert_eq!(meta.message(), &MetaMessage::EndOfTrack);
    }

    #[test]
    fn truncated_events_are_out_of_bounds() {
        let cases: [&[u8]; 4] = [&[0x00], &[0x00, 0x90, 0x3C], &[0x81], &[0x00, 0xFF, 0x51]];
        for bytes in cases {
            let err = read_all(bytes, &DecodeOptions::new()).unwrap_err();
            assert!(err.is_out_of_bounds(), "{bytes:02X?} gave {err}");
        }
    }
}
