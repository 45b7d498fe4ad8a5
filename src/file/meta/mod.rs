#![doc = r#"
Meta events, the `FF` status inside a track chunk.

Every meta event is `FF <type> <length> <payload>`, where the length is a
variable length quantity. Types with a fixed payload size still store the
length, and a mismatch is treated as corruption of the track.
"#]

mod key_signature;
pub use key_signature::*;

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod text;
pub use text::*;

mod time_signature;
pub use time_signature::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{
    Channel, DataByte, MetaError, ParseError,
    reader::{ReadResult, Reader, ReaderError},
};

/// The known meta event tags, status byte included
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum MetaTag {
    SequenceNumber = 0xFF00,
    Text = 0xFF01,
    Copyright = 0xFF02,
    TrackName = 0xFF03,
    InstrumentName = 0xFF04,
    Lyric = 0xFF05,
    Marker = 0xFF06,
    CuePoint = 0xFF07,
    ChannelPrefix = 0xFF20,
    Port = 0xFF21,
    EndOfTrack = 0xFF2F,
    Tempo = 0xFF51,
    SmpteOffset = 0xFF54,
    TimeSignature = 0xFF58,
    KeySignature = 0xFF59,
    SequencerSpecific = 0xFF7F,
}

impl MetaTag {
    /// The payload length a tag requires, `None` if it is free
    pub const fn fixed_length(&self) -> Option<u32> {
        let len = match self {
            Self::ChannelPrefix | Self::Port => 1,
            Self::EndOfTrack => 0,
            Self::Tempo => 3,
            Self::SmpteOffset => 5,
            Self::TimeSignature => 4,
            Self::KeySignature => 2,
            _ => return None,
        };
        Some(len)
    }
}

#[doc = r#"
A decoded meta event payload.

Variable length payloads borrow from the file buffer.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaMessage<'a> {
    /// `FF 00`. The number is absent when the event has a length of zero,
    /// meaning the position of the track in the file.
    SequenceNumber(Option<u16>),
    /// `FF 01` through `FF 07`
    Text(TextEvent<'a>),
    /// `FF 20`, the channel later meta and sysex events apply to
    ChannelPrefix(Channel),
    /// `FF 21`, the output port of the track
    Port(DataByte),
    /// `FF 2F`
    EndOfTrack,
    /// `FF 51`
    Tempo(Tempo),
    /// `FF 54`
    SmpteOffset(SmpteOffset),
    /// `FF 58`
    TimeSignature(TimeSignature),
    /// `FF 59`
    KeySignature(KeySignature),
    /// `FF 7F`, data for a specific sequencer
    SequencerSpecific(&'a [u8]),
    /// A tag with no known meaning. The payload is skipped using its length.
    Undefined(&'a [u8]),
}

#[doc = r#"
A meta event with its tag.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
let mut reader = Reader::from_byte_slice(&bytes);
let event = MetaEvent::read(&mut reader).unwrap();

assert_eq!(event.known_tag(), Some(MetaTag::Tempo));
let MetaMessage::Tempo(tempo) = event.message() else {
    panic!("expected a tempo");
};
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaEvent<'a> {
    tag: u16,
    message: MetaMessage<'a>,
}

impl<'a> MetaEvent<'a> {
    /// Reads a meta event, starting at its `FF` status byte
    pub fn read(reader: &mut Reader<'a>) -> ReadResult<Self> {
        let tag = reader.read_u16()?;
        let length_position = reader.buffer_position();
        let length = reader.read_varlen()?.value();

        let Ok(known) = MetaTag::try_from(tag) else {
            let data = reader.read_exact(length as usize)?;
            return Ok(Self {
                tag,
                message: MetaMessage::Undefined(data),
            });
        };

        if let Some(expected) = known.fixed_length().filter(|&expected| expected != length) {
            return Err(ReaderError::parse_error(
                length_position,
                MetaError::LengthMismatch {
                    tag,
                    expected,
                    found: length,
                }
                .into(),
            ));
        }

        let payload_position = reader.buffer_position();
        let data = reader.read_exact(length as usize)?;
        let message = match known {
            MetaTag::SequenceNumber => match data {
                [] => MetaMessage::SequenceNumber(None),
                [hi, lo] => MetaMessage::SequenceNumber(Some(u16::from_be_bytes([*hi, *lo]))),
                _ => {
                    return Err(ReaderError::parse_error(
                        length_position,
                        MetaError::LengthMismatch {
                            tag,
                            expected: 2,
                            found: length,
                        }
                        .into(),
                    ));
                }
            },
            MetaTag::ChannelPrefix => {
                let channel = Channel::from_index(data[0]).ok_or_else(|| {
                    ReaderError::parse_error(
                        payload_position,
                        MetaError::InvalidChannelPrefix(data[0]).into(),
                    )
                })?;
                MetaMessage::ChannelPrefix(channel)
            }
            MetaTag::Port => MetaMessage::Port(
                DataByte::new(data[0]).map_err(|e| ReaderError::parse_error(payload_position, e))?,
            ),
            MetaTag::EndOfTrack => MetaMessage::EndOfTrack,
            MetaTag::Tempo => MetaMessage::Tempo(Tempo::from_bytes([data[0], data[1], data[2]])),
            MetaTag::SmpteOffset => MetaMessage::SmpteOffset(
                SmpteOffset::parse(data).map_err(|e| {
                    ReaderError::parse_error(payload_position, ParseError::Smpte(e))
                })?,
            ),
            MetaTag::TimeSignature => MetaMessage::TimeSignature(TimeSignature::from_bytes([
                data[0], data[1], data[2], data[3],
            ])),
            MetaTag::KeySignature => {
                MetaMessage::KeySignature(KeySignature::from_bytes([data[0], data[1]]))
            }
            MetaTag::SequencerSpecific => MetaMessage::SequencerSpecific(data),
            MetaTag::Text => text(TextKind::Text, data),
            MetaTag::Copyright => text(TextKind::Copyright, data),
            MetaTag::TrackName => text(TextKind::TrackName, data),
            MetaTag::InstrumentName => text(TextKind::InstrumentName, data),
            MetaTag::Lyric => text(TextKind::Lyric, data),
            MetaTag::Marker => text(TextKind::Marker, data),
            MetaTag::CuePoint => text(TextKind::CuePoint, data),
        };
        Ok(Self { tag, message })
    }

    /// The raw tag, `FF` followed by the type
    pub const fn tag(&self) -> u16 {
        self.tag
    }

    /// The tag, if it is one of the known ones
    pub fn known_tag(&self) -> Option<MetaTag> {
        MetaTag::try_from(self.tag).ok()
    }

    /// The decoded payload
    pub const fn message(&self) -> &MetaMessage<'a> {
        &self.message
    }

    /// True for `FF 2F`
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.message, MetaMessage::EndOfTrack)
    }
}

const fn text(kind: TextKind, data: &[u8]) -> MetaMessage<'_> {
    MetaMessage::Text(TextEvent::new(kind, data))
}
