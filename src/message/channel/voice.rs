use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{ControlChange, read_data_byte};
use crate::{
    DataByte, Note,
    reader::{ReadResult, Reader},
    tables::Instrument,
};

/// The upper nibble of a channel status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `8x`
    NoteOff = 0x80,
    /// `9x`
    NoteOn = 0x90,
    /// `Ax`
    PolyPressure = 0xA0,
    /// `Bx`
    ControlChange = 0xB0,
    /// `Cx`
    ProgramChange = 0xC0,
    /// `Dx`
    ChannelPressure = 0xD0,
    /// `Ex`
    PitchBend = 0xE0,
}

impl VoiceKind {
    /// The kind selected by a status byte, `None` outside `0x80..=0xEF`
    pub fn from_status(status: u8) -> Option<Self> {
        Self::try_from(status & 0xF0).ok()
    }

    /// How many data bytes follow the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

#[doc = r#"
The payload of a channel voice message.

Note numbers are checked against the note table; any other data byte must
still have its leading bit clear. Pitch bend bytes are masked instead.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceMessage {
    /// Stop sounding a note
    NoteOff {
        /// key number
        note: Note,
        /// release velocity
        velocity: Velocity,
    },
    /// Start sounding a note
    NoteOn {
        /// key number
        note: Note,
        /// attack velocity. Zero is commonly used as a note off.
        velocity: Velocity,
    },
    /// Polyphonic key pressure
    PolyPressure {
        /// key number
        note: Note,
        /// pressure amount
        pressure: DataByte,
    },
    /// A controller or channel mode change
    ControlChange(ControlChange),
    /// Select a patch
    ProgramChange {
        /// program number, zero-indexed
        program: Program,
    },
    /// Channel wide pressure
    ChannelPressure {
        /// pressure amount
        pressure: DataByte,
    },
    /// Pitch wheel position
    PitchBend(PitchBend),
}

impl VoiceMessage {
    pub(crate) fn read(kind: VoiceKind, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let message = match kind {
            VoiceKind::NoteOff => VoiceMessage::NoteOff {
                note: Note::from(read_data_byte(reader)?),
                velocity: Velocity(read_data_byte(reader)?),
            },
            VoiceKind::NoteOn => VoiceMessage::NoteOn {
                note: Note::from(read_data_byte(reader)?),
                velocity: Velocity(read_data_byte(reader)?),
            },
            VoiceKind::PolyPressure => VoiceMessage::PolyPressure {
                note: Note::from(read_data_byte(reader)?),
                pressure: read_data_byte(reader)?,
            },
            VoiceKind::ControlChange => {
                let number = read_data_byte(reader)?;
                let value = read_data_byte(reader)?;
                VoiceMessage::ControlChange(ControlChange::from_bytes(number, value))
            }
            VoiceKind::ProgramChange => VoiceMessage::ProgramChange {
                program: Program(read_data_byte(reader)?),
            },
            VoiceKind::ChannelPressure => VoiceMessage::ChannelPressure {
                pressure: read_data_byte(reader)?,
            },
            VoiceKind::PitchBend => {
                let [lsb, msb] = reader.read_exact_size()?;
                VoiceMessage::PitchBend(PitchBend::from_bytes(lsb, msb))
            }
        };
        Ok(message)
    }

    /// The kind of the message
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::PolyPressure { .. } => VoiceKind::PolyPressure,
            Self::ControlChange(_) => VoiceKind::ControlChange,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchBend(_) => VoiceKind::PitchBend,
        }
    }

    /// The note of note on, note off and poly pressure messages
    pub const fn note(&self) -> Option<Note> {
        match self {
            Self::NoteOff { note, .. } | Self::NoteOn { note, .. } | Self::PolyPressure { note, .. } => {
                Some(*note)
            }
            _ => None,
        }
    }
}

/// The velocity of a note on or note off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity(DataByte);

impl Velocity {
    /// Fails above 127
    pub fn new(byte: u8) -> Result<Self, crate::ParseError> {
        DataByte::new(byte).map(Self)
    }

    /// The raw velocity, 0-127
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

/// A zero-indexed program number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program(DataByte);

impl Program {
    /// Fails above 127
    pub fn new(byte: u8) -> Result<Self, crate::ParseError> {
        DataByte::new(byte).map(Self)
    }

    /// The raw program number, 0-127
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }

    /// The General MIDI patch this program selects
    pub const fn instrument(&self) -> Instrument {
        Instrument::from_program(self.0)
    }
}

#[doc = r#"
A 14-bit pitch wheel position.

The wire carries the low seven bits first. `0x2000` is the centre.

# Example
```rust
# use smf_reader::prelude::*;
let bend = PitchBend::from_bytes(0x00, 0x40);
assert_eq!(bend.value(), 0x2000);
assert_eq!(bend.value_signed(), 0);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchBend {
    lsb: DataByte,
    msb: DataByte,
}

impl PitchBend {
    /// The position of a centred wheel
    pub const CENTER: u16 = 0x2000;

    /// Build from the two wire bytes. Leading bits are masked off.
    pub const fn from_bytes(lsb: u8, msb: u8) -> Self {
        Self {
            lsb: DataByte::new_masked(lsb),
            msb: DataByte::new_masked(msb),
        }
    }

    /// The 14-bit position, 0 to 0x3FFF
    pub const fn value(&self) -> u16 {
        ((self.msb.value() as u16) << 7) | self.lsb.value() as u16
    }

    /// The position relative to centre, -8192 to 8191
    pub const fn value_signed(&self) -> i16 {
        self.value() as i16 - Self::CENTER as i16
    }

    /// The least significant seven bits
    pub const fn lsb(&self) -> u8 {
        self.lsb.value()
    }

    /// The most significant seven bits
    pub const fn msb(&self) -> u8 {
        self.msb.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseError, message::channel::ChannelMode};
    use pretty_assertions::assert_eq;

    fn read(kind: VoiceKind, bytes: &[u8]) -> ReadResult<(VoiceMessage, usize)> {
        let mut reader = Reader::from_byte_slice(bytes);
        let message = VoiceMessage::read(kind, &mut reader)?;
        Ok((message, reader.buffer_position()))
    }

    #[test]
    fn note_on() {
        let (message, consumed) = read(VoiceKind::NoteOn, &[0x3C, 0x40]).unwrap();
        assert_eq!(consumed, 2);
        let VoiceMessage::NoteOn { note, velocity } = message else {
            panic!("expected a note on, got {message:?}");
        };
        assert_eq!(note.byte(), 0x3C);
        assert_eq!(velocity.byte(), 0x40);
    }

    #[test]
    fn note_outside_the_table_fails() {
        let err = read(VoiceKind::NoteOff, &[0x80, 0x40]).unwrap_err();
        assert!(err.is_desync_risk());
        assert_eq!(err.position(), 0);
        assert_eq!(
            err.error_kind(),
            &crate::reader::ReaderErrorKind::ParseError(ParseError::InvalidDataByte(0x80))
        );
    }

    #[test]
    fn pitch_bend_centre() {
        let (message, consumed) = read(VoiceKind::PitchBend, &[0x00, 0x40]).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(message, VoiceMessage::PitchBend(PitchBend::from_bytes(0, 0x40)));
        let VoiceMessage::PitchBend(bend) = message else {
            unreachable!()
        };
        assert_eq!(bend.value(), 0x2000);
    }

    #[test]
    fn pitch_bend_extremes() {
        assert_eq!(PitchBend::from_bytes(0x7F, 0x7F).value(), 0x3FFF);
        assert_eq!(PitchBend::from_bytes(0x7F, 0x7F).value_signed(), 8191);
        assert_eq!(PitchBend::from_bytes(0, 0).value_signed(), -8192);
        // high bits never leak into the value
        assert_eq!(PitchBend::from_bytes(0xFF, 0xC0).value(), 0x207F);
    }

    #[test]
    fn single_data_byte_messages() {
        let (message, consumed) = read(VoiceKind::ProgramChange, &[40, 0x99]).unwrap();
        assert_eq!(consumed, 1);
        let VoiceMessage::ProgramChange { program } = message else {
            panic!("expected a program change");
        };
        assert_eq!(program.instrument(), Instrument::Violin);

        let (message, consumed) = read(VoiceKind::ChannelPressure, &[0x10]).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(
            message,
            VoiceMessage::ChannelPressure {
                pressure: DataByte::new(0x10).unwrap()
            }
        );
    }

    #[test]
    fn all_notes_off_is_a_mode_message() {
        let (message, _) = read(VoiceKind::ControlChange, &[123, 0]).unwrap();
        assert_eq!(
            message,
            VoiceMessage::ControlChange(ControlChange::Mode(ChannelMode::AllNotesOff))
        );
    }

    #[test]
    fn truncated_message_is_out_of_bounds() {
        assert!(read(VoiceKind::NoteOn, &[0x3C]).unwrap_err().is_out_of_bounds());
        assert!(read(VoiceKind::PitchBend, &[0x00]).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn status_nibbles() {
        assert_eq!(VoiceKind::from_status(0x9F), Some(VoiceKind::NoteOn));
        assert_eq!(VoiceKind::from_status(0xE3), Some(VoiceKind::PitchBend));
        assert_eq!(VoiceKind::from_status(0x7F), None);
        assert_eq!(VoiceKind::from_status(0xF0), None);
        assert_eq!(VoiceKind::ProgramChange.data_len(), 1);
        assert_eq!(VoiceKind::PolyPressure.data_len(), 2);
    }
}
