use alloc::vec::Vec;

use crate::{
    DataByte, ParseError,
    message::channel::read_data_byte,
    reader::{ReadResult, Reader, inv_data},
};

/// The byte closing a system exclusive message
pub const END_OF_EXCLUSIVE: u8 = 0xF7;

/// How the payload of a system exclusive event is delimited
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysexFraming {
    /// Bytes are collected until `F7`, which is consumed. The undefined
    /// system common codes `F1`, `F4` and `F5` are skipped.
    #[default]
    Terminated,
    /// A variable length quantity gives the payload length, as in a stored
    /// file. A trailing `F7` is dropped from the payload.
    LengthPrefixed,
}

#[doc = r#"
The payload of a system exclusive event.

Neither the opening status byte nor the closing `F7` is kept.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysexEvent {
    payload: Vec<u8>,
}

impl SysexEvent {
    /// Wrap an already delimited payload
    pub const fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }

    /// The payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The manufacturer id, if the payload has one
    pub fn manufacturer(&self) -> Option<u8> {
        self.payload.first().copied()
    }

    fn read_terminated(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let mut payload = Vec::new();
        loop {
            match reader.read_next()? {
                END_OF_EXCLUSIVE => break,
                0xF1 | 0xF4 | 0xF5 => {}
                byte => payload.push(byte),
            }
        }
        Ok(Self { payload })
    }

    fn read_length_prefixed(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let len = reader.read_varlen()?.value() as usize;
        let mut bytes = reader.read_exact(len)?;
        if let [rest @ .., END_OF_EXCLUSIVE] = bytes {
            bytes = rest;
        }
        Ok(Self {
            payload: bytes.to_vec(),
        })
    }
}

#[doc = r#"
A system common message, status `F0` through `F7`.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [0x43, 0x12, 0xF4, 0x00, 0xF7, 0x90];
let mut reader = Reader::from_byte_slice(&bytes);
let message = SystemCommon::read(0xF0, &mut reader, SysexFraming::Terminated).unwrap();

let SystemCommon::SysEx(sysex) = message else {
    panic!("expected a sysex");
};
assert_eq!(sysex.payload(), &[0x43, 0x12, 0x00]);
// the terminator is consumed, the next status byte is not
assert_eq!(reader.buffer_position(), 5);
```
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemCommon {
    /// `F0`, a system exclusive message
    SysEx(SysexEvent),
    /// `F7` in status position, an escape or continuation packet
    Escape(SysexEvent),
    /// `F2`, in MIDI beats of six clocks since the start of the song
    SongPositionPointer(u16),
    /// `F3`
    SongSelect(DataByte),
    /// `F6`
    TuneRequest,
    /// `F1`, `F4` or `F5`. These carry no data.
    Undefined(u8),
}

impl SystemCommon {
    /// Decodes the message following `status`, which must already be consumed.
    pub fn read(status: u8, reader: &mut Reader<'_>, framing: SysexFraming) -> ReadResult<Self> {
        let message = match status {
            0xF0 => Self::SysEx(match framing {
                SysexFraming::Terminated => SysexEvent::read_terminated(reader)?,
                SysexFraming::LengthPrefixed => SysexEvent::read_length_prefixed(reader)?,
            }),
            END_OF_EXCLUSIVE => Self::Escape(match framing {
                SysexFraming::Terminated => SysexEvent::default(),
                SysexFraming::LengthPrefixed => SysexEvent::read_length_prefixed(reader)?,
            }),
            0xF2 => {
                let lsb = read_data_byte(reader)?;
                let msb = read_data_byte(reader)?;
                Self::SongPositionPointer(((msb.value() as u16) << 7) | lsb.value() as u16)
            }
            0xF3 => Self::SongSelect(read_data_byte(reader)?),
            0xF6 => Self::TuneRequest,
            0xF1 | 0xF4 | 0xF5 => Self::Undefined(status),
            _ => return Err(inv_data(reader, ParseError::InvalidStatus(status))),
        };
        Ok(message)
    }

    /// The status byte of the message
    pub const fn status(&self) -> u8 {
        match self {
            Self::SysEx(_) => 0xF0,
            Self::Escape(_) => END_OF_EXCLUSIVE,
            Self::SongPositionPointer(_) => 0xF2,
            Self::SongSelect(_) => 0xF3,
            Self::TuneRequest => 0xF6,
            Self::Undefined(status) => *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(status: u8, bytes: &[u8], framing: SysexFraming) -> ReadResult<(SystemCommon, usize)> {
        let mut reader = Reader::from_byte_slice(bytes);
        let message = SystemCommon::read(status, &mut reader, framing)?;
        Ok((message, reader.buffer_position()))
    }

    #[test]
    fn terminated_sysex_consumes_the_terminator_once() {
        let (message, consumed) =
            read(0xF0, &[0x7E, 0x7F, 0xF7, 0xF7], SysexFraming::Terminated).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(message, SystemCommon::SysEx(SysexEvent::new(vec![0x7E, 0x7F])));
    }

    #[test]
    fn terminated_sysex_skips_undefined_codes() {
        let (message, _) = read(
            0xF0,
            &[0xF1, 0x01, 0xF4, 0x02, 0xF5, 0x03, 0xF7],
            SysexFraming::Terminated,
        )
        .unwrap();
        let SystemCommon::SysEx(sysex) = message else {
            panic!("expected a sysex");
        };
        assert_eq!(sysex.payload(), &[0x01, 0x02, 0x03]);
        assert_eq!(sysex.manufacturer(), Some(0x01));
    }

    #[test]
    fn unterminated_sysex_is_out_of_bounds() {
        let err = read(0xF0, &[0x01, 0x02], SysexFraming::Terminated).unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn bare_escape_is_empty() {
        let (message, consumed) = read(0xF7, &[0x90], SysexFraming::Terminated).unwrap();
        assert_eq!(consumed, 0);
        assert_eq!(message, SystemCommon::Escape(SysexEvent::default()));
    }

    #[test]
    fn length_prefixed_sysex() {
        let (message, consumed) =
            read(0xF0, &[0x03, 0x41, 0x10, 0xF7, 0x00], SysexFraming::LengthPrefixed).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(message, SystemCommon::SysEx(SysexEvent::new(vec![0x41, 0x10])));

        let (message, consumed) =
            read(0xF7, &[0x02, 0xF3, 0x01], SysexFraming::LengthPrefixed).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(message, SystemCommon::Escape(SysexEvent::new(vec![0xF3, 0x01])));
    }

    #[test]
    fn song_position_and_select() {
        let (message, consumed) = read(0xF2, &[0x7F, 0x01], SysexFraming::Terminated).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(message, SystemCommon::SongPositionPointer(0xFF));

        let (message, _) = read(0xF3, &[0x05], SysexFraming::Terminated).unwrap();
        assert_eq!(message, SystemCommon::SongSelect(DataByte::new(5).unwrap()));

        let err = read(0xF3, &[0x85], SysexFraming::Terminated).unwrap_err();
        assert!(err.is_desync_risk());
    }

    #[test]
    fn undefined_codes_carry_no_data() {
        for status in [0xF1, 0xF4, 0xF5] {
            let (message, consumed) = read(status, &[0x10], SysexFraming::Terminated).unwrap();
            assert_eq!(consumed, 0);
            assert_eq!(message, SystemCommon::Undefined(status));
        }
        let (message, _) = read(0xF6, &[], SysexFraming::Terminated).unwrap();
        assert_eq!(message, SystemCommon::TuneRequest);
    }
}
