mod smpte;
pub use smpte::*;

use crate::SmpteError;

/// How the delta times of a file are to be interpreted.
///
/// Derived from the time division field of the header. A clear leading bit
/// means ticks per quarter note, a set one means SMPTE frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta times count ticks of a quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// Delta times count subdivisions of an SMPTE frame
    Smpte(SmpteHeader),
}

impl Timing {
    /// Interpret a raw time division
    pub fn from_division(division: u16) -> Result<Self, SmpteError> {
        let bytes = division.to_be_bytes();
        match bytes[0] >> 7 {
            0 => Ok(Timing::TicksPerQuarterNote(TicksPerQuarterNote {
                inner: bytes,
            })),
            _ => SmpteHeader::new(bytes).map(Timing::Smpte),
        }
    }

    /// Returns Some if the timing is defined as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    pub(crate) inner: [u8; 2],
}

impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        u16::from_be_bytes(self.inner) & 0x7FFF
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    fps: SmpteFps,
    ticks_per_frame: u8,
}

impl SmpteHeader {
    fn new(bytes: [u8; 2]) -> Result<Self, SmpteError> {
        // the upper byte is one of -24, -25, -29 or -30 in two's complement
        let byte = bytes[0] as i8;
        let fps = match byte {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            -29 => SmpteFps::TwentyNine,
            -30 => SmpteFps::Thirty,
            _ => return Err(SmpteError::HeaderFrameTime(byte)),
        };
        // resolution is a full byte here, not a 7-bit data byte
        Ok(Self {
            fps,
            ticks_per_frame: bytes[1],
        })
    }

    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[test]
fn division_interpretation() {
    use pretty_assertions::assert_eq;
    let tpqn = Timing::from_division(480).unwrap();
    assert_eq!(tpqn.ticks_per_quarter_note(), Some(480));

    let Timing::Smpte(smpte) = Timing::from_division(0xE728).unwrap() else {
        panic!("expected SMPTE timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);

    let Timing::Smpte(smpte) = Timing::from_division(0xE2F0).unwrap() else {
        panic!("expected SMPTE timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::Thirty);
    assert_eq!(smpte.ticks_per_frame(), 240);

    assert_eq!(
        Timing::from_division(0xE950),
        Err(SmpteError::HeaderFrameTime(-23))
    );
}
