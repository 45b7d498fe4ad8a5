use core::fmt;

use crate::{DataByte, ParseError, tables::Percussion};

#[doc = r#"
A key number from the 128 entry note table.

Key numbers are 7-bit. Each one corresponds to a pitch class [`Key`] and an
[`Octave`]: `0` is `C(-1)`, `60` is middle C (`C4`) and `127` is `G9`.

# Example
```rust
# use smf_reader::prelude::*;
let note = Note::from_databyte(63).unwrap();

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(4));

assert!(Note::from_databyte(128).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note(DataByte);

impl Note {
    /// Look up a key number in the note table.
    ///
    /// Fails for bytes above 127.
    pub const fn from_databyte(byte: u8) -> Result<Self, ParseError> {
        match DataByte::new(byte) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    /// Create a note from a pitch class and an octave.
    ///
    /// Returns `None` above `G9`, which is not representable.
    pub const fn new(key: Key, octave: Octave) -> Option<Self> {
        let octave_mult = (octave.value() + 1) as u8 * 12;
        let byte = octave_mult + key.get_mod_12();
        if byte > 127 {
            return None;
        }
        Some(Self(DataByte::new_unchecked(byte)))
    }

    /// The pitch class of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_data_byte(&self.0)
    }

    /// The octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_data_byte(&self.0)
    }

    /// True for the five black keys of each octave
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        self.key().is_sharp()
    }

    /// The General MIDI percussion sound for this key on channel 10.
    ///
    /// Only keys 35 through 81 are mapped.
    pub fn percussion(&self) -> Option<Percussion> {
        Percussion::try_from(self.byte()).ok()
    }

    /// Returns the underlying byte of the note
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

// every data byte is in the note table
impl From<DataByte> for Note {
    fn from(value: DataByte) -> Self {
        Self(value)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
The pitch class of a [`Note`]. Flats share their sharp's variant.
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// True for the five accidentals
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Identify the pitch class from a key byte.
    #[inline]
    pub const fn from_data_byte(key: &DataByte) -> Self {
        use Key::*;
        match key.value() % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }

    const fn get_mod_12(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#/Db",
            D => "D",
            DSharp => "D#/Eb",
            E => "E",
            F => "F",
            FSharp => "F#/Gb",
            G => "G",
            GSharp => "G#/Ab",
            A => "A",
            ASharp => "A#/Bb",
            B => "B",
        };
        f.write_str(name)
    }
}

/// The octave of a [`Note`], from -1 to 9.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(i8);

impl Octave {
    /// Identify an octave from a key byte.
    pub const fn from_data_byte(key: &DataByte) -> Self {
        Self((key.value() / 12) as i8 - 1)
    }

    /// Clamps to `[-1, 9]`.
    pub const fn new(octave: i8) -> Self {
        if octave < -1 {
            Self(-1)
        } else if octave > 9 {
            Self(9)
        } else {
            Self(octave)
        }
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn note_table_bounds() {
    use pretty_assertions::assert_eq;
    assert_eq!(Note::from_databyte(0).unwrap().to_string(), "C:-1");
    assert_eq!(Note::from_databyte(60).unwrap().to_string(), "C:4");
    assert_eq!(Note::from_databyte(127).unwrap().to_string(), "G:9");
    assert_eq!(
        Note::from_databyte(0x80).unwrap_err(),
        ParseError::InvalidDataByte(0x80)
    );
    assert_eq!(Note::new(Key::GSharp, Octave::new(9)), None);
}

#[test]
fn note_from_key_octave_pairs() {
    use pretty_assertions::assert_eq;
    for key_byte in 0..128u8 {
        let note = Note::from_databyte(key_byte).unwrap();
        assert_eq!(Note::new(note.key(), note.octave()), Some(note));
    }
}

#[test]
fn percussion_keys() {
    use pretty_assertions::assert_eq;
    let snare = Note::from_databyte(38).unwrap();
    assert_eq!(snare.percussion(), Some(Percussion::AcousticSnare));
    assert_eq!(Note::from_databyte(34).unwrap().percussion(), None);
    assert_eq!(Note::from_databyte(82).unwrap().percussion(), None);
}
