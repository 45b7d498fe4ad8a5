#[doc = r#"
A `FF 58 04` time signature.

The denominator is stored as a power of two, so `6/8` is `[6, 3, ..]`.

# Example
```rust
# use smf_reader::prelude::*;
let signature = TimeSignature::from_bytes([6, 3, 36, 8]);

assert_eq!(signature.numerator(), 6);
assert_eq!(signature.denominator(), Some(8));
assert_eq!(signature.clocks_per_click(), 36);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    numerator: u8,
    denominator_exponent: u8,
    clocks_per_click: u8,
    thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Build from the four payload bytes
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            numerator: bytes[0],
            denominator_exponent: bytes[1],
            clocks_per_click: bytes[2],
            thirty_seconds_per_quarter: bytes[3],
        }
    }

    /// Beats per bar
    pub const fn numerator(&self) -> u8 {
        self.numerator
    }

    /// The denominator as a negative power of two
    pub const fn denominator_exponent(&self) -> u8 {
        self.denominator_exponent
    }

    /// The note value of a beat. `None` if the exponent overflows.
    pub const fn denominator(&self) -> Option<u32> {
        1u32.checked_shl(self.denominator_exponent as u32)
    }

    /// MIDI clocks per metronome click
    pub const fn clocks_per_click(&self) -> u8 {
        self.clocks_per_click
    }

    /// Notated 32nd notes in a MIDI quarter note, normally 8
    pub const fn thirty_seconds_per_quarter(&self) -> u8 {
        self.thirty_seconds_per_quarter
    }
}

#[test]
fn denominator_overflow() {
    use pretty_assertions::assert_eq;
    assert_eq!(TimeSignature::from_bytes([4, 2, 24, 8]).denominator(), Some(4));
    assert_eq!(TimeSignature::from_bytes([4, 31, 24, 8]).denominator(), Some(1 << 31));
    assert_eq!(TimeSignature::from_bytes([4, 32, 24, 8]).denominator(), None);
}
