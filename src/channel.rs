use core::fmt;

#[doc = r#"
One of the sixteen MIDI channels.

On the wire the channel is the low nibble of a channel status byte and is
zero-indexed: nibble `0` is [`Channel::One`].

# Example
```rust
# use smf_reader::prelude::*;
let channel = Channel::from_status(0x9A);
assert_eq!(channel, Channel::Eleven);
assert_eq!(channel.index(), 10);
assert_eq!(channel.number(), 11);
```
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The channel held in the low nibble of a status byte
    pub const fn from_status(status: u8) -> Self {
        use Channel::*;
        match status & 0x0F {
            0 => One,
            1 => Two,
            2 => Three,
            3 => Four,
            4 => Five,
            5 => Six,
            6 => Seven,
            7 => Eight,
            8 => Nine,
            9 => Ten,
            10 => Eleven,
            11 => Twelve,
            12 => Thirteen,
            13 => Fourteen,
            14 => Fifteen,
            _ => Sixteen,
        }
    }

    /// A channel from its zero-indexed wire value, `None` above 15
    pub const fn from_index(index: u8) -> Option<Self> {
        if index > 15 {
            return None;
        }
        Some(Self::from_status(index))
    }

    /// The zero-indexed wire value, 0-15
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// The human channel number, 1-16
    pub const fn number(&self) -> u8 {
        self.index() + 1
    }

    /// General MIDI reserves channel 10 for percussion
    pub const fn is_percussion(&self) -> bool {
        matches!(self, Channel::Ten)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.number())
    }
}

#[test]
fn channel_is_zero_indexed() {
    use pretty_assertions::assert_eq;
    for status in 0x80..=0xEF_u8 {
        let channel = Channel::from_status(status);
        assert_eq!(channel.index(), status & 0x0F);
        assert_eq!(Channel::from_index(channel.index()), Some(channel));
    }
    assert_eq!(Channel::from_index(16), None);
    assert!(Channel::from_status(0x99).is_percussion());
}
