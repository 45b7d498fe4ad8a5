use core::fmt;

use crate::ParseError;

#[doc = r#"
A 7-bit data byte.

Every byte trailing a channel status byte must have its leading bit cleared.
A byte with the leading bit set in a data position is a status byte in the
wrong place, which is treated as an [`ParseError::InvalidDataByte`].

# Example
```rust
# use smf_reader::prelude::*;
let byte = DataByte::new(0x40).unwrap();
assert_eq!(byte.value(), 0x40);

assert!(DataByte::new(0x80).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Check a byte for a leading 0 bit.
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte & 0x80 != 0 {
            return Err(ParseError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Masks off the leading bit rather than checking it.
    pub const fn new_masked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// Does not check the leading bit.
    pub(crate) const fn new_unchecked(byte: u8) -> Self {
        Self(byte)
    }

    /// The underlying 7-bit value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

impl fmt::Display for DataByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn leading_bit_is_rejected() {
    use pretty_assertions::assert_eq;
    for byte in 0..=0x7F {
        assert_eq!(DataByte::new(byte).unwrap().value(), byte);
    }
    for byte in 0x80..=0xFF {
        assert_eq!(DataByte::new(byte), Err(ParseError::InvalidDataByte(byte)));
    }
    assert_eq!(DataByte::new_masked(0xC0).value(), 0x40);
}
