use super::{ReadResult, Reader, ReaderError};
use crate::ParseError;

/// The most bytes a legal variable length quantity can span
pub const MAX_VARLEN_BYTES: usize = 4;

#[doc = r#"
A decoded variable length quantity.

Each byte contributes its low seven bits, most significant group first. A set
leading bit means another byte follows. Legal quantities are at most four bytes
long, so the largest representable value is `0x0FFF_FFFF`.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [0x81, 0x80, 0x00];
let mut reader = Reader::from_byte_slice(&bytes);
let varlen = reader.read_varlen().unwrap();

assert_eq!(varlen.value(), 0x4000);
assert_eq!(varlen.len(), 3);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarLen {
    value: u32,
    len: u8,
}

impl VarLen {
    /// Largest value that fits in four groups of seven bits
    pub const MAX: u32 = 0x0FFF_FFFF;

    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let mut value: u32 = 0;
        for len in 1..=MAX_VARLEN_BYTES {
            let byte = reader.read_next()?;
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok(Self {
                    value,
                    len: len as u8,
                });
            }
        }
        Err(ReaderError::parse_error(
            reader.buffer_position(),
            ParseError::VarLenOverflow,
        ))
    }

    /// The decoded value
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Number of bytes the quantity occupied, 1 to 4
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Encodes `value` into its shortest form.
    ///
    /// Returns the bytes and how many of them are used. `None` if the value
    /// needs more than four bytes.
    pub fn encode(value: u32) -> Option<([u8; MAX_VARLEN_BYTES], usize)> {
        if value > Self::MAX {
            return None;
        }
        let mut groups = [0u8; MAX_VARLEN_BYTES];
        let mut count = 0;
        let mut rest = value;
        loop {
            groups[count] = (rest & 0x7F) as u8;
            count += 1;
            rest >>= 7;
            if rest == 0 {
                break;
            }
        }
        let mut out = [0u8; MAX_VARLEN_BYTES];
        for (i, group) in groups[..count].iter().rev().enumerate() {
            let continuation = if i + 1 < count { 0x80 } else { 0 };
            out[i] = group | continuation;
        }
        Some((out, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> ReadResult<VarLen> {
        Reader::from_byte_slice(bytes).read_varlen()
    }

    #[test]
    fn reference_values() {
        let cases: &[(&[u8], u32)] = &[
            (&[0x00], 0x00),
            (&[0x40], 0x40),
            (&[0x7F], 0x7F),
            (&[0x81, 0x00], 0x80),
            (&[0xC0, 0x00], 0x2000),
            (&[0xFF, 0x7F], 0x3FFF),
            (&[0x81, 0x80, 0x00], 0x4000),
            (&[0xFF, 0xFF, 0x7F], 0x1F_FFFF),
            (&[0x81, 0x80, 0x80, 0x00], 0x20_0000),
            (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
        ];
        for (bytes, expected) in cases {
            let varlen = decode(bytes).unwrap();
            assert_eq!(varlen.value(), *expected);
            assert_eq!(varlen.len(), bytes.len());
        }
    }

    #[test]
    fn decoding_consumes_exactly_the_encoded_bytes() {
        let values = [
            0,
            1,
            0x7F,
            0x80,
            0x3FFF,
            0x4000,
            0x1F_FFFF,
            0x20_0000,
            0x0ABC_DEF1,
            VarLen::MAX,
        ];
        for value in values {
            let (encoded, len) = VarLen::encode(value).unwrap();
            let mut bytes = encoded[..len].to_vec();
            // trailing bytes must be left alone
            bytes.push(0x55);
            let mut reader = Reader::from_byte_slice(&bytes);
            let varlen = reader.read_varlen().unwrap();
            assert_eq!(varlen.value(), value);
            assert_eq!(varlen.len(), len);
            assert_eq!(reader.buffer_position(), len);
        }
        assert_eq!(VarLen::encode(VarLen::MAX + 1), None);
    }

    #[test]
    fn five_byte_quantities_are_rejected() {
        let err = decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).unwrap_err();
        assert!(err.is_desync_risk());
        assert_eq!(
            err.error_kind(),
            &crate::reader::ReaderErrorKind::ParseError(ParseError::VarLenOverflow)
        );
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn truncated_quantities_are_out_of_bounds() {
        assert!(decode(&[0x81, 0x80]).unwrap_err().is_out_of_bounds());
        assert!(decode(&[]).unwrap_err().is_out_of_bounds());
    }
}
