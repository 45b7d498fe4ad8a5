use crate::{
    ChunkError,
    reader::{ReadResult, Reader, ReaderError},
};

/// The tag every track chunk starts with
pub const TRACK_TAG: [u8; 4] = *b"MTrk";

/// The three bytes every track chunk must end with
pub const END_OF_TRACK: [u8; 3] = [0xFF, 0x2F, 0x00];

/// The shortest chunk body: one delta-time byte and the end of track event
pub const MIN_TRACK_LENGTH: u32 = 1 + END_OF_TRACK.len() as u32;

#[doc = r#"
The frame of an `MTrk` chunk.

Reading the frame checks that the chunk ends in `FF 2F 00` before any of its
events are looked at. A chunk whose declared length is wrong is rejected here
rather than by an event decoder running over the bytes of the next chunk.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [
    b'M', b'T', b'r', b'k', 0, 0, 0, 4,
    0x00, 0xFF, 0x2F, 0x00,
];
let mut reader = Reader::from_byte_slice(&bytes);
let chunk = TrackChunkHeader::read(&mut reader).unwrap();

assert_eq!(chunk.events_start(), 8);
assert_eq!(chunk.footer(), 9);
assert_eq!(chunk.end(), 12);
// the reader is left at the first event
assert_eq!(reader.buffer_position(), 8);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackChunkHeader {
    start: usize,
    length: u32,
    footer: usize,
}

impl TrackChunkHeader {
    /// Reads the tag and length, then verifies the footer.
    ///
    /// On success the reader is positioned at the first event of the chunk.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();

        let tag: [u8; 4] = reader.read_exact_size()?;
        if tag != TRACK_TAG {
            return Err(ReaderError::chunk(start, ChunkError::InvalidTag(tag)));
        }

        let length = reader.read_u32()?;
        if length < MIN_TRACK_LENGTH {
            return Err(ReaderError::chunk(
                start + 4,
                ChunkError::LengthTooShort(length),
            ));
        }

        let len = reader.buffer().len();
        let footer = (start + 8)
            .checked_add(length as usize - END_OF_TRACK.len())
            .filter(|footer| footer.checked_add(2).is_some_and(|last| last < len))
            .ok_or_else(|| {
                ReaderError::chunk(
                    start + 4,
                    ChunkError::FooterOutOfBounds {
                        footer: (start + 8).saturating_add(length as usize - END_OF_TRACK.len()),
                        len,
                    },
                )
            })?;

        let found: [u8; 3] = match reader.peek_at(footer, END_OF_TRACK.len())? {
            [a, b, c] => [*a, *b, *c],
            _ => return Err(ReaderError::oob(footer)),
        };
        if found != END_OF_TRACK {
            return Err(ReaderError::chunk(
                footer,
                ChunkError::MissingEndOfTrack(found),
            ));
        }

        Ok(Self {
            start,
            length,
            footer,
        })
    }

    /// Offset of the `M` of the tag
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The declared byte length of the event data
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Offset of the first event
    pub const fn events_start(&self) -> usize {
        self.start + 8
    }

    /// Offset of the `FF 2F 00` closing the chunk
    pub const fn footer(&self) -> usize {
        self.footer
    }

    /// Offset one past the last byte of the chunk
    pub const fn end(&self) -> usize {
        self.footer + END_OF_TRACK.len()
    }
}

#[doc = r#"
Finds the next `MTrk` tag at or after `from`.
"#]
pub(crate) fn find_track_tag(buffer: &[u8], from: usize) -> Option<usize> {
    buffer
        .get(from..)?
        .windows(TRACK_TAG.len())
        .position(|window| window == TRACK_TAG)
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ReaderErrorKind;
    use pretty_assertions::assert_eq;

    fn chunk(length: u32, events: &[u8]) -> Vec<u8> {
        let mut bytes = TRACK_TAG.to_vec();
        bytes.extend_from_slice(&length.to_be_bytes());
        bytes.extend_from_slice(events);
        bytes
    }

    fn chunk_error(bytes: &[u8]) -> (usize, ChunkError) {
        let err = TrackChunkHeader::read(&mut Reader::from_byte_slice(bytes)).unwrap_err();
        match err.error_kind() {
            ReaderErrorKind::MalformedChunk(e) => (err.position(), e.clone()),
            other => panic!("expected a malformed chunk, got {other:?}"),
        }
    }

    #[test]
    fn footer_is_checked_before_the_events() {
        // the event region would fail to decode: a note on with an invalid key,
        // then a five byte delta time
        let events = [0x00, 0x90, 0xC0, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0x2F, 0x01];
        let bytes = chunk(events.len() as u32, &events);
        assert_eq!(
            chunk_error(&bytes),
            (17, ChunkError::MissingEndOfTrack([0xFF, 0x2F, 0x01]))
        );
    }

    #[test]
    fn footer_past_the_buffer() {
        let bytes = chunk(8, &[0x00, 0xFF, 0x2F, 0x00]);
        assert_eq!(
            chunk_error(&bytes),
            (
                4,
                ChunkError::FooterOutOfBounds {
                    footer: 13,
                    len: 12
                }
            )
        );

        let bytes = chunk(u32::MAX, &[0x00, 0xFF, 0x2F, 0x00]);
        assert!(matches!(
            chunk_error(&bytes),
            (4, ChunkError::FooterOutOfBounds { .. })
        ));
    }

    #[test]
    fn short_lengths_and_tags() {
        assert_eq!(
            chunk_error(&chunk(2, &[0xFF, 0x2F, 0x00])),
            (4, ChunkError::LengthTooShort(2))
        );
        let mut bytes = chunk(4, &[0x00, 0xFF, 0x2F, 0x00]);
        bytes[0] = b'X';
        assert_eq!(
            chunk_error(&bytes),
            (0, ChunkError::InvalidTag(*b"XTrk"))
        );
    }

    #[test]
    fn footer_without_a_delta_time() {
        // the footer itself is intact, but there is no room for a delta-time
        assert_eq!(
            chunk_error(&chunk(3, &[0xFF, 0x2F, 0x00])),
            (4, ChunkError::LengthTooShort(3))
        );
    }

    #[test]
    fn longer_chunk() {
        let events = [0x00, 0x90, 0x3C, 0x40, 0x60, 0x80, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00];
        let mut bytes = vec![0xAA; 5];
        bytes.extend(chunk(events.len() as u32, &events));
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.jump_to_position(5).unwrap();

        let header = TrackChunkHeader::read(&mut reader).unwrap();
        assert_eq!(header.start(), 5);
        assert_eq!(header.length(), 12);
        assert_eq!(header.footer(), 22);
        assert_eq!(header.end(), bytes.len());
        assert_eq!(reader.buffer_position(), header.events_start());
    }

    #[test]
    fn finds_the_next_tag() {
        let bytes = *b"xxMTrkyyMTrk";
        assert_eq!(find_track_tag(&bytes, 0), Some(2));
        assert_eq!(find_track_tag(&bytes, 3), Some(8));
        assert_eq!(find_track_tag(&bytes, 9), None);
        assert_eq!(find_track_tag(&bytes, 100), None);
    }
}
