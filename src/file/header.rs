use crate::{
    HeaderError, SmpteError,
    file::{FormatType, Timing},
    reader::{ReadResult, Reader, ReaderError},
};

/// The tag every file starts with
pub const HEADER_TAG: [u8; 4] = *b"MThd";

/// The only legal header chunk length
pub const HEADER_LENGTH: u32 = 6;

#[doc = r#"
The validated `MThd` chunk.

| Offset | Bytes | Field |
|---|---|---|
| 0 | 4 | `MThd` |
| 4 | 4 | chunk length, always 6 |
| 8 | 2 | format |
| 10 | 2 | track count |
| 12 | 2 | time division |
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    format: FormatType,
    format_code: u16,
    track_count: u16,
    time_division: u16,
}

impl FileHeader {
    /// Reads and validates the 14 header bytes.
    ///
    /// Fields are checked in file order. The error is positioned at the first
    /// byte of the offending field.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();

        let tag: [u8; 4] = reader.read_exact_size()?;
        if tag != HEADER_TAG {
            return Err(ReaderError::header(start, HeaderError::InvalidTag(tag)));
        }

        let length = reader.read_u32()?;
        if length != HEADER_LENGTH {
            return Err(ReaderError::header(
                start + 4,
                HeaderError::InvalidLength(length),
            ));
        }

        let format_code = reader.read_u16()?;
        let Some(format) = FormatType::from_code(format_code) else {
            return Err(ReaderError::header(
                start + 8,
                HeaderError::InvalidFormat(format_code),
            ));
        };

        let track_count = reader.read_u16()?;
        if track_count == 0 {
            return Err(ReaderError::header(start + 10, HeaderError::NoTracks));
        }

        let time_division = reader.read_u16()?;
        if time_division == 0 {
            return Err(ReaderError::header(
                start + 12,
                HeaderError::ZeroTimeDivision,
            ));
        }

        Ok(Self {
            format,
            format_code,
            track_count,
            time_division,
        })
    }

    /// Always `MThd`
    pub const fn magic(&self) -> [u8; 4] {
        HEADER_TAG
    }

    /// Always 6
    pub const fn declared_length(&self) -> u32 {
        HEADER_LENGTH
    }

    /// The relationship between the tracks
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// The format number as stored, 0 to 3
    pub const fn format_code(&self) -> u16 {
        self.format_code
    }

    /// Number of track chunks the header declares
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The raw time division field
    pub const fn time_division(&self) -> u16 {
        self.time_division
    }

    /// Interprets the time division.
    ///
    /// Only SMPTE divisions can fail, when they name an unknown frame rate.
    pub fn timing(&self) -> Result<Timing, SmpteError> {
        Timing::from_division(self.time_division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ReaderErrorKind;
    use pretty_assertions::assert_eq;

    fn header(format: u16, tracks: u16, division: u16) -> alloc::vec::Vec<u8> {
        let mut bytes = b"MThd\x00\x00\x00\x06".to_vec();
        bytes.extend_from_slice(&format.to_be_bytes());
        bytes.extend_from_slice(&tracks.to_be_bytes());
        bytes.extend_from_slice(&division.to_be_bytes());
        bytes
    }

    fn read(bytes: &[u8]) -> (ReadResult<FileHeader>, usize) {
        let mut reader = Reader::from_byte_slice(bytes);
        let result = FileHeader::read(&mut reader);
        (result, reader.buffer_position())
    }

    #[test]
    fn valid_header() {
        let (header, position) = read(&header(1, 3, 480));
        let header = header.unwrap();
        assert_eq!(header.format_type(), FormatType::Simultaneous);
        assert_eq!(header.track_count(), 3);
        assert_eq!(header.time_division(), 480);
        assert_eq!(header.timing().unwrap().ticks_per_quarter_note(), Some(480));
        assert_eq!(header.magic(), *b"MThd");
        assert_eq!(position, 14);
    }

    #[test]
    fn format_codes() {
        let cases = [
            (0, FormatType::Single),
            (1, FormatType::Simultaneous),
            (2, FormatType::Sequential),
            (3, FormatType::Sequential),
        ];
        for (code, expected) in cases {
            let header = read(&header(code, 1, 96)).0.unwrap();
            assert_eq!(header.format_type(), expected);
            assert_eq!(header.format_code(), code);
        }
    }

    #[test]
    fn bad_magic_consumes_no_track_data() {
        let mut bytes = header(0, 1, 96);
        bytes[0] = b'R';
        bytes.extend_from_slice(b"MTrk\x00\x00\x00\x04\x00\xFF\x2F\x00");

        let (err, position) = read(&bytes);
        let err = err.unwrap_err();
        assert!(err.is_malformed_header());
        assert_eq!(err.position(), 0);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedHeader(HeaderError::InvalidTag(*b"RThd"))
        );
        assert!(position <= 14);
    }

    #[test]
    fn each_field_reports_its_offset() {
        let mut bad_length = header(0, 1, 96);
        bad_length[7] = 7;
        let err = read(&bad_length).0.unwrap_err();
        assert_eq!(err.position(), 4);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedHeader(HeaderError::InvalidLength(7))
        );

        let err = read(&header(4, 1, 96)).0.unwrap_err();
        assert_eq!(err.position(), 8);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedHeader(HeaderError::InvalidFormat(4))
        );

        let err = read(&header(1, 0, 96)).0.unwrap_err();
        assert_eq!(err.position(), 10);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedHeader(HeaderError::NoTracks)
        );

        let err = read(&header(1, 2, 0)).0.unwrap_err();
        assert_eq!(err.position(), 12);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedHeader(HeaderError::ZeroTimeDivision)
        );
    }

    #[test]
    fn truncated_header_is_out_of_bounds() {
        let bytes = header(0, 1, 96);
        let err = read(&bytes[..13]).0.unwrap_err();
        assert!(err.is_out_of_bounds());
    }
}
