use crate::{ChunkError, FileError, HeaderError, ParseError};
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a file.

Every error carries the absolute byte offset it was raised at.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// Reading out of bounds. Fatal to the current track or file.
    #[error("Read out of bounds!")]
    OutOfBounds,
    /// The `MThd` header is invalid. Fatal to the whole file.
    #[error("Malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),
    /// An `MTrk` chunk failed structural validation
    #[error("Malformed chunk: {0}")]
    MalformedChunk(#[from] ChunkError),
    /// An event could not be decoded, and the bytes after it can not be trusted
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// The file as a whole is inconsistent
    #[error("File: {0}")]
    File(#[from] FileError),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }

    /// Create a new invalid data error
    pub const fn parse_error(position: usize, error: ParseError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::ParseError(error),
        }
    }

    pub(crate) const fn header(position: usize, error: HeaderError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::MalformedHeader(error),
        }
    }

    pub(crate) const fn chunk(position: usize, error: ChunkError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::MalformedChunk(error),
        }
    }

    /// True if a read went past the end of the buffer
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }

    /// True if the header failed validation
    pub const fn is_malformed_header(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::MalformedHeader(_))
    }

    /// True if a track chunk failed structural validation
    pub const fn is_malformed_chunk(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::MalformedChunk(_))
    }

    /// True if an event decoder could not vouch for how many bytes it consumed
    pub const fn is_desync_risk(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::ParseError(_))
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

/// A parse error at the reader's current position
pub(crate) fn inv_data(reader: &super::Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    ReaderError::parse_error(reader.buffer_position(), v.into())
}
