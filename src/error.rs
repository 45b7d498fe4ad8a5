use thiserror::Error;

#[doc = r#"
An event-level decode failure.

Any of these leaves the reader at a position that can not be trusted to start
the next record, so the enclosing track loop stops on the first one.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A byte with its leading bit set where a 7-bit data byte was expected
    #[error("Invalid data byte {0:#04X}")]
    InvalidDataByte(u8),
    /// A data byte where a status byte was expected, with no running status to reuse
    #[error("Data byte {0:#04X} in status position without running status")]
    UnexpectedDataByte(u8),
    /// A status byte handed to a decoder for a different message class
    #[error("Status byte {0:#04X} does not belong to this message class")]
    InvalidStatus(u8),
    /// A variable length quantity still had its continuation bit set after 4 bytes
    #[error("Variable length quantity is longer than 4 bytes")]
    VarLenOverflow,
    /// Meta event errors
    #[error("Meta event: {0}")]
    Meta(#[from] MetaError),
    /// SMPTE errors
    #[error("SMPTE: {0}")]
    Smpte(#[from] SmpteError),
}

/// A violation of one of the fixed `MThd` fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The file does not start with `MThd`
    #[error("Expected the MThd tag, found {0:?}")]
    InvalidTag([u8; 4]),
    /// The header chunk must be exactly six bytes long
    #[error("Expected a header length of 6, found {0}")]
    InvalidLength(u32),
    /// Only formats 0 through 3 are recognized
    #[error("Unknown format type {0}")]
    InvalidFormat(u16),
    /// A file must declare at least one track
    #[error("The header declares no tracks")]
    NoTracks,
    /// The time division may not be zero
    #[error("The header declares a time division of 0")]
    ZeroTimeDivision,
}

/// A structural failure of an `MTrk` chunk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The chunk does not start with `MTrk`
    #[error("Expected the MTrk tag, found {0:?}")]
    InvalidTag([u8; 4]),
    /// The declared length can not hold a delta-time and the end of track sequence
    #[error("Declared track length {0} is too short for an end of track event")]
    LengthTooShort(u32),
    /// The declared length reaches past the end of the buffer
    #[error("End of track expected at {footer}, but the buffer is {len} bytes")]
    FooterOutOfBounds {
        /// Offset of the expected `FF 2F 00`
        footer: usize,
        /// Buffer length
        len: usize,
    },
    /// The three bytes at the end of the chunk are not `FF 2F 00`
    #[error("Expected FF 2F 00 at the end of the chunk, found {0:02X?}")]
    MissingEndOfTrack([u8; 3]),
    /// An end of track event was decoded somewhere other than the chunk footer
    #[error("End of track found at {found}, the chunk declares it at {expected}")]
    EndOfTrackMismatch {
        /// Offset computed from the declared length
        expected: usize,
        /// Offset the event loop reached
        found: usize,
    },
    /// An event ran past the end of the chunk
    #[error("Event decoding reached {position}, past the chunk end at {end}")]
    EventOverrun {
        /// Offset one past the last chunk byte
        end: usize,
        /// Offset the event loop reached
        position: usize,
    },
    /// An iteration of the event loop consumed no bytes
    #[error("The event loop did not advance")]
    Stalled,
}

/// Failures of the meta event payload grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// A meta event with a constant length declared a different one
    #[error("Meta event {tag:#06X} must have length {expected}, found {found}")]
    LengthMismatch {
        /// The 16-bit meta tag (`0xFFxx`)
        tag: u16,
        /// Constant length for the tag
        expected: u32,
        /// Declared length
        found: u32,
    },
    /// A channel prefix greater than 15
    #[error("Channel prefix {0} is not a channel")]
    InvalidChannelPrefix(u8),
}

/// Errors for SMPTE timings, either in the header or in an offset meta event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SmpteError {
    /// The header division names a frame rate other than -24, -25, -29 or -30
    #[error("Invalid SMPTE header frame rate {0}")]
    HeaderFrameTime(i8),
    /// An SMPTE offset must be exactly five bytes
    #[error("SMPTE offset must be 5 bytes, found {0}")]
    Length(usize),
    /// The frame rate bits of an SMPTE offset are out of range
    #[error("Invalid SMPTE offset frame rate bits {0}")]
    TrackFrame(u8),
    /// Hours above 23
    #[error("Invalid SMPTE offset hour {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid SMPTE offset minute {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid SMPTE offset second {0}")]
    SecondOffset(u8),
    /// Subframes above 99
    #[error("Invalid SMPTE offset subframe {0}")]
    Subframe(u8),
}

/// Whole file consistency errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    /// The number of track chunks differs from the header
    #[error("The header declares {declared} tracks, {found} were found")]
    TrackCount {
        /// Tracks declared by the header
        declared: u16,
        /// Tracks found in the file
        found: usize,
    },
    /// Bytes follow the last declared track
    #[error("{len} bytes follow the last track at {offset}")]
    TrailingBytes {
        /// Where the leftover bytes start
        offset: usize,
        /// How many there are
        len: usize,
    },
}
