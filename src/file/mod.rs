#![doc = r#"
Rusty representation of a [`MidiFile`]

A file is decoded in a single pass by a [`Decoder`]: the header, then the
track chunks it declares, in file order.
"#]

mod chunk;
pub use chunk::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

pub mod meta;
pub use meta::*;

mod options;
pub use options::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    FileError, SmpteError,
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    sink::{DecodeSink, NoopSink},
};
use alloc::vec::Vec;

#[doc = r#"
A decoded Standard MIDI File.

Events borrow their text and other variable length payloads from the buffer
the file was decoded from.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0x01, 0xE0,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];
let file = MidiFile::parse(&bytes).unwrap();

assert_eq!(file.format_type(), FormatType::Simultaneous);
assert_eq!(file.tracks().len(), 2);
assert_eq!(file.timing().unwrap().ticks_per_quarter_note(), Some(480));
```
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidiFile<'a> {
    header: FileHeader,
    tracks: Vec<Track<'a>>,
    skipped: Vec<SkippedTrack>,
}

impl<'a> MidiFile<'a> {
    /// Decode a buffer with the default options
    pub fn parse(bytes: &'a [u8]) -> ReadResult<Self> {
        Decoder::new().decode(bytes)
    }

    /// Returns header info
    pub const fn header(&self) -> &FileHeader {
        &self.header
    }

    /// The decoded tracks, in file order
    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }

    /// Tracks that failed and were skipped. Always empty unless
    /// [`TrackRecovery::Resync`] is used.
    pub fn skipped(&self) -> &[SkippedTrack] {
        &self.skipped
    }

    /// Returns the format type for the file.
    pub const fn format_type(&self) -> FormatType {
        self.header.format_type()
    }

    /// Interprets the time division of the header
    pub fn timing(&self) -> Result<Timing, SmpteError> {
        self.header.timing()
    }

    /// Consumes the file, keeping only its tracks
    pub fn into_tracks(self) -> Vec<Track<'a>> {
        self.tracks
    }
}

/// A track chunk that failed to decode and was skipped over
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedTrack {
    index: usize,
    error: ReaderError,
}

impl SkippedTrack {
    /// The position of the chunk among the track chunks of the file
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Why the chunk was skipped
    pub const fn error(&self) -> &ReaderError {
        &self.error
    }
}

#[doc = r#"
Decodes files with a set of [`DecodeOptions`], reporting to a [`DecodeSink`].

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0, 96,
    // the declared length runs into the next chunk
    b'M', b'T', b'r', b'k', 0, 0, 0, 5, 0x00, 0xFF, 0x2F, 0x00,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];

assert!(MidiFile::parse(&bytes).is_err());

let options = DecodeOptions::new().with_track_recovery(TrackRecovery::Resync);
let file = Decoder::new().with_options(options).decode(&bytes).unwrap();
assert_eq!(file.tracks().len(), 1);
assert_eq!(file.skipped()[0].index(), 0);
```
"#]
#[derive(Debug, Default, Clone)]
pub struct Decoder<S = NoopSink> {
    options: DecodeOptions,
    sink: S,
}

impl Decoder<NoopSink> {
    /// A decoder with default options that reports nothing
    pub const fn new() -> Self {
        Self {
            options: DecodeOptions::new(),
            sink: NoopSink,
        }
    }
}

impl<S: DecodeSink> Decoder<S> {
    /// Replace the options
    pub const fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the sink
    pub fn with_sink<T: DecodeSink>(self, sink: T) -> Decoder<T> {
        Decoder {
            options: self.options,
            sink,
        }
    }

    /// The options in use
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Take the sink back
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Decodes a whole file.
    ///
    /// A header failure is always fatal. A track failure is fatal unless the
    /// options ask for [`TrackRecovery::Resync`]. Reading stops after the
    /// number of tracks the header declares, anything after that is reported
    /// to the sink as trailing bytes.
    pub fn decode<'a>(&mut self, bytes: &'a [u8]) -> ReadResult<MidiFile<'a>> {
        let mut reader = Reader::from_byte_slice(bytes);
        let header = FileHeader::read(&mut reader)?;
        self.sink.header(&header);

        let declared = header.track_count();
        // a track chunk is at least 12 bytes
        let mut tracks = Vec::with_capacity((declared as usize).min(reader.remaining() / 12));
        let mut skipped = Vec::new();
        let mut index = 0;
        while index < declared as usize && !reader.is_exhausted() {
            let start = reader.buffer_position();
            match Track::read(&mut reader, index, &self.options, &mut self.sink) {
                Ok(track) => tracks.push(track),
                Err(error) => match self.options.track_recovery() {
                    TrackRecovery::Abort => return Err(error),
                    TrackRecovery::Resync => {
                        self.sink.track_skipped(index, &error);
                        skipped.push(SkippedTrack { index, error });
                        let next = find_track_tag(bytes, start + 1).unwrap_or(bytes.len());
                        reader.jump_to_position(next)?;
                    }
                },
            }
            index += 1;
        }

        if index != declared as usize {
            if self.options.strict_track_count() {
                return Err(ReaderError::new(
                    reader.buffer_position(),
                    ReaderErrorKind::File(FileError::TrackCount {
                        declared,
                        found: index,
                    }),
                ));
            }
            self.sink.track_count_mismatch(declared, index);
        }

        if !reader.is_exhausted() {
            let offset = reader.buffer_position();
            let len = reader.remaining();
            if self.options.strict_track_count() {
                return Err(ReaderError::new(
                    offset,
                    ReaderErrorKind::File(FileError::TrailingBytes { offset, len }),
                ));
            }
            self.sink.trailing_bytes(offset, len);
        }

        Ok(MidiFile {
            header,
            tracks,
            skipped,
        })
    }
}
