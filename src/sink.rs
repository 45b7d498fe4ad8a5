#![doc = r#"
Observing a decode as it happens.

A [`Decoder`](crate::file::Decoder) reports its progress to a [`DecodeSink`].
Every method has an empty default, so a sink only implements what it cares
about. Unknown codes and skipped tracks are only ever reported here, they do
not fail the decode.

# Example
```rust
# use smf_reader::prelude::*;
#[derive(Default)]
struct CountUnknown(usize);

impl DecodeSink for CountUnknown {
    fn unknown(&mut self, _offset: usize, _unknown: UnknownEvent) {
        self.0 += 1;
    }
}

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 6,
    0x00, 0xF5,             // undefined system common
    0x00, 0xFF, 0x2F, 0x00,
];

let mut sink = CountUnknown::default();
let file = Decoder::new().with_sink(&mut sink).decode(&bytes).unwrap();
assert_eq!(file.tracks()[0].len(), 2);
assert_eq!(sink.0, 1);
```
"#]

use crate::{
    event::{Event, UnknownEvent},
    file::{FileHeader, Track, TrackChunkHeader},
    reader::ReaderError,
};

/// Receives decode progress. See the [module docs](self).
#[allow(unused_variables)]
pub trait DecodeSink {
    /// The header was validated
    fn header(&mut self, header: &FileHeader) {}

    /// A track chunk frame was validated and its events are about to be read
    fn track_start(&mut self, index: usize, chunk: &TrackChunkHeader) {}

    /// An event was decoded
    fn event(&mut self, track: usize, event: &Event<'_>) {}

    /// An event holds a code with no assigned meaning
    fn unknown(&mut self, offset: usize, unknown: UnknownEvent) {}

    /// A track was fully decoded
    fn track_end(&mut self, index: usize, track: &Track<'_>) {}

    /// A track failed and was skipped over
    fn track_skipped(&mut self, index: usize, error: &ReaderError) {}

    /// The number of tracks found differs from the header
    fn track_count_mismatch(&mut self, declared: u16, found: usize) {}

    /// Bytes were left over after the last declared track
    fn trailing_bytes(&mut self, offset: usize, len: usize) {}
}

impl<S: DecodeSink + ?Sized> DecodeSink for &mut S {
    fn header(&mut self, header: &FileHeader) {
        (**self).header(header)
    }
    fn track_start(&mut self, index: usize, chunk: &TrackChunkHeader) {
        (**self).track_start(index, chunk)
    }
    fn event(&mut self, track: usize, event: &Event<'_>) {
        (**self).event(track, event)
    }
    fn unknown(&mut self, offset: usize, unknown: UnknownEvent) {
        (**self).unknown(offset, unknown)
    }
    fn track_end(&mut self, index: usize, track: &Track<'_>) {
        (**self).track_end(index, track)
    }
    fn track_skipped(&mut self, index: usize, error: &ReaderError) {
        (**self).track_skipped(index, error)
    }
    fn track_count_mismatch(&mut self, declared: u16, found: usize) {
        (**self).track_count_mismatch(declared, found)
    }
    fn trailing_bytes(&mut self, offset: usize, len: usize) {
        (**self).trailing_bytes(offset, len)
    }
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DecodeSink for NoopSink {}

/// Forwards progress to [`tracing`]. Events are logged at `trace`, unknown
/// codes at `debug` and anything that loses data at `warn`.
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DecodeSink for TracingSink {
    fn header(&mut self, header: &FileHeader) {
        tracing::debug!(
            format = header.format_code(),
            tracks = header.track_count(),
            division = header.time_division(),
            "read header"
        );
    }

    fn track_start(&mut self, index: usize, chunk: &TrackChunkHeader) {
        tracing::debug!(
            track = index,
            start = chunk.start(),
            length = chunk.length(),
            "reading track"
        );
    }

    fn event(&mut self, track: usize, event: &Event<'_>) {
        tracing::trace!(track, offset = event.offset(), delta = event.delta_time(), kind = ?event.kind());
    }

    fn unknown(&mut self, offset: usize, unknown: UnknownEvent) {
        tracing::debug!(offset, "{unknown}");
    }

    fn track_end(&mut self, index: usize, track: &Track<'_>) {
        tracing::debug!(track = index, events = track.len(), "finished track");
    }

    fn track_skipped(&mut self, index: usize, error: &ReaderError) {
        tracing::warn!(track = index, "skipping track: {error}");
    }

    fn track_count_mismatch(&mut self, declared: u16, found: usize) {
        tracing::warn!(
            "The header declares {declared} tracks, but {found} were found"
        );
    }

    fn trailing_bytes(&mut self, offset: usize, len: usize) {
        tracing::warn!(offset, len, "ignoring bytes after the last track");
    }
}
