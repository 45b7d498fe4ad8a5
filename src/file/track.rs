use alloc::vec::Vec;

use crate::{
    ChunkError,
    event::{Event, EventKind, RunningStatus},
    file::{DecodeOptions, MetaMessage, TextKind, TrackChunkHeader},
    reader::{ReadResult, Reader, ReaderError},
    sink::DecodeSink,
};

#[doc = r#"
The events of one `MTrk` chunk, in file order.

The last event is always the end of track meta event.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track<'a> {
    chunk: TrackChunkHeader,
    events: Vec<Event<'a>>,
}

impl<'a> Track<'a> {
    /// Reads one track chunk starting at the reader position.
    ///
    /// `index` is the position of the track in the file and is only used for
    /// reporting to `sink`.
    pub fn read<S: DecodeSink>(
        reader: &mut Reader<'a>,
        index: usize,
        options: &DecodeOptions,
        sink: &mut S,
    ) -> ReadResult<Self> {
        let chunk = TrackChunkHeader::read(reader)?;
        sink.track_start(index, &chunk);

        let mut assembler = TrackAssembler::new(chunk);
        while assembler.state() == TrackState::Reading {
            let event = assembler.step(reader, options)?;
            if let Some(unknown) = event.unknown() {
                sink.unknown(event.offset(), unknown);
            }
            sink.event(index, event);
        }

        let track = assembler.finish();
        sink.track_end(index, &track);
        Ok(track)
    }

    /// The chunk frame the track was read from
    pub const fn chunk(&self) -> &TrackChunkHeader {
        &self.chunk
    }

    /// Every event, end of track included
    pub fn events(&self) -> &[Event<'a>] {
        &self.events
    }

    /// Number of events, end of track included
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The sum of every delta time in the track
    pub fn duration_ticks(&self) -> u64 {
        self.events.iter().map(|e| e.delta_time() as u64).sum()
    }

    /// The text of the first track name event, if it is UTF-8
    pub fn name(&self) -> Option<&'a str> {
        self.events.iter().find_map(|event| match event.kind() {
            EventKind::Meta(meta) => match meta.message() {
                MetaMessage::Text(text) if text.kind() == TextKind::TrackName => text.as_str(),
                _ => None,
            },
            _ => None,
        })
    }
}

/// Where the event loop of a track chunk stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// More events are expected
    Reading,
    /// The end of track event has been read at the chunk footer
    Terminal,
    /// An event failed to decode. Nothing after it can be trusted.
    Aborted,
}

pub(crate) struct TrackAssembler<'a> {
    chunk: TrackChunkHeader,
    state: TrackState,
    running: RunningStatus,
    events: Vec<Event<'a>>,
}

impl<'a> TrackAssembler<'a> {
    pub(crate) fn new(chunk: TrackChunkHeader) -> Self {
        Self {
            chunk,
            state: TrackState::Reading,
            running: RunningStatus::default(),
            events: Vec::new(),
        }
    }

    pub(crate) const fn state(&self) -> TrackState {
        self.state
    }

    /// Decodes the next event and appends it.
    ///
    /// Must only be called while [`TrackState::Reading`].
    pub(crate) fn step(
        &mut self,
        reader: &mut Reader<'a>,
        options: &DecodeOptions,
    ) -> ReadResult<&Event<'a>> {
        let event = match self.read_event(reader, options) {
            Ok(event) => event,
            Err(e) => {
                self.state = TrackState::Aborted;
                return Err(e);
            }
        };
        if event.is_end_of_track() {
            self.state = TrackState::Terminal;
        }
        let index = self.events.len();
        self.events.push(event);
        Ok(&self.events[index])
    }

    fn read_event(&mut self, reader: &mut Reader<'a>, options: &DecodeOptions) -> ReadResult<Event<'a>> {
        let position = reader.buffer_position();
        let end = self.chunk.end();
        if position >= end {
            return Err(ReaderError::chunk(
                position,
                ChunkError::EventOverrun { end, position },
            ));
        }

        let event = Event::read(reader, &mut self.running, options)?;

        let after = reader.buffer_position();
        if after == position {
            return Err(ReaderError::chunk(position, ChunkError::Stalled));
        }
        if after > end {
            return Err(ReaderError::chunk(
                position,
                ChunkError::EventOverrun {
                    end,
                    position: after,
                },
            ));
        }
        if event.is_end_of_track() && event.offset() != self.chunk.footer() {
            return Err(ReaderError::chunk(
                event.offset(),
                ChunkError::EndOfTrackMismatch {
                    expected: self.chunk.footer(),
                    found: event.offset(),
                },
            ));
        }
        Ok(event)
    }

    pub(crate) fn finish(self) -> Track<'a> {
        Track {
            chunk: self.chunk,
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ParseError,
        reader::ReaderErrorKind,
        sink::NoopSink,
    };
    use pretty_assertions::assert_eq;

    fn chunk(events: &[u8]) -> Vec<u8> {
        let mut bytes = b"MTrk".to_vec();
        bytes.extend_from_slice(&(events.len() as u32).to_be_bytes());
        bytes.extend_from_slice(events);
        bytes
    }

    fn read(bytes: &[u8]) -> ReadResult<Track<'_>> {
        Track::read(
            &mut Reader::from_byte_slice(bytes),
            0,
            &DecodeOptions::new(),
            &mut NoopSink,
        )
    }

    #[test]
    fn end_of_track_is_the_last_event() {
        let bytes = chunk(&[0x00, 0x90, 0x3C, 0x40, 0x60, 0x80, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00]);
        let track = read(&bytes).unwrap();
        assert_eq!(track.len(), 3);
        assert!(track.events()[2].is_end_of_track());
        assert_eq!(track.duration_ticks(), 0x60);
    }

    #[test]
    fn early_end_of_track() {
        // an end of track in the middle of the chunk, then a footer
        let bytes = chunk(&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0xFF, 0x2F, 0x00]);
        let err = read(&bytes).unwrap_err();
        assert_eq!(err.position(), 9);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedChunk(ChunkError::EndOfTrackMismatch {
                expected: 13,
                found: 9
            })
        );
    }

    #[test]
    fn events_crossing_the_footer_overrun() {
        // a text event claiming more bytes than the chunk holds
        let mut bytes = chunk(&[0x00, 0xFF, 0x01, 0x06, b'a', 0xFF, 0x2F, 0x00]);
        bytes.extend_from_slice(&[0x00; 4]);
        let err = read(&bytes).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::MalformedChunk(ChunkError::EventOverrun {
                end: 16,
                position: 18
            })
        );
    }

    #[test]
    fn invalid_data_aborts_the_track() {
        let bytes = chunk(&[0x00, 0x90, 0x3C, 0xC0, 0x00, 0xFF, 0x2F, 0x00]);
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = TrackChunkHeader::read(&mut reader).unwrap();
        let mut assembler = TrackAssembler::new(header);
        let err = assembler.step(&mut reader, &DecodeOptions::new()).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::ParseError(ParseError::InvalidDataByte(0xC0))
        );
        assert_eq!(assembler.state(), TrackState::Aborted);
    }

    #[test]
    fn end_of_track_makes_the_assembler_terminal() {
        let bytes = chunk(&[0x00, 0x90, 0x3C, 0x40, 0x60, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00]);
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = TrackChunkHeader::read(&mut reader).unwrap();
        let options = DecodeOptions::new();
        let mut assembler = TrackAssembler::new(header);

        for _ in 0..2 {
            let event = assembler.step(&mut reader, &options).unwrap();
            assert!(!event.is_end_of_track());
            assert_eq!(assembler.state(), TrackState::Reading);
        }
        let event = assembler.step(&mut reader, &options).unwrap();
        assert_eq!(event.offset(), header.footer());
        assert_eq!(assembler.state(), TrackState::Terminal);
        assert_eq!(reader.buffer_position(), header.end());
        assert_eq!(assembler.finish().len(), 3);
    }

    #[test]
    fn track_names() {
        let bytes = chunk(&[0x00, 0xFF, 0x03, 0x04, b'B', b'a', b's', b's', 0x00, 0xFF, 0x2F, 0x00]);
        let track = read(&bytes).unwrap();
        assert_eq!(track.name(), Some("Bass"));
        assert_eq!(track.chunk().footer(), 17);
    }
}
