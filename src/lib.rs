#![doc = r#"
A strict decoder for Standard MIDI Files (SMF).

The whole file is expected to be resident in memory. Decoding walks the
buffer once: the 14 byte `MThd` header first, then every `MTrk` chunk in file
order, then every delta-time prefixed event inside each chunk.

Each track chunk has its end-of-track footer verified before any of its events
are interpreted, so truncated or corrupt chunks are rejected without running
the event decoders over garbage.

# Example
```rust
use smf_reader::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, // header chunk
    0, 0, 0, 1, 0, 96,                  // format 0, one track, 96 tpqn
    b'M', b'T', b'r', b'k', 0, 0, 0, 8, // track chunk
    0x00, 0x90, 0x3C, 0x40,             // note on, middle C
    0x00, 0xFF, 0x2F, 0x00,             // end of track
];

let file = MidiFile::parse(&bytes).unwrap();
assert_eq!(file.format_type(), FormatType::Single);

let track = &file.tracks()[0];
let EventKind::Channel(note_on) = track.events()[0].kind() else {
    panic!("expected a channel event");
};
assert_eq!(note_on.channel(), Channel::One);
```
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod byte;
pub use byte::*;

mod channel;
pub use channel::*;

mod error;
pub use error::*;

pub mod event;
pub mod file;
pub mod message;
pub mod reader;
pub mod sink;
pub mod tables;

mod note;
pub use note::*;

/// Commonly used types for decoding a file
pub mod prelude {
    pub use crate::{
        byte::*,
        channel::*,
        error::*,
        event::*,
        file::*,
        message::{channel::*, system::*},
        note::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind, VarLen},
        sink::*,
        tables::*,
    };
}
