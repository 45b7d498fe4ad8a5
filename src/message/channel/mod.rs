#![doc = r#"
Channel voice messages, including the channel mode sub-grammar of control change.

# Hierarchy
```text
                |-----------------|
                | Channel Message |
                |-----------------|
                 /               \
|-----------------------|   |----------------------|
| Channel Voice Message |   | Channel Mode Message |
|-----------------------|   |----------------------|
```
A channel mode message is a control change on one of the controllers 122
through 127, so it is decoded as a [`ControlChange::Mode`].
"#]
mod controller;
pub use controller::*;

mod mode;
pub use mode::*;

mod voice;
pub use voice::*;

use crate::{
    Channel, DataByte, ParseError,
    reader::{ReadResult, Reader, ReaderError, inv_data},
};

#[doc = r#"
A channel voice message addressed to one of the sixteen channels.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [0x3C, 0x40];
let mut reader = Reader::from_byte_slice(&bytes);
let event = ChannelEvent::read(0x90, &mut reader).unwrap();

assert_eq!(event.channel(), Channel::One);
let VoiceMessage::NoteOn { note, velocity } = event.message() else {
    panic!("expected a note on");
};
assert_eq!(note.byte(), 0x3C);
assert_eq!(velocity.byte(), 0x40);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    channel: Channel,
    message: VoiceMessage,
}

impl ChannelEvent {
    /// Create a channel event from its parts
    pub const fn new(channel: Channel, message: VoiceMessage) -> Self {
        Self { channel, message }
    }

    /// Decodes the data bytes following `status`.
    ///
    /// The status byte itself must already be consumed, and must lie in
    /// `0x80..=0xEF`.
    pub fn read(status: u8, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let kind = VoiceKind::from_status(status)
            .ok_or_else(|| inv_data(reader, ParseError::InvalidStatus(status)))?;
        let message = VoiceMessage::read(kind, reader)?;
        Ok(Self {
            channel: Channel::from_status(status),
            message,
        })
    }

    /// The channel the message is addressed to
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The decoded message
    pub const fn message(&self) -> &VoiceMessage {
        &self.message
    }

    /// The kind of the message
    pub const fn kind(&self) -> VoiceKind {
        self.message.kind()
    }

    /// The status byte this event would be sent with
    pub const fn status(&self) -> u8 {
        self.kind() as u8 | self.channel.index()
    }
}

/// Reads one byte that must have its leading bit clear
pub(crate) fn read_data_byte(reader: &mut Reader<'_>) -> ReadResult<DataByte> {
    let position = reader.buffer_position();
    let byte = reader.read_next()?;
    DataByte::new(byte).map_err(|e| ReaderError::parse_error(position, e))
}
