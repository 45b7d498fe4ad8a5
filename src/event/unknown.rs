use core::fmt;

use super::EventKind;
use crate::{
    file::MetaMessage,
    message::{
        channel::{ChannelMode, ControlChange, VoiceMessage},
        system::{SystemCommon, SystemRealtime},
    },
};

/// A code inside an otherwise well formed event that has no assigned meaning.
///
/// Decoding continues past these. They are handed to
/// [`DecodeSink::unknown`](crate::sink::DecodeSink::unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnknownEvent {
    /// A control change on an unassigned controller number
    Controller(u8),
    /// A mode controller with a value it does not accept
    ChannelMode {
        /// 122 through 127
        controller: u8,
        /// the rejected value
        value: u8,
    },
    /// A meta event tag, `FF` included
    Meta(u16),
    /// `F1`, `F4` or `F5`
    SystemCommon(u8),
    /// `F9` or `FD`
    Realtime(u8),
}

impl UnknownEvent {
    pub(crate) fn from_kind(kind: &EventKind<'_>) -> Option<Self> {
        match kind {
            EventKind::Channel(channel) => match channel.message() {
                VoiceMessage::ControlChange(ControlChange::Undefined { number, .. }) => {
                    Some(Self::Controller(number.value()))
                }
                VoiceMessage::ControlChange(ControlChange::Mode(ChannelMode::Undefined {
                    controller,
                    value,
                })) => Some(Self::ChannelMode {
                    controller: *controller,
                    value: value.value(),
                }),
                _ => None,
            },
            EventKind::Meta(meta) => match meta.message() {
                MetaMessage::Undefined(_) => Some(Self::Meta(meta.tag())),
                _ => None,
            },
            EventKind::Common(SystemCommon::Undefined(status)) => Some(Self::SystemCommon(*status)),
            EventKind::Realtime(SystemRealtime::Undefined(status)) => Some(Self::Realtime(*status)),
            _ => None,
        }
    }
}

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller(number) => write!(f, "undefined controller {number}"),
            Self::ChannelMode { controller, value } => {
                write!(f, "mode controller {controller} with value {value}")
            }
            Self::Meta(tag) => write!(f, "undefined meta event {tag:#06X}"),
            Self::SystemCommon(status) => write!(f, "undefined system common {status:#04X}"),
            Self::Realtime(status) => write!(f, "undefined real-time {status:#04X}"),
        }
    }
}
