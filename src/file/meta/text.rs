#[cfg(feature = "std")]
use std::borrow::Cow;

/// Which of the seven text meta events a [`TextEvent`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextKind {
    /// `FF 01`, any text
    Text,
    /// `FF 02`
    Copyright,
    /// `FF 03`, the sequence name in the first track of a format 1 file
    TrackName,
    /// `FF 04`
    InstrumentName,
    /// `FF 05`, usually one syllable per event
    Lyric,
    /// `FF 06`, rehearsal letters or section names
    Marker,
    /// `FF 07`, a description of something happening on stage
    CuePoint,
}

#[doc = r#"
Text borrowed from the file buffer.

Files are not required to hold UTF-8, so the raw bytes are kept and
interpretation is left to the caller.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEvent<'a> {
    kind: TextKind,
    bytes: &'a [u8],
}

impl<'a> TextEvent<'a> {
    pub(crate) const fn new(kind: TextKind, bytes: &'a [u8]) -> Self {
        Self { kind, bytes }
    }

    /// Which text event this is
    pub const fn kind(&self) -> TextKind {
        self.kind
    }

    /// The raw bytes
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }

    /// The text with invalid sequences replaced
    #[cfg(feature = "std")]
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

#[test]
fn text_as_str() {
    use pretty_assertions::assert_eq;
    let event = TextEvent::new(TextKind::TrackName, b"Piano");
    assert_eq!(event.as_str(), Some("Piano"));
    assert_eq!(event.kind(), TextKind::TrackName);

    let event = TextEvent::new(TextKind::Lyric, &[0x66, 0xFF, 0x6F]);
    assert_eq!(event.as_str(), None);
    #[cfg(feature = "std")]
    assert_eq!(event.to_string_lossy(), "f\u{FFFD}o");
}
