use core::fmt;

#[doc = r#"
How the tracks of a file relate to one another.

The header stores the format as a 16-bit number:

- `0`: a single track holding every channel
- `1`: several tracks played simultaneously
- `2` and `3`: several independent, sequential patterns
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Format 0
    Single,
    /// Format 1
    Simultaneous,
    /// Format 2
    Sequential,
}

impl FormatType {
    /// The highest format number accepted
    pub const MAX_CODE: u16 = 3;

    /// Classify a raw format number. Codes above [`Self::MAX_CODE`] are rejected.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Single),
            1 => Some(Self::Simultaneous),
            2 | 3 => Some(Self::Sequential),
            _ => None,
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single track",
            Self::Simultaneous => "simultaneous tracks",
            Self::Sequential => "sequential tracks",
        };
        f.write_str(name)
    }
}
