/// Microseconds per quarter note, from a `FF 51 03` event.
///
/// When a file sets no tempo, 120 beats per minute is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Default for Tempo {
    fn default() -> Self {
        Self(500_000)
    }
}

impl Tempo {
    /// Build from the three payload bytes
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Microseconds per quarter note, at most `0xFF_FFFF`
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute, or `None` for a zero tempo
    pub fn beats_per_minute(&self) -> Option<f64> {
        if self.0 == 0 {
            return None;
        }
        Some(60_000_000. / self.0 as f64)
    }
}

#[test]
fn tempo_conversions() {
    use pretty_assertions::assert_eq;
    let tempo = Tempo::from_bytes([0x07, 0xA1, 0x20]);
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo.beats_per_minute(), Some(120.));
    assert_eq!(tempo, Tempo::default());
    assert_eq!(Tempo::from_bytes([0, 0, 0]).beats_per_minute(), None);
}
