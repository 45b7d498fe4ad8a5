use crate::tables::MusicalKey;

/// A `FF 59 02` key signature, kept exactly as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    sharps_flats: i8,
    mode: u8,
}

impl KeySignature {
    /// Build from the two payload bytes
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            sharps_flats: bytes[0] as i8,
            mode: bytes[1],
        }
    }

    /// Sharps if positive, flats if negative
    pub const fn sharps_flats(&self) -> i8 {
        self.sharps_flats
    }

    /// 0 for major, 1 for minor. Other values are kept as is.
    pub const fn mode(&self) -> u8 {
        self.mode
    }

    /// True for a mode of 1
    pub const fn is_minor(&self) -> bool {
        self.mode == 1
    }

    /// The key named by the signature, if it is in range
    pub const fn musical_key(&self) -> Option<MusicalKey> {
        match self.mode {
            0 | 1 => MusicalKey::from_signature(self.sharps_flats, self.is_minor()),
            _ => None,
        }
    }
}

#[test]
fn musical_keys() {
    use pretty_assertions::assert_eq;
    let signature = KeySignature::from_bytes([0xFD, 0x01]);
    assert_eq!(signature.sharps_flats(), -3);
    assert_eq!(signature.musical_key(), Some(MusicalKey::CMinor));
    assert_eq!(KeySignature::from_bytes([4, 0]).musical_key(), Some(MusicalKey::EMajor));
    assert_eq!(KeySignature::from_bytes([9, 0]).musical_key(), None);
    assert_eq!(KeySignature::from_bytes([0, 2]).musical_key(), None);
}
