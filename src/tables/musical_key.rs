use core::fmt;

#[doc = r#"
A named key from the circle of fifths.

Key signature meta events only carry a count of sharps (positive) or flats
(negative) and a major/minor flag. This names the key they describe.

# Example
```rust
# use smf_reader::prelude::*;
assert_eq!(MusicalKey::from_signature(2, false), Some(MusicalKey::DMajor));
assert_eq!(MusicalKey::from_signature(-3, true), Some(MusicalKey::CMinor));
assert_eq!(MusicalKey::from_signature(8, false), None);
```
"#]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MusicalKey {
    CMajor,
    AMinor,
    // sharps
    GMajor,
    EMinor,
    DMajor,
    BMinor,
    AMajor,
    FSharpMinor,
    EMajor,
    CSharpMinor,
    BMajor,
    GSharpMinor,
    FSharpMajor,
    DSharpMinor,
    CSharpMajor,
    ASharpMinor,
    // flats
    FMajor,
    DMinor,
    BFlatMajor,
    GMinor,
    EFlatMajor,
    CMinor,
    AFlatMajor,
    FMinor,
    DFlatMajor,
    BFlatMinor,
    GFlatMajor,
    EFlatMinor,
    CFlatMajor,
    AFlatMinor,
}

const SHARP_KEYS: [(MusicalKey, MusicalKey); 8] = {
    use MusicalKey::*;
    [
        (CMajor, AMinor),
        (GMajor, EMinor),
        (DMajor, BMinor),
        (AMajor, FSharpMinor),
        (EMajor, CSharpMinor),
        (BMajor, GSharpMinor),
        (FSharpMajor, DSharpMinor),
        (CSharpMajor, ASharpMinor),
    ]
};

const FLAT_KEYS: [(MusicalKey, MusicalKey); 8] = {
    use MusicalKey::*;
    [
        (CMajor, AMinor),
        (FMajor, DMinor),
        (BFlatMajor, GMinor),
        (EFlatMajor, CMinor),
        (AFlatMajor, FMinor),
        (DFlatMajor, BFlatMinor),
        (GFlatMajor, EFlatMinor),
        (CFlatMajor, AFlatMinor),
    ]
};

impl MusicalKey {
    /// The key for a signature, `None` beyond seven sharps or flats
    pub const fn from_signature(sharps_flats: i8, minor: bool) -> Option<Self> {
        let table = if sharps_flats < 0 {
            &FLAT_KEYS
        } else {
            &SHARP_KEYS
        };
        let count = sharps_flats.unsigned_abs() as usize;
        if count >= table.len() {
            return None;
        }
        let (major_key, minor_key) = table[count];
        Some(if minor { minor_key } else { major_key })
    }

    /// True for the relative minor keys
    pub const fn is_minor(&self) -> bool {
        use MusicalKey::*;
        matches!(
            self,
            AMinor
                | EMinor
                | BMinor
                | FSharpMinor
                | CSharpMinor
                | GSharpMinor
                | DSharpMinor
                | ASharpMinor
                | DMinor
                | GMinor
                | CMinor
                | FMinor
                | BFlatMinor
                | EFlatMinor
                | AFlatMinor
        )
    }

    /// A short name such as `F#-min` or `Bb-Maj`
    pub const fn name(&self) -> &'static str {
        use MusicalKey::*;
        match self {
            CMajor => "C-Maj",
            AMinor => "A-min",
            GMajor => "G-Maj",
            EMinor => "E-min",
            DMajor => "D-Maj",
            BMinor => "B-min",
            AMajor => "A-Maj",
            FSharpMinor => "F#-min",
            EMajor => "E-Maj",
            CSharpMinor => "C#-min",
            BMajor => "B-Maj",
            GSharpMinor => "G#-min",
            FSharpMajor => "F#-Maj",
            DSharpMinor => "D#-min",
            CSharpMajor => "C#-Maj",
            ASharpMinor => "A#-min",
            FMajor => "F-Maj",
            DMinor => "D-min",
            BFlatMajor => "Bb-Maj",
            GMinor => "G-min",
            EFlatMajor => "Eb-Maj",
            CMinor => "C-min",
            AFlatMajor => "Ab-Maj",
            FMinor => "F-min",
            DFlatMajor => "Db-Maj",
            BFlatMinor => "Bb-min",
            GFlatMajor => "Gb-Maj",
            EFlatMinor => "Eb-min",
            CFlatMajor => "Cb-Maj",
            AFlatMinor => "Ab-min",
        }
    }
}

impl fmt::Display for MusicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn circle_of_fifths() {
    use pretty_assertions::assert_eq;
    assert_eq!(MusicalKey::from_signature(0, false), Some(MusicalKey::CMajor));
    assert_eq!(MusicalKey::from_signature(0, true), Some(MusicalKey::AMinor));
    assert_eq!(MusicalKey::from_signature(7, true), Some(MusicalKey::ASharpMinor));
    assert_eq!(MusicalKey::from_signature(-7, false), Some(MusicalKey::CFlatMajor));
    assert_eq!(MusicalKey::from_signature(-1, true), Some(MusicalKey::DMinor));
    assert_eq!(MusicalKey::from_signature(-8, true), None);
    assert_eq!(MusicalKey::from_signature(i8::MIN, false), None);
    assert!(MusicalKey::GSharpMinor.is_minor());
    assert!(!MusicalKey::GFlatMajor.is_minor());
    assert_eq!(MusicalKey::EFlatMinor.to_string(), "Eb-min");
}
