use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The General MIDI percussion key map.

On channel 10 the key number of a note selects a drum sound rather than a
pitch. Keys 35 through 81 are assigned.
"#]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Percussion {
    AcousticBassDrum = 35,
    BassDrum1,
    SideStick,
    AcousticSnare,
    HandClap,
    ElectricSnare,
    LowFloorTom,
    ClosedHiHat,
    HighFloorTom,
    PedalHiHat,
    LowTom,
    OpenHiHat,
    LowMidTom,
    HiMidTom,
    CrashCymbal1,
    HighTom,
    RideCymbal1,
    ChineseCymbal,
    RideBell,
    Tambourine,
    SplashCymbal,
    Cowbell,
    CrashCymbal2,
    Vibraslap,
    RideCymbal2,
    HiBongo,
    LowBongo,
    MuteHiConga,
    OpenHiConga,
    LowConga,
    HighTimbale,
    LowTimbale,
    HighAgogo,
    LowAgogo,
    Cabasa,
    Maracas,
    ShortWhistle,
    LongWhistle,
    ShortGuiro,
    LongGuiro,
    Claves,
    HiWoodBlock,
    LowWoodBlock,
    MuteCuica,
    OpenCuica,
    MuteTriangle,
    OpenTriangle,
}

impl Percussion {
    /// The display name of the sound
    pub const fn name(&self) -> &'static str {
        use Percussion::*;
        match self {
            AcousticBassDrum => "Acoustic Bass Drum",
            BassDrum1 => "Bass Drum 1",
            SideStick => "Side Stick",
            AcousticSnare => "Acoustic Snare",
            HandClap => "Hand Clap",
            ElectricSnare => "Electric Snare",
            LowFloorTom => "Low Floor Tom",
            ClosedHiHat => "Closed Hi-Hat",
            HighFloorTom => "High Floor Tom",
            PedalHiHat => "Pedal Hi-Hat",
            LowTom => "Low Tom",
            OpenHiHat => "Open Hi-Hat",
            LowMidTom => "Low-Mid Tom",
            HiMidTom => "Hi-Mid Tom",
            CrashCymbal1 => "Crash Cymbal 1",
            HighTom => "High Tom",
            RideCymbal1 => "Ride Cymbal 1",
            ChineseCymbal => "Chinese Cymbal",
            RideBell => "Ride Bell",
            Tambourine => "Tambourine",
            SplashCymbal => "Splash Cymbal",
            Cowbell => "Cowbell",
            CrashCymbal2 => "Crash Cymbal 2",
            Vibraslap => "Vibraslap",
            RideCymbal2 => "Ride Cymbal 2",
            HiBongo => "Hi Bongo",
            LowBongo => "Low Bongo",
            MuteHiConga => "Mute Hi Conga",
            OpenHiConga => "Open Hi Conga",
            LowConga => "Low Conga",
            HighTimbale => "High Timbale",
            LowTimbale => "Low Timbale",
            HighAgogo => "High Agogo",
            LowAgogo => "Low Agogo",
            Cabasa => "Cabasa",
            Maracas => "Maracas",
            ShortWhistle => "Short Whistle",
            LongWhistle => "Long Whistle",
            ShortGuiro => "Short Guiro",
            LongGuiro => "Long Guiro",
            Claves => "Claves",
            HiWoodBlock => "Hi Wood Block",
            LowWoodBlock => "Low Wood Block",
            MuteCuica => "Mute Cuica",
            OpenCuica => "Open Cuica",
            MuteTriangle => "Mute Triangle",
            OpenTriangle => "Open Triangle",
        }
    }
}

impl fmt::Display for Percussion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn percussion_key_range() {
    use pretty_assertions::assert_eq;
    assert_eq!(Percussion::try_from(35u8).unwrap(), Percussion::AcousticBassDrum);
    assert_eq!(Percussion::try_from(42u8).unwrap(), Percussion::ClosedHiHat);
    assert_eq!(Percussion::try_from(81u8).unwrap(), Percussion::OpenTriangle);
    assert_eq!(u8::from(Percussion::Cowbell), 56);
    assert!(Percussion::try_from(34u8).is_err());
    assert!(Percussion::try_from(82u8).is_err());
}
