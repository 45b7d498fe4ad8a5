#![doc = r#"
The General MIDI level 1 instrument table.

Program change messages carry a zero-indexed program number. General MIDI
documents patches as 1 to 128, so patch `1`, the acoustic grand piano, is
program `0` on the wire.
"#]
use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::DataByte;

/// One of the 128 General MIDI patches, keyed by program number
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Instrument {
    // Piano
    AcousticGrandPiano = 0,
    BrightAcousticPiano,
    ElectricGrandPiano,
    HonkyTonkPiano,
    ElectricPiano1,
    ElectricPiano2,
    Harpsichord,
    Clavinet,
    // Chromatic Percussion
    Celesta,
    Glockenspiel,
    MusicBox,
    Vibraphone,
    Marimba,
    Xylophone,
    TubularBells,
    Dulcimer,
    // Organ
    DrawbarOrgan,
    PercussiveOrgan,
    RockOrgan,
    ChurchOrgan,
    ReedOrgan,
    Accordion,
    Harmonica,
    TangoAccordion,
    // Guitar
    AcousticGuitarNylon,
    AcousticGuitarSteel,
    ElectricGuitarJazz,
    ElectricGuitarClean,
    ElectricGuitarMuted,
    OverdrivenGuitar,
    DistortionGuitar,
    GuitarHarmonics,
    // Bass
    AcousticBass,
    ElectricBassFinger,
    ElectricBassPick,
    FretlessBass,
    SlapBass1,
    SlapBass2,
    SynthBass1,
    SynthBass2,
    // Strings
    Violin,
    Viola,
    Cello,
    Contrabass,
    TremoloStrings,
    PizzicatoStrings,
    OrchestralHarp,
    Timpani,
    // Ensemble
    StringEnsemble1,
    StringEnsemble2,
    SynthStrings1,
    SynthStrings2,
    ChoirAahs,
    VoiceOohs,
    SynthVoice,
    OrchestraHit,
    // Brass
    Trumpet,
    Trombone,
    Tuba,
    MutedTrumpet,
    FrenchHorn,
    BrassSection,
    SynthBrass1,
    SynthBrass2,
    // Reed
    SopranoSax,
    AltoSax,
    TenorSax,
    BaritoneSax,
    Oboe,
    EnglishHorn,
    Bassoon,
    Clarinet,
    // Pipe
    Piccolo,
    Flute,
    Recorder,
    PanFlute,
    BlownBottle,
    Shakuhachi,
    Whistle,
    Ocarina,
    // Synth Lead
    Lead1Square,
    Lead2Sawtooth,
    Lead3Calliope,
    Lead4Chiff,
    Lead5Charang,
    Lead6Voice,
    Lead7Fifths,
    Lead8BassLead,
    // Synth Pad
    Pad1NewAge,
    Pad2Warm,
    Pad3Polysynth,
    Pad4Choir,
    Pad5Bowed,
    Pad6Metallic,
    Pad7Halo,
    Pad8Sweep,
    // Synth Effects
    Fx1Rain,
    Fx2Soundtrack,
    Fx3Crystal,
    Fx4Atmosphere,
    Fx5Brightness,
    Fx6Goblins,
    Fx7Echoes,
    Fx8SciFi,
    // Ethnic
    Sitar,
    Banjo,
    Shamisen,
    Koto,
    Kalimba,
    Bagpipe,
    Fiddle,
    Shanai,
    // Percussive
    TinkleBell,
    Agogo,
    SteelDrums,
    Woodblock,
    TaikoDrum,
    MelodicTom,
    SynthDrum,
    ReverseCymbal,
    // Sound Effects
    GuitarFretNoise,
    BreathNoise,
    Seashore,
    BirdTweet,
    TelephoneRing,
    Helicopter,
    Applause,
    Gunshot,
}

#[rustfmt::skip]
const PROGRAMS: [Instrument; 128] = {
    use Instrument::*;
    [
        AcousticGrandPiano, BrightAcousticPiano, ElectricGrandPiano, HonkyTonkPiano, ElectricPiano1, ElectricPiano2, Harpsichord, Clavinet,
        Celesta, Glockenspiel, MusicBox, Vibraphone, Marimba, Xylophone, TubularBells, Dulcimer,
        DrawbarOrgan, PercussiveOrgan, RockOrgan, ChurchOrgan, ReedOrgan, Accordion, Harmonica, TangoAccordion,
        AcousticGuitarNylon, AcousticGuitarSteel, ElectricGuitarJazz, ElectricGuitarClean, ElectricGuitarMuted, OverdrivenGuitar, DistortionGuitar, GuitarHarmonics,
        AcousticBass, ElectricBassFinger, ElectricBassPick, FretlessBass, SlapBass1, SlapBass2, SynthBass1, SynthBass2,
        Violin, Viola, Cello, Contrabass, TremoloStrings, PizzicatoStrings, OrchestralHarp, Timpani,
        StringEnsemble1, StringEnsemble2, SynthStrings1, SynthStrings2, ChoirAahs, VoiceOohs, SynthVoice, OrchestraHit,
        Trumpet, Trombone, Tuba, MutedTrumpet, FrenchHorn, BrassSection, SynthBrass1, SynthBrass2,
        SopranoSax, AltoSax, TenorSax, BaritoneSax, Oboe, EnglishHorn, Bassoon, Clarinet,
        Piccolo, Flute, Recorder, PanFlute, BlownBottle, Shakuhachi, Whistle, Ocarina,
        Lead1Square, Lead2Sawtooth, Lead3Calliope, Lead4Chiff, Lead5Charang, Lead6Voice, Lead7Fifths, Lead8BassLead,
        Pad1NewAge, Pad2Warm, Pad3Polysynth, Pad4Choir, Pad5Bowed, Pad6Metallic, Pad7Halo, Pad8Sweep,
        Fx1Rain, Fx2Soundtrack, Fx3Crystal, Fx4Atmosphere, Fx5Brightness, Fx6Goblins, Fx7Echoes, Fx8SciFi,
        Sitar, Banjo, Shamisen, Koto, Kalimba, Bagpipe, Fiddle, Shanai,
        TinkleBell, Agogo, SteelDrums, Woodblock, TaikoDrum, MelodicTom, SynthDrum, ReverseCymbal,
        GuitarFretNoise, BreathNoise, Seashore, BirdTweet, TelephoneRing, Helicopter, Applause, Gunshot,
    ]
};

impl Instrument {
    /// The patch selected by a program number. Every data byte maps to one.
    pub const fn from_program(program: DataByte) -> Self {
        PROGRAMS[(program.value() & 0x7F) as usize]
    }

    /// The instrument family, one per block of eight patches
    pub const fn family(&self) -> InstrumentFamily {
        InstrumentFamily::from_program(*self as u8)
    }

    /// The one-indexed patch number used by General MIDI documentation
    pub const fn patch_number(&self) -> u8 {
        *self as u8 + 1
    }

    /// The display name of the patch
    pub const fn name(&self) -> &'static str {
        use Instrument::*;
        match self {
            AcousticGrandPiano => "Acoustic Grand Piano",
            BrightAcousticPiano => "Bright Acoustic Piano",
            ElectricGrandPiano => "Electric Grand Piano",
            HonkyTonkPiano => "Honky-tonk Piano",
            ElectricPiano1 => "Electric Piano 1",
            ElectricPiano2 => "Electric Piano 2",
            Harpsichord => "Harpsichord",
            Clavinet => "Clavinet",
            Celesta => "Celesta",
            Glockenspiel => "Glockenspiel",
            MusicBox => "Music Box",
            Vibraphone => "Vibraphone",
            Marimba => "Marimba",
            Xylophone => "Xylophone",
            TubularBells => "Tubular Bells",
            Dulcimer => "Dulcimer",
            DrawbarOrgan => "Drawbar Organ",
            PercussiveOrgan => "Percussive Organ",
            RockOrgan => "Rock Organ",
            ChurchOrgan => "Church Organ",
            ReedOrgan => "Reed Organ",
            Accordion => "Accordion",
            Harmonica => "Harmonica",
            TangoAccordion => "Tango Accordion",
            AcousticGuitarNylon => "Acoustic Guitar (nylon)",
            AcousticGuitarSteel => "Acoustic Guitar (steel)",
            ElectricGuitarJazz => "Electric Guitar (jazz)",
            ElectricGuitarClean => "Electric Guitar (clean)",
            ElectricGuitarMuted => "Electric Guitar (muted)",
            OverdrivenGuitar => "Overdriven Guitar",
            DistortionGuitar => "Distortion Guitar",
            GuitarHarmonics => "Guitar Harmonics",
            AcousticBass => "Acoustic Bass",
            ElectricBassFinger => "Electric Bass (finger)",
            ElectricBassPick => "Electric Bass (pick)",
            FretlessBass => "Fretless Bass",
            SlapBass1 => "Slap Bass 1",
            SlapBass2 => "Slap Bass 2",
            SynthBass1 => "Synth Bass 1",
            SynthBass2 => "Synth Bass 2",
            Violin => "Violin",
            Viola => "Viola",
            Cello => "Cello",
            Contrabass => "Contrabass",
            TremoloStrings => "Tremolo Strings",
            PizzicatoStrings => "Pizzicato Strings",
            OrchestralHarp => "Orchestral Harp",
            Timpani => "Timpani",
            StringEnsemble1 => "String Ensemble 1",
            StringEnsemble2 => "String Ensemble 2",
            SynthStrings1 => "Synth Strings 1",
            SynthStrings2 => "Synth Strings 2",
            ChoirAahs => "Choir Aahs",
            VoiceOohs => "Voice Oohs",
            SynthVoice => "Synth Voice",
            OrchestraHit => "Orchestra Hit",
            Trumpet => "Trumpet",
            Trombone => "Trombone",
            Tuba => "Tuba",
            MutedTrumpet => "Muted Trumpet",
            FrenchHorn => "French Horn",
            BrassSection => "Brass Section",
            SynthBrass1 => "Synth Brass 1",
            SynthBrass2 => "Synth Brass 2",
            SopranoSax => "Soprano Sax",
            AltoSax => "Alto Sax",
            TenorSax => "Tenor Sax",
            BaritoneSax => "Baritone Sax",
            Oboe => "Oboe",
            EnglishHorn => "English Horn",
            Bassoon => "Bassoon",
            Clarinet => "Clarinet",
            Piccolo => "Piccolo",
            Flute => "Flute",
            Recorder => "Recorder",
            PanFlute => "Pan Flute",
            BlownBottle => "Blown Bottle",
            Shakuhachi => "Shakuhachi",
            Whistle => "Whistle",
            Ocarina => "Ocarina",
            Lead1Square => "Lead 1 (square)",
            Lead2Sawtooth => "Lead 2 (sawtooth)",
            Lead3Calliope => "Lead 3 (calliope)",
            Lead4Chiff => "Lead 4 (chiff)",
            Lead5Charang => "Lead 5 (charang)",
            Lead6Voice => "Lead 6 (voice)",
            Lead7Fifths => "Lead 7 (fifths)",
            Lead8BassLead => "Lead 8 (bass + lead)",
            Pad1NewAge => "Pad 1 (new age)",
            Pad2Warm => "Pad 2 (warm)",
            Pad3Polysynth => "Pad 3 (polysynth)",
            Pad4Choir => "Pad 4 (choir)",
            Pad5Bowed => "Pad 5 (bowed)",
            Pad6Metallic => "Pad 6 (metallic)",
            Pad7Halo => "Pad 7 (halo)",
            Pad8Sweep => "Pad 8 (sweep)",
            Fx1Rain => "FX 1 (rain)",
            Fx2Soundtrack => "FX 2 (soundtrack)",
            Fx3Crystal => "FX 3 (crystal)",
            Fx4Atmosphere => "FX 4 (atmosphere)",
            Fx5Brightness => "FX 5 (brightness)",
            Fx6Goblins => "FX 6 (goblins)",
            Fx7Echoes => "FX 7 (echoes)",
            Fx8SciFi => "FX 8 (sci-fi)",
            Sitar => "Sitar",
            Banjo => "Banjo",
            Shamisen => "Shamisen",
            Koto => "Koto",
            Kalimba => "Kalimba",
            Bagpipe => "Bagpipe",
            Fiddle => "Fiddle",
            Shanai => "Shanai",
            TinkleBell => "Tinkle Bell",
            Agogo => "Agogo",
            SteelDrums => "Steel Drums",
            Woodblock => "Woodblock",
            TaikoDrum => "Taiko Drum",
            MelodicTom => "Melodic Tom",
            SynthDrum => "Synth Drum",
            ReverseCymbal => "Reverse Cymbal",
            GuitarFretNoise => "Guitar Fret Noise",
            BreathNoise => "Breath Noise",
            Seashore => "Seashore",
            BirdTweet => "Bird Tweet",
            TelephoneRing => "Telephone Ring",
            Helicopter => "Helicopter",
            Applause => "Applause",
            Gunshot => "Gunshot",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sixteen General MIDI instrument families
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstrumentFamily {
    Piano,
    ChromaticPercussion,
    Organ,
    Guitar,
    Bass,
    Strings,
    Ensemble,
    Brass,
    Reed,
    Pipe,
    SynthLead,
    SynthPad,
    SynthEffects,
    Ethnic,
    Percussive,
    SoundEffects,
}

impl InstrumentFamily {
    /// The family of a zero-indexed program number.
    ///
    /// The leading bit is ignored.
    pub const fn from_program(program: u8) -> Self {
        use InstrumentFamily::*;
        match (program & 0x7F) / 8 {
            0 => Piano,
            1 => ChromaticPercussion,
            2 => Organ,
            3 => Guitar,
            4 => Bass,
            5 => Strings,
            6 => Ensemble,
            7 => Brass,
            8 => Reed,
            9 => Pipe,
            10 => SynthLead,
            11 => SynthPad,
            12 => SynthEffects,
            13 => Ethnic,
            14 => Percussive,
            _ => SoundEffects,
        }
    }

    /// The display name of the family
    pub const fn name(&self) -> &'static str {
        use InstrumentFamily::*;
        match self {
            Piano => "Piano",
            ChromaticPercussion => "Chromatic Percussion",
            Organ => "Organ",
            Guitar => "Guitar",
            Bass => "Bass",
            Strings => "Strings",
            Ensemble => "Ensemble",
            Brass => "Brass",
            Reed => "Reed",
            Pipe => "Pipe",
            SynthLead => "Synth Lead",
            SynthPad => "Synth Pad",
            SynthEffects => "Synth Effects",
            Ethnic => "Ethnic",
            Percussive => "Percussive",
            SoundEffects => "Sound Effects",
        }
    }
}

impl fmt::Display for InstrumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn instrument_program_numbers() {
    use pretty_assertions::assert_eq;
    assert_eq!(Instrument::try_from(0u8).unwrap(), Instrument::AcousticGrandPiano);
    assert_eq!(Instrument::try_from(40u8).unwrap(), Instrument::Violin);
    assert_eq!(Instrument::try_from(127u8).unwrap(), Instrument::Gunshot);
    assert!(Instrument::try_from(128u8).is_err());
    assert_eq!(Instrument::Gunshot.patch_number(), 128);
    assert_eq!(u8::from(Instrument::Trumpet), 56);
}

#[test]
fn every_program_has_a_patch() {
    use pretty_assertions::assert_eq;
    for program in 0..=127u8 {
        let byte = DataByte::new(program).unwrap();
        assert_eq!(
            u8::from(Instrument::from_program(byte)),
            program,
            "program {program}"
        );
    }
}

#[test]
fn instrument_families() {
    use pretty_assertions::assert_eq;
    assert_eq!(Instrument::Clavinet.family(), InstrumentFamily::Piano);
    assert_eq!(Instrument::Celesta.family(), InstrumentFamily::ChromaticPercussion);
    assert_eq!(Instrument::Ocarina.family(), InstrumentFamily::Pipe);
    assert_eq!(Instrument::Gunshot.family(), InstrumentFamily::SoundEffects);
    assert_eq!(Instrument::Fx8SciFi.to_string(), "FX 8 (sci-fi)");
}
