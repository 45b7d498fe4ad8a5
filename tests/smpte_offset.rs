use pretty_assertions::assert_eq;
use smf_reader::prelude::*;

const fn rate_bits(fps: SmpteFps) -> u8 {
    match fps {
        SmpteFps::TwentyFour => 0b00,
        SmpteFps::TwentyFive => 0b01,
        SmpteFps::TwentyNine => 0b10,
        SmpteFps::Thirty => 0b11,
    }
}

const fn division_byte(fps: SmpteFps) -> u8 {
    match fps {
        SmpteFps::TwentyFour => 0xE8,
        SmpteFps::TwentyFive => 0xE7,
        SmpteFps::TwentyNine => 0xE3,
        SmpteFps::Thirty => 0xE2,
    }
}

/// A chunk around `events`, closed by an end of track
fn track(events: &[u8]) -> Vec<u8> {
    let mut body = events.to_vec();
    body.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);
    let mut chunk = b"MTrk".to_vec();
    chunk.extend_from_slice(&(body.len() as u32).to_be_bytes());
    chunk.extend(body);
    chunk
}

/// A format 1 file with SMPTE timing at 40 ticks per frame
fn smpte_file(fps: SmpteFps, tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = b"MThd".to_vec();
    bytes.extend_from_slice(&[0, 0, 0, 6, 0, 1]);
    bytes.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[division_byte(fps), 40]);
    for track in tracks {
        bytes.extend_from_slice(track);
    }
    bytes
}

fn offset_event(fps: SmpteFps, [h, m, s, f, sf]: [u8; 5]) -> [u8; 9] {
    [0x00, 0xFF, 0x54, 0x05, (rate_bits(fps) << 5) | h, m, s, f, sf]
}

fn offsets(file: &MidiFile<'_>) -> Vec<SmpteOffset> {
    file.tracks()
        .iter()
        .flat_map(Track::events)
        .filter_map(|event| match event.kind() {
            EventKind::Meta(meta) => match meta.message() {
                MetaMessage::SmpteOffset(offset) => Some(*offset),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn offset_at_the_start_of_a_track() {
    for fps in [
        SmpteFps::TwentyFour,
        SmpteFps::TwentyFive,
        SmpteFps::TwentyNine,
        SmpteFps::Thirty,
    ] {
        let mut events = offset_event(fps, [12, 30, 15, 18, 50]).to_vec();
        events.extend_from_slice(&[0x00, 0x90, 0x3C, 0x64, 0x60, 0x80, 0x3C, 0x40]);
        let bytes = smpte_file(fps, &[track(&events)]);
        let file = MidiFile::parse(&bytes).unwrap();

        let Timing::Smpte(timing) = file.timing().unwrap() else {
            panic!("expected SMPTE timing for {fps:?}");
        };
        assert_eq!(timing.fps(), fps);
        assert_eq!(timing.ticks_per_frame(), 40);

        let found = offsets(&file);
        assert_eq!(found.len(), 1);
        let offset = found[0];
        assert_eq!(offset.fps, fps);
        assert_eq!(
            [offset.hour, offset.minute, offset.second, offset.frame, offset.subframe],
            [12, 30, 15, 18, 50]
        );
        assert_eq!(file.tracks()[0].len(), 4);
    }
}

#[test]
fn offset_micros_follow_the_rate() {
    let bytes = smpte_file(
        SmpteFps::TwentyFour,
        &[track(&offset_event(SmpteFps::TwentyFour, [12, 30, 15, 18, 50]))],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    let offset = offsets(&file)[0];

    let expected = (12. * 3600. + 30. * 60. + 15.) * 1_000_000.
        + (18. / 24.) * 1_000_000.
        + (0.5 / 24.) * 1_000_000.;
    assert!((offset.as_micros() - expected).abs() < 0.01);

    let Timing::Smpte(timing) = file.timing().unwrap() else {
        panic!("expected SMPTE timing");
    };
    assert!((offset.as_micros_with_override(timing.fps()) - expected).abs() < 0.01);
    assert!((offset.as_micros_with_override(SmpteFps::Thirty) - expected).abs() > 1.);
}

#[test]
fn one_offset_per_track() {
    let bytes = smpte_file(
        SmpteFps::TwentyFive,
        &[
            track(&offset_event(SmpteFps::TwentyFive, [0, 0, 10, 0, 0])),
            track(&offset_event(SmpteFps::TwentyFive, [0, 1, 0, 0, 0])),
        ],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    let found = offsets(&file);

    assert_eq!(found.len(), 2);
    assert_eq!((found[0].minute, found[0].second), (0, 10));
    assert_eq!((found[1].minute, found[1].second), (1, 0));
    let between = found[1].as_micros() - found[0].as_micros();
    assert!((between - 50_000_000.).abs() < 1.);
}

#[test]
fn out_of_range_offset_fails_the_track() {
    // 24 is not an hour
    let events = [0x00, 0xFF, 0x54, 0x05, 0x18, 0x00, 0x00, 0x00, 0x00];
    let bytes = smpte_file(SmpteFps::TwentyFour, &[track(&events)]);
    let err = MidiFile::parse(&bytes).unwrap_err();

    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::ParseError(ParseError::Smpte(SmpteError::HourOffset(24)))
    );
    // the payload follows the tag and length
    assert_eq!(err.position(), 14 + 8 + 4);
}

#[test]
fn short_offset_is_a_length_mismatch() {
    let events = [0x00, 0xFF, 0x54, 0x04, 0x00, 0x00, 0x00, 0x00];
    let bytes = smpte_file(SmpteFps::Thirty, &[track(&events)]);
    let err = MidiFile::parse(&bytes).unwrap_err();

    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::LengthMismatch {
            tag: 0xFF54,
            expected: 5,
            found: 4,
        }))
    ));
}
