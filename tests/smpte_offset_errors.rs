use pretty_assertions::assert_eq;
use smf_reader::prelude::*;

/// `[0rrhhhhh, minute, second, frame, subframe]`
fn payload(rate: u8, [hour, minute, second, frame, subframe]: [u8; 5]) -> [u8; 5] {
    [(rate << 5) | (hour & 0x1F), minute, second, frame, subframe]
}

#[test]
fn payload_must_be_five_bytes() {
    for len in [0, 3, 4, 6, 9] {
        let data = vec![0u8; len];
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Length(len)));
    }
}

#[test]
fn rate_bits_beyond_thirty() {
    for rate in 4..=7 {
        let data = payload(rate, [12, 30, 15, 10, 50]);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::TrackFrame(rate)));
    }
}

#[test]
fn hours_past_23() {
    for hour in 24..=31 {
        let data = payload(0, [hour, 0, 0, 0, 0]);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::HourOffset(hour)));
    }
}

#[test]
fn minutes_and_seconds_past_59() {
    for value in [60, 61, 99, 0x7F, 0xFF] {
        assert_eq!(
            SmpteOffset::parse(&payload(1, [12, value, 30, 15, 50])),
            Err(SmpteError::MinuteOffset(value))
        );
        assert_eq!(
            SmpteOffset::parse(&payload(1, [12, 30, value, 15, 50])),
            Err(SmpteError::SecondOffset(value))
        );
    }
}

#[test]
fn subframes_past_99() {
    for subframe in [100, 101, 150, 0xFF] {
        let data = payload(2, [12, 30, 45, 15, subframe]);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Subframe(subframe)));
    }
}

#[test]
fn first_field_out_of_range_wins() {
    assert_eq!(
        SmpteOffset::parse(&payload(0, [25, 61, 30, 15, 50])),
        Err(SmpteError::HourOffset(25))
    );
    assert_eq!(
        SmpteOffset::parse(&payload(1, [23, 60, 60, 15, 50])),
        Err(SmpteError::MinuteOffset(60))
    );
    assert_eq!(
        SmpteOffset::parse(&payload(2, [23, 59, 59, 29, 100])),
        Err(SmpteError::Subframe(100))
    );
}

#[test]
fn upper_bounds_are_inclusive() {
    let cases = [
        (0, [23, 59, 59, 23, 99]),
        (1, [23, 59, 59, 24, 99]),
        (2, [23, 59, 59, 29, 99]),
        (3, [23, 59, 59, 29, 99]),
        (0, [0, 0, 0, 0, 0]),
    ];
    for (rate, fields) in cases {
        let offset = SmpteOffset::parse(&payload(rate, fields)).unwrap();
        assert_eq!(
            [offset.hour, offset.minute, offset.second, offset.frame, offset.subframe],
            fields
        );
    }
}

#[test]
fn frames_are_not_checked_against_the_rate() {
    // 24 frames does not exist at 24 fps, but only the rate bits are validated
    let offset = SmpteOffset::parse(&payload(0, [12, 30, 45, 24, 50])).unwrap();
    assert_eq!(offset.fps, SmpteFps::TwentyFour);
    assert_eq!(offset.frame, 24);
}

#[test]
fn rate_and_hour_share_a_byte() {
    let rates = [
        SmpteFps::TwentyFour,
        SmpteFps::TwentyFive,
        SmpteFps::TwentyNine,
        SmpteFps::Thirty,
    ];
    for (bits, fps) in rates.into_iter().enumerate() {
        for hour in 0..=23 {
            let offset = SmpteOffset::parse(&payload(bits as u8, [hour, 30, 45, 15, 50])).unwrap();
            assert_eq!(offset.fps, fps);
            assert_eq!(offset.hour, hour);
        }
    }
}

#[test]
fn midnight_is_zero() {
    let offset = SmpteOffset::parse(&payload(1, [0, 0, 0, 0, 0])).unwrap();
    assert_eq!(offset.as_micros(), 0.);
}

#[test]
fn drop_frame_duration() {
    let offset = SmpteOffset::parse(&payload(2, [0, 0, 0, 1, 0])).unwrap();
    // one frame lasts 1001/30000 seconds
    assert!((offset.as_micros() - 1_001_000. / 30.).abs() < 0.001);
}

#[test]
fn overriding_the_rate_only_moves_the_frames() {
    let offset = SmpteOffset::parse(&payload(0, [1, 0, 0, 12, 0])).unwrap();
    let hour = 3_600_000_000.;
    for (fps, rate) in [
        (SmpteFps::TwentyFour, 24.),
        (SmpteFps::TwentyFive, 25.),
        (SmpteFps::TwentyNine, 30_000. / 1001.),
        (SmpteFps::Thirty, 30.),
    ] {
        let micros = offset.as_micros_with_override(fps);
        assert!((micros - (hour + 12. / rate * 1_000_000.)).abs() < 1.);
    }
}
