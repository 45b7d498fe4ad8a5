use crate::{SmpteError, file::SmpteFps};

#[doc = r#"
A `FF 54 05` SMPTE offset: the time code at which a track is meant to start.

The first payload byte packs the frame rate into bits 5 and 6 and the hour
into the low five bits, `0rrhhhhh`. The rest are minute, second, frame and
hundredths of a frame.
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// Frame rate of the time code. For a file with SMPTE timing this should
    /// agree with the header.
    pub fps: SmpteFps,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Frame within the second. Not range checked, since the limit depends
    /// on the rate.
    pub frame: u8,
    /// Hundredths of a frame, 0-99
    pub subframe: u8,
}

impl SmpteOffset {
    /// Validates the five payload bytes.
    ///
    /// # Errors
    /// - [`SmpteError::Length`] unless there are exactly five bytes
    /// - [`SmpteError::TrackFrame`] for rate bits beyond `11`
    /// - [`SmpteError::HourOffset`], [`SmpteError::MinuteOffset`],
    ///   [`SmpteError::SecondOffset`] or [`SmpteError::Subframe`] for a field
    ///   out of its range
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        let [packed, minute, second, frame, subframe] = match data {
            [a, b, c, d, e] => [*a, *b, *c, *d, *e],
            _ => return Err(SmpteError::Length(data.len())),
        };

        let fps = match packed >> 5 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            3 => SmpteFps::Thirty,
            bits => return Err(SmpteError::TrackFrame(bits)),
        };
        let hour = packed & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    /// The offset in microseconds, counting frames at `fps` instead of the
    /// offset's own rate
    pub const fn as_micros_with_override(&self, fps: SmpteFps) -> f64 {
        let whole_seconds =
            self.hour as u64 * 3600 + self.minute as u64 * 60 + self.second as u64;
        let frames = self.frame as f64 + self.subframe as f64 / 100.;
        (whole_seconds * 1_000_000) as f64 + frames * 1_000_000. / fps.as_f64()
    }

    /// The offset in microseconds
    pub const fn as_micros(&self) -> f64 {
        self.as_micros_with_override(self.fps)
    }
}
