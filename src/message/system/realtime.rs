/// A single byte real-time message.
///
/// These may legally appear anywhere, so decoding one leaves running status
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemRealtime {
    /// `F8`, 24 per quarter note
    TimingClock,
    /// `FA`
    Start,
    /// `FB`
    Continue,
    /// `FC`
    Stop,
    /// `FE`
    ActiveSensing,
    /// `FF` on the wire. Inside a file this byte is always a meta event.
    Reset,
    /// `F9` or `FD`
    Undefined(u8),
}

impl SystemRealtime {
    /// Interprets the low three bits of a real-time status byte
    pub const fn from_status(status: u8) -> Self {
        match status & 0x07 {
            0 => Self::TimingClock,
            2 => Self::Start,
            3 => Self::Continue,
            4 => Self::Stop,
            6 => Self::ActiveSensing,
            7 => Self::Reset,
            _ => Self::Undefined(status),
        }
    }

    /// The status byte of the message
    pub const fn status(&self) -> u8 {
        match self {
            Self::TimingClock => 0xF8,
            Self::Start => 0xFA,
            Self::Continue => 0xFB,
            Self::Stop => 0xFC,
            Self::ActiveSensing => 0xFE,
            Self::Reset => 0xFF,
            Self::Undefined(status) => *status,
        }
    }
}

#[test]
fn realtime_status_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(SystemRealtime::from_status(0xF8), SystemRealtime::TimingClock);
    assert_eq!(SystemRealtime::from_status(0xFC), SystemRealtime::Stop);
    assert_eq!(SystemRealtime::from_status(0xF9), SystemRealtime::Undefined(0xF9));
    assert_eq!(SystemRealtime::from_status(0xFD), SystemRealtime::Undefined(0xFD));
    for status in 0xF8..=0xFE {
        assert_eq!(SystemRealtime::from_status(status).status(), status);
    }
}
