use crate::message::system::SysexFraming;

/// What to do when a track chunk fails to decode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackRecovery {
    /// Stop and return the error
    #[default]
    Abort,
    /// Record the failure, then scan forward for the next `MTrk` tag and
    /// keep decoding from there
    Resync,
}

#[doc = r#"
Knobs for a [`Decoder`](super::Decoder).

The defaults decode a well formed file exactly and reject anything else.

# Example
```rust
# use smf_reader::prelude::*;
let options = DecodeOptions::new()
    .with_sysex_framing(SysexFraming::LengthPrefixed)
    .with_track_recovery(TrackRecovery::Resync);

assert!(options.running_status());
assert_eq!(options.track_recovery(), TrackRecovery::Resync);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    sysex_framing: SysexFraming,
    running_status: bool,
    on_corrupt_track: TrackRecovery,
    strict_track_count: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeOptions {
    /// The default options
    pub const fn new() -> Self {
        Self {
            sysex_framing: SysexFraming::Terminated,
            running_status: true,
            on_corrupt_track: TrackRecovery::Abort,
            strict_track_count: false,
        }
    }

    /// How system exclusive payloads are delimited
    pub const fn with_sysex_framing(mut self, framing: SysexFraming) -> Self {
        self.sysex_framing = framing;
        self
    }

    /// Whether a data byte in status position may reuse the previous channel
    /// status
    pub const fn with_running_status(mut self, enabled: bool) -> Self {
        self.running_status = enabled;
        self
    }

    /// The policy for a track chunk that fails to decode
    pub const fn with_track_recovery(mut self, recovery: TrackRecovery) -> Self {
        self.on_corrupt_track = recovery;
        self
    }

    /// Make a track count that differs from the header an error instead of a
    /// warning. Bytes left after the last declared track become an error too.
    pub const fn with_strict_track_count(mut self, strict: bool) -> Self {
        self.strict_track_count = strict;
        self
    }

    /// See [`Self::with_sysex_framing`]
    pub const fn sysex_framing(&self) -> SysexFraming {
        self.sysex_framing
    }

    /// See [`Self::with_running_status`]
    pub const fn running_status(&self) -> bool {
        self.running_status
    }

    /// See [`Self::with_track_recovery`]
    pub const fn track_recovery(&self) -> TrackRecovery {
        self.on_corrupt_track
    }

    /// See [`Self::with_strict_track_count`]
    pub const fn strict_track_count(&self) -> bool {
        self.strict_track_count
    }
}
