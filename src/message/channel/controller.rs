use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::ChannelMode;
use crate::DataByte;

/// The named controllers below the channel mode range
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Controller {
    BankSelect = 0x00,
    ModulationWheel = 0x01,
    BreathControl = 0x02,
    FootControl = 0x04,
    PortamentoTime = 0x05,
    DataEntry = 0x06,
    ChannelVolume = 0x07,
    Balance = 0x08,
    Pan = 0x0A,
    Expression = 0x0B,
    EffectControl1 = 0x0C,
    EffectControl2 = 0x0D,
    GeneralPurpose1 = 0x10,
    GeneralPurpose2 = 0x11,
    GeneralPurpose3 = 0x12,
    GeneralPurpose4 = 0x13,
    BankSelectLsb = 0x20,
    ModulationWheelLsb = 0x21,
    BreathControlLsb = 0x22,
    FootControlLsb = 0x24,
    PortamentoTimeLsb = 0x25,
    DataEntryLsb = 0x26,
    ChannelVolumeLsb = 0x27,
    BalanceLsb = 0x28,
    PanLsb = 0x2A,
    ExpressionLsb = 0x2B,
    EffectControl1Lsb = 0x2C,
    EffectControl2Lsb = 0x2D,
    GeneralPurpose1Lsb = 0x30,
    GeneralPurpose2Lsb = 0x31,
    GeneralPurpose3Lsb = 0x32,
    GeneralPurpose4Lsb = 0x33,
    DamperPedal = 0x40,
    Portamento = 0x41,
    Sostenuto = 0x42,
    SoftPedal = 0x43,
    LegatoFootswitch = 0x44,
    Hold2 = 0x45,
    SoundController1 = 0x46,
    SoundController2 = 0x47,
    SoundController3 = 0x48,
    SoundController4 = 0x49,
    SoundController5 = 0x4A,
    SoundController6 = 0x4B,
    SoundController7 = 0x4C,
    SoundController8 = 0x4D,
    SoundController9 = 0x4E,
    SoundController10 = 0x4F,
    GeneralPurpose5 = 0x50,
    GeneralPurpose6 = 0x51,
    GeneralPurpose7 = 0x52,
    GeneralPurpose8 = 0x53,
    PortamentoControl = 0x54,
    Effects1Depth = 0x5B,
    Effects2Depth = 0x5C,
    Effects3Depth = 0x5D,
    Effects4Depth = 0x5E,
    Effects5Depth = 0x5F,
    DataIncrement = 0x60,
    DataDecrement = 0x61,
    NrpnLsb = 0x62,
    NrpnMsb = 0x63,
    RpnLsb = 0x64,
    RpnMsb = 0x65,
    AllSoundOff = 0x78,
    ResetAllControllers = 0x79,
}

impl Controller {
    /// The controller number
    pub fn number(&self) -> u8 {
        (*self).into()
    }

    /// True for the switch controllers 64 through 69, which treat values
    /// below 64 as off and the rest as on
    pub fn is_switch(&self) -> bool {
        (0x40..=0x45).contains(&self.number())
    }
}

#[doc = r#"
A decoded control change.

Controllers 122 and up are routed to [`ChannelMode`] first. Numbers with no
assigned meaning decode to [`ControlChange::Undefined`] rather than failing, so
the track keeps going.

# Example
```rust
# use smf_reader::prelude::*;
let byte = |b: u8| DataByte::new(b).unwrap();

let change = ControlChange::from_bytes(byte(7), byte(100));
assert_eq!(
    change,
    ControlChange::Controller { controller: Controller::ChannelVolume, value: byte(100) }
);

let change = ControlChange::from_bytes(byte(0x7C), byte(0));
assert_eq!(change, ControlChange::Mode(ChannelMode::OmniModeOff));

let change = ControlChange::from_bytes(byte(0x03), byte(1));
assert!(matches!(change, ControlChange::Undefined { .. }));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlChange {
    /// A channel mode message
    Mode(ChannelMode),
    /// A named controller
    Controller {
        /// which controller
        controller: Controller,
        /// its new value
        value: DataByte,
    },
    /// A controller number with no assigned meaning
    Undefined {
        /// the raw controller number
        number: DataByte,
        /// the raw value
        value: DataByte,
    },
}

impl ControlChange {
    /// Decodes a controller number and value
    pub fn from_bytes(number: DataByte, value: DataByte) -> Self {
        if let Some(mode) = ChannelMode::from_bytes(number.value(), value) {
            return Self::Mode(mode);
        }
        match Controller::try_from(number.value()) {
            Ok(controller) => Self::Controller { controller, value },
            Err(_) => Self::Undefined { number, value },
        }
    }

    /// The raw controller number
    pub fn number(&self) -> u8 {
        match self {
            Self::Mode(mode) => mode.controller(),
            Self::Controller { controller, .. } => controller.number(),
            Self::Undefined { number, .. } => number.value(),
        }
    }

    /// True if the change could not be mapped to a named controller or mode
    pub const fn is_undefined(&self) -> bool {
        matches!(
            self,
            Self::Undefined { .. } | Self::Mode(ChannelMode::Undefined { .. })
        )
    }
}
