use crate::DataByte;

#[doc = r#"
A channel mode message, carried by controllers 122 through 127.

Most of these only have a single legal value of zero. A control change on a
mode controller with any other value decodes to [`ChannelMode::Undefined`].
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMode {
    /// Controller 122 with a value of 0
    LocalControlOff,
    /// Controller 122 with any value other than 0
    LocalControlOn,
    /// Controller 123
    AllNotesOff,
    /// Controller 124
    OmniModeOff,
    /// Controller 125
    OmniModeOn,
    /// Controller 126. The value is the number of channels to respond on,
    /// zero meaning as many as there are voices.
    MonoModeOn {
        /// number of channels
        channels: DataByte,
    },
    /// Controller 127
    PolyModeOn,
    /// A mode controller carrying a value it does not accept
    Undefined {
        /// controller number, 122 through 127
        controller: u8,
        /// the rejected value
        value: DataByte,
    },
}

impl ChannelMode {
    /// The first controller number reserved for mode messages
    pub const FIRST_CONTROLLER: u8 = 0x7A;

    /// Decodes a control change on a mode controller.
    ///
    /// Returns `None` if `controller` is not a mode controller.
    pub const fn from_bytes(controller: u8, value: DataByte) -> Option<Self> {
        let zero = value.value() == 0;
        let mode = match controller {
            0x7A if zero => Self::LocalControlOff,
            0x7A => Self::LocalControlOn,
            0x7B if zero => Self::AllNotesOff,
            0x7C if zero => Self::OmniModeOff,
            0x7D if zero => Self::OmniModeOn,
            0x7E => Self::MonoModeOn { channels: value },
            0x7F if zero => Self::PolyModeOn,
            0x7B..=0x7F => Self::Undefined { controller, value },
            _ => return None,
        };
        Some(mode)
    }

    /// The controller number this message is sent on
    pub const fn controller(&self) -> u8 {
        match self {
            Self::LocalControlOff | Self::LocalControlOn => 0x7A,
            Self::AllNotesOff => 0x7B,
            Self::OmniModeOff => 0x7C,
            Self::OmniModeOn => 0x7D,
            Self::MonoModeOn { .. } => 0x7E,
            Self::PolyModeOn => 0x7F,
            Self::Undefined { controller, .. } => *controller,
        }
    }

    /// True for the controller numbers 122 through 127
    pub const fn is_mode_controller(controller: u8) -> bool {
        controller >= Self::FIRST_CONTROLLER && controller <= 0x7F
    }
}

#[test]
fn mode_values() {
    use pretty_assertions::assert_eq;
    let byte = |b: u8| DataByte::new(b).unwrap();

    assert_eq!(
        ChannelMode::from_bytes(0x7A, byte(0)),
        Some(ChannelMode::LocalControlOff)
    );
    assert_eq!(
        ChannelMode::from_bytes(0x7A, byte(0x7F)),
        Some(ChannelMode::LocalControlOn)
    );
    assert_eq!(
        ChannelMode::from_bytes(0x7B, byte(0)),
        Some(ChannelMode::AllNotesOff)
    );
    // only a zero value is an all notes off
    assert_eq!(
        ChannelMode::from_bytes(0x7B, byte(1)),
        Some(ChannelMode::Undefined {
            controller: 0x7B,
            value: byte(1)
        })
    );
    assert_eq!(
        ChannelMode::from_bytes(0x7F, byte(3)).map(|m| m.controller()),
        Some(0x7F)
    );
    // poly mode on takes no value either
    assert_eq!(
        ChannelMode::from_bytes(0x7F, byte(3)),
        Some(ChannelMode::Undefined {
            controller: 0x7F,
            value: byte(3)
        })
    );
    assert_eq!(ChannelMode::from_bytes(0x7F, byte(0)), Some(ChannelMode::PolyModeOn));
    assert_eq!(
        ChannelMode::from_bytes(0x7E, byte(4)),
        Some(ChannelMode::MonoModeOn { channels: byte(4) })
    );
    assert_eq!(ChannelMode::from_bytes(0x79, byte(0)), None);

    for controller in 0x7A..=0x7F {
        assert!(ChannelMode::is_mode_controller(controller));
    }
    assert_eq!(ChannelMode::OmniModeOn.controller(), 0x7D);
}
