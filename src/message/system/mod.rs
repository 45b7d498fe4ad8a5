#![doc = r#"
System messages, the `0xF0` through `0xFE` status range.

The low nibble selects the message. When bit `0x08` is set the message is
real-time and carries no data, otherwise it is a system common message, of
which system exclusive is one.
"#]

mod common;
pub use common::*;

mod realtime;
pub use realtime::*;

/// True for `0xF8..=0xFF`. `0xFF` itself never reaches the system decoders in
/// a file, since it introduces a meta event.
pub const fn is_realtime_status(status: u8) -> bool {
    status & 0xF8 == 0xF8
}

#[test]
fn realtime_status_range() {
    assert!((0xF8..=0xFE).all(is_realtime_status));
    assert!(!(0xF0..=0xF7).any(is_realtime_status));
    assert!(!(0x80..=0xEF).any(is_realtime_status));
}
