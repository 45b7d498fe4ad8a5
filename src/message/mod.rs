#![doc = r#"
Decoders for the message classes that can follow a delta time.

# Hierarchy
```text
                      |---------|
                      | Message |
                      |---------|
                 /         |          \
|-----------------|  |---------------|  |-----------------|
| Channel (80-EF) |  | Common (F0-F7)|  | Realtime (F8-FE)|
|-----------------|  |---------------|  |-----------------|
```
Meta events (`FF`) only exist in files and live in [`crate::file::meta`].
"#]

pub mod channel;
pub mod system;
