#![doc = r#"
Static lookup tables for General MIDI and key signatures.

These map decoded numbers to names. None of them take part in decoding: an
unmapped value is never an error here, the lookups simply return `None`.
"#]

mod instrument;
pub use instrument::*;

mod percussion;
pub use percussion::*;

mod musical_key;
pub use musical_key::*;
