use std::fmt;
use thiserror::Error;

/// Errors returned when decoding a UUID from an external representation.
///
/// Encoding never fails: every 16-byte value, including [`Uuid::NIL`](crate::Uuid::NIL), has a
/// valid canonical, compact, and binary form.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The text does not match the expected shape of the textual form.
    #[error("invalid {0} string representation")]
    Format(TextForm),

    /// The binary input is not exactly 16 bytes long.
    #[error("invalid byte length: expected 16, got {0}")]
    Length(usize),

    /// An adapter received a value of a kind it cannot interpret as a UUID.
    #[error("unsupported source value: {0}")]
    UnsupportedSource(&'static str),
}

/// Textual representations a UUID can be parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TextForm {
    /// The 8-4-4-4-12 hexadecimal form.
    Canonical,

    /// The 22-character order-preserving base64 form.
    Compact,
}

impl fmt::Display for TextForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Canonical => "canonical",
            Self::Compact => "compact",
        })
    }
}
