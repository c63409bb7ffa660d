// Shared error type for the cipher transforms and the validation gate.
//
// The transforms fail fast on input that was not routed through the
// normalizer/validator; the Caesar shift policy (`ShiftOutOfRange`) is
// only ever produced by `caesar::check_key`, never by the transform.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A character of the message or key is not a member of the alphabet.
    #[error("character '{ch}' is not part of the {alphabet} alphabet")]
    ForeignChar { ch: char, alphabet: &'static str },

    /// Empty message or empty Vigenère key.
    #[error("text must not be empty")]
    EmptyText,

    /// Caesar key rejected by policy: zero, or magnitude >= alphabet length.
    #[error("shift key {key} out of range (must be nonzero with magnitude below {len})")]
    ShiftOutOfRange { key: i32, len: usize },
}
