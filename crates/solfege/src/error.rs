//! Error taxonomy for the engine.
//!
//! Only genuinely malformed input text produces an error. Theoretically
//! illegal-but-well-formed requests (an unspellable note, an unsupported
//! Roman numeral) are signalled by `Option::None` or `is_supported() == false`
//! so that callers can distinguish "bad text" from "bad theory".

use thiserror::Error;

use crate::interval::IntervalQuality;

/// Errors produced while parsing or validating notation text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note text does not match `[A-G](n|#|b|x|bb)[1-6]`.
    #[error("malformed note '{0}'")]
    MalformedNote(String),

    /// Comma-separated note list contains a malformed entry or stray text.
    #[error("malformed note list '{0}'")]
    MalformedNoteList(String),

    /// Key text does not match `letter(n|#|b)(M|m)`.
    #[error("malformed key '{0}'")]
    MalformedKey(String),

    /// Key-signature accidental list text is malformed (bad entry, mixed
    /// sharps and flats, or more than seven accidentals).
    #[error("malformed key signature '{0}'")]
    MalformedKeySignature(String),

    /// The (quality, size) pair does not name a real interval.
    #[error("illegal interval: {quality} {size}")]
    IllegalInterval { quality: IntervalQuality, size: u8 },

    /// Well-formed key text naming a tonic outside the canonical key set
    /// (e.g. `G#M`).
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    /// Roman-numeral symbol that does not tokenize against the supported
    /// vocabulary.
    #[error("unrecognized harmonic function symbol '{0}'")]
    UnrecognizedSymbol(String),
}
