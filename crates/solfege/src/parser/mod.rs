//! Winnow parsers for the engine's textual grammars.
//!
//! Strict parsers: unlike a notation file format, the inputs here are
//! single machine-checked tokens from forms, so any leftover text is an
//! error rather than something to recover from.

pub mod key;
pub mod note;
pub mod roman;

pub(crate) type PResult<T> = winnow::ModalResult<T>;
