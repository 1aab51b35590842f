//! Music theory calculation engine.
//!
//! This crate models pitches, intervals, keys, scales, chords, and Roman-
//! numeral harmonic functions, and both generates canonical notation from
//! structured parameters and parses/validates notation supplied by a user.
//! It is the deterministic core a question-authoring and grading host
//! builds on: the host picks parameters and renders output; this crate
//! computes the right answers.
//!
//! All types are immutable values, every operation is a pure function, and
//! the static tables (interval legality, canonical keys, Roman-numeral
//! legality) are process-wide constants. Calls may run concurrently
//! without any synchronization.
//!
//! # Example
//!
//! ```
//! use solfege::{Direction, Interval, IntervalQuality, Note};
//!
//! let c4 = Note::from_symbol("Cn4")?;
//! let third = Interval::new(Direction::Above, IntervalQuality::Major, 3)?;
//! let e4 = c4.note_from_interval(&third).expect("spellable");
//! assert_eq!(e4.symbol(), "En4");
//! # Ok::<(), solfege::TheoryError>(())
//! ```

pub mod chord;
pub mod error;
pub mod grading;
pub mod harmonic;
pub mod interval;
pub mod key;
pub mod parser;
pub mod pitch;
pub mod scale;
pub mod staff;

pub use chord::{Chord, ChordQuality, SeventhQuality};
pub use error::TheoryError;
pub use grading::{Grade, GradeState, GradingStrategy, Strategy};
pub use harmonic::{FunctionType, HarmonicFunction, InvExt, Primary, SecondaryTonic};
pub use interval::{Direction, Interval, IntervalQuality};
pub use key::{Clef, KeySignature, Mode, Tonality};
pub use pitch::{parse_note_list, render_note_list, Accidental, Note, PitchLetter};
pub use scale::{Scale, ScaleType};
pub use staff::Staff;

/// Parse canonical note text (`[A-G](n|#|b|x|bb)[1-6]`).
pub fn parse_note(text: &str) -> Result<Note, TheoryError> {
    Note::from_symbol(text)
}

/// Parse key text (`letter(n|#|b)(M|m)`, e.g. `F#M`, `Ebm`).
pub fn parse_key(text: &str) -> Result<Tonality, TheoryError> {
    Tonality::from_symbol(text)
}
