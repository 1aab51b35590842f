//! Harmonic (Roman-numeral) functions: grammar, legality, classification,
//! and expansion to concrete voiced notes.
//!
//! A symbol decomposes as `primary[invext][/secondary]`. Tokenizing is the
//! easy part; the value of this module is the legality predicate
//! ([`HarmonicFunction::is_supported`]) and the expander
//! ([`HarmonicFunction::notes`]), which together encode which combinations
//! are real theory and what they sound as.

pub mod symbol;
mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chord::{lift_above, ChordQuality};
use crate::error::TheoryError;
use crate::interval::{Direction, Interval, IntervalQuality};
use crate::key::{Mode, Tonality};
use crate::parser;
use crate::pitch::Note;

pub use symbol::{InvExt, Primary, SecondaryTonic};

/// Classification of a supported harmonic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    DiatonicTriad,
    Dom7th,
    NonDom7th,
    LeadingTone7thHalfDim,
    LeadingTone7thFullyDim,
    SecDomTriad,
    SecDom7th,
    SecNonDomTriad,
    SecNonDom7th,
    SecLtTriad,
    SecLtHalfDim,
    SecLtFullyDim,
    Neapolitan,
    Aug6th,
    ExtendedDom,
}

/// A Roman-numeral function in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonicFunction {
    tonality: Tonality,
    primary: Primary,
    invext: InvExt,
    secondary: Option<SecondaryTonic>,
}

impl HarmonicFunction {
    /// Parse a symbol against a key. Fails only on unrecognizable text;
    /// theoretically invalid combinations parse but report
    /// `is_supported() == false`.
    pub fn new(tonality: Tonality, symbol: &str) -> Result<HarmonicFunction, TheoryError> {
        let (primary, invext, secondary) = parser::roman::parse_roman_symbol(symbol)?;
        Ok(HarmonicFunction {
            tonality,
            primary,
            invext,
            secondary,
        })
    }

    pub fn tonality(&self) -> Tonality {
        self.tonality
    }

    pub fn primary(&self) -> Primary {
        self.primary
    }

    pub fn invext(&self) -> InvExt {
        self.invext
    }

    pub fn secondary(&self) -> Option<SecondaryTonic> {
        self.secondary
    }

    /// Canonical symbol text.
    pub fn symbol(&self) -> String {
        let mut s = String::new();
        s.push_str(self.primary.token());
        s.push_str(self.invext.token());
        if let Some(secondary) = self.secondary {
            s.push('/');
            s.push_str(secondary.token());
        }
        s
    }

    /// The mode the primary is resolved in: the key's own mode, or the
    /// local mode implied by the secondary tonic's case.
    fn local_mode(&self) -> Mode {
        self.secondary
            .map(|s| s.local_mode())
            .unwrap_or_else(|| self.tonality.mode())
    }

    /// Whether the (primary, invext, secondary, mode) combination is
    /// theoretically legal and supported.
    ///
    /// False is a designed negative signal, not an error: edit-time
    /// validators reject the configuration and graders score it wrong.
    pub fn is_supported(&self) -> bool {
        // Augmented sixths: fixed form, no figure, no secondary.
        if self.primary.is_augmented_sixth() {
            return self.invext == InvExt::Root && self.secondary.is_none();
        }

        // Neapolitan: triad figures only, no secondary.
        if self.primary == Primary::Neapolitan {
            return self.invext.is_triad() && self.secondary.is_none();
        }

        // Extended dominants: V only, root position, no secondary.
        if self.invext.is_extension() {
            return self.primary == Primary::MajV && self.secondary.is_none();
        }

        if let Some(secondary) = self.secondary {
            if !tables::secondary_targets(self.tonality.mode()).contains(&secondary) {
                return false;
            }
        }

        let local_mode = self.local_mode();
        if self.invext.is_triad() {
            tables::triad_capable(local_mode).contains(&self.primary)
        } else {
            tables::seventh_quality(self.primary, local_mode).is_some()
        }
    }

    /// Classify a supported combination; None when unsupported.
    pub fn function_type(&self) -> Option<FunctionType> {
        if !self.is_supported() {
            return None;
        }

        if self.primary.is_augmented_sixth() {
            return Some(FunctionType::Aug6th);
        }
        if self.primary == Primary::Neapolitan {
            return Some(FunctionType::Neapolitan);
        }
        if self.invext.is_extension() {
            return Some(FunctionType::ExtendedDom);
        }

        let seventh = self.invext.is_seventh();
        let classified = if self.secondary.is_some() {
            match (self.primary, seventh) {
                (Primary::MajV, false) => FunctionType::SecDomTriad,
                (Primary::MajV, true) => FunctionType::SecDom7th,
                (Primary::DimVII, false) => FunctionType::SecLtTriad,
                (Primary::DimVII, true) => FunctionType::SecLtFullyDim,
                (Primary::HalfDimVII, true) => FunctionType::SecLtHalfDim,
                (_, false) => FunctionType::SecNonDomTriad,
                (_, true) => FunctionType::SecNonDom7th,
            }
        } else {
            match (self.primary, seventh) {
                (_, false) => FunctionType::DiatonicTriad,
                (Primary::MajV, true) => FunctionType::Dom7th,
                (Primary::DimVII, true) => FunctionType::LeadingTone7thFullyDim,
                (Primary::HalfDimVII, true) => FunctionType::LeadingTone7thHalfDim,
                (_, true) => FunctionType::NonDom7th,
            }
        };
        Some(classified)
    }

    /// The chord root resolved against the (possibly secondary-transposed)
    /// local key, at canonical register.
    fn root(&self) -> Option<Note> {
        let local_tonic = match self.secondary {
            None => self.tonality.tonic(),
            Some(secondary) => {
                let (quality, size) = secondary.target_interval();
                let interval = Interval::new(Direction::Above, quality, size).ok()?;
                self.tonality.tonic().note_from_interval(&interval)?
            }
        };
        let (quality, size) = self.primary.root_interval(self.local_mode());
        let interval = Interval::new(Direction::Above, quality, size).ok()?;
        local_tonic.note_from_interval(&interval)
    }

    /// Factor intervals above the root, lowest factor first.
    fn factor_intervals(&self) -> Option<Vec<(IntervalQuality, u8)>> {
        use IntervalQuality::*;

        if self.primary.is_augmented_sixth() {
            return Some(match self.primary {
                Primary::Italian => vec![(Perfect, 1), (Major, 3), (Augmented, 6)],
                Primary::French => vec![(Perfect, 1), (Major, 3), (Augmented, 4), (Augmented, 6)],
                Primary::German => vec![(Perfect, 1), (Major, 3), (Perfect, 5), (Augmented, 6)],
                _ => unreachable!(),
            });
        }

        if self.invext.is_extension() {
            let (ninth, thirteenth) = match self.tonality.mode() {
                Mode::Major => ((Major, 9), (Major, 13)),
                Mode::Minor => ((Minor, 9), (Minor, 13)),
            };
            let mut intervals = vec![(Perfect, 1), (Major, 3), (Perfect, 5), (Minor, 7), ninth];
            if matches!(self.invext, InvExt::Eleven | InvExt::Thirteen) {
                intervals.push((Perfect, 11));
            }
            if self.invext == InvExt::Thirteen {
                intervals.push(thirteenth);
            }
            return Some(intervals);
        }

        let triad = self
            .primary
            .triad_quality()
            .unwrap_or(ChordQuality::Major);
        let (third, fifth) = match triad {
            ChordQuality::Major => ((Major, 3), (Perfect, 5)),
            ChordQuality::Minor => ((Minor, 3), (Perfect, 5)),
            ChordQuality::Diminished => ((Minor, 3), (Diminished, 5)),
            ChordQuality::Augmented => ((Major, 3), (Augmented, 5)),
        };
        let mut intervals = vec![(Perfect, 1), third, fifth];

        if self.invext.is_seventh() {
            let seventh = tables::seventh_quality(self.primary, self.local_mode())?;
            intervals.push(seventh.seventh_interval());
        }

        Some(intervals)
    }

    /// Expand to concrete notes, bass to soprano, close position, with the
    /// bass anchored at the given register.
    ///
    /// None when the combination is unsupported or a factor cannot be
    /// spelled within the accidental range.
    pub fn notes(&self, register: i8) -> Option<Vec<Note>> {
        if !self.is_supported() {
            return None;
        }

        let root = self.root()?;
        let intervals = self.factor_intervals()?;

        let factors: Vec<Note> = intervals
            .iter()
            .map(|&(quality, size)| {
                let interval = Interval::new(Direction::Above, quality, size).ok()?;
                root.note_from_interval(&interval)
            })
            .collect::<Option<_>>()?;

        // Augmented sixths have a fixed bass; everything else rotates so
        // the invext's factor lands in the bass.
        let bass_index = if self.primary.is_augmented_sixth() {
            0
        } else {
            self.invext.bass_factor()
        };

        let mut notes: Vec<Note> = Vec::with_capacity(factors.len());
        for i in 0..factors.len() {
            let factor = factors[(bass_index + i) % factors.len()];
            let voiced = if let Some(prev) = notes.last() {
                lift_above(
                    Note::new(factor.letter, factor.accidental, prev.register - 2),
                    prev,
                )
            } else {
                Note::new(factor.letter, factor.accidental, register)
            };
            notes.push(voiced);
        }
        Some(notes)
    }

    /// Comma-separated canonical note list at the given register.
    pub fn notation(&self, register: i8) -> Option<String> {
        self.notes(register).map(|n| crate::pitch::render_note_list(&n))
    }

    /// Enharmonic-aware equality: expanded notes match pitch for pitch.
    pub fn equals(&self, other: &HarmonicFunction) -> bool {
        match (self.notes(4), other.notes(4)) {
            (Some(a), Some(b)) => {
                a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x.enharmonic(y))
            }
            _ => false,
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.symbol(), self.tonality)
    }
}
