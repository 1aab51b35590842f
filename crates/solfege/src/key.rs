//! Keys, the canonical key table, and key signatures.
//!
//! The set of valid keys is authoritative domain data, not computed from
//! first principles: standard notation admits exactly the keys with up to
//! seven sharps or flats, with fixed enharmonic spellings (F# major and
//! Cb major exist; G# major does not).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::parser;
use crate::pitch::{Accidental, Note, PitchLetter};

/// Major or minor. Modal keys are out of scope for this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn other(&self) -> Mode {
        match self {
            Mode::Major => Mode::Minor,
            Mode::Minor => Mode::Major,
        }
    }

    /// Mode suffix in key text (`M`/`m`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Mode::Major => "M",
            Mode::Minor => "m",
        }
    }
}

/// Canonical key table entry: tonic spelling and signed circle-of-fifths
/// position (positive = sharps, negative = flats).
type KeyEntry = (PitchLetter, Accidental, i8);

/// The fifteen major keys, circle order from C outward.
const MAJOR_KEYS: [KeyEntry; 15] = [
    (PitchLetter::C, Accidental::Natural, 0),
    (PitchLetter::G, Accidental::Natural, 1),
    (PitchLetter::D, Accidental::Natural, 2),
    (PitchLetter::A, Accidental::Natural, 3),
    (PitchLetter::E, Accidental::Natural, 4),
    (PitchLetter::B, Accidental::Natural, 5),
    (PitchLetter::F, Accidental::Sharp, 6),
    (PitchLetter::C, Accidental::Sharp, 7),
    (PitchLetter::F, Accidental::Natural, -1),
    (PitchLetter::B, Accidental::Flat, -2),
    (PitchLetter::E, Accidental::Flat, -3),
    (PitchLetter::A, Accidental::Flat, -4),
    (PitchLetter::D, Accidental::Flat, -5),
    (PitchLetter::G, Accidental::Flat, -6),
    (PitchLetter::C, Accidental::Flat, -7),
];

/// The fifteen minor keys, circle order from A outward.
const MINOR_KEYS: [KeyEntry; 15] = [
    (PitchLetter::A, Accidental::Natural, 0),
    (PitchLetter::E, Accidental::Natural, 1),
    (PitchLetter::B, Accidental::Natural, 2),
    (PitchLetter::F, Accidental::Sharp, 3),
    (PitchLetter::C, Accidental::Sharp, 4),
    (PitchLetter::G, Accidental::Sharp, 5),
    (PitchLetter::D, Accidental::Sharp, 6),
    (PitchLetter::A, Accidental::Sharp, 7),
    (PitchLetter::D, Accidental::Natural, -1),
    (PitchLetter::G, Accidental::Natural, -2),
    (PitchLetter::C, Accidental::Natural, -3),
    (PitchLetter::F, Accidental::Natural, -4),
    (PitchLetter::B, Accidental::Flat, -5),
    (PitchLetter::E, Accidental::Flat, -6),
    (PitchLetter::A, Accidental::Flat, -7),
];

/// A key: canonical tonic (register 4) plus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tonality {
    tonic: Note,
    mode: Mode,
}

impl Tonality {
    /// Build a key, rejecting tonic spellings outside the canonical table.
    pub fn new(
        letter: PitchLetter,
        accidental: Accidental,
        mode: Mode,
    ) -> Result<Tonality, TheoryError> {
        let table = Self::table(mode);
        if table
            .iter()
            .any(|&(l, a, _)| l == letter && a == accidental)
        {
            Ok(Tonality {
                tonic: Note::new(letter, accidental, 4),
                mode,
            })
        } else {
            Err(TheoryError::UnknownKey(format!(
                "{}{}{}",
                letter,
                accidental,
                mode.symbol()
            )))
        }
    }

    fn table(mode: Mode) -> &'static [KeyEntry; 15] {
        match mode {
            Mode::Major => &MAJOR_KEYS,
            Mode::Minor => &MINOR_KEYS,
        }
    }

    /// All valid keys for a mode, circle-of-fifths order from the natural key.
    pub fn valid_keys(mode: Mode) -> Vec<Tonality> {
        Self::table(mode)
            .iter()
            .map(|&(letter, accidental, _)| Tonality {
                tonic: Note::new(letter, accidental, 4),
                mode,
            })
            .collect()
    }

    /// Parse key text: `letter(n|#|b)(M|m)`, e.g. `F#M`, `Ebm`.
    pub fn from_symbol(text: &str) -> Result<Tonality, TheoryError> {
        parser::key::parse_key_symbol(text)
    }

    /// Canonical key text (`CnM`, `F#M`, `Ebm`).
    pub fn symbol(&self) -> String {
        format!(
            "{}{}{}",
            self.tonic.letter,
            self.tonic.accidental,
            self.mode.symbol()
        )
    }

    /// Tonic at canonical register 4.
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_major(&self) -> bool {
        self.mode == Mode::Major
    }

    /// Signed circle-of-fifths position: +n = n sharps, -n = n flats.
    pub fn circle_position(&self) -> i8 {
        Self::table(self.mode)
            .iter()
            .find(|&&(l, a, _)| l == self.tonic.letter && a == self.tonic.accidental)
            .map(|&(_, _, pos)| pos)
            .unwrap_or(0)
    }

    /// Number of accidentals in the key signature (0..=7).
    pub fn accidental_count(&self) -> u8 {
        self.circle_position().unsigned_abs()
    }

    /// The relative key: same signature, other mode.
    pub fn relative(&self) -> Tonality {
        let position = self.circle_position();
        let other = self.mode.other();
        let (letter, accidental, _) = *Self::table(other)
            .iter()
            .find(|&&(_, _, pos)| pos == position)
            .expect("both tables cover -7..=7");
        Tonality {
            tonic: Note::new(letter, accidental, 4),
            mode: other,
        }
    }

    /// The parallel key: same tonic, other mode. None when that spelling
    /// falls outside the canonical table (e.g. Gb major has no Gb minor).
    pub fn parallel(&self) -> Option<Tonality> {
        Tonality::new(self.tonic.letter, self.tonic.accidental, self.mode.other()).ok()
    }
}

impl fmt::Display for Tonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// The four clefs key signatures are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Clef {
    #[default]
    Treble,
    Bass,
    Alto,
    Tenor,
}

/// Sharp order F,C,G,D,A,E,B with per-clef registers.
const SHARP_ORDER: [PitchLetter; 7] = [
    PitchLetter::F,
    PitchLetter::C,
    PitchLetter::G,
    PitchLetter::D,
    PitchLetter::A,
    PitchLetter::E,
    PitchLetter::B,
];

/// Flat order B,E,A,D,G,C,F with per-clef registers.
const FLAT_ORDER: [PitchLetter; 7] = [
    PitchLetter::B,
    PitchLetter::E,
    PitchLetter::A,
    PitchLetter::D,
    PitchLetter::G,
    PitchLetter::C,
    PitchLetter::F,
];

fn sharp_registers(clef: Clef) -> [i8; 7] {
    match clef {
        Clef::Treble => [5, 5, 5, 5, 4, 5, 4],
        Clef::Bass => [3, 3, 3, 3, 2, 3, 2],
        Clef::Alto => [4, 4, 4, 4, 3, 4, 3],
        Clef::Tenor => [3, 4, 3, 4, 3, 4, 3],
    }
}

fn flat_registers(clef: Clef) -> [i8; 7] {
    match clef {
        Clef::Treble => [4, 5, 4, 5, 4, 5, 4],
        Clef::Bass => [2, 3, 2, 3, 2, 3, 2],
        Clef::Alto => [3, 4, 3, 4, 3, 4, 3],
        Clef::Tenor => [3, 4, 3, 4, 3, 4, 3],
    }
}

/// A derived key signature: ordered, staff-positioned accidentals.
///
/// Empty for C major / A minor; otherwise a prefix of the fixed sharp or
/// flat order, never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    entries: Vec<Note>,
}

impl KeySignature {
    /// Derive the signature for a key on a clef.
    pub fn for_key(tonality: &Tonality, clef: Clef) -> KeySignature {
        let position = tonality.circle_position();
        let count = position.unsigned_abs() as usize;

        let (order, registers, accidental) = if position >= 0 {
            (&SHARP_ORDER, sharp_registers(clef), Accidental::Sharp)
        } else {
            (&FLAT_ORDER, flat_registers(clef), Accidental::Flat)
        };

        let entries = order
            .iter()
            .zip(registers)
            .take(count)
            .map(|(&letter, register)| Note::new(letter, accidental, register))
            .collect();

        KeySignature { entries }
    }

    /// Parse signature text: comma-separated `letter(#|b)register` entries,
    /// at most seven, all sharps or all flats.
    pub fn from_symbol(text: &str) -> Result<KeySignature, TheoryError> {
        let entries = parser::key::parse_signature_symbol(text)?;
        Ok(KeySignature { entries })
    }

    /// The staff-positioned accidentals in canonical order.
    pub fn entries(&self) -> &[Note] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-separated text form (`F#5,C#5,G#5`), empty string for no
    /// accidentals.
    pub fn symbol(&self) -> String {
        self.entries
            .iter()
            .map(|n| n.display_symbol())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}
