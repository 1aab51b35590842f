//! Pitch primitives: diatonic letters, accidentals, and notes.
//!
//! A [`Note`] is an immutable (letter, accidental, register) triple in
//! scientific pitch notation (middle C = register 4). Derived notes are
//! always new values; nothing here mutates in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::interval::{Direction, Interval, IntervalQuality};
use crate::parser;

/// The seven diatonic letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl PitchLetter {
    /// Semitone offset of the natural letter from C (0-11).
    pub fn natural_semitone(&self) -> i8 {
        match self {
            PitchLetter::C => 0,
            PitchLetter::D => 2,
            PitchLetter::E => 4,
            PitchLetter::F => 5,
            PitchLetter::G => 7,
            PitchLetter::A => 9,
            PitchLetter::B => 11,
        }
    }

    /// Position in the 7-letter cycle (C=0 .. B=6), used for size counting.
    pub fn diatonic_index(&self) -> i8 {
        match self {
            PitchLetter::C => 0,
            PitchLetter::D => 1,
            PitchLetter::E => 2,
            PitchLetter::F => 3,
            PitchLetter::G => 4,
            PitchLetter::A => 5,
            PitchLetter::B => 6,
        }
    }

    /// All letters in cycle order starting from C.
    pub fn all() -> [PitchLetter; 7] {
        [
            PitchLetter::C,
            PitchLetter::D,
            PitchLetter::E,
            PitchLetter::F,
            PitchLetter::G,
            PitchLetter::A,
            PitchLetter::B,
        ]
    }

    /// Letter at the given position in the 7-letter cycle.
    pub fn from_diatonic_index(index: i8) -> PitchLetter {
        Self::all()[index.rem_euclid(7) as usize]
    }

    /// Letter reached by moving `steps` positions through the cycle
    /// (negative steps move backwards).
    pub fn offset(&self, steps: i8) -> PitchLetter {
        Self::from_diatonic_index(self.diatonic_index() + steps)
    }

    /// Parse from a single letter (case-insensitive).
    pub fn parse(s: &str) -> Option<PitchLetter> {
        match s.to_uppercase().as_str() {
            "C" => Some(PitchLetter::C),
            "D" => Some(PitchLetter::D),
            "E" => Some(PitchLetter::E),
            "F" => Some(PitchLetter::F),
            "G" => Some(PitchLetter::G),
            "A" => Some(PitchLetter::A),
            "B" => Some(PitchLetter::B),
            _ => None,
        }
    }
}

impl fmt::Display for PitchLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PitchLetter::C => 'C',
            PitchLetter::D => 'D',
            PitchLetter::E => 'E',
            PitchLetter::F => 'F',
            PitchLetter::G => 'G',
            PitchLetter::A => 'A',
            PitchLetter::B => 'B',
        };
        write!(f, "{}", c)
    }
}

/// Accidentals from double-flat to double-sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone delta applied to the natural letter (-2..=2).
    pub fn semitone_delta(&self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for a semitone delta, None outside -2..=2.
    pub fn from_delta(delta: i8) -> Option<Accidental> {
        match delta {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Canonical notation symbol (`bb`, `b`, `n`, `#`, `x`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "n",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Display form: as `symbol()` but naturals render as nothing.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            other => other.symbol(),
        }
    }

    /// Parse a notation symbol.
    pub fn parse(s: &str) -> Option<Accidental> {
        match s {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "n" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "x" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// True for single sharps/flats and naturals (no double accidentals).
    pub fn is_simple(&self) -> bool {
        !matches!(self, Accidental::DoubleFlat | Accidental::DoubleSharp)
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A spelled pitch: letter + accidental + register.
///
/// Register follows scientific pitch notation (middle C = `C` register 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: PitchLetter,
    pub accidental: Accidental,
    pub register: i8,
}

impl Note {
    pub fn new(letter: PitchLetter, accidental: Accidental, register: i8) -> Self {
        Note {
            letter,
            accidental,
            register,
        }
    }

    /// Parse canonical note text: `[A-G](n|#|b|x|bb)[1-6]`.
    pub fn from_symbol(text: &str) -> Result<Note, TheoryError> {
        parser::note::parse_note_symbol(text)
    }

    /// Canonical notation, always rendering the accidental (`Cn4`, `F#5`).
    pub fn symbol(&self) -> String {
        format!("{}{}{}", self.letter, self.accidental, self.register)
    }

    /// Display variant that omits the natural sign (`C4`, `F#5`).
    pub fn display_symbol(&self) -> String {
        format!(
            "{}{}{}",
            self.letter,
            self.accidental.display_symbol(),
            self.register
        )
    }

    /// Absolute semitone pitch: `12*register + natural + accidental delta`.
    pub fn semitone_pitch(&self) -> i16 {
        12 * self.register as i16
            + self.letter.natural_semitone() as i16
            + self.accidental.semitone_delta() as i16
    }

    /// Absolute position in the 7-letter cycle across registers.
    fn diatonic_position(&self) -> i16 {
        7 * self.register as i16 + self.letter.diatonic_index() as i16
    }

    /// Distance to `other` counted in letter steps, ignoring accidentals.
    ///
    /// Adjacent letters are 1 apart, an octave is 7. Graders use this to cap
    /// voice leaps.
    pub fn diatonic_size_differential(&self, other: &Note) -> u32 {
        (self.diatonic_position() - other.diatonic_position()).unsigned_abs() as u32
    }

    /// Spelling-aware equality with optional register sensitivity.
    pub fn equals(&self, other: &Note, consider_register: bool) -> bool {
        self.letter == other.letter
            && self.accidental == other.accidental
            && (!consider_register || self.register == other.register)
    }

    /// Enharmonic (pitch) equality: same sounding pitch, any spelling.
    pub fn enharmonic(&self, other: &Note) -> bool {
        self.semitone_pitch() == other.semitone_pitch()
    }

    /// Apply a directed interval, producing the correctly spelled result.
    ///
    /// Returns None when the target would need an accidental beyond the
    /// double-flat..double-sharp range. That is a legality signal, not an
    /// error: callers reject the configuration rather than crash.
    pub fn note_from_interval(&self, interval: &Interval) -> Option<Note> {
        let letter_steps = (interval.size as i16 - 1)
            * match interval.direction {
                Direction::Above => 1,
                Direction::Below => -1,
            };

        let position = self.diatonic_position() + letter_steps;
        let letter = PitchLetter::from_diatonic_index(position.rem_euclid(7) as i8);
        let register = position.div_euclid(7) as i8;

        let span = interval.semitone_span()
            * match interval.direction {
                Direction::Above => 1,
                Direction::Below => -1,
            };
        let target_pitch = self.semitone_pitch() + span;
        let natural_pitch = 12 * register as i16 + letter.natural_semitone() as i16;

        let delta = target_pitch - natural_pitch;
        let accidental = Accidental::from_delta(i8::try_from(delta).ok()?)?;
        Some(Note::new(letter, accidental, register))
    }

    /// Enharmonic (pitch-class, keyboard register) pair for 88-key
    /// addressing: register 0 holds only pitch classes 9-11 (A0..B0) and
    /// register 8 only pitch class 0 (C8).
    pub fn pitch_class_keyboard_register(&self) -> (u8, i8) {
        let pitch = self.semitone_pitch();
        (pitch.rem_euclid(12) as u8, pitch.div_euclid(12) as i8)
    }

    /// Whether the sounding pitch lies on a standard 88-key keyboard.
    pub fn on_keyboard(&self) -> bool {
        let pitch = self.semitone_pitch();
        // A0 = 9, C8 = 96
        (9..=96).contains(&pitch)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// Parse a comma-separated note list (`Cn4,En4,G#4`; no whitespace).
pub fn parse_note_list(text: &str) -> Result<Vec<Note>, TheoryError> {
    parser::note::parse_note_list(text)
}

/// Render notes as a comma-separated canonical list.
pub fn render_note_list(notes: &[Note]) -> String {
    notes
        .iter()
        .map(Note::symbol)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        Note::from_symbol(s).unwrap()
    }

    #[test]
    fn test_semitone_pitch() {
        assert_eq!(note("Cn4").semitone_pitch(), 48);
        assert_eq!(note("C#4").semitone_pitch(), 49);
        assert_eq!(note("Cb4").semitone_pitch(), 47);
        assert_eq!(note("Bn3").semitone_pitch(), 47);
        assert_eq!(note("An4").semitone_pitch(), 57);
    }

    #[test]
    fn test_symbol_round_trip() {
        for letter in PitchLetter::all() {
            for accidental in [
                Accidental::DoubleFlat,
                Accidental::Flat,
                Accidental::Natural,
                Accidental::Sharp,
                Accidental::DoubleSharp,
            ] {
                for register in 1..=6 {
                    let n = Note::new(letter, accidental, register);
                    assert_eq!(Note::from_symbol(&n.symbol()).unwrap(), n);
                }
            }
        }
    }

    #[test]
    fn test_display_symbol_omits_natural() {
        assert_eq!(note("Cn4").display_symbol(), "C4");
        assert_eq!(note("F#5").display_symbol(), "F#5");
        assert_eq!(note("Ebb3").display_symbol(), "Ebb3");
    }

    #[test]
    fn test_diatonic_size_differential() {
        let c4 = note("Cn4");
        assert_eq!(c4.diatonic_size_differential(&note("Cn4")), 0);
        assert_eq!(c4.diatonic_size_differential(&note("Dn4")), 1);
        assert_eq!(c4.diatonic_size_differential(&note("Gn4")), 4);
        assert_eq!(c4.diatonic_size_differential(&note("Cn5")), 7);
        assert_eq!(c4.diatonic_size_differential(&note("Bn3")), 1);
        // Accidentals never change the size
        assert_eq!(c4.diatonic_size_differential(&note("Gx4")), 4);
    }

    #[test]
    fn test_enharmonic() {
        assert!(note("C#4").enharmonic(&note("Db4")));
        assert!(note("B#3").enharmonic(&note("Cn4")));
        assert!(!note("C#4").enharmonic(&note("Cn4")));
    }

    #[test]
    fn test_equals_register_flag() {
        assert!(note("C#4").equals(&note("C#5"), false));
        assert!(!note("C#4").equals(&note("C#5"), true));
        assert!(!note("C#4").equals(&note("Db4"), false));
    }

    #[test]
    fn test_keyboard_register_mapping() {
        // B#3 sounds as C4
        assert_eq!(note("B#3").pitch_class_keyboard_register(), (0, 4));
        // Cb4 sounds as B3
        assert_eq!(note("Cb4").pitch_class_keyboard_register(), (11, 3));
        assert_eq!(note("An4").pitch_class_keyboard_register(), (9, 4));
    }

    #[test]
    fn test_on_keyboard_bounds() {
        assert!(note("An1").on_keyboard());
        assert!(note("Cn6").on_keyboard());
        // Bb0 would be on the keyboard but registers below 1 don't parse;
        // construct directly.
        let a0 = Note::new(PitchLetter::A, Accidental::Natural, 0);
        assert!(a0.on_keyboard());
        let g0 = Note::new(PitchLetter::G, Accidental::Natural, 0);
        assert!(!g0.on_keyboard());
        let c8 = Note::new(PitchLetter::C, Accidental::Natural, 8);
        assert!(c8.on_keyboard());
        let d8 = Note::new(PitchLetter::D, Accidental::Natural, 8);
        assert!(!d8.on_keyboard());
    }

    #[test]
    fn test_malformed_notes() {
        for bad in ["H4", "C4x", "Cn", "Cn0", "Cn7", "c#4", "C##4", ""] {
            assert!(Note::from_symbol(bad).is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn test_note_list_round_trip() {
        let notes = parse_note_list("Cn4,En4,G#4").unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(render_note_list(&notes), "Cn4,En4,G#4");
    }

    #[test]
    fn test_note_from_interval_basics() {
        let c4 = note("Cn4");
        let m3 = Interval::new(Direction::Above, IntervalQuality::Major, 3).unwrap();
        assert_eq!(c4.note_from_interval(&m3), Some(note("En4")));

        let p5_below = Interval::new(Direction::Below, IntervalQuality::Perfect, 5).unwrap();
        assert_eq!(c4.note_from_interval(&p5_below), Some(note("Fn3")));

        let a5 = Interval::new(Direction::Above, IntervalQuality::Augmented, 5).unwrap();
        assert_eq!(c4.note_from_interval(&a5), Some(note("G#4")));
        assert_eq!(note("Bn3").note_from_interval(&a5), Some(note("Fx4")));
    }

    #[test]
    fn test_note_from_interval_unspellable() {
        // An augmented 5th above Bx would need a triple sharp.
        let bx = Note::new(PitchLetter::B, Accidental::DoubleSharp, 3);
        let a5 = Interval::new(Direction::Above, IntervalQuality::Augmented, 5).unwrap();
        assert_eq!(bx.note_from_interval(&a5), None);
    }

    #[test]
    fn test_note_from_interval_compound() {
        let c4 = note("Cn4");
        let m10 = Interval::new(Direction::Above, IntervalQuality::Major, 10).unwrap();
        assert_eq!(c4.note_from_interval(&m10), Some(note("En5")));

        let p12 = Interval::new(Direction::Above, IntervalQuality::Perfect, 12).unwrap();
        assert_eq!(c4.note_from_interval(&p12), Some(note("Gn5")));
    }
}
