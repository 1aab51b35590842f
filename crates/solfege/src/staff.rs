//! Displayable-range checks for notes on a staff.
//!
//! Validation only: a staff here is just its clef and the range of notes
//! the host can display (five lines plus three ledger lines either side).

use serde::{Deserialize, Serialize};

use crate::key::Clef;
use crate::pitch::{Note, PitchLetter};

/// A staff identified by its clef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub clef: Clef,
}

impl Staff {
    pub fn new(clef: Clef) -> Self {
        Staff { clef }
    }

    /// Lowest and highest displayable letter/register positions.
    fn bounds(&self) -> ((PitchLetter, i8), (PitchLetter, i8)) {
        match self.clef {
            Clef::Treble => ((PitchLetter::F, 3), (PitchLetter::E, 6)),
            Clef::Bass => ((PitchLetter::A, 1), (PitchLetter::G, 4)),
            Clef::Alto => ((PitchLetter::G, 2), (PitchLetter::F, 5)),
            Clef::Tenor => ((PitchLetter::E, 2), (PitchLetter::D, 5)),
        }
    }

    /// Whether the note's staff position (letter + register, accidental
    /// ignored) falls within the displayable range.
    pub fn contains(&self, note: &Note) -> bool {
        let position = 7 * note.register as i16 + note.letter.diatonic_index() as i16;
        let ((lo_letter, lo_reg), (hi_letter, hi_reg)) = self.bounds();
        let lo = 7 * lo_reg as i16 + lo_letter.diatonic_index() as i16;
        let hi = 7 * hi_reg as i16 + hi_letter.diatonic_index() as i16;
        (lo..=hi).contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        Note::from_symbol(s).unwrap()
    }

    #[test]
    fn test_treble_range() {
        let staff = Staff::new(Clef::Treble);
        assert!(staff.contains(&note("Cn4")));
        assert!(staff.contains(&note("Fn3")));
        assert!(!staff.contains(&note("En3")));
        assert!(staff.contains(&note("En6")));
        assert!(!staff.contains(&note("Fn6")));
        // Accidentals don't move the staff position
        assert!(staff.contains(&note("F#3")));
    }

    #[test]
    fn test_bass_range() {
        let staff = Staff::new(Clef::Bass);
        assert!(staff.contains(&note("Cn3")));
        assert!(staff.contains(&note("An1")));
        assert!(!staff.contains(&note("Gn1")));
        assert!(staff.contains(&note("Gn4")));
        assert!(!staff.contains(&note("An4")));
    }

    #[test]
    fn test_c_clefs() {
        assert!(Staff::new(Clef::Alto).contains(&note("Cn4")));
        assert!(!Staff::new(Clef::Alto).contains(&note("Gn5")));
        assert!(Staff::new(Clef::Tenor).contains(&note("Cn4")));
        assert!(!Staff::new(Clef::Tenor).contains(&note("En5")));
    }
}
