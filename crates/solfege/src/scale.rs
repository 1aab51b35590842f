//! Scale generation with correct diatonic spelling.
//!
//! Each step advances to the next letter in the 7-letter cycle and picks
//! the accidental that lands on the required semitone offset. This is the
//! standard notational rule and guarantees no letter repeats.

use serde::{Deserialize, Serialize};

use crate::pitch::{Accidental, Note};

/// Supported scale types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl ScaleType {
    /// Ascending step pattern in semitones (7 steps, tonic to tonic).
    fn ascending_steps(&self) -> [i16; 7] {
        match self {
            ScaleType::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleType::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            ScaleType::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
            // Raised 6th and 7th on the way up only
            ScaleType::MelodicMinor => [2, 1, 2, 2, 2, 2, 1],
        }
    }
}

/// A generated scale: an ordered, diatonically spelled note sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub tonic: Note,
    pub scale_type: ScaleType,
    notes: Vec<Note>,
}

impl Scale {
    /// Generate the scale on a tonic.
    ///
    /// Produces 8 ascending notes, or 15 for melodic minor (ascending then
    /// descending in the natural form, apex tonic not repeated). Returns
    /// None if any step cannot be spelled within bb..x; that cannot happen
    /// for the supported types on canonical tonics but is checked rather
    /// than assumed.
    pub fn generate(tonic: Note, scale_type: ScaleType) -> Option<Scale> {
        let mut notes = ascend(tonic, &scale_type.ascending_steps())?;

        if scale_type == ScaleType::MelodicMinor {
            let descending = ascend(tonic, &ScaleType::NaturalMinor.ascending_steps())?;
            // Walk back down the natural form, skipping the apex tonic.
            notes.extend(descending.iter().rev().skip(1));
        }

        Some(Scale {
            tonic,
            scale_type,
            notes,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Comma-separated canonical note list.
    pub fn symbol(&self) -> String {
        crate::pitch::render_note_list(&self.notes)
    }
}

/// Walk up from the tonic through the step pattern, spelling each degree on
/// the next letter of the cycle.
fn ascend(tonic: Note, steps: &[i16; 7]) -> Option<Vec<Note>> {
    let mut notes = Vec::with_capacity(8);
    notes.push(tonic);

    let mut current = tonic;
    for &step in steps {
        let letter = current.letter.offset(1);
        let register = if letter.diatonic_index() <= current.letter.diatonic_index() {
            current.register + 1
        } else {
            current.register
        };

        let natural_pitch = 12 * register as i16 + letter.natural_semitone() as i16;
        let delta = current.semitone_pitch() + step - natural_pitch;
        let accidental = Accidental::from_delta(i8::try_from(delta).ok()?)?;

        current = Note::new(letter, accidental, register);
        notes.push(current);
    }

    Some(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchLetter;

    fn note(s: &str) -> Note {
        Note::from_symbol(s).unwrap()
    }

    #[test]
    fn test_major_scale() {
        let scale = Scale::generate(note("Dn4"), ScaleType::Major).unwrap();
        assert_eq!(scale.symbol(), "Dn4,En4,F#4,Gn4,An4,Bn4,C#5,Dn5");
    }

    #[test]
    fn test_flat_major_scale() {
        let scale = Scale::generate(note("Eb4"), ScaleType::Major).unwrap();
        assert_eq!(scale.symbol(), "Eb4,Fn4,Gn4,Ab4,Bb4,Cn5,Dn5,Eb5");
    }

    #[test]
    fn test_natural_minor_scale() {
        let scale = Scale::generate(note("An3"), ScaleType::NaturalMinor).unwrap();
        assert_eq!(scale.symbol(), "An3,Bn3,Cn4,Dn4,En4,Fn4,Gn4,An4");
    }

    #[test]
    fn test_harmonic_minor_scale() {
        let scale = Scale::generate(note("Cn4"), ScaleType::HarmonicMinor).unwrap();
        assert_eq!(scale.symbol(), "Cn4,Dn4,Eb4,Fn4,Gn4,Ab4,Bn4,Cn5");
    }

    #[test]
    fn test_harmonic_minor_double_sharp() {
        // The raised 7th of A# minor is a double sharp.
        let scale = Scale::generate(note("A#3"), ScaleType::HarmonicMinor).unwrap();
        assert_eq!(scale.symbol(), "A#3,B#3,C#4,D#4,E#4,F#4,Gx4,A#4");
    }

    #[test]
    fn test_melodic_minor_scale() {
        let scale = Scale::generate(note("An3"), ScaleType::MelodicMinor).unwrap();
        assert_eq!(scale.notes().len(), 15);
        assert_eq!(
            scale.symbol(),
            "An3,Bn3,Cn4,Dn4,En4,F#4,G#4,An4,Gn4,Fn4,En4,Dn4,Cn4,Bn3,An3"
        );
    }

    #[test]
    fn test_letter_uniqueness() {
        for (tonic, scale_type) in [
            ("Cn4", ScaleType::Major),
            ("F#4", ScaleType::Major),
            ("Cb4", ScaleType::Major),
            ("G#3", ScaleType::HarmonicMinor),
            ("Eb4", ScaleType::NaturalMinor),
            ("Bn3", ScaleType::MelodicMinor),
        ] {
            let scale = Scale::generate(note(tonic), scale_type).unwrap();
            let mut seen: Vec<PitchLetter> = scale.notes()[..7].iter().map(|n| n.letter).collect();
            seen.sort_by_key(|l| l.diatonic_index());
            seen.dedup();
            assert_eq!(seen.len(), 7, "{} {:?}", tonic, scale_type);
        }
    }

    #[test]
    fn test_scale_starts_and_ends_on_tonic() {
        let scale = Scale::generate(note("Gn4"), ScaleType::Major).unwrap();
        assert_eq!(scale.notes()[0], note("Gn4"));
        assert_eq!(scale.notes()[7], note("Gn5"));
    }
}
