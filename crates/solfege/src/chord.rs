//! Chords as stacks of thirds above a root.

use serde::{Deserialize, Serialize};

use crate::interval::{Direction, Interval, IntervalQuality};
use crate::pitch::Note;

/// Triad qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    /// (quality, size) of each factor interval above the root.
    fn factor_interval(&self, factor: u8) -> Option<(IntervalQuality, u8)> {
        use IntervalQuality::*;
        match (self, factor) {
            (_, 1) => Some((Perfect, 1)),
            (ChordQuality::Major, 3) => Some((Major, 3)),
            (ChordQuality::Major, 5) => Some((Perfect, 5)),
            (ChordQuality::Minor, 3) => Some((Minor, 3)),
            (ChordQuality::Minor, 5) => Some((Perfect, 5)),
            (ChordQuality::Diminished, 3) => Some((Minor, 3)),
            (ChordQuality::Diminished, 5) => Some((Diminished, 5)),
            (ChordQuality::Augmented, 3) => Some((Major, 3)),
            (ChordQuality::Augmented, 5) => Some((Augmented, 5)),
            // Upper factors continue the stack of thirds.
            (ChordQuality::Major, 7) => Some((Major, 7)),
            (ChordQuality::Minor, 7) => Some((Minor, 7)),
            (ChordQuality::Diminished, 7) => Some((Diminished, 7)),
            (ChordQuality::Augmented, 7) => Some((Major, 7)),
            (ChordQuality::Major, 9) | (ChordQuality::Minor, 9) => Some((Major, 9)),
            _ => None,
        }
    }
}

/// Seventh-chord qualities, used by Roman-numeral expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeventhQuality {
    Major7,
    Dominant7,
    Minor7,
    HalfDiminished7,
    Diminished7,
}

impl SeventhQuality {
    /// Triad the seventh chord is built on.
    pub fn triad(&self) -> ChordQuality {
        match self {
            SeventhQuality::Major7 | SeventhQuality::Dominant7 => ChordQuality::Major,
            SeventhQuality::Minor7 => ChordQuality::Minor,
            SeventhQuality::HalfDiminished7 | SeventhQuality::Diminished7 => {
                ChordQuality::Diminished
            }
        }
    }

    /// Interval of the chord seventh above the root.
    pub fn seventh_interval(&self) -> (IntervalQuality, u8) {
        match self {
            SeventhQuality::Major7 => (IntervalQuality::Major, 7),
            SeventhQuality::Dominant7
            | SeventhQuality::Minor7
            | SeventhQuality::HalfDiminished7 => (IntervalQuality::Minor, 7),
            SeventhQuality::Diminished7 => (IntervalQuality::Diminished, 7),
        }
    }
}

/// A triad: root, quality, and inversion (0 = root position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
    pub inversion: u8,
}

impl Chord {
    pub fn new(root: Note, quality: ChordQuality, inversion: u8) -> Self {
        Chord {
            root,
            quality,
            inversion,
        }
    }

    /// Number of factors for this quality (triads have 3).
    pub fn num_factors(&self) -> usize {
        3
    }

    /// The requested chord factor (1 = root, then 3, 5), correctly spelled.
    ///
    /// None when the factor cannot be written, including when its spelling
    /// would need a double accidental: chord spelling stays within single
    /// sharps and flats, so an augmented triad on B flags its fifth (Fx).
    pub fn factor(&self, factor: u8) -> Option<Note> {
        let (quality, size) = self.quality.factor_interval(factor)?;
        let interval = Interval::new(Direction::Above, quality, size).ok()?;
        let note = self.root.note_from_interval(&interval)?;
        if note.accidental.is_simple() {
            Some(note)
        } else {
            None
        }
    }

    /// True when every factor resolves to a spellable note. Used by
    /// edit-time validation to reject impossible configurations.
    pub fn is_constructible(&self) -> bool {
        [1u8, 3, 5].iter().all(|&f| self.factor(f).is_some())
    }

    /// Chord tones bass-to-soprano with the inversion applied.
    pub fn notes(&self) -> Option<Vec<Note>> {
        let factors: Vec<Note> = [1u8, 3, 5]
            .iter()
            .map(|&f| self.factor(f))
            .collect::<Option<_>>()?;

        let rotation = self.inversion as usize % factors.len();
        let mut notes = Vec::with_capacity(factors.len());
        for i in 0..factors.len() {
            let mut n = factors[(rotation + i) % factors.len()];
            // Keep the voicing ascending from the bass.
            if let Some(prev) = notes.last() {
                n = lift_above(n, prev);
            }
            notes.push(n);
        }
        Some(notes)
    }

    /// Comma-separated canonical note list, or None if unconstructible.
    pub fn symbol(&self) -> Option<String> {
        self.notes().map(|n| crate::pitch::render_note_list(&n))
    }
}

/// Raise `note` by octaves until it sounds above `floor`.
pub(crate) fn lift_above(mut note: Note, floor: &Note) -> Note {
    while note.semitone_pitch() <= floor.semitone_pitch() {
        note = Note::new(note.letter, note.accidental, note.register + 1);
    }
    note
}
