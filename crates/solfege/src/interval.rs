//! Directed intervals with quality/size legality checking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Direction an interval is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    pub fn mirrored(&self) -> Direction {
        match self {
            Direction::Above => Direction::Below,
            Direction::Below => Direction::Above,
        }
    }
}

/// Interval qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalQuality {
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntervalQuality::Diminished => "D",
            IntervalQuality::Minor => "m",
            IntervalQuality::Major => "M",
            IntervalQuality::Perfect => "P",
            IntervalQuality::Augmented => "A",
        };
        f.write_str(s)
    }
}

/// A directed (quality, size) interval, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub direction: Direction,
    pub quality: IntervalQuality,
    pub size: u8,
}

/// Whether a size belongs to the perfect class (unisons, 4ths, 5ths,
/// octaves and their compounds).
fn is_perfect_class(size: u8) -> bool {
    matches!((size - 1) % 7, 0 | 3 | 4)
}

impl Interval {
    /// Build an interval, rejecting theoretically invalid (quality, size)
    /// pairs: perfect-class sizes take {diminished, perfect, augmented},
    /// the rest take {diminished, minor, major, augmented}.
    pub fn new(
        direction: Direction,
        quality: IntervalQuality,
        size: u8,
    ) -> Result<Interval, TheoryError> {
        if Self::is_valid_pair(quality, size) {
            Ok(Interval {
                direction,
                quality,
                size,
            })
        } else {
            Err(TheoryError::IllegalInterval { quality, size })
        }
    }

    /// Table-driven legality predicate for (quality, size).
    pub fn is_valid_pair(quality: IntervalQuality, size: u8) -> bool {
        if size == 0 {
            return false;
        }
        if is_perfect_class(size) {
            !matches!(quality, IntervalQuality::Minor | IntervalQuality::Major)
        } else {
            quality != IntervalQuality::Perfect
        }
    }

    /// Semitone span of the undirected interval.
    ///
    /// Derived from the default span of the simple size class plus a quality
    /// adjustment, plus 12 per compound octave.
    pub fn semitone_span(&self) -> i16 {
        let simple = (self.size - 1) % 7; // 0 = unison class
        let octaves = ((self.size - 1) / 7) as i16;

        // Span of the major/perfect interval in each size class.
        let base: i16 = match simple {
            0 => 0,
            1 => 2,
            2 => 4,
            3 => 5,
            4 => 7,
            5 => 9,
            6 => 11,
            _ => unreachable!(),
        };

        let adjustment: i16 = if is_perfect_class(self.size) {
            match self.quality {
                IntervalQuality::Diminished => -1,
                IntervalQuality::Perfect => 0,
                IntervalQuality::Augmented => 1,
                _ => unreachable!("constructor rejects minor/major perfect-class"),
            }
        } else {
            match self.quality {
                IntervalQuality::Diminished => -2,
                IntervalQuality::Minor => -1,
                IntervalQuality::Major => 0,
                IntervalQuality::Augmented => 1,
                _ => unreachable!("constructor rejects perfect imperfect-class"),
            }
        };

        base + adjustment + 12 * octaves
    }

    /// Same quality and size, opposite direction.
    pub fn mirrored(&self) -> Interval {
        Interval {
            direction: self.direction.mirrored(),
            quality: self.quality,
            size: self.size,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IntervalQuality::*;

    #[test]
    fn test_valid_pairs() {
        for size in [1u8, 4, 5, 8, 11, 12] {
            assert!(Interval::is_valid_pair(Perfect, size), "P{}", size);
            assert!(Interval::is_valid_pair(Diminished, size));
            assert!(Interval::is_valid_pair(Augmented, size));
            assert!(!Interval::is_valid_pair(Major, size), "M{}", size);
            assert!(!Interval::is_valid_pair(Minor, size));
        }
        for size in [2u8, 3, 6, 7, 9, 10, 13] {
            assert!(Interval::is_valid_pair(Major, size), "M{}", size);
            assert!(Interval::is_valid_pair(Minor, size));
            assert!(Interval::is_valid_pair(Diminished, size));
            assert!(Interval::is_valid_pair(Augmented, size));
            assert!(!Interval::is_valid_pair(Perfect, size), "P{}", size);
        }
        assert!(!Interval::is_valid_pair(Perfect, 0));
    }

    #[test]
    fn test_constructor_rejects_illegal() {
        let err = Interval::new(Direction::Above, Major, 5).unwrap_err();
        assert_eq!(
            err,
            crate::error::TheoryError::IllegalInterval {
                quality: Major,
                size: 5
            }
        );
    }

    #[test]
    fn test_semitone_spans() {
        let span = |q, s| Interval::new(Direction::Above, q, s).unwrap().semitone_span();

        assert_eq!(span(Perfect, 1), 0);
        assert_eq!(span(Augmented, 1), 1);
        assert_eq!(span(Minor, 2), 1);
        assert_eq!(span(Major, 2), 2);
        assert_eq!(span(Minor, 3), 3);
        assert_eq!(span(Major, 3), 4);
        assert_eq!(span(Diminished, 3), 2);
        assert_eq!(span(Perfect, 4), 5);
        assert_eq!(span(Augmented, 4), 6);
        assert_eq!(span(Diminished, 5), 6);
        assert_eq!(span(Perfect, 5), 7);
        assert_eq!(span(Augmented, 5), 8);
        assert_eq!(span(Minor, 6), 8);
        assert_eq!(span(Major, 6), 9);
        assert_eq!(span(Minor, 7), 10);
        assert_eq!(span(Major, 7), 11);
        assert_eq!(span(Diminished, 7), 9);
        assert_eq!(span(Perfect, 8), 12);
        // Compound intervals add octaves
        assert_eq!(span(Major, 9), 14);
        assert_eq!(span(Perfect, 11), 17);
        assert_eq!(span(Perfect, 12), 19);
        assert_eq!(span(Major, 13), 21);
    }

    #[test]
    fn test_mirrored() {
        let m3 = Interval::new(Direction::Above, Major, 3).unwrap();
        let mirrored = m3.mirrored();
        assert_eq!(mirrored.direction, Direction::Below);
        assert_eq!(mirrored.quality, Major);
        assert_eq!(mirrored.size, 3);
        assert_eq!(mirrored.semitone_span(), m3.semitone_span());
    }
}
