//! Legality tables for Roman-numeral combinations.
//!
//! These are authoritative domain data: which primaries exist as triads or
//! sevenths in each mode, and which scale degrees may serve as secondary
//! tonics. They are enumerated, not derived.

use crate::chord::SeventhQuality;
use crate::harmonic::symbol::{Primary, SecondaryTonic};
use crate::key::Mode;

/// Primaries that exist as triads in the given mode.
pub fn triad_capable(mode: Mode) -> &'static [Primary] {
    match mode {
        Mode::Major => &[
            Primary::MajI,
            Primary::MinII,
            Primary::MinIII,
            Primary::MajIV,
            Primary::MajV,
            Primary::MinVI,
            Primary::DimVII,
        ],
        Mode::Minor => &[
            Primary::MinI,
            Primary::DimII,
            Primary::MajIII,
            Primary::AugIII,
            Primary::MinIV,
            Primary::MajV,
            Primary::MinV,
            Primary::MajVI,
            Primary::DimVI,
            Primary::DimVII,
            Primary::MajVII,
        ],
    }
}

/// Seventh-chord quality of each seventh-capable primary in the given mode.
/// None means the primary takes no seventh figure there.
pub fn seventh_quality(primary: Primary, mode: Mode) -> Option<SeventhQuality> {
    use SeventhQuality::*;
    match mode {
        Mode::Major => match primary {
            Primary::MajI | Primary::MajIV => Some(Major7),
            Primary::MinII | Primary::MinIII | Primary::MinVI => Some(Minor7),
            Primary::MajV => Some(Dominant7),
            Primary::HalfDimVII => Some(HalfDiminished7),
            // Borrowed fully diminished leading-tone seventh
            Primary::DimVII => Some(Diminished7),
            _ => None,
        },
        Mode::Minor => match primary {
            Primary::HalfDimII | Primary::HalfDimVI => Some(HalfDiminished7),
            Primary::MajIII | Primary::MajVI => Some(Major7),
            Primary::MinIV => Some(Minor7),
            Primary::MajV | Primary::MajVII => Some(Dominant7),
            Primary::DimVII => Some(Diminished7),
            _ => None,
        },
    }
}

/// Scale degrees that may serve as secondary tonics in the given mode.
///
/// These lists mirror the question randomiser's per-mode enumerations,
/// which are the ground truth for secondary legality.
pub fn secondary_targets(mode: Mode) -> &'static [SecondaryTonic] {
    match mode {
        Mode::Major => &[
            SecondaryTonic::MinII,
            SecondaryTonic::MinIII,
            SecondaryTonic::MajIV,
            SecondaryTonic::MajV,
            SecondaryTonic::MinVI,
        ],
        Mode::Minor => &[
            SecondaryTonic::MajIII,
            SecondaryTonic::MinIV,
            SecondaryTonic::MajV,
            SecondaryTonic::MajVI,
            SecondaryTonic::MajVII,
        ],
    }
}
