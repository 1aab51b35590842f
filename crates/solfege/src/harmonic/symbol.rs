//! Token vocabulary for Roman-numeral symbols.
//!
//! Closed enums for the three symbol positions: primary numeral, optional
//! inversion/extension, optional secondary tonic. Token spelling is exactly
//! the notation vocabulary (`III+`, `vii-o`, `64`, `/V`, ...).

use serde::{Deserialize, Serialize};

use crate::chord::ChordQuality;
use crate::interval::IntervalQuality;
use crate::key::Mode;

/// Primary Roman-numeral tokens.
///
/// Variant names encode quality prefix + degree: `MajV` is `V`, `MinV` is
/// `v`, `DimVII` is `viio`, `HalfDimVII` is `vii-o`, `AugIII` is `III+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primary {
    MajI,
    MinI,
    MinII,
    DimII,
    HalfDimII,
    Neapolitan,
    MinIII,
    MajIII,
    AugIII,
    MajIV,
    MinIV,
    MajV,
    MinV,
    MinVI,
    MajVI,
    DimVI,
    HalfDimVI,
    DimVII,
    HalfDimVII,
    MajVII,
    German,
    French,
    Italian,
}

impl Primary {
    pub fn token(&self) -> &'static str {
        match self {
            Primary::MajI => "I",
            Primary::MinI => "i",
            Primary::MinII => "ii",
            Primary::DimII => "iio",
            Primary::HalfDimII => "ii-o",
            Primary::Neapolitan => "N",
            Primary::MinIII => "iii",
            Primary::MajIII => "III",
            Primary::AugIII => "III+",
            Primary::MajIV => "IV",
            Primary::MinIV => "iv",
            Primary::MajV => "V",
            Primary::MinV => "v",
            Primary::MinVI => "vi",
            Primary::MajVI => "VI",
            Primary::DimVI => "vio",
            Primary::HalfDimVI => "vi-o",
            Primary::DimVII => "viio",
            Primary::HalfDimVII => "vii-o",
            Primary::MajVII => "VII",
            Primary::German => "Gr",
            Primary::French => "Fr",
            Primary::Italian => "It",
        }
    }

    /// True for the three augmented-sixth tokens.
    pub fn is_augmented_sixth(&self) -> bool {
        matches!(self, Primary::German | Primary::French | Primary::Italian)
    }

    /// Triad quality implied by the token's case and suffix. None for the
    /// augmented-sixth tokens, which are not tertian stacks.
    pub fn triad_quality(&self) -> Option<ChordQuality> {
        match self {
            Primary::MajI
            | Primary::MajIII
            | Primary::MajIV
            | Primary::MajV
            | Primary::MajVI
            | Primary::MajVII
            | Primary::Neapolitan => Some(ChordQuality::Major),
            Primary::MinI
            | Primary::MinII
            | Primary::MinIII
            | Primary::MinIV
            | Primary::MinV
            | Primary::MinVI => Some(ChordQuality::Minor),
            Primary::DimII
            | Primary::HalfDimII
            | Primary::DimVI
            | Primary::HalfDimVI
            | Primary::DimVII
            | Primary::HalfDimVII => Some(ChordQuality::Diminished),
            Primary::AugIII => Some(ChordQuality::Augmented),
            Primary::German | Primary::French | Primary::Italian => None,
        }
    }

    /// Interval from the local tonic to this chord's root.
    ///
    /// Mode matters for the mediant/submediant/subtonic degrees; the raised
    /// sixth and seventh of minor (vio, viio) are handled here.
    pub fn root_interval(&self, mode: Mode) -> (IntervalQuality, u8) {
        use IntervalQuality::*;
        match self {
            Primary::MajI | Primary::MinI => (Perfect, 1),
            Primary::MinII | Primary::DimII | Primary::HalfDimII => (Major, 2),
            Primary::Neapolitan => (Minor, 2),
            Primary::MinIII => (Major, 3),
            Primary::MajIII | Primary::AugIII => (Minor, 3),
            Primary::MajIV | Primary::MinIV => (Perfect, 4),
            Primary::MajV | Primary::MinV => (Perfect, 5),
            Primary::MinVI => (Major, 6),
            Primary::MajVI => (Minor, 6),
            // Raised submediant of minor (melodic inflection)
            Primary::DimVI | Primary::HalfDimVI => (Major, 6),
            // Leading tone: raised in minor, diatonic in major
            Primary::DimVII | Primary::HalfDimVII => (Major, 7),
            // Subtonic of natural minor
            Primary::MajVII => match mode {
                Mode::Major => (Major, 7),
                Mode::Minor => (Minor, 7),
            },
            // Augmented sixths sit on the lowered submediant
            Primary::German | Primary::French | Primary::Italian => (Minor, 6),
        }
    }
}

/// Inversion/extension tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvExt {
    /// No figure: root position triad.
    #[default]
    Root,
    Six,
    SixFour,
    Seven,
    SixFive,
    FourThree,
    FourTwo,
    Nine,
    Eleven,
    Thirteen,
}

impl InvExt {
    pub fn token(&self) -> &'static str {
        match self {
            InvExt::Root => "",
            InvExt::Six => "6",
            InvExt::SixFour => "64",
            InvExt::Seven => "7",
            InvExt::SixFive => "65",
            InvExt::FourThree => "43",
            InvExt::FourTwo => "42",
            InvExt::Nine => "9",
            InvExt::Eleven => "11",
            InvExt::Thirteen => "13",
        }
    }

    /// Triad figures ('', 6, 64).
    pub fn is_triad(&self) -> bool {
        matches!(self, InvExt::Root | InvExt::Six | InvExt::SixFour)
    }

    /// Seventh-chord figures (7, 65, 43, 42).
    pub fn is_seventh(&self) -> bool {
        matches!(
            self,
            InvExt::Seven | InvExt::SixFive | InvExt::FourThree | InvExt::FourTwo
        )
    }

    /// Extended-dominant figures (9, 11, 13).
    pub fn is_extension(&self) -> bool {
        matches!(self, InvExt::Nine | InvExt::Eleven | InvExt::Thirteen)
    }

    /// Which chord factor is in the bass (0 = root, 1 = third, ...).
    pub fn bass_factor(&self) -> usize {
        match self {
            InvExt::Root | InvExt::Seven | InvExt::Nine | InvExt::Eleven | InvExt::Thirteen => 0,
            InvExt::Six | InvExt::SixFive => 1,
            InvExt::SixFour | InvExt::FourThree => 2,
            InvExt::FourTwo => 3,
        }
    }
}

/// Secondary-tonic tokens (the part after `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryTonic {
    MinII,
    MinIII,
    MajIII,
    MajIV,
    MinIV,
    MajV,
    MajVI,
    MinVI,
    MajVII,
}

impl SecondaryTonic {
    pub fn token(&self) -> &'static str {
        match self {
            SecondaryTonic::MinII => "ii",
            SecondaryTonic::MinIII => "iii",
            SecondaryTonic::MajIII => "III",
            SecondaryTonic::MajIV => "IV",
            SecondaryTonic::MinIV => "iv",
            SecondaryTonic::MajV => "V",
            SecondaryTonic::MajVI => "VI",
            SecondaryTonic::MinVI => "vi",
            SecondaryTonic::MajVII => "VII",
        }
    }

    /// Mode of the temporary key the secondary chord is built in.
    pub fn local_mode(&self) -> Mode {
        match self {
            SecondaryTonic::MajIII
            | SecondaryTonic::MajIV
            | SecondaryTonic::MajV
            | SecondaryTonic::MajVI
            | SecondaryTonic::MajVII => Mode::Major,
            SecondaryTonic::MinII
            | SecondaryTonic::MinIII
            | SecondaryTonic::MinIV
            | SecondaryTonic::MinVI => Mode::Minor,
        }
    }

    /// Interval from the current tonic up to the secondary tonic.
    pub fn target_interval(&self) -> (IntervalQuality, u8) {
        use IntervalQuality::*;
        match self {
            SecondaryTonic::MinII => (Major, 2),
            SecondaryTonic::MinIII => (Major, 3),
            SecondaryTonic::MajIII => (Minor, 3),
            SecondaryTonic::MajIV | SecondaryTonic::MinIV => (Perfect, 4),
            SecondaryTonic::MajV => (Perfect, 5),
            SecondaryTonic::MinVI => (Major, 6),
            SecondaryTonic::MajVI => (Minor, 6),
            SecondaryTonic::MajVII => (Minor, 7),
        }
    }
}
