//! Roman-numeral symbol tokenization.
//!
//! Grammar: `primary[invext][/secondary]`. Longer tokens must be tried
//! before their prefixes (`III+` before `III`, `viio` before `vi`, `64`
//! before `6`).

use winnow::combinator::{alt, eof, opt, preceded};
use winnow::prelude::*;

use super::PResult;
use crate::error::TheoryError;
use crate::harmonic::symbol::{InvExt, Primary, SecondaryTonic};

fn primary(input: &mut &str) -> PResult<Primary> {
    alt((
        alt((
            "III+".map(|_| Primary::AugIII),
            "III".map(|_| Primary::MajIII),
            "IV".map(|_| Primary::MajIV),
            "It".map(|_| Primary::Italian),
            "I".map(|_| Primary::MajI),
            "VII".map(|_| Primary::MajVII),
            "VI".map(|_| Primary::MajVI),
            "V".map(|_| Primary::MajV),
            "N".map(|_| Primary::Neapolitan),
            "Gr".map(|_| Primary::German),
            "Fr".map(|_| Primary::French),
        )),
        alt((
            "iii".map(|_| Primary::MinIII),
            "ii-o".map(|_| Primary::HalfDimII),
            "iio".map(|_| Primary::DimII),
            "ii".map(|_| Primary::MinII),
            "iv".map(|_| Primary::MinIV),
            "i".map(|_| Primary::MinI),
            "vii-o".map(|_| Primary::HalfDimVII),
            "viio".map(|_| Primary::DimVII),
            "vi-o".map(|_| Primary::HalfDimVI),
            "vio".map(|_| Primary::DimVI),
            "vi".map(|_| Primary::MinVI),
            "v".map(|_| Primary::MinV),
        )),
    ))
    .parse_next(input)
}

fn invext(input: &mut &str) -> PResult<InvExt> {
    alt((
        "65".map(|_| InvExt::SixFive),
        "64".map(|_| InvExt::SixFour),
        "6".map(|_| InvExt::Six),
        "7".map(|_| InvExt::Seven),
        "43".map(|_| InvExt::FourThree),
        "42".map(|_| InvExt::FourTwo),
        "9".map(|_| InvExt::Nine),
        "11".map(|_| InvExt::Eleven),
        "13".map(|_| InvExt::Thirteen),
    ))
    .parse_next(input)
}

fn secondary(input: &mut &str) -> PResult<SecondaryTonic> {
    alt((
        "iii".map(|_| SecondaryTonic::MinIII),
        "ii".map(|_| SecondaryTonic::MinII),
        "iv".map(|_| SecondaryTonic::MinIV),
        "III".map(|_| SecondaryTonic::MajIII),
        "IV".map(|_| SecondaryTonic::MajIV),
        "VII".map(|_| SecondaryTonic::MajVII),
        "VI".map(|_| SecondaryTonic::MajVI),
        "V".map(|_| SecondaryTonic::MajV),
        "vi".map(|_| SecondaryTonic::MinVI),
    ))
    .parse_next(input)
}

/// Tokenize a full symbol, rejecting leftover text.
pub fn parse_roman_symbol(
    text: &str,
) -> Result<(Primary, InvExt, Option<SecondaryTonic>), TheoryError> {
    let mut input = text;
    let result = (
        primary,
        opt(invext),
        opt(preceded("/", secondary)),
        eof,
    )
        .parse_next(&mut input);
    match result {
        Ok((primary, invext, secondary, _)) => {
            Ok((primary, invext.unwrap_or_default(), secondary))
        }
        Err(_) => Err(TheoryError::UnrecognizedSymbol(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (Primary, InvExt, Option<SecondaryTonic>) {
        parse_roman_symbol(text).unwrap()
    }

    #[test]
    fn test_plain_primaries() {
        assert_eq!(parse("I"), (Primary::MajI, InvExt::Root, None));
        assert_eq!(parse("i"), (Primary::MinI, InvExt::Root, None));
        assert_eq!(parse("iio"), (Primary::DimII, InvExt::Root, None));
        assert_eq!(parse("ii-o"), (Primary::HalfDimII, InvExt::Root, None));
        assert_eq!(parse("III+"), (Primary::AugIII, InvExt::Root, None));
        assert_eq!(parse("vii-o"), (Primary::HalfDimVII, InvExt::Root, None));
        assert_eq!(parse("Gr"), (Primary::German, InvExt::Root, None));
        assert_eq!(parse("N"), (Primary::Neapolitan, InvExt::Root, None));
    }

    #[test]
    fn test_invext() {
        assert_eq!(parse("V7"), (Primary::MajV, InvExt::Seven, None));
        assert_eq!(parse("V65"), (Primary::MajV, InvExt::SixFive, None));
        assert_eq!(parse("I64"), (Primary::MajI, InvExt::SixFour, None));
        assert_eq!(parse("N6"), (Primary::Neapolitan, InvExt::Six, None));
        assert_eq!(parse("V13"), (Primary::MajV, InvExt::Thirteen, None));
        assert_eq!(parse("viio42"), (Primary::DimVII, InvExt::FourTwo, None));
    }

    #[test]
    fn test_secondary() {
        assert_eq!(
            parse("V7/V"),
            (Primary::MajV, InvExt::Seven, Some(SecondaryTonic::MajV))
        );
        assert_eq!(
            parse("viio/ii"),
            (Primary::DimVII, InvExt::Root, Some(SecondaryTonic::MinII))
        );
        assert_eq!(
            parse("V/VII"),
            (Primary::MajV, InvExt::Root, Some(SecondaryTonic::MajVII))
        );
    }

    #[test]
    fn test_unrecognized() {
        for bad in ["", "W", "V8", "V7/viio", "II", "V7/", "I6 4", "ivo"] {
            assert!(parse_roman_symbol(bad).is_err(), "{} should fail", bad);
        }
    }
}
