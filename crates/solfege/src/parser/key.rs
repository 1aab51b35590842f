//! Key and key-signature text parsing.

use winnow::combinator::{alt, eof, separated};
use winnow::prelude::*;
use winnow::token::one_of;

use super::note::{letter, register};
use super::PResult;
use crate::error::TheoryError;
use crate::key::{Mode, Tonality};
use crate::pitch::{Accidental, Note};

/// Key accidental: only n/#/b appear in key text.
fn key_accidental(input: &mut &str) -> PResult<Accidental> {
    alt((
        "n".map(|_| Accidental::Natural),
        "#".map(|_| Accidental::Sharp),
        "b".map(|_| Accidental::Flat),
    ))
    .parse_next(input)
}

fn mode(input: &mut &str) -> PResult<Mode> {
    let c = one_of(['M', 'm']).parse_next(input)?;
    Ok(if c == 'M' { Mode::Major } else { Mode::Minor })
}

/// Parse key text `letter(n|#|b)(M|m)`, e.g. `F#M`, `Ebm`.
///
/// Grammar failures are `MalformedKey`; well-formed text naming a tonic
/// outside the canonical table is `UnknownKey`.
pub fn parse_key_symbol(text: &str) -> Result<Tonality, TheoryError> {
    let mut input = text;
    let result = (letter, key_accidental, mode, eof).parse_next(&mut input);
    match result {
        Ok((letter, accidental, mode, _)) => Tonality::new(letter, accidental, mode),
        Err(_) => Err(TheoryError::MalformedKey(text.to_string())),
    }
}

/// Signature entry: letter, sharp or flat (naturals never appear), register.
fn signature_entry(input: &mut &str) -> PResult<Note> {
    let letter = letter.parse_next(input)?;
    let accidental = alt((
        "#".map(|_| Accidental::Sharp),
        "b".map(|_| Accidental::Flat),
    ))
    .parse_next(input)?;
    let register = register.parse_next(input)?;
    Ok(Note::new(letter, accidental, register))
}

/// Parse key-signature text: up to seven comma-separated entries with a
/// consistent accidental sign. The empty string is a valid empty signature.
pub fn parse_signature_symbol(text: &str) -> Result<Vec<Note>, TheoryError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut input = text;
    let result: PResult<(Vec<Note>, _)> =
        (separated(1.., signature_entry, ","), eof).parse_next(&mut input);
    let entries = match result {
        Ok((entries, _)) => entries,
        Err(_) => return Err(TheoryError::MalformedKeySignature(text.to_string())),
    };

    let consistent = entries
        .iter()
        .all(|n| n.accidental == entries[0].accidental);
    if entries.len() > 7 || !consistent {
        return Err(TheoryError::MalformedKeySignature(text.to_string()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchLetter;

    #[test]
    fn test_parse_key_symbol() {
        let k = parse_key_symbol("F#M").unwrap();
        assert_eq!(k.tonic().letter, PitchLetter::F);
        assert_eq!(k.tonic().accidental, Accidental::Sharp);
        assert_eq!(k.mode(), Mode::Major);

        let k = parse_key_symbol("Ebm").unwrap();
        assert_eq!(k.tonic().letter, PitchLetter::E);
        assert_eq!(k.mode(), Mode::Minor);

        let k = parse_key_symbol("CnM").unwrap();
        assert_eq!(k.tonic().accidental, Accidental::Natural);
    }

    #[test]
    fn test_malformed_vs_unknown_key() {
        assert_eq!(
            parse_key_symbol("FM"),
            Err(TheoryError::MalformedKey("FM".to_string()))
        );
        assert_eq!(
            parse_key_symbol("F#"),
            Err(TheoryError::MalformedKey("F#".to_string()))
        );
        // Well-formed but not a standard key
        assert_eq!(
            parse_key_symbol("G#M"),
            Err(TheoryError::UnknownKey("G#M".to_string()))
        );
    }

    #[test]
    fn test_parse_signature() {
        let entries = parse_signature_symbol("F#5,C#5,G#5").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].letter, PitchLetter::F);

        assert!(parse_signature_symbol("").unwrap().is_empty());
    }

    #[test]
    fn test_signature_rejects_bad_entries() {
        assert!(parse_signature_symbol("Fn5").is_err());
        assert!(parse_signature_symbol("F#5,Bb4").is_err());
        assert!(parse_signature_symbol("F#5,").is_err());
    }
}
