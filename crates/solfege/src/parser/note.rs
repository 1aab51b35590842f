//! Note and note-list parsing using winnow combinators.

use winnow::combinator::{alt, eof, separated};
use winnow::prelude::*;
use winnow::token::one_of;

use super::PResult;
use crate::error::TheoryError;
use crate::pitch::{Accidental, Note, PitchLetter};

/// Parse a pitch letter (uppercase only in canonical notation).
pub fn letter(input: &mut &str) -> PResult<PitchLetter> {
    let c = one_of(['C', 'D', 'E', 'F', 'G', 'A', 'B']).parse_next(input)?;
    Ok(match c {
        'C' => PitchLetter::C,
        'D' => PitchLetter::D,
        'E' => PitchLetter::E,
        'F' => PitchLetter::F,
        'G' => PitchLetter::G,
        'A' => PitchLetter::A,
        'B' => PitchLetter::B,
        _ => unreachable!(), // one_of already validated the character
    })
}

/// Parse an accidental symbol (bb, b, n, #, x). `bb` must win over `b`.
pub fn accidental(input: &mut &str) -> PResult<Accidental> {
    alt((
        "bb".map(|_| Accidental::DoubleFlat),
        "b".map(|_| Accidental::Flat),
        "n".map(|_| Accidental::Natural),
        "#".map(|_| Accidental::Sharp),
        "x".map(|_| Accidental::DoubleSharp),
    ))
    .parse_next(input)
}

/// Parse a register digit (1-6).
pub fn register(input: &mut &str) -> PResult<i8> {
    let c = one_of(['1', '2', '3', '4', '5', '6']).parse_next(input)?;
    Ok(c as i8 - '0' as i8)
}

/// Parse a complete note token: letter, mandatory accidental, register.
pub fn note(input: &mut &str) -> PResult<Note> {
    let letter = letter.parse_next(input)?;
    let accidental = accidental.parse_next(input)?;
    let register = register.parse_next(input)?;
    Ok(Note::new(letter, accidental, register))
}

/// Parse a whole string as a single note symbol.
pub fn parse_note_symbol(text: &str) -> Result<Note, TheoryError> {
    let mut input = text;
    let result = (note, eof).parse_next(&mut input);
    match result {
        Ok((n, _)) => Ok(n),
        Err(_) => Err(TheoryError::MalformedNote(text.to_string())),
    }
}

/// Parse a whole string as a comma-separated note list (no whitespace).
pub fn parse_note_list(text: &str) -> Result<Vec<Note>, TheoryError> {
    let mut input = text;
    let result: PResult<(Vec<Note>, _)> = (separated(1.., note, ","), eof).parse_next(&mut input);
    match result {
        Ok((notes, _)) => Ok(notes),
        Err(_) => Err(TheoryError::MalformedNoteList(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_symbol() {
        let n = parse_note_symbol("Cn4").unwrap();
        assert_eq!(n, Note::new(PitchLetter::C, Accidental::Natural, 4));

        let n = parse_note_symbol("Fx2").unwrap();
        assert_eq!(n, Note::new(PitchLetter::F, Accidental::DoubleSharp, 2));

        let n = parse_note_symbol("Abb6").unwrap();
        assert_eq!(n, Note::new(PitchLetter::A, Accidental::DoubleFlat, 6));
    }

    #[test]
    fn test_accidental_is_mandatory() {
        assert!(parse_note_symbol("C4").is_err());
    }

    #[test]
    fn test_trailing_text_rejected() {
        assert!(parse_note_symbol("Cn4 ").is_err());
        assert!(parse_note_symbol("Cn45").is_err());
    }

    #[test]
    fn test_parse_note_list() {
        let notes = parse_note_list("Cn4,En4,G#4").unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[2], Note::new(PitchLetter::G, Accidental::Sharp, 4));
    }

    #[test]
    fn test_note_list_rejects_whitespace_and_empties() {
        assert!(parse_note_list("Cn4, En4").is_err());
        assert!(parse_note_list("Cn4,,En4").is_err());
        assert!(parse_note_list("Cn4,En4,").is_err());
        assert!(parse_note_list("").is_err());
    }
}
