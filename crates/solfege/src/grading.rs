//! Grading strategies: pure comparators over canonical notation text.
//!
//! Strategies are selected through a closed enum and exposed behind the
//! [`GradingStrategy`] trait; there is no name-based dispatch. Every
//! comparison is stateless and produces a fresh [`Grade`].

use serde::{Deserialize, Serialize};

use crate::harmonic::HarmonicFunction;
use crate::key::Tonality;
use crate::pitch::{parse_note_list, Note};

/// A grading outcome as an exact fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub numerator: u32,
    pub denominator: u32,
}

/// Discrete pass/partial/fail label derived from the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeState {
    Correct,
    Partial,
    Incorrect,
}

impl Grade {
    pub fn correct() -> Grade {
        Grade {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn incorrect() -> Grade {
        Grade {
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn fraction(numerator: u32, denominator: u32) -> Grade {
        debug_assert!(denominator > 0 && numerator <= denominator);
        Grade {
            numerator,
            denominator,
        }
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn state(&self) -> GradeState {
        if self.numerator == 0 {
            GradeState::Incorrect
        } else if self.numerator == self.denominator {
            GradeState::Correct
        } else {
            GradeState::Partial
        }
    }
}

/// A pure comparator from (response, canonical answer) to a grade.
pub trait GradingStrategy {
    fn grade(&self, response: &str, answer: &str) -> Grade;
}

/// Exact spelling match of note lists: all or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllOrNothing;

/// All-or-nothing with a cap on consecutive voice leaps: a response whose
/// adjacent notes span more than `max_size_differential` letter steps is
/// wrong regardless of pitch content.
#[derive(Debug, Clone, Copy)]
pub struct AllOrNothingLeapCapped {
    pub max_size_differential: u32,
}

impl Default for AllOrNothingLeapCapped {
    fn default() -> Self {
        // Leaps beyond a fifth are pedagogically rejected
        AllOrNothingLeapCapped {
            max_size_differential: 4,
        }
    }
}

/// Roman-numeral identification: literal symbol match first, then an
/// enharmonic fallback that expands both symbols against the question's
/// key and accepts pitch-identical answers.
#[derive(Debug, Clone, Copy)]
pub struct HarmonicFunctionIdentify {
    pub tonality: Tonality,
}

/// Scale grading with partial credit per correct non-tonic degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalePartialCredit;

/// Closed set of strategies a question type can select.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    AllOrNothing(AllOrNothing),
    AllOrNothingLeapCapped(AllOrNothingLeapCapped),
    HarmonicFunctionIdentify(HarmonicFunctionIdentify),
    ScalePartialCredit(ScalePartialCredit),
}

impl GradingStrategy for Strategy {
    fn grade(&self, response: &str, answer: &str) -> Grade {
        match self {
            Strategy::AllOrNothing(s) => s.grade(response, answer),
            Strategy::AllOrNothingLeapCapped(s) => s.grade(response, answer),
            Strategy::HarmonicFunctionIdentify(s) => s.grade(response, answer),
            Strategy::ScalePartialCredit(s) => s.grade(response, answer),
        }
    }
}

fn spelling_equal(a: &[Note], b: &[Note]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y, true))
}

impl GradingStrategy for AllOrNothing {
    fn grade(&self, response: &str, answer: &str) -> Grade {
        let (Ok(response), Ok(answer)) = (parse_note_list(response), parse_note_list(answer))
        else {
            return Grade::incorrect();
        };
        if spelling_equal(&response, &answer) {
            Grade::correct()
        } else {
            Grade::incorrect()
        }
    }
}

impl GradingStrategy for AllOrNothingLeapCapped {
    fn grade(&self, response: &str, answer: &str) -> Grade {
        let (Ok(response), Ok(answer)) = (parse_note_list(response), parse_note_list(answer))
        else {
            return Grade::incorrect();
        };

        let leap_ok = response
            .windows(2)
            .all(|w| w[0].diatonic_size_differential(&w[1]) <= self.max_size_differential);
        if leap_ok && spelling_equal(&response, &answer) {
            Grade::correct()
        } else {
            Grade::incorrect()
        }
    }
}

impl GradingStrategy for HarmonicFunctionIdentify {
    fn grade(&self, response: &str, answer: &str) -> Grade {
        if response == answer {
            return Grade::correct();
        }

        // Notationally different symbols can still name the same sounding
        // chord; expand both and compare pitches.
        let (Ok(response), Ok(answer)) = (
            HarmonicFunction::new(self.tonality, response),
            HarmonicFunction::new(self.tonality, answer),
        ) else {
            return Grade::incorrect();
        };
        if response.equals(&answer) {
            Grade::correct()
        } else {
            Grade::incorrect()
        }
    }
}

impl GradingStrategy for ScalePartialCredit {
    fn grade(&self, response: &str, answer: &str) -> Grade {
        let (Ok(response), Ok(answer)) = (parse_note_list(response), parse_note_list(answer))
        else {
            return Grade::incorrect();
        };
        if answer.len() < 2 {
            return Grade::incorrect();
        }

        // The tonic is given, so it earns no credit.
        let graded = answer.len() as u32 - 1;
        let mut correct = 0u32;
        for (i, expected) in answer.iter().enumerate().skip(1) {
            if response.get(i).is_some_and(|n| n.equals(expected, true)) {
                correct += 1;
            }
        }
        Grade::fraction(correct, graded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_or_nothing() {
        let g = AllOrNothing.grade("Cn4,En4,Gn4", "Cn4,En4,Gn4");
        assert_eq!(g, Grade::correct());
        assert_eq!(g.state(), GradeState::Correct);

        let g = AllOrNothing.grade("Cn4,En4,G#4", "Cn4,En4,Gn4");
        assert_eq!(g, Grade::incorrect());
        assert_eq!(g.state(), GradeState::Incorrect);

        // Enharmonic spelling is not accepted
        let g = AllOrNothing.grade("Db4", "C#4");
        assert_eq!(g, Grade::incorrect());

        // Malformed input is simply wrong
        let g = AllOrNothing.grade("C4,E4", "Cn4,En4");
        assert_eq!(g, Grade::incorrect());
    }

    #[test]
    fn test_leap_cap() {
        let strategy = AllOrNothingLeapCapped::default();

        // Correct content within the leap cap
        let g = strategy.grade("Cn4,Gn4", "Cn4,Gn4");
        assert_eq!(g, Grade::correct());

        // Correct pitch content but an excessive leap in the answer text
        // itself cannot occur; an excessive response leap fails
        let g = strategy.grade("Cn4,An4", "Cn4,An4");
        assert_eq!(g, Grade::incorrect());
    }

    #[test]
    fn test_harmonic_function_identify() {
        let tonality = Tonality::from_symbol("CnM").unwrap();
        let strategy = HarmonicFunctionIdentify { tonality };

        assert_eq!(strategy.grade("V7", "V7"), Grade::correct());
        assert_eq!(strategy.grade("V7", "V65"), Grade::incorrect());
        assert_eq!(strategy.grade("IV", "V7"), Grade::incorrect());
        // Different text, same sounding chord
        assert_eq!(strategy.grade("V/IV", "I"), Grade::correct());
        assert_eq!(strategy.grade("bogus", "V7"), Grade::incorrect());
    }

    #[test]
    fn test_scale_partial_credit() {
        let answer = "Cn4,Dn4,En4,Fn4,Gn4,An4,Bn4,Cn5";
        let g = ScalePartialCredit.grade(answer, answer);
        assert_eq!(g, Grade::fraction(7, 7));
        assert_eq!(g.state(), GradeState::Correct);

        // One wrong non-tonic degree: 6/7
        let g = ScalePartialCredit.grade("Cn4,Dn4,En4,Fn4,Gn4,Ab4,Bn4,Cn5", answer);
        assert_eq!(g, Grade::fraction(6, 7));
        assert_eq!(g.state(), GradeState::Partial);

        // Everything wrong but the given tonic: 0/7
        let g = ScalePartialCredit.grade("Cn4,Db4,Eb4,Fb4,Gb4,Ab4,Bb4,Cb5", answer);
        assert_eq!(g.state(), GradeState::Incorrect);
    }

    #[test]
    fn test_strategy_enum_dispatch() {
        let strategy = Strategy::AllOrNothing(AllOrNothing);
        assert_eq!(strategy.grade("Cn4", "Cn4"), Grade::correct());
    }
}
