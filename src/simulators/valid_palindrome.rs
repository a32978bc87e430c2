//! Valid palindrome over alphanumeric characters, ignoring case.
//!
//! Only ASCII letters and digits count; everything else (including non-ASCII
//! letters) is dropped before comparing. The brute pass compares the cleaned
//! string with its reverse. The optimal pass walks two pointers inward over the
//! raw input and skips what the cleaner would drop, so its pointers index the
//! original characters.

use crate::step::{Phase, Step, StepPair, StepRecorder, StepState, SymmetryDetail};

pub fn simulate(s: &str) -> StepPair {
    let cleaned = clean(s);
    StepPair::new(reverse_compare(&cleaned), two_pointers(s, &cleaned))
}

fn clean(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn detail(cleaned: &str) -> SymmetryDetail {
    SymmetryDetail {
        cleaned: cleaned.to_string(),
        reversed: None,
        left_char: None,
        right_char: None,
        matched: false,
    }
}

fn reverse_compare(cleaned: &str) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    recorder.record(
        format!("Starting Valid Palindrome check. Cleaned string: \"{}\"", cleaned),
        StepState::new(Phase::Init, detail(cleaned)),
    );

    let reversed: String = cleaned.chars().rev().collect();
    let matched = reversed == cleaned;
    recorder.record(
        format!("Reversed cleaned string: \"{}\"", reversed),
        StepState::new(
            Phase::Searching,
            SymmetryDetail {
                reversed: Some(reversed.clone()),
                ..detail(cleaned)
            },
        ),
    );

    let (phase, description) = if matched {
        (Phase::Found, "String equals its reverse. It is a palindrome.")
    } else {
        (Phase::NotFound, "String differs from its reverse. Not a palindrome.")
    };
    recorder.record(
        description,
        StepState::new(
            phase,
            SymmetryDetail {
                reversed: Some(reversed),
                matched,
                ..detail(cleaned)
            },
        ),
    );
    recorder.finish()
}

fn two_pointers(s: &str, cleaned: &str) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let chars: Vec<char> = s.chars().collect();
    let (mut left, mut right) = (0usize, chars.len().saturating_sub(1));

    let mut state = StepState::new(Phase::Init, detail(cleaned));
    if !chars.is_empty() {
        state = state.with_pointer("l", left).with_pointer("r", right);
    }
    recorder.record(
        format!("Starting Valid Palindrome check. Cleaned string: \"{}\"", cleaned),
        state,
    );

    while left < right {
        while left < right && !chars[left].is_ascii_alphanumeric() {
            left += 1;
        }
        while left < right && !chars[right].is_ascii_alphanumeric() {
            right -= 1;
        }
        if left >= right {
            break;
        }

        let (a, b) = (chars[left].to_ascii_lowercase(), chars[right].to_ascii_lowercase());
        let matched = a == b;
        let state = StepState::new(
            if matched {
                Phase::Searching
            } else {
                Phase::NotFound
            },
            SymmetryDetail {
                left_char: Some(a),
                right_char: Some(b),
                matched,
                ..detail(cleaned)
            },
        )
        .with_pointer("l", left)
        .with_pointer("r", right);

        if !matched {
            recorder.record(
                format!("Comparing '{}' and '{}'. Mismatch! Not a palindrome.", a, b),
                state,
            );
            return recorder.finish();
        }
        recorder.record(format!("Comparing '{}' and '{}'. Characters match!", a, b), state);
        left += 1;
        right -= 1;
    }

    recorder.record(
        "Confirmed: It is a palindrome. Passed all symmetry checks.",
        StepState::new(
            Phase::Found,
            SymmetryDetail {
                matched: true,
                ..detail(cleaned)
            },
        ),
    );
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_palindrome() {
        let pair = simulate("A man, a plan, a canal: Panama");
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
        assert_eq!(pair.brute_result().unwrap().phase(), Phase::Found);
    }

    #[test]
    fn test_mismatch_is_the_last_step() {
        let pair = simulate("race a car");
        let last = pair.optimal_result().unwrap();
        assert_eq!(last.phase(), Phase::NotFound);
        assert!(last.description.contains("Mismatch"));
        assert_eq!(pair.brute_result().unwrap().phase(), Phase::NotFound);
    }

    #[test]
    fn test_pointers_index_raw_input() {
        let pair = simulate(",ab a");
        // First comparison skips the leading comma
        let first = &pair.optimal_steps[1];
        assert_eq!(first.state.pointer("l"), Some(1));
        assert_eq!(first.state.pointer("r"), Some(4));
    }

    #[test]
    fn test_blank_input_is_a_palindrome() {
        for s in ["", " ", ".,!"] {
            let pair = simulate(s);
            assert_eq!(pair.optimal_steps.len(), 2, "input {:?}", s);
            assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
            assert_eq!(pair.brute_result().unwrap().phase(), Phase::Found);
        }
    }
}
