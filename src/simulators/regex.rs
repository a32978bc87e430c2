//! Simplified pattern walk for regular-expression matching.
//!
//! This is not a regex engine. It walks the pattern once, greedily:
//!
//! - `X*` is reported as a wildcard and skipped without consuming any input
//!   character.
//! - `.` or a literal consumes one character when it matches.
//! - The first mismatch ends the run.
//!
//! There is no backtracking. `("aa", "a*")` therefore ends with unconsumed
//! input and reports no match, unlike a real matcher. The walk is kept this
//! way on purpose: it visualizes the decision path, not a correct answer.

use crate::step::{Phase, RegexDetail, StepPair, StepRecorder, StepState};

pub fn simulate(s: &str, p: &str) -> StepPair {
    let text: Vec<char> = s.chars().collect();
    let pattern: Vec<char> = p.chars().collect();
    let mut recorder = StepRecorder::new();

    recorder.record(
        format!(
            "Starting regex match for string \"{}\" with pattern \"{}\".",
            s, p
        ),
        StepState::new(
            Phase::Init,
            RegexDetail {
                pattern_char: None,
                string_char: None,
                wildcard: false,
                matched: false,
            },
        ),
    );

    let (mut si, mut pi) = (0usize, 0usize);
    while pi < pattern.len() {
        let char_p = pattern[pi];
        let string_char = text.get(si).copied();

        if pattern.get(pi + 1) == Some(&'*') {
            recorder.record(
                format!("Wildcard \"*\" detected for character \"{}\".", char_p),
                StepState::new(
                    Phase::Searching,
                    RegexDetail {
                        pattern_char: Some(char_p),
                        string_char,
                        wildcard: true,
                        matched: true,
                    },
                )
                .with_pointer("si", si)
                .with_pointer("pi", pi),
            );
            pi += 2;
            continue;
        }

        let matched = string_char.is_some_and(|c| char_p == '.' || char_p == c);
        let shown = string_char.map(String::from).unwrap_or_default();
        let state = StepState::new(
            if matched {
                Phase::Searching
            } else {
                Phase::NotFound
            },
            RegexDetail {
                pattern_char: Some(char_p),
                string_char,
                wildcard: false,
                matched,
            },
        )
        .with_pointer("si", si)
        .with_pointer("pi", pi);

        if !matched {
            recorder.record(
                format!("Mismatch: \"{}\" does not match \"{}\".", shown, char_p),
                state,
            );
            return StepPair::shared(recorder.finish());
        }

        recorder.record(
            format!("Match: \"{}\" matches \"{}\".", shown, char_p),
            state,
        );
        si += 1;
        pi += 1;
    }

    let consumed = si == text.len();
    recorder.record(
        if consumed {
            "Pattern exhausted and the whole string was consumed: match.".to_string()
        } else {
            format!(
                "Pattern exhausted with {} unmatched character(s) left: no match.",
                text.len() - si
            )
        },
        StepState::new(
            if consumed {
                Phase::Found
            } else {
                Phase::NotFound
            },
            RegexDetail {
                pattern_char: None,
                string_char: text.get(si).copied(),
                wildcard: false,
                matched: consumed,
            },
        )
        .with_pointer("si", si),
    );
    StepPair::shared(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_literals_match() {
        let pair = simulate("ab", "a.");
        let last = pair.optimal_steps.last().unwrap();
        assert_eq!(last.phase(), Phase::Found);
    }

    #[test]
    fn test_star_does_not_consume_input() {
        let pair = simulate("aa", "a*");
        let last = pair.optimal_steps.last().unwrap();
        assert_eq!(last.phase(), Phase::NotFound);
        assert_eq!(last.state.pointer("si"), Some(0));
    }

    #[test]
    fn test_stops_at_first_mismatch() {
        let pair = simulate("abc", "axc");
        // start, match 'a', mismatch 'x'
        assert_eq!(pair.optimal_steps.len(), 3);
        assert_eq!(pair.optimal_steps[2].phase(), Phase::NotFound);
    }
}
