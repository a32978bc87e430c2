//! Valid parentheses with an explicit stack.

use crate::step::{BracketDetail, Phase, StepPair, StepRecorder, StepState};

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Characters that are not closers are pushed, as the stack matcher does
pub fn simulate(s: &str) -> StepPair {
    let mut recorder = StepRecorder::new();
    let mut stack: Vec<char> = Vec::new();

    recorder.record(
        "Starting Valid Parentheses check using a Stack.",
        StepState::new(
            Phase::Init,
            BracketDetail {
                stack: Vec::new(),
                current: None,
                popped: None,
                balanced: false,
            },
        ),
    );

    for (i, ch) in s.chars().enumerate() {
        match opener_for(ch) {
            Some(expected) => {
                let popped = stack.pop();
                let matched = popped == Some(expected);
                let shown = popped.map(String::from).unwrap_or_else(|| "nothing".into());
                let state = StepState::new(
                    if matched {
                        Phase::Searching
                    } else {
                        Phase::NotFound
                    },
                    BracketDetail {
                        stack: stack.clone(),
                        current: Some(ch),
                        popped,
                        balanced: false,
                    },
                )
                .with_pointer("i", i);

                if !matched {
                    recorder.record(
                        format!(
                            "Closing bracket '{}' detected. Expected '{}' but popped {}. Unbalanced!",
                            ch, expected, shown
                        ),
                        state,
                    );
                    return StepPair::shared(recorder.finish());
                }
                recorder.record(
                    format!(
                        "Closing bracket '{}' detected. Popped '{}' from stack: matches.",
                        ch, shown
                    ),
                    state,
                );
            }
            None => {
                stack.push(ch);
                recorder.record(
                    format!("Opening bracket '{}' detected. Pushing to stack.", ch),
                    StepState::new(
                        Phase::Searching,
                        BracketDetail {
                            stack: stack.clone(),
                            current: Some(ch),
                            popped: None,
                            balanced: false,
                        },
                    )
                    .with_pointer("i", i),
                );
            }
        }
    }

    let balanced = stack.is_empty();
    let description = if balanced {
        "All brackets matched correctly. Stack is empty.".to_string()
    } else {
        format!(
            "Some brackets were never closed. Stack still contains: {}",
            stack.iter().map(char::to_string).collect::<Vec<_>>().join(", ")
        )
    };
    recorder.record(
        description,
        StepState::new(
            if balanced {
                Phase::Found
            } else {
                Phase::NotFound
            },
            BracketDetail {
                stack,
                current: None,
                popped: None,
                balanced,
            },
        ),
    );
    StepPair::shared(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(s: &str) -> Phase {
        simulate(s).optimal_steps.last().unwrap().phase()
    }

    #[test]
    fn test_balanced_inputs() {
        assert_eq!(outcome("()[]{}"), Phase::Found);
        assert_eq!(outcome("{[()]}"), Phase::Found);
        assert_eq!(outcome(""), Phase::Found);
    }

    #[test]
    fn test_unbalanced_inputs() {
        assert_eq!(outcome("(]"), Phase::NotFound);
        assert_eq!(outcome("(("), Phase::NotFound);
        // Closer on an empty stack stops immediately
        let pair = simulate(")(");
        assert_eq!(pair.optimal_steps.len(), 2);
    }
}
