//! Longest substring without repeating characters.
//!
//! The brute pass evaluates every substring `s[i..=j]` with its own
//! duplicate scan. The optimal pass keeps a window `[l, r]` and a character
//! set; a repeat at `r` evicts from the left one character per step before
//! the expansion step for `r` is recorded.
//!
//! Operates on Unicode scalar values, not bytes.

use crate::step::{Phase, Step, StepPair, StepRecorder, StepState, WindowDetail};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

pub fn simulate(s: &str) -> StepPair {
    let chars: Vec<char> = s.chars().collect();
    StepPair::new(brute_force(&chars), optimal(&chars))
}

fn brute_force(chars: &[char]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut max_len = 0;

    for i in 0..chars.len() {
        for j in i..chars.len() {
            let sub = &chars[i..=j];
            let mut set = FxHashSet::default();
            let has_repeat = !sub.iter().all(|c| set.insert(*c));

            let current_len = sub.len();
            let is_new_max = !has_repeat && current_len > max_len;
            if is_new_max {
                max_len = current_len;
            }

            let window: String = sub.iter().collect();
            let description = if has_repeat {
                format!("Substring \"{}\" has repeating characters.", window)
            } else {
                format!("Substring \"{}\" is valid. Length: {}", window, current_len)
            };

            recorder.record_at(
                if has_repeat { 15 } else { 10 },
                description,
                StepState::new(
                    Phase::Searching,
                    WindowDetail {
                        window,
                        current_len,
                        max_len,
                        has_repeat,
                        is_new_max,
                        duplicate_char: None,
                        char_set: None,
                    },
                )
                .with_pointer("i", i)
                .with_pointer("j", j)
                .with_window(i, j),
            );
        }
    }

    record_summary(&mut recorder, max_len, None);
    recorder.finish()
}

fn optimal(chars: &[char]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut char_set: FxHashSet<char> = FxHashSet::default();
    let mut l = 0;
    let mut best = 0;

    for r in 0..chars.len() {
        let char_r = chars[r];

        while char_set.contains(&char_r) {
            let char_l = chars[l];
            recorder.record_at(
                10,
                format!(
                    "Duplicate detected! Removing \"{}\" at index {} and shrinking window.",
                    char_l, l
                ),
                StepState::new(
                    Phase::Searching,
                    WindowDetail {
                        window: chars[l..r].iter().collect(),
                        current_len: r - l,
                        max_len: best,
                        has_repeat: true,
                        is_new_max: false,
                        duplicate_char: Some(char_r),
                        char_set: Some(snapshot(&char_set)),
                    },
                )
                .with_pointer("l", l)
                .with_pointer("r", r)
                .with_window(l, r),
            );
            char_set.remove(&char_l);
            l += 1;
        }

        char_set.insert(char_r);
        let current_len = r - l + 1;
        let is_new_max = current_len > best;
        if is_new_max {
            best = current_len;
        }

        let window: String = chars[l..=r].iter().collect();
        let description = if is_new_max {
            format!(
                "New maximum length found! Window: \"{}\", Length: {}",
                window, current_len
            )
        } else {
            format!(
                "Expanding window to include \"{}\" at index {}. Window: \"{}\"",
                char_r, r, window
            )
        };

        recorder.record_at(
            if is_new_max { 13 } else { 12 },
            description,
            StepState::new(
                Phase::Searching,
                WindowDetail {
                    window,
                    current_len,
                    max_len: best,
                    has_repeat: false,
                    is_new_max,
                    duplicate_char: None,
                    char_set: Some(snapshot(&char_set)),
                },
            )
            .with_pointer("l", l)
            .with_pointer("r", r)
            .with_window(l, r),
        );
    }

    record_summary(&mut recorder, best, Some(snapshot(&char_set)));
    recorder.finish()
}

fn record_summary(recorder: &mut StepRecorder, max_len: usize, char_set: Option<BTreeSet<char>>) {
    let description = if recorder.is_empty() {
        "Empty string: the longest substring has length 0.".to_string()
    } else {
        format!("Longest substring without repeating characters: {}", max_len)
    };
    recorder.record(
        description,
        StepState::new(
            Phase::Found,
            WindowDetail {
                window: String::new(),
                current_len: 0,
                max_len,
                has_repeat: false,
                is_new_max: false,
                duplicate_char: None,
                char_set,
            },
        ),
    );
}

fn snapshot(set: &FxHashSet<char>) -> BTreeSet<char> {
    set.iter().copied().collect()
}

/// Final maximum length reported by a step list
pub fn reported_max(steps: &[Step]) -> Option<usize> {
    match &steps.last()?.state.detail {
        crate::step::StepDetail::Window(w) => Some(w.max_len),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_steps_precede_expansion() {
        let pair = simulate("abca");
        let steps = &pair.optimal_steps;
        // a, b, c expand; the second 'a' evicts index 0 then expands
        assert_eq!(steps[3].active_line, Some(10));
        assert_eq!(steps[3].state.pointer("l"), Some(0));
        assert_eq!(steps[4].state.pointer("l"), Some(1));
        assert_eq!(steps[4].state.pointer("r"), Some(3));
        assert_eq!(reported_max(steps), Some(3));
    }

    #[test]
    fn test_equal_length_window_is_not_a_new_max() {
        let pair = simulate("abab");
        let new_max_count = pair
            .optimal_steps
            .iter()
            .filter(|s| match &s.state.detail {
                crate::step::StepDetail::Window(w) => w.is_new_max,
                _ => false,
            })
            .count();
        // Only lengths 1 and 2 are new maxima
        assert_eq!(new_max_count, 2);
    }

    #[test]
    fn test_brute_evaluates_every_substring() {
        let pair = simulate("abc");
        // 6 substrings plus the summary
        assert_eq!(pair.brute_force_steps.len(), 7);
        assert_eq!(reported_max(&pair.brute_force_steps), Some(3));
    }
}
