//! Longest palindromic substring: substring check vs expand-around-center.

use crate::step::{PalindromeDetail, Phase, Step, StepPair, StepRecorder, StepState};

pub fn simulate(s: &str) -> StepPair {
    let chars: Vec<char> = s.chars().collect();
    StepPair::new(brute_force(&chars), optimal(&chars))
}

fn brute_force(chars: &[char]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut longest: &[char] = &[];

    for i in 0..chars.len() {
        for j in i..chars.len() {
            let sub = &chars[i..=j];
            let is_palindrome = sub.iter().eq(sub.iter().rev());
            if is_palindrome && sub.len() > longest.len() {
                longest = sub;
            }

            let substring: String = sub.iter().collect();
            recorder.record(
                format!(
                    "Checking substring \"{}\". {}",
                    substring,
                    if is_palindrome {
                        "It's a palindrome!"
                    } else {
                        "Not a palindrome."
                    }
                ),
                StepState::new(
                    Phase::Searching,
                    PalindromeDetail {
                        substring,
                        current_len: sub.len(),
                        max_len: longest.len(),
                        is_palindrome,
                        longest: longest.iter().collect(),
                    },
                )
                .with_pointer("i", i)
                .with_pointer("j", j)
                .with_window(i, j),
            );
        }
    }

    record_result(&mut recorder, longest.iter().collect());
    recorder.finish()
}

fn optimal(chars: &[char]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut best = (0usize, 0usize); // [start, end) of the longest so far

    for center in 0..chars.len() {
        expand(chars, center, center, &mut best, &mut recorder);
        expand(chars, center, center + 1, &mut best, &mut recorder);
    }

    record_result(&mut recorder, chars[best.0..best.1].iter().collect());
    recorder.finish()
}

fn expand(
    chars: &[char],
    mut l: usize,
    mut r: usize,
    best: &mut (usize, usize),
    recorder: &mut StepRecorder,
) {
    while r < chars.len() && chars[l] == chars[r] {
        let len = r - l + 1;
        if len > best.1 - best.0 {
            *best = (l, r + 1);
        }

        let substring: String = chars[l..=r].iter().collect();
        recorder.record(
            format!(
                "Symmetry found! Expanding from center. Substring: \"{}\"",
                substring
            ),
            StepState::new(
                Phase::Searching,
                PalindromeDetail {
                    substring,
                    current_len: len,
                    max_len: best.1 - best.0,
                    is_palindrome: true,
                    longest: chars[best.0..best.1].iter().collect(),
                },
            )
            .with_pointer("l", l)
            .with_pointer("r", r)
            .with_window(l, r),
        );

        match l.checked_sub(1) {
            Some(next) => l = next,
            None => break,
        }
        r += 1;
    }
}

fn record_result(recorder: &mut StepRecorder, longest: String) {
    let len = longest.chars().count();
    recorder.record(
        format!("Final longest palindromic substring: \"{}\"", longest),
        StepState::new(
            Phase::Found,
            PalindromeDetail {
                substring: longest.clone(),
                current_len: len,
                max_len: len,
                is_palindrome: true,
                longest,
            },
        ),
    );
}

/// Longest palindrome reported by the terminal step of a list
pub fn reported_longest(steps: &[Step]) -> Option<&str> {
    match &steps.last()?.state.detail {
        crate::step::StepDetail::Palindrome(p) => Some(&p.longest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_keep_earliest() {
        let pair = simulate("babad");
        assert_eq!(reported_longest(&pair.optimal_steps), Some("bab"));
        assert_eq!(reported_longest(&pair.brute_force_steps), Some("bab"));
    }

    #[test]
    fn test_even_center() {
        let pair = simulate("cbbd");
        assert_eq!(reported_longest(&pair.optimal_steps), Some("bb"));
    }

    #[test]
    fn test_empty_string_single_terminal_step() {
        let pair = simulate("");
        assert_eq!(pair.optimal_steps.len(), 1);
        assert_eq!(pair.brute_force_steps.len(), 1);
        assert_eq!(reported_longest(&pair.optimal_steps), Some(""));
    }
}
