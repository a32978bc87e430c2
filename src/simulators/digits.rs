//! Digit manipulation under 32-bit signed semantics.
//!
//! - [`reverse_integer`]: reverse the digits, returning 0 on overflow
//! - [`atoi`]: parse a leading integer, clamping on overflow
//! - [`palindrome_number`]: compare a number with its digit reversal
//!
//! None of these has a separate brute-force variant, so each returns a
//! [`StepPair`] whose two lists are the same sequence.

use super::constants::{boundary_digit, INT_MAX, INT_MIN, OVERFLOW_GUARD};
use crate::step::{
    AtoiDetail, PalindromeNumberDetail, Phase, ReverseDetail, StepPair, StepRecorder, StepState,
};

/// Would `acc * 10 + digit` leave the 32-bit range?
fn overflows(acc: i64, digit: i64, negative: bool) -> bool {
    acc > OVERFLOW_GUARD || (acc == OVERFLOW_GUARD && digit > boundary_digit(negative))
}

pub fn reverse_integer(x: i32) -> StepPair {
    let mut recorder = StepRecorder::new();
    let negative = x < 0;
    let sign: i8 = if negative { -1 } else { 1 };
    let mut remaining = (x as i64).abs();
    let mut res = 0i64;

    recorder.record(
        format!("Starting reversal of {}. Sign: {}", x, sign),
        StepState::new(
            Phase::Init,
            ReverseDetail {
                x,
                sign,
                remaining,
                popped: None,
                result: 0,
                overflow: false,
            },
        ),
    );

    while remaining > 0 {
        let pop = remaining % 10;
        remaining /= 10;

        if overflows(res, pop, negative) {
            recorder.record(
                "Overflow detected! Returning 0.",
                StepState::new(
                    Phase::Found,
                    ReverseDetail {
                        x,
                        sign,
                        remaining,
                        popped: Some(pop as u8),
                        result: 0,
                        overflow: true,
                    },
                ),
            );
            return StepPair::shared(recorder.finish());
        }

        res = res * 10 + pop;
        let signed = res * sign as i64;
        recorder.record(
            format!("Popped {}, current result: {}", pop, signed),
            StepState::new(
                Phase::Searching,
                ReverseDetail {
                    x,
                    sign,
                    remaining,
                    popped: Some(pop as u8),
                    result: signed,
                    overflow: false,
                },
            ),
        );
    }

    let signed = res * sign as i64;
    recorder.record(
        format!("Reversal complete: {}", signed),
        StepState::new(
            Phase::Found,
            ReverseDetail {
                x,
                sign,
                remaining: 0,
                popped: None,
                result: signed,
                overflow: false,
            },
        ),
    );
    StepPair::shared(recorder.finish())
}

pub fn atoi(s: &str) -> StepPair {
    let chars: Vec<char> = s.chars().collect();
    let mut recorder = StepRecorder::new();
    let detail = |sign: i8, digit: Option<u8>, value: i64, clamped: bool| AtoiDetail {
        input: s.to_string(),
        sign,
        digit,
        value,
        clamped,
    };

    let mut i = chars.iter().take_while(|c| c.is_whitespace()).count();
    recorder.record(
        format!(
            "Input string: \"{}\". Trimming whitespace... skipped {} character(s).",
            s, i
        ),
        StepState::new(Phase::Init, detail(1, None, 0, false)).with_pointer("i", i),
    );

    let mut sign: i8 = 1;
    if let Some(c @ ('+' | '-')) = chars.get(i).copied() {
        sign = if c == '-' { -1 } else { 1 };
        recorder.record(
            format!("Sign detected: {}", c),
            StepState::new(Phase::Searching, detail(sign, None, 0, false)).with_pointer("i", i),
        );
        i += 1;
    }

    let negative = sign < 0;
    let mut value = 0i64;
    while let Some(d) = chars.get(i).and_then(|c| c.to_digit(10)) {
        let digit = d as i64;

        if overflows(value, digit, negative) {
            let clamped = if negative { INT_MIN } else { INT_MAX };
            recorder.record(
                "Overflow detected! Clamping to 32-bit limit.",
                StepState::new(Phase::Found, detail(sign, Some(d as u8), clamped, true))
                    .with_pointer("i", i),
            );
            return StepPair::shared(recorder.finish());
        }

        value = value * 10 + digit;
        recorder.record(
            format!("Added digit {}, current: {}", digit, value * sign as i64),
            StepState::new(
                Phase::Searching,
                detail(sign, Some(d as u8), value * sign as i64, false),
            )
            .with_pointer("i", i),
        );
        i += 1;
    }

    let result = value * sign as i64;
    recorder.record(
        format!("Parsing complete. Final integer: {}", result),
        StepState::new(Phase::Found, detail(sign, None, result, false)).with_pointer("i", i),
    );
    StepPair::shared(recorder.finish())
}

pub fn palindrome_number(x: i32) -> StepPair {
    let mut recorder = StepRecorder::new();

    if x < 0 {
        recorder.record(
            "Negative numbers can't be palindromes.",
            StepState::new(
                Phase::NotFound,
                PalindromeNumberDetail {
                    x,
                    remaining: x as i64,
                    reversed: 0,
                    is_palindrome: Some(false),
                },
            ),
        );
        return StepPair::shared(recorder.finish());
    }

    let mut remaining = x as i64;
    let mut reversed = 0i64;
    recorder.record(
        format!("Checking if {} is a palindrome.", x),
        StepState::new(
            Phase::Init,
            PalindromeNumberDetail {
                x,
                remaining,
                reversed,
                is_palindrome: None,
            },
        ),
    );

    while remaining > 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
        recorder.record(
            format!(
                "Extracted digit, reversed so far: {}, remaining: {}",
                reversed, remaining
            ),
            StepState::new(
                Phase::Searching,
                PalindromeNumberDetail {
                    x,
                    remaining,
                    reversed,
                    is_palindrome: None,
                },
            ),
        );
    }

    let is_palindrome = x as i64 == reversed;
    recorder.record(
        if is_palindrome {
            format!("{} matches its reverse! Palindrome confirmed.", x)
        } else {
            format!("{} != {}. Not a palindrome.", x, reversed)
        },
        StepState::new(
            if is_palindrome {
                Phase::Found
            } else {
                Phase::NotFound
            },
            PalindromeNumberDetail {
                x,
                remaining: 0,
                reversed,
                is_palindrome: Some(is_palindrome),
            },
        ),
    );
    StepPair::shared(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepDetail;

    fn reversed(pair: &StepPair) -> (i64, bool) {
        match &pair.optimal_steps.last().unwrap().state.detail {
            StepDetail::Reverse(r) => (r.result, r.overflow),
            other => panic!("unexpected detail {:?}", other),
        }
    }

    fn parsed(pair: &StepPair) -> (i64, bool) {
        match &pair.optimal_steps.last().unwrap().state.detail {
            StepDetail::Atoi(a) => (a.value, a.clamped),
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn test_reverse_negative() {
        assert_eq!(reversed(&reverse_integer(-123)), (-321, false));
    }

    #[test]
    fn test_reverse_overflow_returns_zero() {
        let pair = reverse_integer(1_534_236_469);
        assert_eq!(reversed(&pair), (0, true));
        assert_eq!(pair.optimal_steps.last().unwrap().phase(), Phase::Found);
    }

    #[test]
    fn test_reverse_extremes() {
        assert_eq!(reversed(&reverse_integer(-2_147_483_412)), (-2_143_847_412, false));
        assert_eq!(reversed(&reverse_integer(i32::MIN)), (0, true));
        assert_eq!(reversed(&reverse_integer(i32::MAX)), (0, true));
    }

    #[test]
    fn test_overflow_guard_boundary_digit() {
        assert!(!overflows(OVERFLOW_GUARD, 7, false));
        assert!(overflows(OVERFLOW_GUARD, 8, false));
        assert!(!overflows(OVERFLOW_GUARD, 8, true));
        assert!(overflows(OVERFLOW_GUARD + 1, 0, true));
    }

    #[test]
    fn test_atoi_stops_at_non_digit() {
        assert_eq!(parsed(&atoi("4193 with words")), (4193, false));
        assert_eq!(parsed(&atoi("words and 987")), (0, false));
    }

    #[test]
    fn test_atoi_clamps() {
        assert_eq!(parsed(&atoi("-91283472332")), (INT_MIN, true));
        assert_eq!(parsed(&atoi("2147483648")), (INT_MAX, true));
        assert_eq!(parsed(&atoi("2147483647")), (INT_MAX, false));
        assert_eq!(parsed(&atoi("-21474836489")), (INT_MIN, true));
    }

    #[test]
    fn test_atoi_int_min_fits_without_clamping() {
        let pair = atoi("-2147483648");
        assert_eq!(parsed(&pair), (INT_MIN, false));
        assert!(pair
            .optimal_steps
            .iter()
            .all(|step| !step.description.contains("Overflow")));
    }

    #[test]
    fn test_atoi_emits_sign_step() {
        let pair = atoi("  +7");
        assert_eq!(pair.optimal_steps[0].state.pointer("i"), Some(2));
        assert!(pair.optimal_steps[1].description.contains("Sign detected: +"));
        assert_eq!(parsed(&pair), (7, false));
    }

    #[test]
    fn test_palindrome_number() {
        let last = |pair: StepPair| pair.optimal_steps.last().unwrap().phase();
        assert_eq!(last(palindrome_number(121)), Phase::Found);
        assert_eq!(last(palindrome_number(10)), Phase::NotFound);
        assert_eq!(last(palindrome_number(0)), Phase::Found);
        assert_eq!(palindrome_number(-121).optimal_steps.len(), 1);
    }
}
