//! Add two numbers stored as least-significant-digit-first lists.

use crate::step::{DigitSumDetail, Phase, StepPair, StepRecorder, StepState};

/// Digits are expected in `0..=9`. Larger values still add without overflow,
/// carrying everything above the last digit.
pub fn simulate(l1: &[u8], l2: &[u8]) -> StepPair {
    let mut recorder = StepRecorder::new();
    let mut result: Vec<u8> = Vec::new();
    let mut carry = 0u16;
    let mut i = 0;

    while i < l1.len().max(l2.len()) || carry > 0 {
        let v1 = l1.get(i).copied().unwrap_or(0);
        let v2 = l2.get(i).copied().unwrap_or(0);
        let sum = v1 as u16 + v2 as u16 + carry;
        let digit = (sum % 10) as u8;
        let carry_out = sum / 10;
        result.push(digit);

        let carry_text = if carry > 0 {
            format!(" + carry {}", carry)
        } else {
            String::new()
        };
        let mut state = StepState::new(
            Phase::Searching,
            DigitSumDetail {
                v1,
                v2,
                carry_in: carry,
                sum,
                digit,
                carry_out,
                result: result.clone(),
            },
        );
        if i < l1.len() {
            state = state.with_pointer("l1", i);
        }
        if i < l2.len() {
            state = state.with_pointer("l2", i);
        }

        recorder.record_at(
            5,
            format!(
                "Adding {} + {}{} = {}. Digit: {}, New Carry: {}",
                v1, v2, carry_text, sum, digit, carry_out
            ),
            state,
        );

        carry = carry_out;
        i += 1;
    }

    recorder.record(
        format!("Addition complete. Result list: {:?}", result),
        StepState::new(
            Phase::Found,
            DigitSumDetail {
                v1: 0,
                v2: 0,
                carry_in: 0,
                sum: 0,
                digit: 0,
                carry_out: 0,
                result,
            },
        ),
    );
    StepPair::shared(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepDetail;

    fn result(pair: &StepPair) -> Vec<u8> {
        match &pair.optimal_steps.last().unwrap().state.detail {
            StepDetail::DigitSum(d) => d.result.clone(),
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn test_classic_example() {
        // 342 + 465 = 807
        let pair = simulate(&[2, 4, 3], &[5, 6, 4]);
        assert_eq!(result(&pair), vec![7, 0, 8]);
        assert_eq!(pair.optimal_steps.len(), 4);
    }

    #[test]
    fn test_trailing_carry_gets_its_own_step() {
        let pair = simulate(&[9, 9], &[1]);
        assert_eq!(result(&pair), vec![0, 0, 1]);
        // Position 2 has no input digits, only the carry
        let carry_step = &pair.optimal_steps[2];
        assert!(carry_step.state.pointers.is_empty());
    }

    #[test]
    fn test_out_of_range_digits_do_not_overflow() {
        // 255 + 255 = 510: digit 0, carry 51 propagates as 1 then 5
        let pair = simulate(&[255], &[255]);
        assert_eq!(result(&pair), vec![0, 1, 5]);
    }

    #[test]
    fn test_empty_lists() {
        let pair = simulate(&[], &[]);
        assert_eq!(pair.optimal_steps.len(), 1);
        assert!(result(&pair).is_empty());
    }
}
