//! Maximum subarray sum: every-subarray scan vs Kadane.

use crate::step::{Phase, Step, StepDetail, StepPair, StepRecorder, StepState, SubarrayDetail};

pub fn simulate(nums: &[i32]) -> StepPair {
    if nums.is_empty() {
        let mut recorder = StepRecorder::new();
        recorder.record(
            "Empty array: there is no subarray to sum.",
            StepState::new(
                Phase::NotFound,
                SubarrayDetail {
                    current_sum: 0,
                    best_sum: 0,
                    is_new_max: false,
                    best_range: (0, 0),
                },
            ),
        );
        return StepPair::shared(recorder.finish());
    }

    StepPair::new(brute_force(nums), kadane(nums))
}

fn brute_force(nums: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut best = i64::MIN;
    let mut best_range = (0, 0);

    for i in 0..nums.len() {
        let mut sum = 0i64;
        for j in i..nums.len() {
            sum += nums[j] as i64;
            let is_new_max = sum > best;
            if is_new_max {
                best = sum;
                best_range = (i, j);
            }

            recorder.record(
                format!("Sum of [{}..={}] is {}. Best so far: {}", i, j, sum, best),
                StepState::new(
                    Phase::Searching,
                    SubarrayDetail {
                        current_sum: sum,
                        best_sum: best,
                        is_new_max,
                        best_range,
                    },
                )
                .with_pointer("i", i)
                .with_pointer("j", j)
                .with_window(i, j),
            );
        }
    }

    record_result(&mut recorder, best, best_range);
    recorder.finish()
}

fn kadane(nums: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut best = i64::MIN;
    let mut current = 0i64;
    let (mut start, mut end, mut candidate_start) = (0, 0, 0);

    for (i, &value) in nums.iter().enumerate() {
        let value = value as i64;
        current += value;

        let restarted = value > current;
        if restarted {
            current = value;
            candidate_start = i;
        }

        let is_new_max = current > best;
        if is_new_max {
            best = current;
            start = candidate_start;
            end = i;
        }

        let action = if restarted {
            "Restarting the run here."
        } else {
            "Extending the current run."
        };
        recorder.record(
            format!(
                "Element {} at index {}. {} Current: {}, Max so far: {}",
                value, i, action, current, best
            ),
            StepState::new(
                Phase::Searching,
                SubarrayDetail {
                    current_sum: current,
                    best_sum: best,
                    is_new_max,
                    best_range: (start, end),
                },
            )
            .with_pointer("i", i)
            .with_window(start, end),
        );
    }

    record_result(&mut recorder, best, (start, end));
    recorder.finish()
}

fn record_result(recorder: &mut StepRecorder, best: i64, range: (usize, usize)) {
    recorder.record(
        format!(
            "Maximum subarray sum is {} over indices [{}, {}].",
            best, range.0, range.1
        ),
        StepState::new(
            Phase::Found,
            SubarrayDetail {
                current_sum: best,
                best_sum: best,
                is_new_max: false,
                best_range: range,
            },
        )
        .with_window(range.0, range.1),
    );
}

/// Best sum reported by the terminal step of a list
pub fn reported_best(steps: &[Step]) -> Option<i64> {
    match &steps.last()?.state.detail {
        StepDetail::Subarray(s) if steps.last()?.phase() == Phase::Found => Some(s.best_sum),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let pair = simulate(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
        assert_eq!(reported_best(&pair.optimal_steps), Some(6));
        assert_eq!(reported_best(&pair.brute_force_steps), Some(6));
        assert_eq!(pair.optimal_steps.last().unwrap().state.window_range, Some((3, 6)));
    }

    #[test]
    fn test_all_negative() {
        let pair = simulate(&[-3, -1, -2]);
        assert_eq!(reported_best(&pair.optimal_steps), Some(-1));
        assert_eq!(reported_best(&pair.brute_force_steps), Some(-1));
    }
}
