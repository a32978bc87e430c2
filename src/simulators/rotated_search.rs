//! Search in a rotated sorted array: linear scan vs binary search on the sorted half.
//!
//! The halving pass assumes distinct values. With duplicates it can discard the
//! half holding the target and report it missing.

use crate::step::{
    Phase, RotatedSearchDetail, SortedHalf, Step, StepDetail, StepPair, StepRecorder, StepState,
};

pub fn simulate(nums: &[i32], target: i32) -> StepPair {
    StepPair::new(linear(nums, target), halving(nums, target))
}

pub fn reported_index(steps: &[Step]) -> Option<usize> {
    match &steps.last()?.state.detail {
        StepDetail::RotatedSearch(r) => r.found_index,
        _ => None,
    }
}

fn detail(
    nums: &[i32],
    target: i32,
    value: Option<i32>,
    sorted_half: Option<SortedHalf>,
    found_index: Option<usize>,
) -> RotatedSearchDetail {
    RotatedSearchDetail {
        array: nums.to_vec(),
        target,
        value,
        sorted_half,
        found_index,
    }
}

fn linear(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    for (i, &value) in nums.iter().enumerate() {
        if value == target {
            recorder.record(
                format!("Found target {} at index {}!", target, i),
                StepState::new(Phase::Found, detail(nums, target, Some(value), None, Some(i)))
                    .with_pointer("i", i),
            );
            return recorder.finish();
        }
        recorder.record(
            format!("Index {} holds {}, not {}.", i, value, target),
            StepState::new(Phase::Searching, detail(nums, target, Some(value), None, None))
                .with_pointer("i", i),
        );
    }

    record_missing(&mut recorder, nums, target);
    recorder.finish()
}

fn halving(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    // Half-open [left, right); `last` is the inclusive right edge
    let (mut left, mut right) = (0usize, nums.len());
    let mut state = StepState::new(Phase::Init, detail(nums, target, None, None, None))
        .with_pointer("l", left);
    if right > 0 {
        state = state.with_pointer("r", right - 1);
    }
    recorder.record(
        "Starting Search in Rotated Sorted Array. Initializing search boundaries.",
        state,
    );

    while left < right {
        let last = right - 1;
        let mid = left + (last - left) / 2;
        let value = nums[mid];

        if value == target {
            recorder.record(
                format!(
                    "Checking mid point index {} (value: {}). Target found!",
                    mid, value
                ),
                StepState::new(
                    Phase::Found,
                    detail(nums, target, Some(value), None, Some(mid)),
                )
                .with_pointer("l", left)
                .with_pointer("r", last)
                .with_pointer("mid", mid),
            );
            return recorder.finish();
        }

        let (half, go_left) = if nums[left] <= value {
            let in_left = nums[left] <= target && target < value;
            (SortedHalf::Left, in_left)
        } else {
            let in_right = value < target && target <= nums[last];
            (SortedHalf::Right, !in_right)
        };
        let sorted_span = match half {
            SortedHalf::Left => format!("Left half [{}..{}]", nums[left], value),
            SortedHalf::Right => format!("Right half [{}..{}]", value, nums[last]),
        };
        let side = if go_left { "left" } else { "right" };

        recorder.record(
            format!(
                "Checking mid point index {} (value: {}). {} is sorted; searching {} half.",
                mid, value, sorted_span, side
            ),
            StepState::new(
                Phase::Searching,
                detail(nums, target, Some(value), Some(half), None),
            )
            .with_pointer("l", left)
            .with_pointer("r", last)
            .with_pointer("mid", mid),
        );

        if go_left {
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    record_missing(&mut recorder, nums, target);
    recorder.finish()
}

fn record_missing(recorder: &mut StepRecorder, nums: &[i32], target: i32) {
    recorder.record(
        format!("Target {} not found in array. Search space exhausted.", target),
        StepState::new(Phase::NotFound, detail(nums, target, None, None, None)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_in_rotated_tail() {
        let pair = simulate(&[4, 5, 6, 7, 0, 1, 2], 0);
        assert_eq!(reported_index(&pair.optimal_steps), Some(4));
        assert_eq!(reported_index(&pair.brute_force_steps), Some(4));
        assert!(pair.optimal_steps.len() < pair.brute_force_steps.len());
    }

    #[test]
    fn test_missing_target() {
        let pair = simulate(&[4, 5, 6, 7, 0, 1, 2], 3);
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);
        assert_eq!(pair.brute_result().unwrap().phase(), Phase::NotFound);
    }

    #[test]
    fn test_sorted_half_is_recorded() {
        let pair = simulate(&[4, 5, 6, 7, 0, 1, 2], 0);
        match &pair.optimal_steps[1].state.detail {
            StepDetail::RotatedSearch(r) => {
                assert_eq!(r.value, Some(7));
                assert_eq!(r.sorted_half, Some(SortedHalf::Left));
            }
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_single() {
        let pair = simulate(&[], 1);
        assert_eq!(pair.optimal_steps.len(), 2);
        assert_eq!(pair.brute_force_steps.len(), 1);

        let pair = simulate(&[1], 1);
        assert_eq!(reported_index(&pair.optimal_steps), Some(0));
    }

    #[test]
    fn test_every_rotation_finds_every_value() {
        let base = [1, 3, 5, 7, 9, 11];
        for k in 0..base.len() {
            let rotated: Vec<i32> = base[k..].iter().chain(&base[..k]).copied().collect();
            for (i, &value) in rotated.iter().enumerate() {
                assert_eq!(reported_index(&simulate(&rotated, value).optimal_steps), Some(i));
            }
        }
    }
}
