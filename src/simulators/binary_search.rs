//! Search a sorted array: linear scan vs halving.

use crate::step::{Phase, SearchDetail, Step, StepPair, StepRecorder, StepState};

pub fn simulate(nums: &[i32], target: i32) -> StepPair {
    StepPair::new(linear(nums, target), halving(nums, target))
}

fn detail(nums: &[i32], target: i32, value: Option<i32>, found_index: Option<usize>) -> SearchDetail {
    SearchDetail {
        array: nums.to_vec(),
        target,
        value,
        found_index,
    }
}

fn linear(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    for (i, &value) in nums.iter().enumerate() {
        if value == target {
            recorder.record(
                format!("Found target {} at index {}!", target, i),
                StepState::new(Phase::Found, detail(nums, target, Some(value), Some(i)))
                    .with_pointer("i", i),
            );
            return recorder.finish();
        }
        recorder.record(
            format!("Index {} holds {}, not {}.", i, value, target),
            StepState::new(Phase::Searching, detail(nums, target, Some(value), None))
                .with_pointer("i", i),
        );
    }

    record_missing(&mut recorder, nums, target);
    recorder.finish()
}

fn halving(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    // Half-open [left, right) avoids underflow when the target is below nums[0]
    let (mut left, mut right) = (0usize, nums.len());
    let mut state = StepState::new(Phase::Init, detail(nums, target, None, None))
        .with_pointer("left", left);
    if right > 0 {
        state = state.with_pointer("right", right - 1);
    }
    recorder.record(
        format!(
            "Starting Binary Search for {}. Range: [{}, {}]",
            target,
            left,
            right as i64 - 1
        ),
        state,
    );

    while left < right {
        let mid = left + (right - left) / 2;
        let value = nums[mid];
        let is_match = value == target;

        let explanation = if is_match {
            format!("Found target {} at index {}!", target, mid)
        } else if value < target {
            format!("{} < {}, searching right half.", value, target)
        } else {
            format!("{} > {}, searching left half.", value, target)
        };

        recorder.record(
            format!(
                "Checking middle element at index {} ({}). {}",
                mid, value, explanation
            ),
            StepState::new(
                if is_match {
                    Phase::Found
                } else {
                    Phase::Searching
                },
                detail(nums, target, Some(value), is_match.then_some(mid)),
            )
            .with_pointer("left", left)
            .with_pointer("right", right - 1)
            .with_pointer("mid", mid),
        );

        if is_match {
            return recorder.finish();
        }
        if value < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    record_missing(&mut recorder, nums, target);
    recorder.finish()
}

fn record_missing(recorder: &mut StepRecorder, nums: &[i32], target: i32) {
    recorder.record(
        format!("Target {} not found in array.", target),
        StepState::new(Phase::NotFound, detail(nums, target, None, None)),
    );
}
