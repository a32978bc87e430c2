//! Move zeroes to the end while keeping the order of non-zero values.

use crate::step::{CompactionDetail, Phase, StepPair, StepRecorder, StepState};

pub fn simulate(nums: &[i32]) -> StepPair {
    let mut recorder = StepRecorder::new();
    let mut current = nums.to_vec();
    let mut last_non_zero = 0usize;

    recorder.record(
        "Starting Move Zeroes. Write pointer lastNonZero begins at index 0.",
        StepState::new(
            Phase::Init,
            CompactionDetail {
                array: current.clone(),
                last_non_zero,
                swapped: false,
            },
        ),
    );

    for i in 0..current.len() {
        let is_zero = current[i] == 0;
        let description = if is_zero {
            format!("Index {} holds zero. Skipping.", i)
        } else {
            format!(
                "Index {} holds {}. Swapping with lastNonZero index {}.",
                i, current[i], last_non_zero
            )
        };

        // Pointers show the positions compared, before the swap moves them
        let pointers = (last_non_zero, i);
        if !is_zero {
            current.swap(last_non_zero, i);
            last_non_zero += 1;
        }

        recorder.record(
            description,
            StepState::new(
                Phase::Searching,
                CompactionDetail {
                    array: current.clone(),
                    last_non_zero,
                    swapped: !is_zero,
                },
            )
            .with_pointer("lastNonZero", pointers.0)
            .with_pointer("i", pointers.1),
        );
    }

    recorder.record(
        "All non-zero elements shifted. Zeroes are now at the end.",
        StepState::new(
            Phase::Found,
            CompactionDetail {
                array: current,
                last_non_zero,
                swapped: false,
            },
        ),
    );
    StepPair::shared(recorder.finish())
}
