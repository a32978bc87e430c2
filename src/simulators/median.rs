//! Median of two sorted arrays.
//!
//! Brute force merges and sorts the concatenation (two steps). The optimal
//! pass binary-searches a partition `i` of the shorter array `A` so that with
//! `j = half - i` every element left of the cut is `<=` every element right of
//! it. Positions outside an array act as `-∞`/`+∞` (see [`Bound`]).
//!
//! Inputs must be individually sorted; unsorted input yields a meaningless
//! median. If the search space is ever exhausted without a valid cut, the run
//! ends with a `NotFound` step.

use crate::step::{
    Bound, MergeDetail, PartitionDetail, Phase, Step, StepDetail, StepPair, StepRecorder,
    StepState,
};

pub fn simulate(nums1: &[i32], nums2: &[i32]) -> StepPair {
    if nums1.is_empty() && nums2.is_empty() {
        let mut recorder = StepRecorder::new();
        recorder.record(
            "Both arrays are empty: there is no median.",
            StepState::new(
                Phase::NotFound,
                MergeDetail {
                    merged: Vec::new(),
                    median: None,
                },
            ),
        );
        return StepPair::shared(recorder.finish());
    }

    StepPair::new(brute_force(nums1, nums2), optimal(nums1, nums2))
}

fn brute_force(nums1: &[i32], nums2: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut merged: Vec<i32> = nums1.iter().chain(nums2).copied().collect();
    merged.sort_unstable();

    recorder.record(
        format!(
            "Merging arrays {:?} and {:?} into single sorted array.",
            nums1, nums2
        ),
        StepState::new(
            Phase::Searching,
            MergeDetail {
                merged: merged.clone(),
                median: None,
            },
        ),
    );

    let mid = merged.len() / 2;
    let median = if merged.len() % 2 == 0 {
        (merged[mid - 1] as f64 + merged[mid] as f64) / 2.0
    } else {
        merged[mid] as f64
    };

    recorder.record(
        format!("Median found: {}", median),
        StepState::new(
            Phase::Found,
            MergeDetail {
                merged,
                median: Some(median),
            },
        )
        .with_pointer("i", mid),
    );
    recorder.finish()
}

fn optimal(nums1: &[i32], nums2: &[i32]) -> Vec<Step> {
    let (a, b) = if nums1.len() > nums2.len() {
        (nums2, nums1)
    } else {
        (nums1, nums2)
    };
    let total = a.len() + b.len();
    let half = (total + 1) / 2;

    let mut recorder = StepRecorder::new();
    let partition = |a_left, a_right, b_left, b_right, median| PartitionDetail {
        array1: a.to_vec(),
        array2: b.to_vec(),
        a_left,
        a_right,
        b_left,
        b_right,
        median,
    };

    // Search space is [lo, hi] inclusive over cut positions in `a`
    let (mut lo, mut hi) = (0usize, a.len());
    while lo <= hi {
        let i = (lo + hi) / 2;
        let j = half - i;

        let a_left = Bound::left_of(a, i);
        let a_right = Bound::right_of(a, i);
        let b_left = Bound::left_of(b, j);
        let b_right = Bound::right_of(b, j);

        recorder.record(
            format!(
                "Checking partition at index {} in Array 1 and {} in Array 2.",
                i, j
            ),
            StepState::new(
                Phase::Searching,
                partition(a_left, a_right, b_left, b_right, None),
            )
            .with_pointer("i", i)
            .with_pointer("j", j),
        );

        if a_left <= b_right && b_left <= a_right {
            let max_left = a_left.max(b_left).as_f64();
            let median = if total % 2 == 1 {
                max_left
            } else {
                (max_left + a_right.min(b_right).as_f64()) / 2.0
            };

            recorder.record(
                format!("Correct partition found! Median: {}", median),
                StepState::new(
                    Phase::Found,
                    partition(a_left, a_right, b_left, b_right, Some(median)),
                )
                .with_pointer("i", i)
                .with_pointer("j", j),
            );
            return recorder.finish();
        } else if a_left > b_right {
            // i >= 1 here since a_left is finite
            match i.checked_sub(1) {
                Some(next) => hi = next,
                None => break,
            }
        } else {
            lo = i + 1;
        }
    }

    recorder.record(
        "Partition search ended without a valid cut. Are both inputs sorted?",
        StepState::new(
            Phase::NotFound,
            partition(
                Bound::NegInfinity,
                Bound::PosInfinity,
                Bound::NegInfinity,
                Bound::PosInfinity,
                None,
            ),
        ),
    );
    recorder.finish()
}

/// Median reported by the terminal step of a list
pub fn reported_median(steps: &[Step]) -> Option<f64> {
    match &steps.last()?.state.detail {
        StepDetail::Merge(m) => m.median,
        StepDetail::Partition(p) => p.median,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_has_exactly_two_steps() {
        let pair = simulate(&[1, 3], &[2]);
        assert_eq!(pair.brute_force_steps.len(), 2);
        assert_eq!(reported_median(&pair.brute_force_steps), Some(2.0));
    }

    #[test]
    fn test_partition_with_one_empty_array() {
        let pair = simulate(&[], &[1, 2, 3, 4]);
        assert_eq!(reported_median(&pair.optimal_steps), Some(2.5));
        assert_eq!(pair.optimal_steps.last().unwrap().phase(), Phase::Found);
    }

    #[test]
    fn test_unsorted_input_still_ends_with_one_terminal_step() {
        let pair = simulate(&[5, 1], &[4, 0]);
        let last = pair.optimal_steps.last().unwrap();
        assert!(last.is_terminal());
        assert_eq!(
            pair.optimal_steps.iter().filter(|s| s.is_terminal()).count(),
            1
        );
    }
}
