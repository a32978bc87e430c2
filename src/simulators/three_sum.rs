//! 3Sum: every index triple vs sort plus two pointers per fixed element.
//!
//! Both passes collect unique value triplets, each sorted ascending, and the
//! final list is in ascending order so the two variants report the same answer.

use std::collections::BTreeSet;

use crate::step::{Phase, Step, StepDetail, StepPair, StepRecorder, StepState, TripletDetail};

pub fn simulate(nums: &[i32], target: i32) -> StepPair {
    StepPair::new(every_triple(nums, target), two_pointers(nums, target))
}

/// Triplets in the last step of a list
pub fn reported_triplets(steps: &[Step]) -> Option<&[[i32; 3]]> {
    match &steps.last()?.state.detail {
        StepDetail::Triplet(t) => Some(t.triplets.as_slice()),
        _ => None,
    }
}

fn sorted_triplet(a: i32, b: i32, c: i32) -> [i32; 3] {
    let mut t = [a, b, c];
    t.sort_unstable();
    t
}

fn every_triple(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let target = target as i64;
    let mut found: BTreeSet<[i32; 3]> = BTreeSet::new();
    let detail = |sum, is_match, found: &BTreeSet<[i32; 3]>| TripletDetail {
        array: nums.to_vec(),
        target,
        sum,
        is_match,
        triplets: found.iter().copied().collect(),
    };

    recorder.record(
        format!(
            "Starting brute force 3Sum for target {}. Checking every triple.",
            target
        ),
        StepState::new(Phase::Init, detail(None, false, &found)),
    );

    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            for k in j + 1..nums.len() {
                let sum = nums[i] as i64 + nums[j] as i64 + nums[k] as i64;
                let is_match = sum == target;
                let description = if is_match {
                    let triplet = sorted_triplet(nums[i], nums[j], nums[k]);
                    if found.insert(triplet) {
                        format!(
                            "Match! [{}, {}, {}] sums to {}.",
                            nums[i], nums[j], nums[k], target
                        )
                    } else {
                        format!(
                            "[{}, {}, {}] sums to {} but is a duplicate.",
                            nums[i], nums[j], nums[k], target
                        )
                    }
                } else {
                    format!(
                        "Indices ({}, {}, {}): {} + {} + {} = {}.",
                        i, j, k, nums[i], nums[j], nums[k], sum
                    )
                };
                recorder.record(
                    description,
                    StepState::new(Phase::Searching, detail(Some(sum), is_match, &found))
                        .with_pointer("i", i)
                        .with_pointer("j", j)
                        .with_pointer("k", k),
                );
            }
        }
    }

    record_summary(&mut recorder, detail(None, false, &found));
    recorder.finish()
}

fn two_pointers(nums: &[i32], target: i32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let target = target as i64;
    let mut triplets: Vec<[i32; 3]> = Vec::new();
    let detail = |sum, is_match, triplets: &[[i32; 3]]| TripletDetail {
        array: sorted.clone(),
        target,
        sum,
        is_match,
        triplets: triplets.to_vec(),
    };

    recorder.record(
        "Starting 3Sum. Sorting array first so the inner loop can use two pointers.",
        StepState::new(Phase::Init, detail(None, false, &triplets)),
    );

    for i in 0..sorted.len().saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let (mut left, mut right) = (i + 1, sorted.len() - 1);

        while left < right {
            let sum = sorted[i] as i64 + sorted[left] as i64 + sorted[right] as i64;
            let is_match = sum == target;
            if is_match {
                triplets.push([sorted[i], sorted[left], sorted[right]]);
            }

            let explanation = if is_match {
                format!(
                    "Match found! [{}, {}, {}] sums to {}.",
                    sorted[i], sorted[left], sorted[right], target
                )
            } else if sum < target {
                format!("Sum {} < {}. Moving left pointer.", sum, target)
            } else {
                format!("Sum {} > {}. Moving right pointer.", sum, target)
            };
            recorder.record(
                format!(
                    "Fixed i={} ({}). Checking L={}, R={}. {}",
                    i, sorted[i], left, right, explanation
                ),
                StepState::new(Phase::Searching, detail(Some(sum), is_match, &triplets))
                    .with_pointer("i", i)
                    .with_pointer("l", left)
                    .with_pointer("r", right),
            );

            if is_match {
                while left < right && sorted[left] == sorted[left + 1] {
                    left += 1;
                }
                while left < right && sorted[right] == sorted[right - 1] {
                    right -= 1;
                }
                left += 1;
                right -= 1;
            } else if sum < target {
                left += 1;
            } else {
                right -= 1;
            }
        }
    }

    record_summary(&mut recorder, detail(None, false, &triplets));
    recorder.finish()
}

fn record_summary(recorder: &mut StepRecorder, detail: TripletDetail) {
    let count = detail.triplets.len();
    let phase = if count > 0 {
        Phase::Found
    } else {
        Phase::NotFound
    };
    recorder.record(
        format!(
            "3Sum search complete. Found {} unique triplets that sum to {}.",
            count, detail.target
        ),
        StepState::new(phase, detail),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let pair = simulate(&[-1, 0, 1, 2, -1, -4], 0);
        let expected: &[[i32; 3]] = &[[-1, -1, 2], [-1, 0, 1]];
        assert_eq!(reported_triplets(&pair.optimal_steps), Some(expected));
        assert_eq!(reported_triplets(&pair.brute_force_steps), Some(expected));
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
    }

    #[test]
    fn test_duplicates_collapse() {
        let pair = simulate(&[0, 0, 0, 0], 0);
        let expected: &[[i32; 3]] = &[[0, 0, 0]];
        assert_eq!(reported_triplets(&pair.optimal_steps), Some(expected));
        assert_eq!(reported_triplets(&pair.brute_force_steps), Some(expected));
    }

    #[test]
    fn test_no_triplet_ends_not_found() {
        let pair = simulate(&[0, 1, 1], 0);
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);
        assert_eq!(pair.brute_result().unwrap().phase(), Phase::NotFound);
    }

    #[test]
    fn test_short_input() {
        let pair = simulate(&[1, 2], 3);
        // Init plus summary, no comparisons
        assert_eq!(pair.optimal_steps.len(), 2);
        assert_eq!(pair.brute_force_steps.len(), 2);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let pair = simulate(&[i32::MAX, i32::MAX, i32::MAX], -3);
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);
    }
}
