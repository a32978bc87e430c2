//! Two-sum: nested pair scan and single-pass hash-map lookup.

use crate::step::{
    HashLookupDetail, PairSumDetail, Phase, Step, StepPair, StepRecorder, StepState,
};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

pub fn simulate(nums: &[i32], target: i32) -> StepPair {
    StepPair::new(brute_force(nums, target), optimal(nums, target))
}

fn brute_force(nums: &[i32], target: i32) -> Vec<Step> {
    let target = target as i64;
    let mut recorder = StepRecorder::new();

    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            let sum = nums[i] as i64 + nums[j] as i64;
            let is_match = sum == target;

            let state = StepState::new(
                if is_match { Phase::Found } else { Phase::Searching },
                PairSumDetail {
                    sum,
                    target,
                    pair: is_match.then_some((i, j)),
                },
            )
            .with_pointer("i", i)
            .with_pointer("j", j);

            if is_match {
                recorder.record_at(
                    6,
                    format!("Target {} found at indices {} and {}!", target, i, j),
                    state,
                );
                return recorder.finish();
            }

            recorder.record_at(
                5,
                format!(
                    "Checking index i={} (val={}) and j={} (val={}). Sum: {}",
                    i, nums[i], j, nums[j], sum
                ),
                state,
            );
        }
    }

    recorder.record(
        "Exhausted all pairs. No two numbers sum to the target.",
        StepState::new(
            Phase::NotFound,
            PairSumDetail {
                sum: 0,
                target,
                pair: None,
            },
        ),
    );
    recorder.finish()
}

fn optimal(nums: &[i32], target: i32) -> Vec<Step> {
    let target = target as i64;
    let mut recorder = StepRecorder::new();
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();

    for (i, &value) in nums.iter().enumerate() {
        let value = value as i64;
        let complement = target - value;

        if let Some(&k) = seen.get(&complement) {
            recorder.record_at(
                7,
                format!("Found complement {} at index {}!", complement, k),
                StepState::new(
                    Phase::Found,
                    HashLookupDetail {
                        complement: Some(complement),
                        target,
                        map_state: snapshot(&seen),
                        pair: Some((k, i)),
                    },
                )
                .with_pointer("i", i),
            );
            return recorder.finish();
        }

        recorder.record_at(
            5,
            format!(
                "Iterating index i={} (val={}). Looking for complement: {}",
                i, value, complement
            ),
            StepState::new(
                Phase::Searching,
                HashLookupDetail {
                    complement: Some(complement),
                    target,
                    map_state: snapshot(&seen),
                    pair: None,
                },
            )
            .with_pointer("i", i),
        );

        // Duplicates keep the latest index, matching a plain map assignment
        seen.insert(value, i);
        recorder.record_at(
            9,
            format!("Complement not found. Adding {} to the hash map.", value),
            StepState::new(
                Phase::Searching,
                HashLookupDetail {
                    complement: None,
                    target,
                    map_state: snapshot(&seen),
                    pair: None,
                },
            )
            .with_pointer("i", i),
        );
    }

    recorder.record(
        "Scanned every index without finding a complement. No solution.",
        StepState::new(
            Phase::NotFound,
            HashLookupDetail {
                complement: None,
                target,
                map_state: snapshot(&seen),
                pair: None,
            },
        ),
    );
    recorder.finish()
}

fn snapshot(map: &FxHashMap<i64, usize>) -> BTreeMap<i64, usize> {
    map.iter().map(|(&k, &v)| (k, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepDetail;

    #[test]
    fn test_map_snapshots_do_not_change_after_insert() {
        let pair = simulate(&[3, 2, 4], 6);
        let steps = &pair.optimal_steps;

        // Search step for index 0 sees an empty map; the insert step sees {3: 0}
        match (&steps[0].state.detail, &steps[1].state.detail) {
            (StepDetail::HashLookup(search), StepDetail::HashLookup(insert)) => {
                assert!(search.map_state.is_empty());
                assert_eq!(insert.map_state.get(&3), Some(&0));
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_optimal_emits_at_most_two_steps_per_index() {
        let nums = [1, 5, 9, 13, 4];
        let pair = simulate(&nums, 17);
        // 13 + 4 matches at index 4: four full indices plus the found step
        assert_eq!(pair.optimal_steps.len(), 4 * 2 + 1);
    }
}
