//! Merge two sorted lists: concatenate and sort vs two-pointer merge.

use crate::step::{
    ListSide, MergeListsDetail, Phase, Step, StepDetail, StepPair, StepRecorder, StepState,
};

/// Inputs are not checked for order; the two-pointer pass only merges correctly
/// when both lists are sorted ascending.
pub fn simulate(list1: &[i32], list2: &[i32]) -> StepPair {
    StepPair::new(concat_and_sort(list1, list2), two_pointers(list1, list2))
}

pub fn reported_merge(steps: &[Step]) -> Option<&[i32]> {
    match &steps.last()?.state.detail {
        StepDetail::MergeLists(m) => Some(m.merged.as_slice()),
        _ => None,
    }
}

fn detail(
    list1: &[i32],
    list2: &[i32],
    merged: &[i32],
    taken_from: Option<ListSide>,
) -> MergeListsDetail {
    MergeListsDetail {
        list1: list1.to_vec(),
        list2: list2.to_vec(),
        merged: merged.to_vec(),
        taken_from,
    }
}

fn concat_and_sort(list1: &[i32], list2: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut merged: Vec<i32> = Vec::with_capacity(list1.len() + list2.len());

    recorder.record(
        "Starting brute force merge. Copy both lists, then sort.",
        StepState::new(Phase::Init, detail(list1, list2, &merged, None)),
    );

    let sources = [(ListSide::First, list1, "i"), (ListSide::Second, list2, "j")];
    for (side, list, pointer) in sources {
        let label = match side {
            ListSide::First => 1,
            ListSide::Second => 2,
        };
        for (idx, &value) in list.iter().enumerate() {
            merged.push(value);
            recorder.record(
                format!("Copying {} from List {}.", value, label),
                StepState::new(Phase::Searching, detail(list1, list2, &merged, Some(side)))
                    .with_pointer(pointer, idx),
            );
        }
    }

    merged.sort();
    recorder.record(
        format!(
            "Sorted the combined list of {} values. Merge complete.",
            merged.len()
        ),
        StepState::new(Phase::Found, detail(list1, list2, &merged, None)),
    );
    recorder.finish()
}

fn two_pointers(list1: &[i32], list2: &[i32]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut merged: Vec<i32> = Vec::with_capacity(list1.len() + list2.len());
    let (mut i, mut j) = (0usize, 0usize);

    recorder.record(
        "Starting Merge of two sorted lists. Comparing elements at the head of both lists.",
        StepState::new(Phase::Init, detail(list1, list2, &merged, None))
            .with_pointer("i", 0)
            .with_pointer("j", 0),
    );

    while i < list1.len() && j < list2.len() {
        let (v1, v2) = (list1[i], list2[j]);
        let from_first = v1 <= v2;
        let (side, description) = if from_first {
            merged.push(v1);
            (
                ListSide::First,
                format!(
                    "Comparing {} (L1) and {} (L2). {} <= {}. Appending {} from List 1.",
                    v1, v2, v1, v2, v1
                ),
            )
        } else {
            merged.push(v2);
            (
                ListSide::Second,
                format!(
                    "Comparing {} (L1) and {} (L2). {} < {}. Appending {} from List 2.",
                    v1, v2, v2, v1, v2
                ),
            )
        };

        recorder.record(
            description,
            StepState::new(Phase::Searching, detail(list1, list2, &merged, Some(side)))
                .with_pointer("i", i)
                .with_pointer("j", j),
        );

        if from_first {
            i += 1;
        } else {
            j += 1;
        }
    }

    for (idx, &value) in list1.iter().enumerate().skip(i) {
        merged.push(value);
        recorder.record(
            format!("List 2 exhausted. Appending {} from List 1.", value),
            StepState::new(
                Phase::Searching,
                detail(list1, list2, &merged, Some(ListSide::First)),
            )
            .with_pointer("i", idx),
        );
    }
    for (idx, &value) in list2.iter().enumerate().skip(j) {
        merged.push(value);
        recorder.record(
            format!("List 1 exhausted. Appending {} from List 2.", value),
            StepState::new(
                Phase::Searching,
                detail(list1, list2, &merged, Some(ListSide::Second)),
            )
            .with_pointer("j", idx),
        );
    }

    recorder.record(
        "Merge complete. Both lists fused into a single sorted sequence.",
        StepState::new(Phase::Found, detail(list1, list2, &merged, None)),
    );
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_lists() {
        let pair = simulate(&[1, 2, 4], &[1, 3, 4]);
        let expected: &[i32] = &[1, 1, 2, 3, 4, 4];
        assert_eq!(reported_merge(&pair.optimal_steps), Some(expected));
        assert_eq!(reported_merge(&pair.brute_force_steps), Some(expected));
    }

    #[test]
    fn test_ties_take_from_first_list() {
        let pair = simulate(&[1], &[1]);
        match &pair.optimal_steps[1].state.detail {
            StepDetail::MergeLists(m) => assert_eq!(m.taken_from, Some(ListSide::First)),
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn test_remainder_is_appended() {
        let pair = simulate(&[], &[0, 5]);
        let expected: &[i32] = &[0, 5];
        assert_eq!(reported_merge(&pair.optimal_steps), Some(expected));
        // Init, two appends, summary
        assert_eq!(pair.optimal_steps.len(), 4);
        assert!(pair.optimal_steps[1].description.starts_with("List 1 exhausted"));
    }

    #[test]
    fn test_both_empty() {
        let pair = simulate(&[], &[]);
        assert_eq!(pair.optimal_steps.len(), 2);
        assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
        assert_eq!(reported_merge(&pair.brute_force_steps), Some(&[][..]));
    }
}
