// Integration tests for the simulators, driven through their public functions

use algoscope::simulators::{
    container, digits, linked_list, median, merge_lists, palindrome, regex, rotated_search,
    sliding_window, three_sum, two_sum, valid_palindrome, zigzag,
};
use algoscope::step::{Phase, Step, StepDetail, StepPair};

fn last_detail(steps: &[Step]) -> &StepDetail {
    &steps.last().expect("list is never empty").state.detail
}

fn assert_well_formed(pair: &StepPair) {
    for steps in [&pair.brute_force_steps, &pair.optimal_steps] {
        assert!(!steps.is_empty());
        for (idx, step) in steps.iter().enumerate() {
            assert_eq!(step.step, idx + 1);
            assert_eq!(step.is_terminal(), idx + 1 == steps.len(), "step {}", step.step);
        }
    }
}

#[test]
fn test_two_sum_classic() {
    let pair = two_sum::simulate(&[2, 7, 11, 15], 9);
    assert_well_formed(&pair);

    match last_detail(&pair.brute_force_steps) {
        StepDetail::PairSum(d) => assert_eq!(d.pair, Some((0, 1))),
        other => panic!("unexpected detail {:?}", other),
    }
    match last_detail(&pair.optimal_steps) {
        StepDetail::HashLookup(d) => {
            assert_eq!(d.pair, Some((0, 1)));
            assert_eq!(d.complement, Some(2));
        }
        other => panic!("unexpected detail {:?}", other),
    }
    assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
}

#[test]
fn test_two_sum_without_solution() {
    let pair = two_sum::simulate(&[1, 2, 3], 100);
    assert_well_formed(&pair);
    assert_eq!(pair.brute_result().unwrap().phase(), Phase::NotFound);
    assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);
}

#[test]
fn test_container_classic() {
    let pair = container::simulate(&[1, 8, 6, 2, 5, 4, 8, 3, 7]);
    assert_well_formed(&pair);
    assert_eq!(container::reported_max_area(&pair.brute_force_steps), Some(49));
    assert_eq!(container::reported_max_area(&pair.optimal_steps), Some(49));
}

#[test]
fn test_atoi_leading_whitespace_and_sign() {
    let pair = digits::atoi("   -42");
    assert_well_formed(&pair);
    match last_detail(&pair.optimal_steps) {
        StepDetail::Atoi(d) => {
            assert_eq!(d.value, -42);
            assert!(!d.clamped);
        }
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn test_zigzag_three_rows() {
    let pair = zigzag::simulate("PAYPALISHIRING", 3);
    assert_well_formed(&pair);
    match last_detail(&pair.optimal_steps) {
        StepDetail::Zigzag(d) => assert_eq!(d.result.as_deref(), Some("PAHNAPLSIIGYIR")),
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn test_longest_substring_variants_agree() {
    for s in ["abcabcbb", "bbbbb", "pwwkew", "", "dvdf"] {
        let pair = sliding_window::simulate(s);
        assert_well_formed(&pair);
        assert_eq!(
            sliding_window::reported_max(&pair.brute_force_steps),
            sliding_window::reported_max(&pair.optimal_steps),
            "input {:?}",
            s
        );
    }
    let pair = sliding_window::simulate("pwwkew");
    assert_eq!(sliding_window::reported_max(&pair.optimal_steps), Some(3));
}

#[test]
fn test_median_examples() {
    let odd = median::simulate(&[1, 3], &[2]);
    assert_eq!(median::reported_median(&odd.optimal_steps), Some(2.0));

    let even = median::simulate(&[1, 2], &[3, 4]);
    assert_eq!(median::reported_median(&even.brute_force_steps), Some(2.5));
    assert_eq!(median::reported_median(&even.optimal_steps), Some(2.5));

    let empty = median::simulate(&[], &[]);
    assert_well_formed(&empty);
    assert_eq!(empty.optimal_result().unwrap().phase(), Phase::NotFound);
}

#[test]
fn test_palindrome_examples() {
    let pair = palindrome::simulate("cbbd");
    assert_well_formed(&pair);
    assert_eq!(palindrome::reported_longest(&pair.optimal_steps), Some("bb"));
    assert_eq!(palindrome::reported_longest(&pair.brute_force_steps), Some("bb"));
}

#[test]
fn test_add_two_numbers() {
    let pair = linked_list::simulate(&[2, 4, 3], &[5, 6, 4]);
    assert_well_formed(&pair);
    match last_detail(&pair.optimal_steps) {
        StepDetail::DigitSum(d) => assert_eq!(d.result, vec![7, 0, 8]),
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn test_regex_outcomes() {
    let matched = regex::simulate("ab", ".b");
    assert_well_formed(&matched);
    assert_eq!(matched.optimal_result().unwrap().phase(), Phase::Found);

    // Star groups never consume input in the simplified walk
    let starred = regex::simulate("aa", "a*");
    assert_well_formed(&starred);
    assert_eq!(starred.optimal_result().unwrap().phase(), Phase::NotFound);

    let mismatched = regex::simulate("ab", "ac");
    assert_well_formed(&mismatched);
    assert_eq!(mismatched.optimal_result().unwrap().phase(), Phase::NotFound);
}

#[test]
fn test_palindrome_number_negative_is_single_step() {
    let pair = digits::palindrome_number(-121);
    assert_well_formed(&pair);
    assert_eq!(pair.optimal_steps.len(), 1);
    assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);

    let pair = digits::palindrome_number(121);
    assert_eq!(pair.optimal_result().unwrap().phase(), Phase::Found);
}

#[test]
fn test_three_sum_classic() {
    let pair = three_sum::simulate(&[-1, 0, 1, 2, -1, -4], 0);
    assert_well_formed(&pair);
    match last_detail(&pair.optimal_steps) {
        StepDetail::Triplet(t) => {
            assert_eq!(t.array, vec![-4, -1, -1, 0, 1, 2]);
            assert_eq!(t.triplets, vec![[-1, -1, 2], [-1, 0, 1]]);
        }
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn test_rotated_search_and_merge() {
    let pair = rotated_search::simulate(&[4, 5, 6, 7, 0, 1, 2], 0);
    assert_well_formed(&pair);
    assert_eq!(rotated_search::reported_index(&pair.optimal_steps), Some(4));

    let pair = merge_lists::simulate(&[1, 2, 4], &[1, 3, 4]);
    assert_well_formed(&pair);
    assert_eq!(
        merge_lists::reported_merge(&pair.optimal_steps),
        Some(&[1, 1, 2, 3, 4, 4][..])
    );
}

#[test]
fn test_valid_palindrome_examples() {
    let pair = valid_palindrome::simulate("A man, a plan, a canal: Panama");
    assert_well_formed(&pair);
    match last_detail(&pair.brute_force_steps) {
        StepDetail::Symmetry(d) => {
            assert_eq!(d.cleaned, "amanaplanacanalpanama");
            assert!(d.matched);
        }
        other => panic!("unexpected detail {:?}", other),
    }

    let pair = valid_palindrome::simulate("race a car");
    assert_well_formed(&pair);
    assert_eq!(pair.optimal_result().unwrap().phase(), Phase::NotFound);
}

#[test]
fn test_steps_serialize_to_boundary_shape() {
    let pair = two_sum::simulate(&[2, 7], 9);
    let json = serde_json::to_value(&pair).unwrap();
    let first = &json["bruteForceSteps"][0];
    assert_eq!(first["step"], 1);
    assert_eq!(first["state"]["phase"], "found");
    assert_eq!(first["state"]["detail"]["kind"], "pair_sum");
    assert!(json["optimalSteps"].is_array());
}
