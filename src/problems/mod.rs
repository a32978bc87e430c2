//! Problem registry and request dispatch
//!
//! A [`StepRequest`] names a problem by numeric id or slug and carries the raw
//! `input` / `target` fields. [`simulate`] resolves the problem, parses both
//! fields into the shape its simulator expects (see [`input`]) and returns the
//! resulting [`StepPair`].
//!
//! # Field mapping
//!
//! `target` is the problem's second parameter: the sum for Two Sum and 3Sum,
//! the second list for Add Two Numbers, Median and Merge Two Sorted Lists, the
//! row count for Zigzag, the pattern for Regex and the searched value for the
//! two binary searches. Problems with a single parameter ignore it.

pub mod errors;
pub mod input;

use crate::simulators;
use crate::step::StepPair;
pub use errors::{InputError, ProblemError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Every problem with a registered simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    TwoSum,
    AddTwoNumbers,
    LongestSubstring,
    MedianOfTwoSortedArrays,
    LongestPalindrome,
    ZigzagConversion,
    ReverseInteger,
    StringToInteger,
    PalindromeNumber,
    RegexMatching,
    ContainerWithMostWater,
    ThreeSum,
    ValidParentheses,
    MergeTwoSortedLists,
    SearchInRotatedSortedArray,
    MaximumSubarray,
    ValidPalindrome,
    MoveZeroes,
    BinarySearch,
}

impl Problem {
    pub const ALL: [Problem; 19] = [
        Problem::TwoSum,
        Problem::AddTwoNumbers,
        Problem::LongestSubstring,
        Problem::MedianOfTwoSortedArrays,
        Problem::LongestPalindrome,
        Problem::ZigzagConversion,
        Problem::ReverseInteger,
        Problem::StringToInteger,
        Problem::PalindromeNumber,
        Problem::RegexMatching,
        Problem::ContainerWithMostWater,
        Problem::ThreeSum,
        Problem::ValidParentheses,
        Problem::MergeTwoSortedLists,
        Problem::SearchInRotatedSortedArray,
        Problem::MaximumSubarray,
        Problem::ValidPalindrome,
        Problem::MoveZeroes,
        Problem::BinarySearch,
    ];

    pub fn id(self) -> u32 {
        match self {
            Problem::TwoSum => 1,
            Problem::AddTwoNumbers => 2,
            Problem::LongestSubstring => 3,
            Problem::MedianOfTwoSortedArrays => 4,
            Problem::LongestPalindrome => 5,
            Problem::ZigzagConversion => 6,
            Problem::ReverseInteger => 7,
            Problem::StringToInteger => 8,
            Problem::PalindromeNumber => 9,
            Problem::RegexMatching => 10,
            Problem::ContainerWithMostWater => 11,
            Problem::ThreeSum => 15,
            Problem::ValidParentheses => 20,
            Problem::MergeTwoSortedLists => 21,
            Problem::SearchInRotatedSortedArray => 33,
            Problem::MaximumSubarray => 53,
            Problem::ValidPalindrome => 125,
            Problem::MoveZeroes => 283,
            Problem::BinarySearch => 704,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Problem::TwoSum => "two-sum",
            Problem::AddTwoNumbers => "add-two-numbers",
            Problem::LongestSubstring => "longest-substring-without-repeating-characters",
            Problem::MedianOfTwoSortedArrays => "median-of-two-sorted-arrays",
            Problem::LongestPalindrome => "longest-palindromic-substring",
            Problem::ZigzagConversion => "zigzag-conversion",
            Problem::ReverseInteger => "reverse-integer",
            Problem::StringToInteger => "string-to-integer-atoi",
            Problem::PalindromeNumber => "palindrome-number",
            Problem::RegexMatching => "regular-expression-matching",
            Problem::ContainerWithMostWater => "container-with-most-water",
            Problem::ThreeSum => "3sum",
            Problem::ValidParentheses => "valid-parentheses",
            Problem::MergeTwoSortedLists => "merge-two-sorted-lists",
            Problem::SearchInRotatedSortedArray => "search-in-rotated-sorted-array",
            Problem::MaximumSubarray => "maximum-subarray",
            Problem::ValidPalindrome => "valid-palindrome",
            Problem::MoveZeroes => "move-zeroes",
            Problem::BinarySearch => "binary-search",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Problem::TwoSum => "Two Sum",
            Problem::AddTwoNumbers => "Add Two Numbers",
            Problem::LongestSubstring => "Longest Substring Without Repeating Characters",
            Problem::MedianOfTwoSortedArrays => "Median of Two Sorted Arrays",
            Problem::LongestPalindrome => "Longest Palindromic Substring",
            Problem::ZigzagConversion => "Zigzag Conversion",
            Problem::ReverseInteger => "Reverse Integer",
            Problem::StringToInteger => "String to Integer (atoi)",
            Problem::PalindromeNumber => "Palindrome Number",
            Problem::RegexMatching => "Regular Expression Matching",
            Problem::ContainerWithMostWater => "Container With Most Water",
            Problem::ThreeSum => "3Sum",
            Problem::ValidParentheses => "Valid Parentheses",
            Problem::MergeTwoSortedLists => "Merge Two Sorted Lists",
            Problem::SearchInRotatedSortedArray => "Search in Rotated Sorted Array",
            Problem::MaximumSubarray => "Maximum Subarray",
            Problem::ValidPalindrome => "Valid Palindrome",
            Problem::MoveZeroes => "Move Zeroes",
            Problem::BinarySearch => "Binary Search",
        }
    }

    /// Short description of what `input` and `target` hold, for help output
    pub fn parameters(self) -> &'static str {
        match self {
            Problem::TwoSum => "input: int array, target: sum",
            Problem::AddTwoNumbers => "input: digits (least significant first), target: digits",
            Problem::LongestSubstring => "input: string",
            Problem::MedianOfTwoSortedArrays => "input: sorted int array, target: sorted int array",
            Problem::LongestPalindrome => "input: string",
            Problem::ZigzagConversion => "input: string, target: numRows >= 1",
            Problem::ReverseInteger => "input: 32-bit integer",
            Problem::StringToInteger => "input: string",
            Problem::PalindromeNumber => "input: 32-bit integer",
            Problem::RegexMatching => "input: string, target: pattern",
            Problem::ContainerWithMostWater => "input: non-negative heights",
            Problem::ThreeSum => "input: int array, target: sum (default 0)",
            Problem::ValidParentheses => "input: bracket string",
            Problem::MergeTwoSortedLists => "input: sorted int array, target: sorted int array",
            Problem::SearchInRotatedSortedArray => {
                "input: rotated sorted int array (distinct), target: value"
            }
            Problem::MaximumSubarray => "input: int array",
            Problem::ValidPalindrome => "input: string",
            Problem::MoveZeroes => "input: int array",
            Problem::BinarySearch => "input: sorted int array, target: value",
        }
    }

    pub fn from_id(id: u32) -> Option<Problem> {
        Problem::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn from_slug(slug: &str) -> Option<Problem> {
        Problem::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id(), self.title())
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    /// Accepts a numeric id (`"1"`) or a slug (`"two-sum"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = match s.parse::<u32>() {
            Ok(id) => Problem::from_id(id),
            Err(_) => Problem::from_slug(&s.to_ascii_lowercase()),
        };
        found.ok_or_else(|| ProblemError::NotImplemented {
            problem: s.to_string(),
        })
    }
}

/// How a request names its problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemRef {
    Id(u32),
    Name(String),
}

impl ProblemRef {
    pub fn resolve(&self) -> Result<Problem, ProblemError> {
        match self {
            ProblemRef::Id(id) => Problem::from_id(*id).ok_or_else(|| ProblemError::NotImplemented {
                problem: id.to_string(),
            }),
            ProblemRef::Name(name) => name.parse(),
        }
    }
}

impl From<Problem> for ProblemRef {
    fn from(problem: Problem) -> Self {
        ProblemRef::Id(problem.id())
    }
}

/// A step-generation request: `{ problemId, input, target? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    pub problem_id: ProblemRef,
    #[serde(default)]
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
}

impl StepRequest {
    pub fn new(problem: impl Into<ProblemRef>, input: Value) -> Self {
        StepRequest {
            problem_id: problem.into(),
            input,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Value) -> Self {
        self.target = Some(target);
        self
    }
}

/// Resolve a request and run its simulator
pub fn simulate(request: &StepRequest) -> Result<StepPair, ProblemError> {
    let problem = request.problem_id.resolve().inspect_err(|_| {
        warn!(problem = ?request.problem_id, "no simulator registered");
    })?;

    let target = request.target.as_ref().unwrap_or(&Value::Null);
    let pair = run(problem, &request.input, target).inspect_err(|e| {
        warn!(problem = problem.slug(), error = %e, "rejected input");
    })?;

    debug!(
        problem = problem.slug(),
        brute_steps = pair.brute_force_steps.len(),
        optimal_steps = pair.optimal_steps.len(),
        "generated steps"
    );
    Ok(pair)
}

/// Convenience wrapper for callers that already hold a [`Problem`]
pub fn simulate_problem(
    problem: Problem,
    input: Value,
    target: Option<Value>,
) -> Result<StepPair, ProblemError> {
    let request = StepRequest::new(problem, input);
    let request = match target {
        Some(target) => request.with_target(target),
        None => request,
    };
    simulate(&request)
}

fn run(problem: Problem, input: &Value, target: &Value) -> Result<StepPair, ProblemError> {
    let slug = problem.slug();
    let on_input = |source: InputError| ProblemError::InvalidInput {
        problem: slug,
        field: "input",
        source,
    };
    let on_target = |source: InputError| ProblemError::InvalidInput {
        problem: slug,
        field: "target",
        source,
    };

    let pair = match problem {
        Problem::TwoSum => {
            let nums = input::i32_array(input).map_err(on_input)?;
            let target = input::i32_value(target).map_err(on_target)?;
            simulators::two_sum::simulate(&nums, target)
        }
        Problem::AddTwoNumbers => {
            let l1 = input::digit_array(input).map_err(on_input)?;
            let l2 = input::digit_array(target).map_err(on_target)?;
            simulators::linked_list::simulate(&l1, &l2)
        }
        Problem::LongestSubstring => simulators::sliding_window::simulate(&input::text(input)),
        Problem::MedianOfTwoSortedArrays => {
            let nums1 = input::i32_array(input).map_err(on_input)?;
            let nums2 = input::i32_array(target).map_err(on_target)?;
            simulators::median::simulate(&nums1, &nums2)
        }
        Problem::LongestPalindrome => simulators::palindrome::simulate(&input::text(input)),
        Problem::ZigzagConversion => {
            let rows = input::bounded(target, 1, i32::MAX as i64).map_err(on_target)?;
            simulators::zigzag::simulate(&input::text(input), rows as usize)
        }
        Problem::ReverseInteger => {
            let x = input::i32_value(input).map_err(on_input)?;
            simulators::digits::reverse_integer(x)
        }
        Problem::StringToInteger => simulators::digits::atoi(&input::text(input)),
        Problem::PalindromeNumber => {
            let x = input::i32_value(input).map_err(on_input)?;
            simulators::digits::palindrome_number(x)
        }
        Problem::RegexMatching => {
            simulators::regex::simulate(&input::text(input), &input::text(target))
        }
        Problem::ContainerWithMostWater => {
            let heights = input::bounded_array(input, 0, i32::MAX as i64).map_err(on_input)?;
            let heights: Vec<i32> = heights.into_iter().map(|h| h as i32).collect();
            simulators::container::simulate(&heights)
        }
        Problem::ThreeSum => {
            let nums = input::i32_array(input).map_err(on_input)?;
            let target = match target {
                Value::Null => 0,
                other => input::i32_value(other).map_err(on_target)?,
            };
            simulators::three_sum::simulate(&nums, target)
        }
        Problem::ValidParentheses => simulators::parentheses::simulate(&input::text(input)),
        Problem::MergeTwoSortedLists => {
            let list1 = input::i32_array(input).map_err(on_input)?;
            let list2 = input::i32_array(target).map_err(on_target)?;
            simulators::merge_lists::simulate(&list1, &list2)
        }
        Problem::SearchInRotatedSortedArray => {
            let nums = input::i32_array(input).map_err(on_input)?;
            let target = input::i32_value(target).map_err(on_target)?;
            simulators::rotated_search::simulate(&nums, target)
        }
        Problem::ValidPalindrome => simulators::valid_palindrome::simulate(&input::text(input)),
        Problem::MaximumSubarray => {
            let nums = input::i32_array(input).map_err(on_input)?;
            simulators::max_subarray::simulate(&nums)
        }
        Problem::MoveZeroes => {
            let nums = input::i32_array(input).map_err(on_input)?;
            simulators::move_zeroes::simulate(&nums)
        }
        Problem::BinarySearch => {
            let nums = input::i32_array(input).map_err(on_input)?;
            let target = input::i32_value(target).map_err(on_target)?;
            simulators::binary_search::simulate(&nums, target)
        }
    };
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_lookup() {
        for problem in Problem::ALL {
            assert_eq!(Problem::from_id(problem.id()), Some(problem));
            assert_eq!(Problem::from_slug(problem.slug()), Some(problem));
        }
        assert_eq!("11".parse::<Problem>().unwrap(), Problem::ContainerWithMostWater);
        assert_eq!("Two-Sum".parse::<Problem>().unwrap(), Problem::TwoSum);
        assert_eq!("3sum".parse::<Problem>().unwrap(), Problem::ThreeSum);
        assert_eq!("125".parse::<Problem>().unwrap(), Problem::ValidPalindrome);
        assert!("12".parse::<Problem>().unwrap_err().is_not_implemented());
    }

    #[test]
    fn test_request_deserializes_id_or_slug() {
        let by_id: StepRequest =
            serde_json::from_value(json!({"problemId": 1, "input": [2, 7], "target": 9})).unwrap();
        assert_eq!(by_id.problem_id, ProblemRef::Id(1));

        let by_slug: StepRequest =
            serde_json::from_value(json!({"problemId": "valid-parentheses", "input": "()"}))
                .unwrap();
        assert_eq!(by_slug.problem_id.resolve().unwrap(), Problem::ValidParentheses);
        assert!(by_slug.target.is_none());
    }

    #[test]
    fn test_unknown_problem_is_not_implemented() {
        let err = simulate(&StepRequest::new(ProblemRef::Id(999), json!([]))).unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_invalid_input_names_the_field() {
        let err = simulate_problem(Problem::TwoSum, json!([1, 2]), Some(json!("nine")))
            .unwrap_err();
        match err {
            ProblemError::InvalidInput { problem, field, .. } => {
                assert_eq!(problem, "two-sum");
                assert_eq!(field, "target");
            }
            other => panic!("unexpected error {:?}", other),
        }

        let err = simulate_problem(Problem::ZigzagConversion, json!("AB"), Some(json!(0)))
            .unwrap_err();
        assert!(err.is_invalid_input());

        let err = simulate_problem(Problem::ContainerWithMostWater, json!([1, -2]), None)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_three_sum_target_defaults_to_zero() {
        let implicit = simulate_problem(Problem::ThreeSum, json!([-1, 0, 1, 2, -1, -4]), None)
            .unwrap();
        let explicit =
            simulate_problem(Problem::ThreeSum, json!([-1, 0, 1, 2, -1, -4]), Some(json!(0)))
                .unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_string_fields_accept_other_json() {
        let pair = simulate_problem(Problem::StringToInteger, json!(42), None).unwrap();
        assert!(pair.optimal_steps.last().unwrap().is_terminal());
    }
}
