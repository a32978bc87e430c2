//! Simulator-specific step payloads
//!
//! Each simulator records its own scalars (sums, carries, complements, window
//! lengths) in a dedicated struct. [`StepDetail`] is the tagged union over all
//! of them; it serializes with a `kind` discriminator so the playback layer can
//! pick a renderer without guessing at field names.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Partition boundary value where out-of-range positions are infinite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound {
    NegInfinity,
    Finite(i64),
    PosInfinity,
}

impl Bound {
    /// Value at `index` in `values`, or the matching infinity when out of range
    pub fn left_of(values: &[i32], index: usize) -> Self {
        match index.checked_sub(1).and_then(|i| values.get(i)) {
            Some(&v) => Bound::Finite(v as i64),
            None => Bound::NegInfinity,
        }
    }

    pub fn right_of(values: &[i32], index: usize) -> Self {
        match values.get(index) {
            Some(&v) => Bound::Finite(v as i64),
            None => Bound::PosInfinity,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::Finite(v) => v as f64,
            Bound::PosInfinity => f64::INFINITY,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInfinity => write!(f, "-∞"),
            Bound::Finite(v) => write!(f, "{}", v),
            Bound::PosInfinity => write!(f, "+∞"),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::NegInfinity => serializer.serialize_str("-Infinity"),
            Bound::Finite(v) => serializer.serialize_i64(*v),
            Bound::PosInfinity => serializer.serialize_str("Infinity"),
        }
    }
}

/// Brute-force pair comparison (two-sum)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSumDetail {
    pub sum: i64,
    pub target: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<(usize, usize)>,
}

/// Hash-map lookup scan (two-sum)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashLookupDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<i64>,
    pub target: i64,
    /// Seen value -> index, copied at the moment the step was recorded
    pub map_state: BTreeMap<i64, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<(usize, usize)>,
}

/// Longest substring without repeating characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDetail {
    pub window: String,
    pub current_len: usize,
    pub max_len: usize,
    pub has_repeat: bool,
    pub is_new_max: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_char: Option<char>,
    /// Character set contents (optimal pass only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_set: Option<BTreeSet<char>>,
}

/// Merge-and-sort median
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeDetail {
    pub merged: Vec<i32>,
    pub median: Option<f64>,
}

/// One binary-search partition of the median search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionDetail {
    pub array1: Vec<i32>,
    pub array2: Vec<i32>,
    pub a_left: Bound,
    pub a_right: Bound,
    pub b_left: Bound,
    pub b_right: Bound,
    pub median: Option<f64>,
}

/// Longest palindromic substring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeDetail {
    pub substring: String,
    pub current_len: usize,
    pub max_len: usize,
    pub is_palindrome: bool,
    pub longest: String,
}

/// Row direction of the zigzag walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZigzagDetail {
    pub num_rows: usize,
    pub rows: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// One digit position of linked-list addition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitSumDetail {
    pub v1: u8,
    pub v2: u8,
    pub carry_in: u16,
    pub sum: u16,
    pub digit: u8,
    pub carry_out: u16,
    pub result: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseDetail {
    pub x: i32,
    pub sign: i8,
    pub remaining: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popped: Option<u8>,
    /// Signed running result
    pub result: i64,
    pub overflow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtoiDetail {
    pub input: String,
    pub sign: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit: Option<u8>,
    /// Signed running value
    pub value: i64,
    pub clamped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeNumberDetail {
    pub x: i32,
    pub remaining: i64,
    pub reversed: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
}

/// Simplified pattern walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexDetail {
    pub pattern_char: Option<char>,
    pub string_char: Option<char>,
    pub wildcard: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDetail {
    pub heights: Vec<i32>,
    pub area: i64,
    pub max_area: i64,
    pub is_new_max: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDetail {
    pub array: Vec<i32>,
    pub target: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
}

/// Maximum subarray sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubarrayDetail {
    pub current_sum: i64,
    pub best_sum: i64,
    pub is_new_max: bool,
    /// Inclusive bounds of the best subarray so far
    pub best_range: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketDetail {
    pub stack: Vec<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popped: Option<char>,
    pub balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactionDetail {
    pub array: Vec<i32>,
    pub last_non_zero: usize,
    pub swapped: bool,
}

/// Triplet scan (3Sum)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripletDetail {
    /// Input as scanned: original order for the brute pass, sorted for the optimal one
    pub array: Vec<i32>,
    pub target: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    pub is_match: bool,
    /// Unique triplets found so far, each sorted ascending
    pub triplets: Vec<[i32; 3]>,
}

/// Which half of a rotated array is known to be sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortedHalf {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatedSearchDetail {
    pub array: Vec<i32>,
    pub target: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted_half: Option<SortedHalf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
}

/// Source list of a merged value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSide {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeListsDetail {
    pub list1: Vec<i32>,
    pub list2: Vec<i32>,
    pub merged: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_from: Option<ListSide>,
}

/// Alphanumeric-only palindrome check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymmetryDetail {
    /// Lowercased alphanumeric characters of the input
    pub cleaned: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_char: Option<char>,
    pub matched: bool,
}

/// Tagged union of all simulator payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    PairSum(PairSumDetail),
    HashLookup(HashLookupDetail),
    Window(WindowDetail),
    Merge(MergeDetail),
    Partition(PartitionDetail),
    Palindrome(PalindromeDetail),
    Zigzag(ZigzagDetail),
    DigitSum(DigitSumDetail),
    Reverse(ReverseDetail),
    Atoi(AtoiDetail),
    PalindromeNumber(PalindromeNumberDetail),
    Regex(RegexDetail),
    Container(ContainerDetail),
    Search(SearchDetail),
    Subarray(SubarrayDetail),
    Bracket(BracketDetail),
    Compaction(CompactionDetail),
    Triplet(TripletDetail),
    RotatedSearch(RotatedSearchDetail),
    MergeLists(MergeListsDetail),
    Symmetry(SymmetryDetail),
}

macro_rules! impl_from_detail {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for StepDetail {
                fn from(detail: $ty) -> Self {
                    StepDetail::$variant(detail)
                }
            }
        )*
    };
}

impl_from_detail!(
    PairSum(PairSumDetail),
    HashLookup(HashLookupDetail),
    Window(WindowDetail),
    Merge(MergeDetail),
    Partition(PartitionDetail),
    Palindrome(PalindromeDetail),
    Zigzag(ZigzagDetail),
    DigitSum(DigitSumDetail),
    Reverse(ReverseDetail),
    Atoi(AtoiDetail),
    PalindromeNumber(PalindromeNumberDetail),
    Regex(RegexDetail),
    Container(ContainerDetail),
    Search(SearchDetail),
    Subarray(SubarrayDetail),
    Bracket(BracketDetail),
    Compaction(CompactionDetail),
    Triplet(TripletDetail),
    RotatedSearch(RotatedSearchDetail),
    MergeLists(MergeListsDetail),
    Symmetry(SymmetryDetail),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_ordering() {
        assert!(Bound::NegInfinity < Bound::Finite(i64::MIN));
        assert!(Bound::Finite(i64::MAX) < Bound::PosInfinity);
        assert!(Bound::Finite(-3) < Bound::Finite(2));
    }

    #[test]
    fn test_bound_lookup_out_of_range() {
        let values = [1, 3];
        assert_eq!(Bound::left_of(&values, 0), Bound::NegInfinity);
        assert_eq!(Bound::left_of(&values, 1), Bound::Finite(1));
        assert_eq!(Bound::right_of(&values, 2), Bound::PosInfinity);
    }

    #[test]
    fn test_bound_serializes_infinities_as_strings() {
        let json = serde_json::to_value([Bound::NegInfinity, Bound::Finite(4), Bound::PosInfinity])
            .unwrap();
        assert_eq!(json, serde_json::json!(["-Infinity", 4, "Infinity"]));
    }
}
