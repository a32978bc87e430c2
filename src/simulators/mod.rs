//! Algorithm simulators
//!
//! Each simulator is an independent pure function that runs a reference
//! implementation of one algorithm and records a [`Step`] at every decision
//! point. All of them return a [`StepPair`]:
//!
//! - [`two_sum`]: nested pair scan / hash-map complement lookup
//! - [`sliding_window`]: substring scan / two-pointer window with a char set
//! - [`linked_list`]: digit-wise addition with carry
//! - [`median`]: merge and sort / binary-search partition
//! - [`palindrome`]: substring check / expand around center
//! - [`zigzag`]: row assignment walk
//! - [`digits`]: reverse integer, atoi, palindrome number
//! - [`regex`]: simplified greedy pattern walk
//! - [`container`]: every pair / two pointers inward
//! - [`three_sum`]: every triple / sort plus two pointers
//! - [`rotated_search`]: linear scan / binary search on the sorted half
//! - [`merge_lists`]: concatenate and sort / two-pointer merge
//! - [`valid_palindrome`]: compare with reverse / two pointers skipping punctuation
//! - [`binary_search`], [`max_subarray`], [`parentheses`], [`move_zeroes`]
//!
//! # Determinism
//!
//! Simulators hold no state between calls and use no randomness, so the same
//! input always yields the same pair. Scratch structures (maps, sets, stacks)
//! are copied into each step as they are recorded; later mutation never
//! reaches a step that was already pushed.
//!
//! [`Step`]: crate::step::Step
//! [`StepPair`]: crate::step::StepPair

pub mod binary_search;
pub mod constants;
pub mod container;
pub mod digits;
pub mod linked_list;
pub mod max_subarray;
pub mod median;
pub mod merge_lists;
pub mod move_zeroes;
pub mod palindrome;
pub mod parentheses;
pub mod regex;
pub mod rotated_search;
pub mod sliding_window;
pub mod three_sum;
pub mod two_sum;
pub mod valid_palindrome;
pub mod zigzag;
