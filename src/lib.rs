//! # Introduction
//!
//! algoscope runs reference implementations of classic algorithm problems and
//! records a [`step::Step`] at every decision point: each comparison, pointer
//! move, map insert or carry. For every input it produces two sequences, a
//! brute-force and an optimal one, that a front end can replay side by side.
//!
//! ## Pipeline
//!
//! ```text
//! StepRequest → problems (parse + dispatch) → simulators → StepPair → JSON / TUI
//! ```
//!
//! 1. [`problems`]: the problem registry, lenient input parsing and
//!    [`problems::simulate`], the single entry point for a request.
//! 2. [`simulators`]: one pure function per algorithm, returning a
//!    [`step::StepPair`].
//! 3. [`step`]: the step record, phases, per-simulator detail payloads and the
//!    recorder that numbers steps.
//! 4. [`playback`]: a cursor over one step list with auto-play timing.
//! 5. [`ui`]: ratatui-based terminal player; not part of the stable library
//!    API.
//!
//! ## Guarantees
//!
//! Every list a simulator returns is non-empty, numbered `1..=n`, and ends
//! with its only terminal step (`found` or `not_found`). The same input always
//! yields the same pair.

pub mod playback;
pub mod problems;
pub mod simulators;
pub mod step;
pub mod ui;
