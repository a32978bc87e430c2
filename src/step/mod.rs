//! Step records produced by the simulators
//!
//! A [`Step`] is one recorded decision point of an algorithm run. Simulators
//! never build step lists by hand: they push into a [`StepRecorder`], which
//! owns the 1-based numbering and hands back an immutable `Vec<Step>` when the
//! run is over.
//!
//! Every simulator returns a [`StepPair`] holding the brute-force and the
//! optimal sequence for the same input. Both lists are non-empty and end with
//! their only terminal step (see [`Phase::is_terminal`]).

pub mod detail;

pub use detail::*;

use serde::Serialize;

/// Coarse execution phase attached to every step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Setup before the first comparison
    Init,
    Searching,
    /// Run finished with an answer
    Found,
    /// Run finished without an answer
    NotFound,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Found | Phase::NotFound)
    }
}

/// A named index into the visualized input (`i`, `j`, `left`, `right`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pointer {
    pub id: &'static str,
    pub index: usize,
}

impl Pointer {
    pub fn new(id: &'static str, index: usize) -> Self {
        Pointer { id, index }
    }
}

/// State payload of a step: shared render hints plus the simulator-specific detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepState {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pointers: Vec<Pointer>,
    /// Inclusive `[left, right]` range for window-style visualizations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_range: Option<(usize, usize)>,
    pub detail: StepDetail,
}

impl StepState {
    pub fn new(phase: Phase, detail: impl Into<StepDetail>) -> Self {
        StepState {
            phase,
            pointers: Vec::new(),
            window_range: None,
            detail: detail.into(),
        }
    }

    pub fn with_pointer(mut self, id: &'static str, index: usize) -> Self {
        self.pointers.push(Pointer::new(id, index));
        self
    }

    pub fn with_window(mut self, left: usize, right: usize) -> Self {
        self.window_range = Some((left, right));
        self
    }

    /// Look up a pointer by name
    pub fn pointer(&self, id: &str) -> Option<usize> {
        self.pointers.iter().find(|p| p.id == id).map(|p| p.index)
    }
}

/// One recorded snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position within its own list
    pub step: usize,
    pub description: String,
    /// Advisory source line for code highlighting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_line: Option<u32>,
    pub state: StepState,
}

impl Step {
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.state.phase.is_terminal()
    }
}

/// Append-only builder for a step list
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Record a step, numbering it after the steps already pushed
    pub fn record(&mut self, description: impl Into<String>, state: StepState) {
        self.push(None, description.into(), state);
    }

    /// Record a step with a source line hint
    pub fn record_at(&mut self, line: u32, description: impl Into<String>, state: StepState) {
        self.push(Some(line), description.into(), state);
    }

    fn push(&mut self, active_line: Option<u32>, description: String, state: StepState) {
        let step = self.steps.len() + 1;
        self.steps.push(Step {
            step,
            description,
            active_line,
            state,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

/// The two step sequences every simulator returns for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepPair {
    pub brute_force_steps: Vec<Step>,
    pub optimal_steps: Vec<Step>,
}

impl StepPair {
    pub fn new(brute_force_steps: Vec<Step>, optimal_steps: Vec<Step>) -> Self {
        StepPair {
            brute_force_steps,
            optimal_steps,
        }
    }

    /// Both lists hold the same sequence (no brute/optimal distinction)
    pub fn shared(steps: Vec<Step>) -> Self {
        StepPair {
            brute_force_steps: steps.clone(),
            optimal_steps: steps,
        }
    }

    pub fn brute_result(&self) -> Option<&Step> {
        self.brute_force_steps.last()
    }

    pub fn optimal_result(&self) -> Option<&Step> {
        self.optimal_steps.last()
    }

    pub fn get(&self, variant: Variant) -> &[Step] {
        match variant {
            Variant::Brute => &self.brute_force_steps,
            Variant::Optimal => &self.optimal_steps,
        }
    }
}

/// Which list of a [`StepPair`] to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Brute,
    #[default]
    Optimal,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Brute => "Brute Force",
            Variant::Optimal => "Optimal",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Variant::Brute => Variant::Optimal,
            Variant::Optimal => Variant::Brute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searching() -> StepState {
        StepState::new(
            Phase::Searching,
            RegexDetail {
                pattern_char: Some('a'),
                string_char: Some('a'),
                wildcard: false,
                matched: true,
            },
        )
    }

    #[test]
    fn test_recorder_numbers_from_one() {
        let mut recorder = StepRecorder::new();
        recorder.record("first", searching());
        recorder.record_at(7, "second", searching());

        let steps = recorder.finish();
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[1].step, 2);
        assert_eq!(steps[0].active_line, None);
        assert_eq!(steps[1].active_line, Some(7));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Found.is_terminal());
        assert!(Phase::NotFound.is_terminal());
        assert!(!Phase::Searching.is_terminal());
        assert!(!Phase::Init.is_terminal());
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let mut recorder = StepRecorder::new();
        recorder.record_at(
            3,
            "window",
            searching().with_pointer("l", 0).with_window(0, 2),
        );
        let json = serde_json::to_value(&recorder.finish()[0]).unwrap();

        assert_eq!(json["activeLine"], 3);
        assert_eq!(json["state"]["phase"], "searching");
        assert_eq!(json["state"]["windowRange"], serde_json::json!([0, 2]));
        assert_eq!(json["state"]["pointers"][0]["id"], "l");
        assert_eq!(json["state"]["detail"]["kind"], "regex");
    }

    #[test]
    fn test_shared_pair_lists_are_equal() {
        let mut recorder = StepRecorder::new();
        recorder.record("only", searching());
        let pair = StepPair::shared(recorder.finish());
        assert_eq!(pair.brute_force_steps, pair.optimal_steps);
        assert_eq!(pair.get(Variant::Brute).len(), 1);
    }
}
