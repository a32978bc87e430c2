//! Cursor over a recorded step list
//!
//! [`Playback`] owns one list of [`Step`]s and a position within it. It is the
//! model behind the terminal player but has no terminal dependency: time is
//! passed in explicitly through [`Playback::tick`], so auto-play can be driven
//! by an event loop or by tests.
//!
//! # Position
//!
//! The position is a 0-based index into the list. An empty list has no
//! current step and every movement is a no-op.

use crate::step::Step;
use std::time::{Duration, Instant};

pub const MIN_INTERVAL: Duration = Duration::from_millis(50);
pub const MAX_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Time between automatic steps while playing
    pub interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            interval: Duration::from_secs(1),
        }
    }
}

impl PlaybackConfig {
    pub fn with_interval(interval: Duration) -> Self {
        PlaybackConfig {
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    position: usize,
    is_playing: bool,
    interval: Duration,
    /// `None` right after play starts, so the first tick advances at once
    last_advance: Option<Instant>,
}

impl Playback {
    pub fn new(steps: Vec<Step>, config: PlaybackConfig) -> Self {
        Playback {
            steps,
            position: 0,
            is_playing: false,
            interval: config.interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            last_advance: None,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance one step. Returns `false` when already at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one step. Returns `false` when already at the start.
    pub fn step_backward(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to `index`, clamped to the last step
    pub fn seek(&mut self, index: usize) -> usize {
        self.position = index.min(self.steps.len().saturating_sub(1));
        self.position
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len().saturating_sub(1);
    }

    /// Start or stop auto-play. Starting at the end replays from the start.
    pub fn toggle_play(&mut self) -> bool {
        if self.is_playing {
            self.pause();
        } else if !self.steps.is_empty() {
            if self.is_at_end() {
                self.rewind();
            }
            self.is_playing = true;
            self.last_advance = None;
        }
        self.is_playing
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Halve the interval, down to [`MIN_INTERVAL`]
    pub fn faster(&mut self) -> Duration {
        self.interval = (self.interval / 2).max(MIN_INTERVAL);
        self.interval
    }

    /// Double the interval, up to [`MAX_INTERVAL`]
    pub fn slower(&mut self) -> Duration {
        self.interval = (self.interval * 2).min(MAX_INTERVAL);
        self.interval
    }

    /// Advance one step if playing and the interval has elapsed since the
    /// last advance. Playback stops on reaching the last step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_playing {
            return false;
        }
        let due = match self.last_advance {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if !due {
            return false;
        }

        let moved = self.step_forward();
        self.last_advance = Some(now);
        if self.is_at_end() {
            self.is_playing = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulators::move_zeroes;

    fn playback() -> Playback {
        // Init, one step per element, final summary
        let steps = move_zeroes::simulate(&[0, 1, 2]).optimal_steps;
        assert_eq!(steps.len(), 5);
        Playback::new(steps, PlaybackConfig::default())
    }

    #[test]
    fn test_step_navigation() {
        let mut pb = playback();
        assert!(pb.is_at_start());
        assert!(!pb.step_backward());
        assert!(pb.step_forward());
        assert_eq!(pb.current().unwrap().step, 2);

        pb.jump_to_end();
        assert!(pb.is_at_end());
        assert!(!pb.step_forward());
        assert!(pb.current().unwrap().is_terminal());

        pb.rewind();
        assert_eq!(pb.position(), 0);
    }

    #[test]
    fn test_seek_clamps() {
        let mut pb = playback();
        assert_eq!(pb.seek(2), 2);
        assert_eq!(pb.seek(100), 4);
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut pb = playback();
        let t0 = Instant::now();
        assert!(!pb.tick(t0));

        assert!(pb.toggle_play());
        assert!(pb.tick(t0));
        assert_eq!(pb.position(), 1);
        assert!(!pb.tick(t0 + Duration::from_millis(999)));
        assert!(pb.tick(t0 + Duration::from_secs(1)));
        assert_eq!(pb.position(), 2);
    }

    #[test]
    fn test_playing_stops_at_end_and_replays() {
        let mut pb = playback();
        pb.toggle_play();
        let mut now = Instant::now();
        for _ in 0..10 {
            pb.tick(now);
            now += Duration::from_secs(1);
        }
        assert!(pb.is_at_end());
        assert!(!pb.is_playing());

        assert!(pb.toggle_play());
        assert!(pb.is_at_start());
    }

    #[test]
    fn test_speed_bounds() {
        let mut pb = playback();
        for _ in 0..10 {
            pb.faster();
        }
        assert_eq!(pb.interval(), MIN_INTERVAL);
        for _ in 0..10 {
            pb.slower();
        }
        assert_eq!(pb.interval(), MAX_INTERVAL);
    }

    #[test]
    fn test_empty_list() {
        let mut pb = Playback::new(Vec::new(), PlaybackConfig::default());
        assert!(pb.current().is_none());
        assert!(!pb.step_forward());
        assert!(!pb.toggle_play());
        assert_eq!(pb.seek(3), 0);
    }
}
