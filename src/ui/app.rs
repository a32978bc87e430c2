//! Main TUI application state and logic

use crate::playback::{Playback, PlaybackConfig};
use crate::step::{StepPair, Variant};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Steps,
    State,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::State,
            FocusedPane::State => FocusedPane::Steps,
        }
    }
}

/// The main application state
pub struct App {
    /// Header shown above the narration, e.g. "1. Two Sum"
    pub title: String,

    pub pair: StepPair,
    pub variant: Variant,

    /// Cursor over the list of the active variant
    pub playback: Playback,

    pub focused_pane: FocusedPane,

    pub steps_scroll: super::panes::StepsScrollState,
    pub state_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(title: String, pair: StepPair, variant: Variant, config: PlaybackConfig) -> Self {
        let playback = Playback::new(pair.get(variant).to_vec(), config);
        App {
            title,
            pair,
            variant,
            playback,
            focused_pane: FocusedPane::Steps,
            steps_scroll: super::panes::StepsScrollState {
                offset: 0,
                follow: true,
            },
            state_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.playback.is_playing() && self.playback.tick(Instant::now()) {
                self.moved();
                self.status_message = if self.playback.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Narration (top) | Steps (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);

        let current = self.playback.current();

        super::panes::render_narration_pane(
            frame,
            left_rows[0],
            &self.title,
            self.variant,
            current,
        );

        super::panes::render_steps_pane(
            frame,
            left_rows[1],
            self.playback.steps(),
            self.playback.position(),
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        super::panes::render_state_pane(
            frame,
            columns[1],
            current,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        super::panes::render_status_bar(frame, status_area, &self.status_message, &self.playback);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n).take_while(|_| self.playback.step_forward()).count();
                self.moved();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.playback.pause();
                if self.playback.step_backward() {
                    self.moved();
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Cannot step backward: at first step".to_string();
                }
            }
            KeyCode::Right => {
                self.playback.pause();
                if self.playback.step_forward() {
                    self.moved();
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Cannot step forward: at last step".to_string();
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Steps => {
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_sub(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Steps => {
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_add(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
            },
            KeyCode::PageUp => {
                self.playback.pause();
                let target = self.playback.position().saturating_sub(10);
                self.playback.seek(target);
                self.moved();
                self.status_message = format!("Seeked to step {}", target + 1);
            }
            KeyCode::PageDown => {
                self.playback.pause();
                let target = self.playback.seek(self.playback.position() + 10);
                self.moved();
                self.status_message = format!("Seeked to step {}", target + 1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.playback.toggle_play() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                    self.moved();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let interval = self.playback.faster();
                self.status_message = format!("Interval {}ms", interval.as_millis());
            }
            KeyCode::Char('-') => {
                let interval = self.playback.slower();
                self.status_message = format!("Interval {}ms", interval.as_millis());
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.switch_variant(self.variant.toggled());
            }
            KeyCode::Enter => {
                self.playback.pause();
                self.playback.jump_to_end();
                self.moved();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.playback.pause();
                self.playback.rewind();
                self.moved();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Show the other sequence of the pair, keeping the position where possible
    pub fn switch_variant(&mut self, variant: Variant) {
        let position = self.playback.position();
        let config = PlaybackConfig {
            interval: self.playback.interval(),
        };
        self.variant = variant;
        self.playback = Playback::new(self.pair.get(variant).to_vec(), config);
        self.playback.seek(position);
        self.moved();
        self.status_message = format!("Showing {} steps", variant.label());
    }

    /// Keep the current step in view after the position changed
    fn moved(&mut self) {
        self.steps_scroll.follow = true;
        self.state_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulators::container;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(
            "11. Container With Most Water".to_string(),
            container::simulate(&[1, 8, 6, 2, 5, 4, 8, 3, 7]),
            Variant::Optimal,
            PlaybackConfig::default(),
        )
    }

    #[test]
    fn test_keys_move_playback() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.position(), 1);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.playback.position(), 4);
        press(&mut app, KeyCode::Enter);
        assert!(app.playback.is_at_end());
        press(&mut app, KeyCode::Backspace);
        assert!(app.playback.is_at_start());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_variant_switch_clamps_position() {
        let mut app = app();
        let brute_len = app.pair.brute_force_steps.len();
        let optimal_len = app.pair.optimal_steps.len();
        assert!(brute_len > optimal_len);

        app.playback.jump_to_end();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.variant, Variant::Brute);
        assert_eq!(app.playback.position(), optimal_len - 1);

        app.playback.jump_to_end();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.variant, Variant::Optimal);
        assert!(app.playback.is_at_end());
    }
}
