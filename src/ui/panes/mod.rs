//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`narration`]: problem header, variant and phase badges, step description
//! - [`steps`]: scrollable list of every step with the current one highlighted
//! - [`state`]: pointers, window range and detail fields of the current step
//! - [`status`]: status bar with keybindings and playback state
//! - `format`: shared value formatting
//!
//! Each pane module exports a `render_*` function taking the frame, its area
//! and the data it draws. Panes hold no state of their own; scroll offsets
//! live in the [`App`](crate::ui::App) and are passed by `&mut`.

mod format;

pub mod narration;
pub mod state;
pub mod status;
pub mod steps;

pub use narration::render_narration_pane;
pub use state::render_state_pane;
pub use status::render_status_bar;
pub use steps::{render_steps_pane, StepsScrollState};
