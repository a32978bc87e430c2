//! Step list pane rendering
//!
//! Lists every step of the active sequence with its number, phase and a
//! one-line description. The current step is highlighted with an arrow and the
//! current-line background.

use super::format::truncate;
use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll bookkeeping for the step list
#[derive(Debug, Default, Clone, Copy)]
pub struct StepsScrollState {
    pub offset: usize,
    /// Bring the current step into view on the next render
    pub follow: bool,
}

pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    current: usize,
    is_focused: bool,
    scroll: &mut StepsScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Steps ({}) ", steps.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;

    if scroll.follow {
        if current < scroll.offset {
            scroll.offset = current;
        } else if current >= scroll.offset + visible_height {
            scroll.offset = current + 1 - visible_height;
        }
        scroll.follow = false;
    }
    let max_scroll = steps.len().saturating_sub(visible_height);
    scroll.offset = scroll.offset.min(max_scroll);

    let number_width = steps.len().to_string().len();

    let items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let is_current = idx == current;
            let marker = if is_current { "→ " } else { "  " };
            let phase = step.phase();

            // marker + number + space + badge(1) + space
            let prefix_width = 2 + number_width + 3;
            let description = truncate(&step.description, inner_width.saturating_sub(prefix_width));

            let mut line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.pointer)),
                Span::styled(
                    format!("{:>width$} ", step.step, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("●", Style::default().fg(DEFAULT_THEME.phase_color(phase))),
                Span::raw(" "),
                Span::styled(
                    description,
                    if is_current {
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.fg)
                    },
                ),
            ]);
            if is_current {
                line = line.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
