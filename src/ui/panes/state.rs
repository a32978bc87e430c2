//! Step state pane rendering
//!
//! Shows the structured part of the current step:
//!
//! - named pointers and their indices
//! - the window range, when the simulator records one
//! - every field of the simulator-specific detail
//!
//! Detail fields are read through their serialized form, so the pane needs no
//! knowledge of individual detail types; new detail kinds render as-is.

use super::format::{humanize_key, value_span};
use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build the pane's lines for one step
pub fn state_lines(step: &Step) -> Vec<Line<'static>> {
    let state = &step.state;
    let mut lines = Vec::new();

    if !state.pointers.is_empty() {
        lines.push(section("Pointers"));
        for pointer in &state.pointers {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", pointer.id),
                    Style::default().fg(DEFAULT_THEME.pointer),
                ),
                Span::styled("→ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    pointer.index.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]));
        }
        lines.push(Line::default());
    }

    if let Some((left, right)) = state.window_range {
        lines.push(section("Window"));
        lines.push(Line::from(Span::styled(
            format!("  [{}, {}]", left, right),
            Style::default().fg(DEFAULT_THEME.number),
        )));
        lines.push(Line::default());
    }

    match serde_json::to_value(&state.detail) {
        Ok(Value::Object(map)) => {
            let kind = map
                .get("kind")
                .and_then(Value::as_str)
                .map(humanize_key)
                .unwrap_or_default();
            lines.push(section(&format!("Detail ({})", kind)));
            for (key, value) in map.iter().filter(|(k, _)| k.as_str() != "kind") {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<16}", humanize_key(key)),
                        Style::default().fg(DEFAULT_THEME.field_name),
                    ),
                    value_span(value),
                ]));
            }
        }
        Ok(other) => lines.push(Line::from(value_span(&other))),
        Err(e) => lines.push(Line::from(Span::styled(
            format!("  <unrenderable detail: {}>", e),
            Style::default().fg(DEFAULT_THEME.error),
        ))),
    }

    lines
}

pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(step) = step else {
        let paragraph = Paragraph::new("(no state)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = state_lines(step);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulators::two_sum;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_state_lines_show_pointers_and_detail() {
        let pair = two_sum::simulate(&[2, 7, 11, 15], 9);
        let found = pair.brute_force_steps.last().unwrap();
        let text = text_of(&state_lines(found));
        assert!(text.contains("Pointers"));
        assert!(text.contains("Detail (pair sum)"));
        assert!(text.contains("target"));
        assert!(!text.contains("kind"));
    }
}
