//! Current step narration pane

use crate::step::{Step, Variant};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the problem header and the current step's description
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    variant: Variant,
    step: Option<&Step>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(step) = step else {
        let paragraph = Paragraph::new("(no steps recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let phase = step.phase();
    let phase_label = serde_json::to_value(phase)
        .ok()
        .and_then(|v| v.as_str().map(str::to_uppercase))
        .unwrap_or_default();

    let mut header = vec![
        Span::styled(
            format!(" {} ", variant.label()),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", phase_label),
            Style::default()
                .bg(DEFAULT_THEME.phase_color(phase))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(line) = step.active_line {
        header.push(Span::styled(
            format!("  line {}", line),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let lines = vec![
        Line::from(header),
        Line::default(),
        Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
