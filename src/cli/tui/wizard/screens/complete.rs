//! Completion screen shown after a successful submission

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::cli::tui::wizard::state::CompleteState;
use crate::cli::tui::wizard::theme::Theme;
use crate::form::FieldName;
use crate::wizard::WizardController;

pub fn render(frame: &mut Frame, state: &CompleteState, controller: &WizardController, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Min(0),    // Summary
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    // every step reports Done once the wizard has completed
    let steps: Vec<Span> = controller
        .indicator()
        .into_iter()
        .map(|(label, status)| {
            Span::styled(format!(" {} {} ", Theme::step_icon(status), label), theme.step_style(status))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(steps))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme.muted)),
        chunks[0],
    );

    render_summary(frame, chunks[1], state, theme);

    let help = Paragraph::new(Line::from(vec![
        Span::raw(" Press "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" to exit"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &CompleteState, theme: &Theme) {
    let receipt = &state.receipt;
    let values = &receipt.values;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓ Submitted", theme.success)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reference:  ", theme.muted),
            Span::raw(receipt.reference.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Submitted:  ", theme.muted),
            Span::raw(receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]),
        Line::from(""),
    ];

    for field in FieldName::ALL {
        let shown = match field {
            FieldName::Millionaire => (if values.millionaire { "yes" } else { "no" }).to_string(),
            _ => values.display_text(field),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<30}", field.label()), theme.label),
            Span::raw(shown),
        ]));
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.success),
    );
    frame.render_widget(summary, area);
}
