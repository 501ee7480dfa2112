//! Modal overlay system for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::theme::Theme;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Overlay shown while the final submission is in flight.
/// Navigation is disabled until it resolves.
pub fn render_submitting_modal(frame: &mut Frame, area: Rect, spinner_frame: usize, theme: &Theme) {
    let modal_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(" Submitting ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner_area = modal_block.inner(modal_area);
    frame.render_widget(modal_block, modal_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(Theme::spinner(spinner_frame), theme.focused),
            Span::raw(" Sending your answers..."),
        ]),
        Line::from(""),
        Line::from(Span::styled("Please wait, controls are disabled", theme.muted)),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, inner_area);
}
