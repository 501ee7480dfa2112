//! Field renderer: draws one form field with its label, value and inline error

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_input::Input;

use super::state::FormScreenState;
use super::theme::Theme;
use crate::form::{FieldKind, FieldName, FieldValue, FormValues};

/// Rows one field occupies: label, value, error
pub const FIELD_HEIGHT: u16 = 3;

pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    focused: bool,
    state: &FormScreenState,
    values: &FormValues,
    theme: &Theme,
) {
    let input = state.input(field);
    let error = state.errors.get(field);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Value
            Constraint::Length(1), // Error
        ])
        .split(area);

    let label_style = if focused { theme.focused } else { theme.label };
    let marker = if focused { "▶ " } else { "  " };

    match field.kind() {
        FieldKind::Checkbox => {
            let checked = matches!(values.get(field), FieldValue::Flag(true));
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(if checked { "[x] " } else { "[ ] " }, label_style),
                Span::styled(field.label(), label_style),
            ]);
            frame.render_widget(Paragraph::new(line), rows[0]);
            if focused {
                frame.render_widget(
                    Paragraph::new(Span::styled("    Space to toggle", theme.muted)),
                    rows[1],
                );
            }
        }
        FieldKind::Text | FieldKind::Number => {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(field.label(), label_style),
                ])),
                rows[0],
            );
            render_input(frame, rows[1], input, focused, theme);
        }
    }

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("    {}", message), theme.error)),
            rows[2],
        );
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: Option<&Input>, focused: bool, theme: &Theme) {
    const INDENT: u16 = 4;
    let Some(input) = input else {
        return;
    };

    let width = area.width.saturating_sub(INDENT + 1).max(1) as usize;
    let scroll = input.visual_scroll(width);
    let value_area = Rect {
        x: area.x + INDENT,
        width: area.width.saturating_sub(INDENT),
        ..area
    };

    let style = if focused { theme.focused } else { ratatui::style::Style::default() };
    let paragraph = Paragraph::new(input.value()).style(style).scroll((0, scroll as u16));
    frame.render_widget(paragraph, value_area);

    if focused {
        let cursor = input.visual_cursor().max(scroll) - scroll;
        frame.set_cursor_position((value_area.x + cursor as u16, value_area.y));
    }
}
