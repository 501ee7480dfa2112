//! Step form screen: progress indicator, prompt, fields and help bar

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::cli::tui::wizard::fields::{render_field, FIELD_HEIGHT};
use crate::cli::tui::wizard::modal::render_submitting_modal;
use crate::cli::tui::wizard::state::FormScreenState;
use crate::cli::tui::wizard::theme::Theme;
use crate::form::{interpolate, FormValues};
use crate::wizard::WizardController;

pub fn render(
    frame: &mut Frame,
    state: &FormScreenState,
    controller: &WizardController,
    values: &FormValues,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Min(0),    // Step body
            Constraint::Length(1), // Submission error
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_indicator(frame, chunks[0], controller, theme);
    render_body(frame, chunks[1], state, controller, values, theme);

    if let Some(error) = &state.submit_error {
        let line = Line::from(vec![
            Span::styled(" ✗ ", theme.error),
            Span::styled(error.as_str(), theme.error),
            Span::styled("  (Enter to retry)", theme.muted),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[2]);
    }

    render_help(frame, chunks[3], state, controller);

    if controller.is_in_flight() {
        render_submitting_modal(frame, frame.area(), state.spinner_frame, theme);
    }
}

fn render_indicator(frame: &mut Frame, area: Rect, controller: &WizardController, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, (label, status)) in controller.indicator().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ─  ", theme.muted));
        }
        spans.push(Span::styled(
            format!("{} {}", Theme::step_icon(status), label),
            theme.step_style(status),
        ));
    }

    let indicator = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.muted));
    frame.render_widget(indicator, area);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &FormScreenState,
    controller: &WizardController,
    values: &FormValues,
    theme: &Theme,
) {
    let Some(step) = controller.current_step() else {
        let empty = Paragraph::new("This wizard has no steps.").alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let title = format!(
        " Step {} of {}: {} ",
        controller.current_index() + 1,
        controller.steps().len(),
        step.label
    );
    let block = Block::default()
        .title(Span::styled(title, theme.highlight))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Prompt
    constraints.extend(step.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT + 1)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    if let Some(prompt) = &step.prompt {
        let prompt = Paragraph::new(interpolate(prompt, values))
            .style(theme.label)
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, rows[0]);
    }

    for (i, field) in step.fields.iter().enumerate() {
        render_field(
            frame,
            rows[i + 1],
            *field,
            i == state.focused && !controller.is_in_flight(),
            state,
            values,
            theme,
        );
    }
}

fn render_help(frame: &mut Frame, area: Rect, state: &FormScreenState, controller: &WizardController) {
    let key = Style::default().fg(Color::Green);
    let mut spans = if controller.is_in_flight() {
        vec![Span::raw(" Submitting...")]
    } else {
        let action = if controller.is_last_step() { " Submit  " } else { " Next  " };
        let mut spans = vec![
            Span::styled(" [Enter]", key),
            Span::raw(action),
            Span::styled("[Tab]", key),
            Span::raw(" Fields  "),
        ];
        if controller.can_retreat() {
            spans.push(Span::styled("[Esc]", key));
            spans.push(Span::raw(" Back  "));
        }
        spans.push(Span::styled("[Ctrl+C]", key));
        spans.push(Span::raw(" Quit"));
        spans
    };

    if state.quit_armed {
        spans.push(Span::styled("   Press Ctrl+C again to quit", Style::default().fg(Color::Yellow)));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(help, area);
}
