use ratatui::style::{Color, Modifier, Style};

use crate::wizard::StepStatus;

/// Consistent theme for the TUI
pub struct Theme {
    pub focused: Style,
    pub label: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub modal_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label: Style::default()
                .fg(Color::Yellow),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            modal_border: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Get style for a step in the progress indicator
    pub fn step_style(&self, status: StepStatus) -> Style {
        match status {
            StepStatus::Done => self.success,
            StepStatus::Current => self.focused,
            StepStatus::Pending => self.muted,
        }
    }

    /// Get status icon
    pub fn step_icon(status: StepStatus) -> &'static str {
        match status {
            StepStatus::Done => "✓",
            StepStatus::Current => "▶",
            StepStatus::Pending => "○",
        }
    }

    pub fn spinner(frame: usize) -> &'static str {
        const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
        FRAMES[frame % FRAMES.len()]
    }
}
