use ratatui::crossterm::event::KeyEvent;

use crate::wizard::SubmissionReceipt;
use crate::Result;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events - final submission
    SubmitFinished(Result<SubmissionReceipt>),

    // UI events
    Tick, // spinner animation
}
