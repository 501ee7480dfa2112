use std::collections::BTreeMap;
use tui_input::Input;

use crate::form::{FieldKind, FieldName, FormValues, ValidationErrors};
use crate::wizard::SubmissionReceipt;

/// Which screen the terminal shows
#[derive(Debug)]
pub enum ScreenState {
    Form(FormScreenState),
    Complete(CompleteState),
}

/// State for the step form screen
#[derive(Debug, Default)]
pub struct FormScreenState {
    /// Index into the active step's field list
    pub focused: usize,
    /// Text inputs for every text and number field, kept across steps
    pub inputs: BTreeMap<FieldName, Input>,
    /// Inline errors from the last blocked submit
    pub errors: ValidationErrors,
    /// Message from a rejected final submission
    pub submit_error: Option<String>,
    /// Spinner frame while a submission is in flight
    pub spinner_frame: usize,
    /// Set after one Ctrl+C so the help bar can ask for the second
    pub quit_armed: bool,
}

/// State for the completion screen
#[derive(Debug)]
pub struct CompleteState {
    pub receipt: SubmissionReceipt,
}

/// Actions requested by key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    Continue, // Validate and advance or submit
    Back,     // Go to previous step
    Quit,     // Exit wizard
}

impl FormScreenState {
    /// Build inputs pre-filled from the current values
    pub fn for_values(values: &FormValues) -> Self {
        let inputs = FieldName::ALL
            .iter()
            .filter(|field| field.kind() != FieldKind::Checkbox)
            .map(|field| (*field, Input::new(values.display_text(*field))))
            .collect();
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Reset per-step UI state after the active step changes
    pub fn enter_step(&mut self) {
        self.focused = 0;
        self.errors = ValidationErrors::default();
        self.submit_error = None;
    }

    pub fn focus_next(&mut self, field_count: usize) {
        if field_count > 0 {
            self.focused = (self.focused + 1) % field_count;
        }
    }

    pub fn focus_prev(&mut self, field_count: usize) {
        if field_count > 0 {
            self.focused = (self.focused + field_count - 1) % field_count;
        }
    }

    /// Move focus to the first field of `fields` that has an error
    pub fn focus_first_error(&mut self, fields: &[FieldName]) {
        if let Some(pos) = fields.iter().position(|f| self.errors.get(*f).is_some()) {
            self.focused = pos;
        }
    }

    pub fn input(&self, field: FieldName) -> Option<&Input> {
        self.inputs.get(&field)
    }
}

impl ScreenState {
    /// Get the name of the current screen
    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Form(_) => "Form",
            ScreenState::Complete(_) => "Complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ScreenState::Complete(_))
    }
}
