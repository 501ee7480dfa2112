//! Unit tests for the form screen state

use hni_wizard::cli::tui::wizard::fields::render_field;
use hni_wizard::cli::tui::wizard::state::{FormScreenState, ScreenState, StateTransition};
use hni_wizard::cli::tui::wizard::theme::Theme;
use hni_wizard::form::{FieldName, FormValues};
use ratatui::{backend::TestBackend, Terminal};

/// Render one field into an in-memory terminal and return its text
fn rendered_field(field: FieldName, values: &FormValues) -> String {
    let state = FormScreenState::for_values(values);
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_field(frame, area, field, false, &state, values, &Theme::default());
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_inputs_prefilled_from_values() {
    let values = FormValues {
        first_name: "Ann".into(),
        money: Some(1500.0),
        ..FormValues::default()
    };
    let state = FormScreenState::for_values(&values);

    assert_eq!(state.input(FieldName::FirstName).map(|i| i.value()), Some("Ann"));
    assert_eq!(state.input(FieldName::LastName).map(|i| i.value()), Some(""));
    assert!(state.input(FieldName::Money).is_some());
    // checkboxes have no text input
    assert!(state.input(FieldName::Millionaire).is_none());
}

#[test]
fn test_focus_wraps_both_ways() {
    let mut state = FormScreenState::default();

    state.focus_next(2);
    assert_eq!(state.focused, 1);
    state.focus_next(2);
    assert_eq!(state.focused, 0);

    state.focus_prev(2);
    assert_eq!(state.focused, 1);

    // a step without fields leaves focus alone
    state.focus_next(0);
    state.focus_prev(0);
    assert_eq!(state.focused, 1);
}

#[test]
fn test_focus_first_error() {
    let mut state = FormScreenState::default();
    state.errors.insert(FieldName::LastName, "Last name is required");

    state.focus_first_error(&[FieldName::FirstName, FieldName::LastName]);
    assert_eq!(state.focused, 1);
}

#[test]
fn test_enter_step_resets_step_state() {
    let mut state = FormScreenState::for_values(&FormValues::default());
    state.focused = 1;
    state.errors.insert(FieldName::FirstName, "First name is required");
    state.submit_error = Some("boom".into());

    state.enter_step();

    assert_eq!(state.focused, 0);
    assert!(state.errors.is_empty());
    assert!(state.submit_error.is_none());
    // inputs survive step changes
    assert_eq!(state.inputs.len(), 4);
}

#[test]
fn test_screen_names() {
    let form = ScreenState::Form(FormScreenState::default());
    assert_eq!(form.name(), "Form");
    assert!(!form.is_complete());
    assert_ne!(StateTransition::Continue, StateTransition::Back);
}

#[test]
fn test_checkbox_reflects_flag_value() {
    let mut values = FormValues::default();
    assert!(rendered_field(FieldName::Millionaire, &values).contains("[ ]"));

    values.millionaire = true;
    let text = rendered_field(FieldName::Millionaire, &values);
    assert!(text.contains("[x]"));
    assert!(text.contains("Are you a millionaire"));
}
