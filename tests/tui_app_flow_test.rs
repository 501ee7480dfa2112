//! Drives the wizard app through key events without a terminal

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hni_wizard::cli::tui::wizard::app::App;
use hni_wizard::cli::tui::wizard::events::AppEvent;
use hni_wizard::cli::tui::wizard::state::ScreenState;
use hni_wizard::form::{default_steps, FieldName, FormValues};
use hni_wizard::wizard::{SubmissionReceipt, Submitter, WizardController};
use hni_wizard::{Result, WizardError};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

struct CountingSubmitter {
    calls: AtomicUsize,
    fail_first: usize,
}

impl CountingSubmitter {
    fn new(fail_first: usize) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_first,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for CountingSubmitter {
    async fn submit(&self, values: FormValues) -> Result<SubmissionReceipt> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(Duration::from_millis(10)).await;
        if call <= self.fail_first {
            return Err(WizardError::Submission("endpoint unavailable".into()));
        }
        Ok(SubmissionReceipt::new(values, call as u32))
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

struct PanickingSubmitter;

#[async_trait]
impl Submitter for PanickingSubmitter {
    async fn submit(&self, _values: FormValues) -> Result<SubmissionReceipt> {
        panic!("submitter blew up");
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_c() -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
}

fn app_with(values: FormValues, submitter: Arc<CountingSubmitter>) -> App {
    App::new(WizardController::new(default_steps()), values, submitter)
}

fn form_errors(app: &App) -> Vec<FieldName> {
    match app.screen() {
        ScreenState::Form(state) => state.errors.iter().map(|(field, _)| field).collect(),
        ScreenState::Complete(_) => Vec::new(),
    }
}

/// Values that pass every step
fn valid_values() -> FormValues {
    FormValues {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        millionaire: false,
        money: Some(250.0),
        description: "Saving up".into(),
    }
}

/// Wait for the spawned submission to report back and apply it
async fn settle_submission(app: &mut App) {
    let event = tokio::time::timeout(Duration::from_secs(5), app.next_event())
        .await
        .expect("submission never finished")
        .expect("event channel closed");
    assert!(matches!(event, AppEvent::SubmitFinished(_)));
    app.handle_event(event).unwrap();
}

#[tokio::test]
async fn test_typing_updates_values_and_validates() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(FormValues::default(), submitter);

    // empty names block the first step
    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.controller().current_index(), 0);
    assert_eq!(form_errors(&app), vec![FieldName::FirstName, FieldName::LastName]);

    type_text(&mut app, "Ann");
    assert_eq!(app.values().first_name, "Ann");
    assert_eq!(form_errors(&app), vec![FieldName::LastName]);

    app.handle_event(key(KeyCode::Tab)).unwrap();
    type_text(&mut app, "Lee");
    assert_eq!(app.values().last_name, "Lee");

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.controller().current_index(), 1);
    assert!(form_errors(&app).is_empty());
}

#[tokio::test]
async fn test_escape_goes_back_and_keeps_values() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter);

    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.controller().current_index(), 2);

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.controller().current_index(), 1);
    app.handle_event(key(KeyCode::Esc)).unwrap();
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.controller().current_index(), 0);
    assert_eq!(app.values(), &valid_values());
}

#[tokio::test]
async fn test_space_toggles_millionaire_checkbox() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter);
    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();

    app.handle_event(key(KeyCode::Char(' '))).unwrap();
    assert!(app.values().millionaire);
    app.handle_event(key(KeyCode::Char(' '))).unwrap();
    assert!(!app.values().millionaire);
}

#[tokio::test]
async fn test_millionaire_claim_blocks_small_balance() {
    let submitter = CountingSubmitter::new(0);
    let mut values = valid_values();
    values.millionaire = true;
    values.money = Some(500.0);
    let mut app = app_with(values, submitter.clone());

    for _ in 0..3 {
        app.handle_event(key(KeyCode::Enter)).unwrap();
    }
    assert_eq!(app.controller().current_index(), 3);

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(form_errors(&app), vec![FieldName::Money]);
    assert!(!app.controller().is_in_flight());
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test]
async fn test_full_flow_submits_once_and_completes() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter.clone());

    for _ in 0..4 {
        app.handle_event(key(KeyCode::Enter)).unwrap();
    }
    assert!(app.controller().is_in_flight());

    // controls are inert while the submission runs
    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.controller().current_index(), 3);

    settle_submission(&mut app).await;
    assert_eq!(submitter.calls(), 1);
    assert!(app.controller().is_completed());
    assert!(app.screen().is_complete());
    assert_eq!(app.receipt().map(|r| &r.values), Some(&valid_values()));

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_rejected_submission_can_be_retried() {
    let submitter = CountingSubmitter::new(1);
    let mut app = app_with(valid_values(), submitter.clone());

    for _ in 0..4 {
        app.handle_event(key(KeyCode::Enter)).unwrap();
    }
    settle_submission(&mut app).await;

    match app.screen() {
        ScreenState::Form(state) => {
            let message = state.submit_error.as_deref().unwrap();
            assert!(message.contains("endpoint unavailable"));
        }
        other => panic!("expected form screen, got {}", other.name()),
    }
    assert!(!app.controller().is_completed());
    assert!(!app.controller().is_in_flight());

    app.handle_event(key(KeyCode::Enter)).unwrap();
    settle_submission(&mut app).await;
    assert_eq!(submitter.calls(), 2);
    assert!(app.screen().is_complete());
}

#[tokio::test]
async fn test_double_ctrl_c_quits() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter);

    app.handle_event(ctrl_c()).unwrap();
    assert!(!app.should_quit());
    match app.screen() {
        ScreenState::Form(state) => assert!(state.quit_armed),
        other => panic!("expected form screen, got {}", other.name()),
    }

    app.handle_event(ctrl_c()).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_ignored_while_in_flight() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter);
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Enter)).unwrap();
    }

    app.handle_event(ctrl_c()).unwrap();
    app.handle_event(ctrl_c()).unwrap();
    assert!(!app.should_quit());

    settle_submission(&mut app).await;
}

#[tokio::test]
async fn test_keystroke_between_ctrl_c_disarms_quit() {
    let submitter = CountingSubmitter::new(0);
    let mut app = app_with(valid_values(), submitter);

    app.handle_event(ctrl_c()).unwrap();
    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    app.handle_event(ctrl_c()).unwrap();
    assert!(!app.should_quit());

    app.handle_event(ctrl_c()).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_panicking_submitter_leaves_form_retryable() {
    let controller = WizardController::new(default_steps());
    let mut app = App::new(controller, valid_values(), Arc::new(PanickingSubmitter));

    for _ in 0..4 {
        app.handle_event(key(KeyCode::Enter)).unwrap();
    }
    assert!(app.controller().is_in_flight());

    settle_submission(&mut app).await;
    assert!(!app.controller().is_in_flight());
    assert!(!app.controller().is_completed());
    match app.screen() {
        ScreenState::Form(state) => assert!(state.submit_error.is_some()),
        other => panic!("expected form screen, got {}", other.name()),
    }

    // quitting works again
    app.handle_event(ctrl_c()).unwrap();
    app.handle_event(ctrl_c()).unwrap();
    assert!(app.should_quit());
}
