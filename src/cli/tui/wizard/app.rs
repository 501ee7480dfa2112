use std::sync::Arc;
use std::time::{Duration, Instant};
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, error, info};
use tui_input::backend::crossterm::EventHandler;

use crate::{Result, WizardError};
use crate::form::{FieldKind, FieldName, FormValues};
use crate::wizard::{StepTransition as Step, SubmissionReceipt, Submitter, WizardController};
use super::state::*;
use super::events::*;
use super::theme::Theme;

/// Double Ctrl+C window
const QUIT_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Current screen
    screen: ScreenState,
    /// Step controller; the only writer of step index and completion
    controller: WizardController,
    /// Values shared by every step
    values: FormValues,
    /// Final-submit collaborator
    submitter: Arc<dyn Submitter>,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Redraw interval while idle
    tick_rate: Duration,
    /// Event channel shared with background tasks
    event_tx: UnboundedSender<AppEvent>,
    event_rx: UnboundedReceiver<AppEvent>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
    /// Receipt of the accepted submission
    receipt: Option<SubmissionReceipt>,
}

impl App {
    /// Create a new app instance
    pub fn new(controller: WizardController, values: FormValues, submitter: Arc<dyn Submitter>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            screen: ScreenState::Form(FormScreenState::for_values(&values)),
            controller,
            values,
            submitter,
            should_quit: false,
            theme: Theme::default(),
            tick_rate: Duration::from_millis(50),
            event_tx,
            event_rx,
            last_ctrl_c: None,
            receipt: None,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application until the user quits.
    ///
    /// Returns the submission receipt when the wizard completed.
    pub async fn run(mut self) -> Result<Option<SubmissionReceipt>> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        if let Err(e) = terminal.clear() {
            ratatui::restore();
            return Err(WizardError::Terminal(e.to_string()));
        }

        // Spawn input reader; it stops once the app drops its receiver
        let input_tx = self.event_tx.clone();
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        error!(error = %e, "Failed to poll terminal events");
                        return;
                    }
                }
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        let _ = input_tx.send(AppEvent::Key(key));
                    }
                    Ok(Event::Resize(width, height)) => {
                        let _ = input_tx.send(AppEvent::Resize(width, height));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        return;
                    }
                }
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal).await;

        // Cleanup
        ratatui::restore();
        result.map(|_| self.receipt.take())
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            // Draw UI
            terminal
                .draw(|frame| self.render(frame))
                .map_err(|e| WizardError::Terminal(e.to_string()))?;

            // Handle events with timeout for the spinner
            match time::timeout(self.tick_rate, self.event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Wait for the next event from input or background tasks
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Render the current screen
    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            ScreenState::Form(state) => {
                super::screens::form::render(frame, state, &self.controller, &self.values, &self.theme);
            }
            ScreenState::Complete(state) => {
                super::screens::complete::render(frame, state, &self.controller, &self.theme);
            }
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        // Handle global keys first
        if let AppEvent::Key(key) = &event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.handle_ctrl_c();
                return Ok(());
            }
            // any other key disarms the pending quit
            self.last_ctrl_c = None;
        }

        let transition = match event {
            AppEvent::Key(key) => match self.screen {
                ScreenState::Form(ref mut state) => {
                    Self::handle_form_key(state, &self.controller, &mut self.values, key)
                }
                ScreenState::Complete(_) => Self::handle_complete_key(key),
            },
            AppEvent::SubmitFinished(result) => {
                self.finish_submission(result);
                None
            }
            AppEvent::Tick => {
                if let ScreenState::Form(ref mut state) = self.screen {
                    if self.controller.is_in_flight() {
                        state.spinner_frame = state.spinner_frame.wrapping_add(1);
                    }
                }
                None
            }
            AppEvent::Resize(_, _) => None,
        };

        if let Some(transition) = transition {
            self.transition_state(transition);
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        // no quitting while a submission is outstanding
        if self.controller.is_in_flight() {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_ctrl_c {
            if now.duration_since(last) < QUIT_WINDOW {
                self.should_quit = true;
                return;
            }
        }
        self.last_ctrl_c = Some(now);
        if let ScreenState::Form(ref mut state) = self.screen {
            state.quit_armed = true;
        }
    }

    /// Transition in response to a key action
    fn transition_state(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::Continue => self.submit_current_step(),
            StateTransition::Back => {
                if self.controller.retreat() {
                    if let ScreenState::Form(ref mut state) = self.screen {
                        state.enter_step();
                    }
                }
            }
            StateTransition::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn submit_current_step(&mut self) {
        let ScreenState::Form(ref mut state) = self.screen else {
            return;
        };

        match self.controller.begin_submit(&self.values) {
            Step::Advanced { to } => {
                debug!(step = to, "Showing next step");
                state.enter_step();
            }
            Step::Blocked(errors) => {
                state.errors = errors;
                if let Some(step) = self.controller.current_step() {
                    state.focus_first_error(&step.fields);
                }
            }
            Step::Submit(values) => {
                state.submit_error = None;
                state.errors = Default::default();
                self.spawn_submission(values);
            }
            Step::Ignored => {}
        }
    }

    /// Run the submitter off the UI loop; the outcome comes back as an event
    fn spawn_submission(&self, values: FormValues) {
        let submitter = Arc::clone(&self.submitter);
        let event_tx = self.event_tx.clone();
        info!(submitter = submitter.name(), "Dispatching final submission");
        tokio::spawn(async move {
            let task = tokio::spawn(async move { submitter.submit(values).await });
            // a panicking submitter must still release the in-flight state
            let result = match task.await {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, "Submission task failed");
                    Err(WizardError::Submission("the submission task stopped unexpectedly".into()))
                }
            };
            let _ = event_tx.send(AppEvent::SubmitFinished(result));
        });
    }

    fn finish_submission(&mut self, result: Result<SubmissionReceipt>) {
        self.controller.finish_submit(&result);
        match result {
            Ok(receipt) if self.controller.is_completed() => {
                self.receipt = Some(receipt.clone());
                self.screen = ScreenState::Complete(CompleteState { receipt });
            }
            Ok(_) => {}
            Err(e) => {
                if let ScreenState::Form(ref mut state) = self.screen {
                    state.submit_error = Some(e.to_string());
                }
            }
        }
    }

    fn handle_form_key(
        state: &mut FormScreenState,
        controller: &WizardController,
        values: &mut FormValues,
        key: KeyEvent,
    ) -> Option<StateTransition> {
        state.quit_armed = false;

        // Controls are disabled until the submission resolves
        if controller.is_in_flight() {
            return None;
        }

        let fields: &[FieldName] = controller.current_step().map(|s| s.fields.as_slice()).unwrap_or(&[]);
        let focused = fields.get(state.focused).copied();

        match key.code {
            KeyCode::Enter => return Some(StateTransition::Continue),
            KeyCode::Esc => return Some(StateTransition::Back),
            KeyCode::Tab | KeyCode::Down => state.focus_next(fields.len()),
            KeyCode::BackTab | KeyCode::Up => state.focus_prev(fields.len()),
            _ => {
                let Some(field) = focused else {
                    return None;
                };
                match field.kind() {
                    FieldKind::Checkbox => {
                        if key.code == KeyCode::Char(' ') && values.toggle(field).is_some() {
                            state.errors.clear(field);
                        }
                    }
                    FieldKind::Text | FieldKind::Number => {
                        if let Some(input) = state.inputs.get_mut(&field) {
                            if input.handle_event(&Event::Key(key)).is_some() {
                                values.set_text(field, input.value());
                                state.errors.clear(field);
                                state.submit_error = None;
                            }
                        }
                    }
                }
            }
        }
        None
    }

    fn handle_complete_key(key: KeyEvent) -> Option<StateTransition> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(StateTransition::Quit),
            _ => None,
        }
    }
}
