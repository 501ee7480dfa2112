/// Terminal User Interface module for the interactive form
pub mod wizard;

use std::sync::Arc;

use crate::config::WizardConfig;
use crate::form::default_steps;
use crate::wizard::{DelayedSubmitter, SubmissionReceipt, WizardController};
use crate::Result;

/// Run the interactive form wizard with the built-in steps
pub async fn run_form_wizard(config: &WizardConfig) -> Result<Option<SubmissionReceipt>> {
    let controller = WizardController::new(default_steps());
    let submitter = DelayedSubmitter::new(config.submit.delay()).failing_first(config.submit.fail_attempts);
    wizard::run(controller, config.initial_values.clone(), Arc::new(submitter), config.ui.tick_rate()).await
}
