/// Interactive form wizard implementation
pub mod app;
pub mod events;
pub mod fields;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use std::sync::Arc;
use std::time::Duration;

use crate::form::FormValues;
use crate::wizard::{SubmissionReceipt, Submitter, WizardController};
use crate::Result;

/// Entry point for the form wizard
pub async fn run(
    controller: WizardController,
    values: FormValues,
    submitter: Arc<dyn Submitter>,
    tick_rate: Duration,
) -> Result<Option<SubmissionReceipt>> {
    let app = app::App::new(controller, values, submitter).with_tick_rate(tick_rate);
    app.run().await
}
