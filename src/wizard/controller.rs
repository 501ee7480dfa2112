//! Step-wizard controller
//!
//! Tracks the active step, decides whether a submit advances or completes
//! the wizard, and guards the final submission so only one is ever in
//! flight. Misuse (an empty registry, stepping back from the first step,
//! submitting twice) is a no-op rather than an error.

use tracing::{debug, info, warn};

use super::submit::{SubmissionReceipt, Submitter};
use crate::form::{FormValues, Ruleset, StepDefinition, ValidationErrors, NO_CONSTRAINTS};
use crate::Result;

/// Display status of one step in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

/// What `begin_submit` decided
#[derive(Debug, Clone, PartialEq)]
pub enum StepTransition {
    /// Moved forward to the given step
    Advanced { to: usize },
    /// Last step validated; the caller must run the submitter and report
    /// back through `finish_submit`
    Submit(FormValues),
    /// Validation failed; the index did not move
    Blocked(ValidationErrors),
    /// Nothing to do: empty registry, already completed, or in flight
    Ignored,
}

/// Result of a full `submit_step` round
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Advanced { to: usize },
    Completed(SubmissionReceipt),
    Blocked(ValidationErrors),
    Ignored,
}

#[derive(Debug)]
pub struct WizardController {
    steps: Vec<StepDefinition>,
    current_index: usize,
    completed: bool,
    in_flight: bool,
}

impl WizardController {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        if steps.is_empty() {
            warn!("Wizard created without any steps; all transitions are disabled");
        }
        Self {
            steps,
            current_index: 0,
            completed: false,
            in_flight: false,
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.steps.get(self.current_index)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_last_step(&self) -> bool {
        !self.steps.is_empty() && self.current_index == self.steps.len() - 1
    }

    /// Whether back navigation is currently allowed
    pub fn can_retreat(&self) -> bool {
        !self.in_flight && !self.completed && self.current_index > 0
    }

    /// Ruleset of the active step, or no constraints when it declares none
    pub fn active_rules(&self) -> &Ruleset {
        self.current_step()
            .and_then(|step| step.rules.as_ref())
            .unwrap_or(&NO_CONSTRAINTS)
    }

    pub fn validate_active(&self, values: &FormValues) -> std::result::Result<(), ValidationErrors> {
        self.active_rules().validate(values)
    }

    /// First half of a submit: validate the active step and either advance,
    /// block, or hand the values back for final submission.
    ///
    /// On `Submit` the controller is in flight until `finish_submit` is called.
    pub fn begin_submit(&mut self, values: &FormValues) -> StepTransition {
        if self.steps.is_empty() || self.completed || self.in_flight {
            return StepTransition::Ignored;
        }

        if let Err(errors) = self.validate_active(values) {
            debug!(step = self.current_index, errors = %errors, "Step blocked by validation");
            return StepTransition::Blocked(errors);
        }

        if self.is_last_step() {
            self.in_flight = true;
            info!(step = self.current_index, "Final step valid, submitting");
            StepTransition::Submit(values.clone())
        } else {
            self.current_index += 1;
            debug!(to = self.current_index, "Advanced to next step");
            StepTransition::Advanced {
                to: self.current_index,
            }
        }
    }

    /// Second half of a final submit. Success completes the wizard; failure
    /// clears the in-flight flag so the user can retry.
    pub fn finish_submit(&mut self, result: &Result<SubmissionReceipt>) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        match result {
            Ok(receipt) => {
                self.completed = true;
                info!(reference = %receipt.reference, "Wizard completed");
            }
            Err(e) => {
                warn!(error = %e, "Final submission failed; wizard remains on last step");
            }
        }
    }

    /// Validate and advance, or submit through `submitter` on the last step
    pub async fn submit_step(
        &mut self,
        values: &FormValues,
        submitter: &dyn Submitter,
    ) -> Result<SubmitOutcome> {
        match self.begin_submit(values) {
            StepTransition::Advanced { to } => Ok(SubmitOutcome::Advanced { to }),
            StepTransition::Blocked(errors) => Ok(SubmitOutcome::Blocked(errors)),
            StepTransition::Ignored => Ok(SubmitOutcome::Ignored),
            StepTransition::Submit(values) => {
                let result = submitter.submit(values).await;
                self.finish_submit(&result);
                result.map(SubmitOutcome::Completed)
            }
        }
    }

    /// Go back one step. Returns whether the index moved.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        debug!(to = self.current_index, "Retreated to previous step");
        true
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        if self.completed || self.current_index > index {
            StepStatus::Done
        } else if index == self.current_index {
            StepStatus::Current
        } else {
            StepStatus::Pending
        }
    }

    /// Label and status for every step, in order
    pub fn indicator(&self) -> Vec<(&str, StepStatus)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| (step.label.as_str(), self.step_status(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::default_steps;

    #[test]
    fn test_empty_registry_is_inert() {
        let mut controller = WizardController::new(Vec::new());
        assert_eq!(controller.begin_submit(&FormValues::default()), StepTransition::Ignored);
        assert!(!controller.retreat());
        assert!(controller.active_rules().is_empty());
        assert!(controller.indicator().is_empty());
    }

    #[test]
    fn test_indicator_tracks_progress() {
        let mut controller = WizardController::new(default_steps());
        let values = FormValues {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            ..FormValues::default()
        };
        controller.begin_submit(&values);
        assert_eq!(controller.step_status(0), StepStatus::Done);
        assert_eq!(controller.step_status(1), StepStatus::Current);
        assert_eq!(controller.step_status(2), StepStatus::Pending);
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut controller = WizardController::new(default_steps());
        let receipt = SubmissionReceipt::new(FormValues::default(), 1);
        controller.finish_submit(&Ok(receipt));
        assert!(!controller.is_completed());
    }
}
