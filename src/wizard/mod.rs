//! Wizard controller and the final-submission collaborator

pub mod controller;
pub mod submit;

pub use controller::{StepStatus, StepTransition, SubmitOutcome, WizardController};
pub use submit::{DelayedSubmitter, SubmissionReceipt, Submitter};
