//! hni-wizard: a multi-step terminal form.
//!
//! Collects personal and financial data across several steps, validates each
//! step before advancing and hands the aggregated values to a submitter.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod wizard;

pub use error::{Result, WizardError};
