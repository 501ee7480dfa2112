//! Form model: values, validation rulesets, the step registry and prompt
//! interpolation.

pub mod message;
pub mod rules;
pub mod steps;
pub mod values;

pub use message::interpolate;
pub use rules::{Check, FieldRule, Ruleset, ValidationErrors, NO_CONSTRAINTS};
pub use steps::{default_steps, StepDefinition};
pub use values::{FieldKind, FieldName, FieldValue, FormValues};
