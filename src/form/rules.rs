//! Declarative validation rulesets
//!
//! A [`Ruleset`] lists constraints per field. Validation reports at most one
//! message per field: the message of the first failing check, in declaration
//! order. Fields that the ruleset does not mention are never inspected.

use std::collections::BTreeMap;

use super::values::{FieldName, FieldValue, FormValues};

/// A single constraint on a field, with the message shown when it fails
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Text must be non-blank; numbers must be present. Checkboxes always pass.
    Required { message: String },
    /// Text may hold at most `max` characters
    MaxLength { max: usize, message: String },
    /// When the checkbox `flag` is ticked, the number must be at least `min`
    MinWhen {
        flag: FieldName,
        min: f64,
        message: String,
    },
}

impl Check {
    pub fn required(message: impl Into<String>) -> Self {
        Check::Required {
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Check::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn min_when(flag: FieldName, min: f64, message: impl Into<String>) -> Self {
        Check::MinWhen {
            flag,
            min,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Check::Required { message }
            | Check::MaxLength { message, .. }
            | Check::MinWhen { message, .. } => message,
        }
    }

    fn passes(&self, field: FieldName, values: &FormValues) -> bool {
        match (self, values.get(field)) {
            (Check::Required { .. }, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Check::Required { .. }, FieldValue::Number(number)) => number.is_some(),
            (Check::Required { .. }, FieldValue::Flag(_)) => true,
            (Check::MaxLength { max, .. }, FieldValue::Text(text)) => text.chars().count() <= *max,
            (Check::MinWhen { flag, min, .. }, FieldValue::Number(number)) => {
                let claimed = matches!(values.get(*flag), FieldValue::Flag(true));
                match number {
                    // absence is the job of `Required`
                    None => true,
                    Some(n) => !claimed || n >= *min,
                }
            }
            // a check that does not apply to the field kind never blocks
            _ => true,
        }
    }
}

/// Constraints for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub field: FieldName,
    pub checks: Vec<Check>,
}

/// The constraints a step enforces before the wizard may advance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ruleset {
    rules: Vec<FieldRule>,
}

/// Ruleset with no constraints, used for steps that declare none
pub static NO_CONSTRAINTS: Ruleset = Ruleset::none();

impl Ruleset {
    pub const fn none() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Add constraints for a field (builder style)
    pub fn field(mut self, field: FieldName, checks: Vec<Check>) -> Self {
        self.rules.push(FieldRule { field, checks });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(|rule| rule.checks.is_empty())
    }

    /// Fields this ruleset constrains, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    pub fn field_rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            if errors.get(rule.field).is_some() {
                continue;
            }
            if let Some(failed) = rule.checks.iter().find(|check| !check.passes(rule.field, values)) {
                errors.insert(rule.field, failed.message());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Field-level validation failures, keyed by field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Drop the error for a field once the user edits it
    pub fn clear(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
