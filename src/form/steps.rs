//! Step registry: the ordered screens of the wizard

use super::rules::{Check, Ruleset};
use super::values::FieldName;

/// Largest money-story description accepted
pub const DESCRIPTION_MAX_CHARS: usize = 280;

/// Threshold a self-declared millionaire must reach
pub const MILLIONAIRE_THRESHOLD: f64 = 1_000_000.0;

/// One screen of the wizard
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    pub label: String,
    /// Fields rendered on this step, in display order
    pub fields: Vec<FieldName>,
    /// Optional heading, interpolated with the collected values
    pub prompt: Option<String>,
    /// `None` means the step is always valid
    pub rules: Option<Ruleset>,
}

impl StepDefinition {
    pub fn new(label: impl Into<String>, fields: Vec<FieldName>) -> Self {
        Self {
            label: label.into(),
            fields,
            prompt: None,
            rules: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_rules(mut self, rules: Ruleset) -> Self {
        self.rules = Some(rules);
        self
    }
}

/// The four steps of the personal-finance questionnaire
pub fn default_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("Personal Data", vec![FieldName::FirstName, FieldName::LastName]).with_rules(
            Ruleset::new()
                .field(FieldName::FirstName, vec![Check::required("First name is required")])
                .field(FieldName::LastName, vec![Check::required("Last name is required")]),
        ),
        StepDefinition::new("Money Story", vec![FieldName::Description])
            .with_prompt("Well firstName lastName, describe your money situation")
            .with_rules(Ruleset::new().field(
                FieldName::Description,
                vec![
                    Check::required("Tell us a little about your money situation"),
                    Check::max_length(
                        DESCRIPTION_MAX_CHARS,
                        format!("Keep it under {} characters", DESCRIPTION_MAX_CHARS),
                    ),
                ],
            )),
        StepDefinition::new("HNI Status", vec![FieldName::Millionaire]),
        StepDefinition::new("Bank Accounts", vec![FieldName::Money]).with_rules(Ruleset::new().field(
            FieldName::Money,
            vec![
                Check::required("Money is required"),
                Check::min_when(
                    FieldName::Millionaire,
                    MILLIONAIRE_THRESHOLD,
                    "Because you said you are a millionaire you need to have at least 1 million",
                ),
            ],
        )),
    ]
}
