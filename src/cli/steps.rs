//! `steps` command: print the step registry in a compact table

use crate::form::{Check, StepDefinition};

/// Format the registry as a table of step, fields and rules
pub fn render_steps_table(steps: &[StepDefinition]) -> String {
    let rows: Vec<(String, String, String, String)> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let fields = step
                .fields
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ");
            (i.to_string(), step.label.clone(), fields, describe_rules(step))
        })
        .collect();

    let step_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(1).max(1);
    let label_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5); // "LABEL"
    let fields_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(6).max(6); // "FIELDS"

    let mut out = format!(
        "{:<step_width$}  {:<label_width$}  {:<fields_width$}  RULES\n",
        "#", "LABEL", "FIELDS",
    );
    for (index, label, fields, rules) in rows {
        out.push_str(&format!(
            "{:<step_width$}  {:<label_width$}  {:<fields_width$}  {}\n",
            index, label, fields, rules,
        ));
    }
    out
}

fn describe_rules(step: &StepDefinition) -> String {
    let Some(rules) = &step.rules else {
        return "none".to_string();
    };
    if rules.is_empty() {
        return "none".to_string();
    }

    let mut parts = Vec::new();
    for rule in rules.field_rules() {
        for check in &rule.checks {
            let text = match check {
                Check::Required { .. } => format!("{} required", rule.field),
                Check::MaxLength { max, .. } => format!("{} <= {} chars", rule.field, max),
                Check::MinWhen { flag, min, .. } => format!("{} >= {} when {}", rule.field, min, flag),
            };
            parts.push(text);
        }
    }
    parts.join("; ")
}
