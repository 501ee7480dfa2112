//! Collected form values and the fields that edit them

use serde::{Deserialize, Serialize};

/// Every value the wizard collects, shared by all steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub millionaire: bool,
    /// `None` while the money input is empty or not a finite number
    pub money: Option<f64>,
    pub description: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            millionaire: false,
            money: Some(0.0),
            description: String::new(),
        }
    }
}

/// Identifies one field of [`FormValues`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Millionaire,
    Money,
    Description,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Number,
}

/// Borrowed view of a single field's current value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Number(Option<f64>),
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Millionaire,
        FieldName::Money,
        FieldName::Description,
    ];

    /// Key used in serialized values and error maps
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Millionaire => "millionaire",
            FieldName::Money => "money",
            FieldName::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Millionaire => "Are you a millionaire",
            FieldName::Money => "How much money do you have",
            FieldName::Description => "Describe your money situation",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Millionaire => FieldKind::Checkbox,
            FieldName::Money => FieldKind::Number,
            FieldName::FirstName | FieldName::LastName | FieldName::Description => FieldKind::Text,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::FirstName => FieldValue::Text(&self.first_name),
            FieldName::LastName => FieldValue::Text(&self.last_name),
            FieldName::Millionaire => FieldValue::Flag(self.millionaire),
            FieldName::Money => FieldValue::Number(self.money),
            FieldName::Description => FieldValue::Text(&self.description),
        }
    }

    /// Write raw input text back into a field.
    ///
    /// Number fields parse the trimmed text; anything that is not a finite
    /// number clears the value. Checkbox fields ignore text input.
    pub fn set_text(&mut self, field: FieldName, text: &str) {
        match field {
            FieldName::FirstName => self.first_name = text.to_string(),
            FieldName::LastName => self.last_name = text.to_string(),
            FieldName::Description => self.description = text.to_string(),
            FieldName::Money => self.money = parse_number(text),
            FieldName::Millionaire => {}
        }
    }

    /// Flip a checkbox field. Returns the new state, or `None` for other kinds.
    pub fn toggle(&mut self, field: FieldName) -> Option<bool> {
        match field {
            FieldName::Millionaire => {
                self.millionaire = !self.millionaire;
                Some(self.millionaire)
            }
            _ => None,
        }
    }

    /// Text shown in an input when the field is first rendered
    pub fn display_text(&self, field: FieldName) -> String {
        match self.get(field) {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Number(Some(number)) => format_number(number),
            FieldValue::Number(None) => String::new(),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_form() {
        let values = FormValues::default();
        assert!(values.first_name.is_empty());
        assert!(!values.millionaire);
        assert_eq!(values.money, Some(0.0));
    }

    #[test]
    fn test_money_parsing() {
        let mut values = FormValues::default();
        values.set_text(FieldName::Money, " -50 ");
        assert_eq!(values.money, Some(-50.0));
        values.set_text(FieldName::Money, "");
        assert_eq!(values.money, None);
        values.set_text(FieldName::Money, "NaN");
        assert_eq!(values.money, None);
        values.set_text(FieldName::Money, "12.5");
        assert_eq!(values.display_text(FieldName::Money), "12.5");
    }

    #[test]
    fn test_toggle_only_applies_to_checkbox() {
        let mut values = FormValues::default();
        assert_eq!(values.toggle(FieldName::Millionaire), Some(true));
        assert_eq!(values.toggle(FieldName::FirstName), None);
        assert!(values.millionaire);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let values = FormValues {
            first_name: "Ann".into(),
            ..FormValues::default()
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["money"], 0.0);
    }
}
