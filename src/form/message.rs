//! Template interpolation for step prompts

use super::values::FormValues;

const FIRST_NAME_TOKEN: &str = "firstName";
const LAST_NAME_TOKEN: &str = "lastName";

/// Replace the `firstName` and `lastName` tokens in `template` with the
/// collected names.
///
/// Runs a single left-to-right pass: substituted text is copied to the
/// output and never scanned again, so a name that happens to equal a token
/// stays as typed.
pub fn interpolate(template: &str, values: &FormValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(FIRST_NAME_TOKEN) {
            out.push_str(&values.first_name);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(LAST_NAME_TOKEN) {
            out.push_str(&values.last_name);
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }

    out
}
