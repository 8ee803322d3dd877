//! Explicit form validation schemas.
//!
//! Each form declares an ordered list of field rules (field name, check,
//! error message) that is evaluated before submission. A failed schema
//! blocks the mutation and carries one message per offending field, so a
//! caller can render them inline next to the fields.

use chrono::NaiveDate;
use validator::ValidateEmail;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The check applied to a field's submitted value.
enum Check {
    /// Value must be non-empty after trimming.
    Required,
    /// Value must be a well-formed email address.
    Email,
    /// Value must parse as a calendar date (`YYYY-MM-DD` or `DD/MM/YYYY`).
    Date,
}

struct FieldRule {
    field: &'static str,
    check: Check,
    message: &'static str,
}

/// An ordered validation schema for one form.
#[derive(Default)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present and non-blank.
    pub fn required(mut self, field: &'static str, message: &'static str) -> Self {
        self.rules.push(FieldRule {
            field,
            check: Check::Required,
            message,
        });
        self
    }

    /// The field must be a valid email address (only checked when non-blank;
    /// combine with [`required`](Self::required) if the field is mandatory).
    pub fn email(mut self, field: &'static str, message: &'static str) -> Self {
        self.rules.push(FieldRule {
            field,
            check: Check::Email,
            message,
        });
        self
    }

    /// The field must parse as a calendar date.
    pub fn date(mut self, field: &'static str, message: &'static str) -> Self {
        self.rules.push(FieldRule {
            field,
            check: Check::Date,
            message,
        });
        self
    }

    /// Evaluate the schema against submitted `(field, value)` pairs.
    ///
    /// Returns every failure, not just the first, so a form can show all
    /// inline messages at once. A field missing from `values` fails its
    /// `Required` rule and is skipped by the other checks.
    pub fn check(&self, values: &[(&str, &str)]) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for rule in &self.rules {
            let value = values
                .iter()
                .find(|(field, _)| *field == rule.field)
                .map(|(_, value)| value.trim());

            let ok = match (&rule.check, value) {
                (Check::Required, v) => v.is_some_and(|v| !v.is_empty()),
                // Format checks pass on blank input; Required owns presence.
                (Check::Email, Some(v)) if !v.is_empty() => v.validate_email(),
                (Check::Date, Some(v)) if !v.is_empty() => parse_flexible_date(v).is_some(),
                (Check::Email | Check::Date, _) => true,
            };

            if !ok {
                errors.push(FieldError {
                    field: rule.field,
                    message: rule.message.to_string(),
                });
            }
        }

        errors
    }
}

/// Parse a date as `YYYY-MM-DD`, falling back to the `DD/MM/YYYY` format the
/// original forms displayed.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}
