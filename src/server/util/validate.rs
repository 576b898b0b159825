//! Field-by-field validation of JSON request bodies.
//!
//! `PayloadValidator` checks each field against its expected JSON type and keeps going
//! after a failure, so a single 400 response can list every problem with the body.
//! Field errors are reported in the order fields are checked, followed by one error
//! per unknown key in the order the keys appear in the body.

use serde_json::{Map, Number, Value};

use crate::server::error::AppError;

/// Whether a field must appear in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent fields are reported as having the wrong type.
    Required,
    /// Absent fields are skipped; `null` still counts as present.
    Optional,
}

pub struct PayloadValidator<'a> {
    payload: &'a Map<String, Value>,
    errors: Vec<String>,
}

impl<'a> PayloadValidator<'a> {
    pub fn new(payload: &'a Map<String, Value>) -> Self {
        Self {
            payload,
            errors: Vec::new(),
        }
    }

    /// Reads a string field, recording `"<field> should be a string"` on mismatch.
    pub fn string(&mut self, field: &str, presence: Presence) -> Option<String> {
        match self.lookup(field, "string", presence)? {
            Value::String(value) => Some(value.clone()),
            _ => {
                self.type_error(field, "string");
                None
            }
        }
    }

    /// Reads a numeric field that must hold a whole number fitting in an `i32`.
    ///
    /// Non-numbers record `"<field> should be a number"`; numbers with a fractional part
    /// or outside the `i32` range record `"<field> should be a whole number"`.
    pub fn whole_number(&mut self, field: &str, presence: Presence) -> Option<i32> {
        let Value::Number(number) = self.lookup(field, "number", presence)? else {
            self.type_error(field, "number");
            return None;
        };

        let whole = as_whole_i32(number);
        if whole.is_none() {
            self.errors.push(format!("{} should be a whole number", field));
        }

        whole
    }

    /// Records `"'<key>' is not a valid key"` for every payload key outside `allowed`.
    pub fn reject_unknown_keys(&mut self, allowed: &[&str]) {
        let payload = self.payload;

        for key in payload.keys() {
            if !allowed.contains(&key.as_str()) {
                self.errors.push(format!("'{}' is not a valid key", key));
            }
        }
    }

    /// Finishes validation.
    ///
    /// # Returns
    /// - `Ok(())` - No violations were recorded
    /// - `Err(AppError::Validation)` - Every recorded violation, in order
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }

    /// Fails validation with every recorded violation.
    ///
    /// A required field that comes back `None` has always recorded its violation, so
    /// this is the error for a payload missing any of them.
    pub fn into_error(self) -> AppError {
        AppError::Validation(self.errors)
    }

    fn lookup(&mut self, field: &str, expected: &str, presence: Presence) -> Option<&'a Value> {
        let payload = self.payload;

        match payload.get(field) {
            Some(value) => Some(value),
            None => {
                if presence == Presence::Required {
                    self.type_error(field, expected);
                }
                None
            }
        }
    }

    fn type_error(&mut self, field: &str, expected: &str) {
        self.errors
            .push(format!("{} should be a {}", field, expected));
    }
}

fn as_whole_i32(number: &Number) -> Option<i32> {
    if let Some(value) = number.as_i64() {
        return i32::try_from(value).ok();
    }

    number
        .as_f64()
        .filter(|value| value.fract() == 0.0)
        .filter(|value| *value >= f64::from(i32::MIN) && *value <= f64::from(i32::MAX))
        .map(|value| value as i32)
}
