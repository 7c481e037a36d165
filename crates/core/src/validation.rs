//! Presence-only request validation.
//!
//! Generation endpoints check that required fields are present and not
//! empty; they never validate shape or length. A field counts as missing when
//! it is absent, `null`, a blank string, an empty array or an empty object.

use serde_json::Value;

use crate::error::CoreError;

/// Accumulates the names of missing required fields.
///
/// ```
/// use launchpad_core::validation::RequiredFields;
///
/// let err = RequiredFields::new()
///     .text("projectName", Some("Acme"))
///     .text("description", Some("   "))
///     .list::<String>("features", None)
///     .check()
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Validation failed: Missing required fields: description, features"
/// );
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank string.
    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.missing.push(name);
        }
        self
    }

    /// Require a non-empty list.
    pub fn list<T>(mut self, name: &'static str, value: Option<&[T]>) -> Self {
        if value.is_none_or(<[T]>::is_empty) {
            self.missing.push(name);
        }
        self
    }

    /// Require an arbitrary JSON value that is not blank (see [`is_blank`]).
    pub fn json(mut self, name: &'static str, value: Option<&Value>) -> Self {
        if value.is_none_or(is_blank) {
            self.missing.push(name);
        }
        self
    }

    /// Names collected so far, in the order they were checked.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Fail with a message naming every missing field.
    pub fn check(self) -> Result<(), CoreError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            self.missing.join(", ")
        )))
    }
}

/// Whether a JSON value carries nothing the generators could use.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
