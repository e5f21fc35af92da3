//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain and store layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Ordered list of field violations collected while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Merge the violations carried by `err`. Non-validation errors are
    /// recorded against the `request` field.
    pub fn extend_from(&mut self, err: DomainError) {
        match err {
            DomainError::Validation(v) => self.0.extend(v.0),
            other => self.push("request", other.to_string()),
        }
    }

    /// `Ok(())` when nothing was collected, otherwise a `DomainError::Validation`.
    pub fn into_result(self) -> DomainResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<FieldViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Domain-level error.
///
/// Three kinds only, so the HTTP boundary can map each one to exactly one
/// status code (400 / 404 / 500).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation (malformed or missing fields).
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Anything else (e.g. a poisoned lock). Never shown to API clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.push(field, msg);
        Self::Validation(errors)
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_are_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn collected_errors_become_validation_variant() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "invalid email format");
        errors.push("roles", "at least one role is required");

        let err = errors.into_result().unwrap_err();
        match &err {
            DomainError::Validation(v) => {
                assert_eq!(v.len(), 2);
                assert_eq!(v.violations()[0].field, "email");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "validation failed: email: invalid email format; roles: at least one role is required"
        );
    }

    #[test]
    fn extend_from_merges_violations() {
        let mut errors = ValidationErrors::new();
        errors.extend_from(DomainError::validation("page", "bad"));
        errors.extend_from(DomainError::internal("boom"));

        let fields: Vec<_> = errors.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["page", "request"]);
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("product variant", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "product variant 42 not found");
    }

    #[test]
    fn violations_serialize_as_plain_array() {
        let err = match DomainError::validation("mpn", "must not be empty") {
            DomainError::Validation(v) => v,
            _ => unreachable!(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "mpn", "message": "must not be empty" }])
        );
    }
}
