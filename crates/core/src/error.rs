use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Join violations into a single `field: message; ...` line.
pub fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Product",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Product with id 7");
    }

    #[test]
    fn validation_display_lists_every_field() {
        let err = CoreError::Validation(vec![
            FieldViolation::new("name", "length", "too long"),
            FieldViolation::new("stock", "range", "negative"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name: too long; stock: negative"
        );
    }
}
