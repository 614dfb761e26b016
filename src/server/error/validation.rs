//! Field validation failures.
//!
//! A `ValidationErrors` collects every problem found in a request body so a single
//! round-trip surfaces the complete list to the client.

use std::fmt;

use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Empty,
    NotAString,
    InvalidUrl,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Missing => "is required",
            Self::Empty => "must not be empty",
            Self::NotAString => "must be a string",
            Self::InvalidUrl => "must be an absolute http or https URL",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub issue: FieldIssue,
}

/// Request body rejected by a field validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationErrors {
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// One or more fields are missing or carry an invalid value.
    pub fn invalid_fields(fields: Vec<FieldError>) -> Self {
        Self {
            message: "Missing or invalid fields.".to_string(),
            fields,
        }
    }

    /// An update request carried none of the fields the resource recognizes.
    pub fn nothing_to_update(recognized: &[&str]) -> Self {
        Self {
            message: format!(
                "At least one field to update is required: {}.",
                recognized.join(", ")
            ),
            fields: Vec::new(),
        }
    }

    /// Returns the issue recorded for `field`, if any.
    #[cfg(test)]
    pub fn issue(&self, field: &str) -> Option<FieldIssue> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.issue)
    }

    pub fn into_dto(self) -> ValidationErrorDto {
        ValidationErrorDto {
            error: self.message,
            fields: self
                .fields
                .into_iter()
                .map(|error| FieldErrorDto {
                    field: error.field.to_string(),
                    message: format!("{} {}", error.field, error.issue),
                })
                .collect(),
        }
    }
}
