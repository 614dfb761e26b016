//! Domain & parameter models for suggestion type operations
//!
//! A suggestion type is a named category for user suggestions. `name` is the duplicate
//! key.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::suggestion_type::SuggestionTypeDto,
    server::{error::validation::ValidationErrors, util::validation::FieldReader},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionType {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SuggestionType {
    /// Converts an entity model to the suggestion type domain model.
    pub fn from_entity(entity: entity::suggestion_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the suggestion type domain model to a DTO for API responses.
    pub fn into_dto(self) -> SuggestionTypeDto {
        SuggestionTypeDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSuggestionTypeParam {
    pub name: String,
}

impl CreateSuggestionTypeParam {
    /// Validates a create request body; `name` must be a non-empty string.
    pub fn verify_fields(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let name = fields.required_string("name");

        fields.finish(name.map(|name| Self { name }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSuggestionTypeParam {
    pub name: Option<String>,
}

impl UpdateSuggestionTypeParam {
    /// Validates an update request body; `name` is the only recognized field.
    pub fn verify_update(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let param = Self {
            name: fields.optional_string("name"),
        };

        fields.finish_update(param)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::server::error::validation::FieldIssue;

    #[test]
    fn rejects_empty_name() {
        let err = CreateSuggestionTypeParam::verify_fields(&json!({ "name": "" })).unwrap_err();

        assert_eq!(err.issue("name"), Some(FieldIssue::Empty));
    }

    #[test]
    fn update_without_name_fails() {
        let err =
            UpdateSuggestionTypeParam::verify_update(&json!({ "label": "x" })).unwrap_err();

        assert_eq!(err.message, "At least one field to update is required: name.");
    }
}
