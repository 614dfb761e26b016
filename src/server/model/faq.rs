//! Domain & parameter models for FAQ operations
//!
//! Defines the FAQ domain model, its create and update parameters together with the
//! field validators producing them, and the conversions from entity and into DTO.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::faq::FaqDto,
    server::{error::validation::ValidationErrors, util::validation::FieldReader},
};

/// A frequently asked question and its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Faq {
    /// Converts an entity model to the FAQ domain model.
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the FAQ domain model to a DTO for API responses.
    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new FAQ.
///
/// `question` is the duplicate key: no two FAQs may share the same question text.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFaqParam {
    pub question: String,
    pub answer: String,
}

impl CreateFaqParam {
    /// Validates a create request body.
    ///
    /// # Arguments
    /// - `body` - Raw JSON request body
    ///
    /// # Returns
    /// - `Ok(CreateFaqParam)` - Both `question` and `answer` are non-empty strings
    /// - `Err(ValidationErrors)` - Every missing or invalid field
    pub fn verify_fields(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let question = fields.required_string("question");
        let answer = fields.required_string("answer");

        fields.finish(
            question
                .zip(answer)
                .map(|(question, answer)| Self { question, answer }),
        )
    }
}

/// Parameters for a partial FAQ update; `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFaqParam {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl UpdateFaqParam {
    /// Validates an update request body.
    ///
    /// # Returns
    /// - `Ok(UpdateFaqParam)` - At least one of `question` or `answer` was supplied
    /// - `Err(ValidationErrors)` - No recognized field was supplied, or a supplied one is invalid
    pub fn verify_update(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let param = Self {
            question: fields.optional_string("question"),
            answer: fields.optional_string("answer"),
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
    fn verifies_complete_create_body() {
        let param =
            CreateFaqParam::verify_fields(&json!({ "question": "Q1", "answer": "A1" })).unwrap();

        assert_eq!(param.question, "Q1");
        assert_eq!(param.answer, "A1");
    }

    #[test]
    fn lists_every_missing_create_field() {
        let err = CreateFaqParam::verify_fields(&json!({})).unwrap_err();

        assert_eq!(err.fields.len(), 2);
        assert_eq!(err.issue("question"), Some(FieldIssue::Missing));
        assert_eq!(err.issue("answer"), Some(FieldIssue::Missing));
    }

    #[test]
    fn rejects_wrong_primitive_type() {
        let err =
            CreateFaqParam::verify_fields(&json!({ "question": 1, "answer": "A1" })).unwrap_err();

        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.issue("question"), Some(FieldIssue::NotAString));
    }

    #[test]
    fn update_discards_unrecognized_fields() {
        let param =
            UpdateFaqParam::verify_update(&json!({ "answer": "A3", "votes": 10 })).unwrap();

        assert_eq!(
            param,
            UpdateFaqParam {
                question: None,
                answer: Some("A3".to_string()),
            }
        );
    }

    #[test]
    fn update_requires_a_recognized_field() {
        assert!(UpdateFaqParam::verify_update(&json!({})).is_err());
        assert!(UpdateFaqParam::verify_update(&json!({ "votes": 10 })).is_err());
    }
}
