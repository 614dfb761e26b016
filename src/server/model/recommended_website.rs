//! Domain & parameter models for recommended website operations
//!
//! Recommended websites carry a title, an absolute http(s) URL and a description. They
//! have no duplicate key: identical websites may be stored more than once.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::recommended_website::RecommendedWebsiteDto,
    server::{error::validation::ValidationErrors, util::validation::FieldReader},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedWebsite {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecommendedWebsite {
    /// Converts an entity model to the recommended website domain model.
    pub fn from_entity(entity: entity::recommended_website::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the recommended website domain model to a DTO for API responses.
    pub fn into_dto(self) -> RecommendedWebsiteDto {
        RecommendedWebsiteDto {
            id: self.id,
            title: self.title,
            url: self.url,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new recommended website.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecommendedWebsiteParam {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl CreateRecommendedWebsiteParam {
    /// Validates a create request body.
    ///
    /// # Returns
    /// - `Ok(CreateRecommendedWebsiteParam)` - `title`, `url` and `description` are all valid
    /// - `Err(ValidationErrors)` - Every missing or invalid field
    pub fn verify_fields(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let title = fields.required_string("title");
        let url = fields.required_url("url");
        let description = fields.required_string("description");

        fields.finish(
            title
                .zip(url)
                .zip(description)
                .map(|((title, url), description)| Self {
                    title,
                    url,
                    description,
                }),
        )
    }
}

/// Parameters for a partial recommended website update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRecommendedWebsiteParam {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl UpdateRecommendedWebsiteParam {
    /// Validates an update request body.
    pub fn verify_update(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(body);
        let param = Self {
            title: fields.optional_string("title"),
            url: fields.optional_url("url"),
            description: fields.optional_string("description"),
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
    fn lists_every_missing_create_field() {
        let err = CreateRecommendedWebsiteParam::verify_fields(&json!({ "title": "Docs" }))
            .unwrap_err();

        assert_eq!(err.fields.len(), 2);
        assert_eq!(err.issue("url"), Some(FieldIssue::Missing));
        assert_eq!(err.issue("description"), Some(FieldIssue::Missing));
    }

    #[test]
    fn rejects_relative_url() {
        let err = CreateRecommendedWebsiteParam::verify_fields(&json!({
            "title": "Docs",
            "url": "/docs",
            "description": "Reference"
        }))
        .unwrap_err();

        assert_eq!(err.issue("url"), Some(FieldIssue::InvalidUrl));
    }

    #[test]
    fn update_accepts_single_field() {
        let param =
            UpdateRecommendedWebsiteParam::verify_update(&json!({ "title": "New title" }))
                .unwrap();

        assert_eq!(param.title.as_deref(), Some("New title"));
        assert_eq!(param.url, None);
        assert_eq!(param.description, None);
    }
}
