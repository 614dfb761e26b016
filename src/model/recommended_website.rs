use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedWebsiteDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecommendedWebsiteDto {
    pub title: String,
    /// Absolute `http` or `https` URL.
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecommendedWebsiteDto {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}
