//! Recommended website factory for creating test recommended website entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_object_id};

/// Factory for creating test recommended websites with customizable fields.
pub struct RecommendedWebsiteFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    url: String,
    description: String,
}

impl<'a> RecommendedWebsiteFactory<'a> {
    /// Creates a new RecommendedWebsiteFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Website {id}"`
    /// - url: `"https://example.com/{id}"`
    /// - description: `"Description {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Website {}", id),
            url: format!("https://example.com/{}", id),
            description: format!("Description {}", id),
        }
    }

    /// Sets the website title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the website URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the website description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the recommended website entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::recommended_website::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recommended_website::Model, DbErr> {
        let now = Utc::now();

        entity::recommended_website::ActiveModel {
            id: ActiveValue::Set(next_object_id()),
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a recommended website with default values.
pub async fn create_recommended_website(
    db: &DatabaseConnection,
) -> Result<entity::recommended_website::Model, DbErr> {
    RecommendedWebsiteFactory::new(db).build().await
}
