//! Suggestion type factory for creating test suggestion type entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_object_id};

/// Factory for creating test suggestion types with customizable fields.
pub struct SuggestionTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SuggestionTypeFactory<'a> {
    /// Creates a new SuggestionTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Suggestion Type {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Suggestion Type {}", id),
        }
    }

    /// Sets the suggestion type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the suggestion type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::suggestion_type::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::suggestion_type::Model, DbErr> {
        let now = Utc::now();

        entity::suggestion_type::ActiveModel {
            id: ActiveValue::Set(next_object_id()),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a suggestion type with default values.
pub async fn create_suggestion_type(
    db: &DatabaseConnection,
) -> Result<entity::suggestion_type::Model, DbErr> {
    SuggestionTypeFactory::new(db).build().await
}
