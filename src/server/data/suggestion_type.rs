//! Suggestion type data repository for database operations
//!
//! Provides the `SuggestionTypeRepository` for creating, finding, updating, and deleting
//! suggestion types, including the lookup by name used for duplicate detection.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::suggestion_type::{
        CreateSuggestionTypeParam, SuggestionType, UpdateSuggestionTypeParam,
    },
    util::object_id::generate_id,
};

pub struct SuggestionTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new suggestion type with a freshly generated identifier.
    ///
    /// # Returns
    /// - `Ok(SuggestionType)` - The created suggestion type
    /// - `Err(DbErr)` - Insert rejected, including unique violations on `name`
    pub async fn create(&self, param: CreateSuggestionTypeParam) -> Result<SuggestionType, DbErr> {
        let now = Utc::now();

        let entity = entity::suggestion_type::ActiveModel {
            id: ActiveValue::Set(generate_id()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(SuggestionType::from_entity(entity))
    }

    /// Finds a suggestion type by ID, `Ok(None)` when it does not exist.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<SuggestionType>, DbErr> {
        let entity = entity::prelude::SuggestionType::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(SuggestionType::from_entity))
    }

    /// Finds a suggestion type whose name exactly matches `name`.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SuggestionType>, DbErr> {
        let entity = entity::prelude::SuggestionType::find()
            .filter(entity::suggestion_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(SuggestionType::from_entity))
    }

    /// Gets every suggestion type, newest first.
    pub async fn get_all(&self) -> Result<Vec<SuggestionType>, DbErr> {
        let entities = entity::prelude::SuggestionType::find()
            .order_by_desc(entity::suggestion_type::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SuggestionType::from_entity)
            .collect())
    }

    /// Applies the supplied fields of `param` onto `existing` and persists the result.
    ///
    /// # Returns
    /// - `Ok(SuggestionType)` - The updated suggestion type
    /// - `Err(DbErr::RecordNotUpdated)` - The record was deleted after `existing` was read
    /// - `Err(DbErr)` - Other database error, including unique violations on `name`
    pub async fn update(
        &self,
        existing: SuggestionType,
        param: UpdateSuggestionTypeParam,
    ) -> Result<SuggestionType, DbErr> {
        let mut active_model = entity::suggestion_type::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }

        let entity = active_model.update(self.db).await?;

        Ok(SuggestionType::from_entity(entity))
    }

    /// Deletes the suggestion type with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record matched
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::SuggestionType::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
