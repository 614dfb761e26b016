//! FAQ data repository for database operations
//!
//! Provides the `FaqRepository` for creating, finding, updating, and deleting FAQ records,
//! including the lookup by question text used for duplicate detection.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::faq::{CreateFaqParam, Faq, UpdateFaqParam},
    util::object_id::generate_id,
};

/// Repository providing database operations for FAQ management.
pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    /// Creates a new FaqRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FaqRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new FAQ with a freshly generated identifier.
    ///
    /// # Arguments
    /// - `param` - Validated question and answer
    ///
    /// # Returns
    /// - `Ok(Faq)` - The created FAQ
    /// - `Err(DbErr)` - Insert rejected, including unique violations on `question`
    pub async fn create(&self, param: CreateFaqParam) -> Result<Faq, DbErr> {
        let now = Utc::now();

        let entity = entity::faq::ActiveModel {
            id: ActiveValue::Set(generate_id()),
            question: ActiveValue::Set(param.question),
            answer: ActiveValue::Set(param.answer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Faq::from_entity(entity))
    }

    /// Finds an FAQ by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Faq))` - The FAQ exists
    /// - `Ok(None)` - No FAQ has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Faq>, DbErr> {
        let entity = entity::prelude::Faq::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Faq::from_entity))
    }

    /// Finds an FAQ whose question exactly matches `question`.
    ///
    /// # Returns
    /// - `Ok(Some(Faq))` - A colliding FAQ exists
    /// - `Ok(None)` - The question is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_question(&self, question: &str) -> Result<Option<Faq>, DbErr> {
        let entity = entity::prelude::Faq::find()
            .filter(entity::faq::Column::Question.eq(question))
            .one(self.db)
            .await?;

        Ok(entity.map(Faq::from_entity))
    }

    /// Gets every FAQ, newest first.
    pub async fn get_all(&self) -> Result<Vec<Faq>, DbErr> {
        let entities = entity::prelude::Faq::find()
            .order_by_desc(entity::faq::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faq::from_entity).collect())
    }

    /// Applies the supplied fields of `param` onto `existing` and persists the result.
    ///
    /// Only supplied fields and `updated_at` are written.
    ///
    /// # Arguments
    /// - `existing` - The FAQ as previously read from the database
    /// - `param` - Partial update parameters
    ///
    /// # Returns
    /// - `Ok(Faq)` - The updated FAQ
    /// - `Err(DbErr::RecordNotUpdated)` - The FAQ was deleted after `existing` was read
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, existing: Faq, param: UpdateFaqParam) -> Result<Faq, DbErr> {
        let mut active_model = entity::faq::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(question) = param.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(answer) = param.answer {
            active_model.answer = ActiveValue::Set(answer);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Faq::from_entity(entity))
    }

    /// Deletes the FAQ with the provided ID.
    ///
    /// Deleting an ID that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record matched
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
