//! FAQ factory for creating test FAQ entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_object_id};

/// Factory for creating test FAQs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::faq::FaqFactory;
///
/// let faq = FaqFactory::new(&db)
///     .question("How do I register?")
///     .build()
///     .await?;
/// ```
pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    answer: String,
}

impl<'a> FaqFactory<'a> {
    /// Creates a new FaqFactory with default values.
    ///
    /// Defaults:
    /// - question: `"Question {id}"` where id is auto-incremented
    /// - answer: `"Answer {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
        }
    }

    /// Sets the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Sets the answer text.
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    /// Builds and inserts the FAQ entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::faq::Model)` - Created FAQ entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        let now = Utc::now();

        entity::faq::ActiveModel {
            id: ActiveValue::Set(next_object_id()),
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an FAQ with default values.
///
/// Shorthand for `FaqFactory::new(db).build().await`.
pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
