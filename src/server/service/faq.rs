use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::faq::{CreateFaqParam, Faq, UpdateFaqParam},
    service::{ensure_valid_id, normalize_id},
};

pub const FAQ_DUPLICATE_MESSAGE: &str = "FAQ with indicated question already exists.";
pub const FAQ_NOT_FOUND_MESSAGE: &str = "FAQ not found.";

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new FAQ from a raw request body
    ///
    /// # Returns
    /// - `Ok(Faq)` - The created FAQ
    /// - `Err(AppError::Validation)` - Required fields missing or invalid
    /// - `Err(AppError::Duplicate)` - An FAQ with the same question exists
    /// - `Err(AppError::StorageUnavailable)` - The insert failed
    pub async fn create(&self, body: &Value) -> Result<Faq, AppError> {
        let param = CreateFaqParam::verify_fields(body)?;
        let repo = FaqRepository::new(self.db);

        if repo.find_by_question(&param.question).await?.is_some() {
            return Err(AppError::Duplicate(FAQ_DUPLICATE_MESSAGE.to_string()));
        }

        let faq = repo
            .create(param)
            .await
            .map_err(|err| AppError::from_write(err, FAQ_DUPLICATE_MESSAGE))?;

        tracing::info!("Created FAQ {}", faq.id);

        Ok(faq)
    }

    /// Gets a single FAQ by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Faq, AppError> {
        let id = ensure_valid_id(id)?;

        FaqRepository::new(self.db)
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(FAQ_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Gets every FAQ, newest first
    pub async fn get_all(&self) -> Result<Vec<Faq>, AppError> {
        Ok(FaqRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update from a raw request body
    ///
    /// # Returns
    /// - `Ok(Faq)` - The updated FAQ
    /// - `Err(AppError::BadRequest)` - `id` is malformed
    /// - `Err(AppError::Validation)` - No recognized field supplied, or a supplied field is invalid
    /// - `Err(AppError::NotFound)` - No FAQ has this ID
    /// - `Err(AppError::Duplicate)` - The new question is already used by another FAQ
    /// - `Err(AppError::StorageUnavailable)` - The update failed
    pub async fn update(&self, id: &str, body: &Value) -> Result<Faq, AppError> {
        let id = ensure_valid_id(id)?;
        let param = UpdateFaqParam::verify_update(body)?;
        let repo = FaqRepository::new(self.db);

        let existing = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(FAQ_NOT_FOUND_MESSAGE.to_string()))?;

        let faq = match repo.update(existing, param).await {
            Ok(faq) => faq,
            Err(DbErr::RecordNotUpdated) => {
                return Err(AppError::NotFound(FAQ_NOT_FOUND_MESSAGE.to_string()))
            }
            Err(err) => return Err(AppError::from_write(err, FAQ_DUPLICATE_MESSAGE)),
        };

        tracing::info!("Updated FAQ {}", faq.id);

        Ok(faq)
    }

    /// Deletes an FAQ
    ///
    /// # Returns
    /// - `Ok(())` - The FAQ was deleted
    /// - `Err(AppError::NotFound)` - No FAQ has this ID
    /// - `Err(AppError::StorageUnavailable)` - The delete failed
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = normalize_id(id);
        let repo = FaqRepository::new(self.db);

        if repo.find_by_id(&id).await?.is_none() {
            return Err(AppError::NotFound(FAQ_NOT_FOUND_MESSAGE.to_string()));
        }

        let deleted = repo
            .delete(&id)
            .await
            .map_err(AppError::StorageUnavailable)?;
        if !deleted {
            return Err(AppError::NotFound(FAQ_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Deleted FAQ {}", id);

        Ok(())
    }
}
