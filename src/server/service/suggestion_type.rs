use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

use crate::server::{
    data::suggestion_type::SuggestionTypeRepository,
    error::AppError,
    model::suggestion_type::{
        CreateSuggestionTypeParam, SuggestionType, UpdateSuggestionTypeParam,
    },
    service::{ensure_valid_id, normalize_id},
};

pub const SUGGESTION_TYPE_DUPLICATE_MESSAGE: &str = "Suggestion type already exists.";
pub const SUGGESTION_TYPE_NOT_FOUND_MESSAGE: &str = "Suggestion type not found.";

pub struct SuggestionTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new suggestion type from a raw request body
    ///
    /// # Returns
    /// - `Ok(SuggestionType)` - The created suggestion type
    /// - `Err(AppError::Validation)` - `name` missing or invalid
    /// - `Err(AppError::Duplicate)` - A suggestion type with the same name exists
    /// - `Err(AppError::StorageUnavailable)` - The insert failed
    pub async fn create(&self, body: &Value) -> Result<SuggestionType, AppError> {
        let param = CreateSuggestionTypeParam::verify_fields(body)?;
        let repo = SuggestionTypeRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(duplicate());
        }

        let suggestion_type = repo
            .create(param)
            .await
            .map_err(|err| AppError::from_write(err, SUGGESTION_TYPE_DUPLICATE_MESSAGE))?;

        tracing::info!("Created suggestion type {}", suggestion_type.id);

        Ok(suggestion_type)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<SuggestionType, AppError> {
        let id = ensure_valid_id(id)?;

        SuggestionTypeRepository::new(self.db)
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_all(&self) -> Result<Vec<SuggestionType>, AppError> {
        Ok(SuggestionTypeRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update from a raw request body
    ///
    /// # Returns
    /// - `Ok(SuggestionType)` - The updated suggestion type
    /// - `Err(AppError::BadRequest)` - `id` is malformed
    /// - `Err(AppError::Validation)` - `name` not supplied or invalid
    /// - `Err(AppError::NotFound)` - No suggestion type has this ID
    /// - `Err(AppError::Duplicate)` - The new name is already used
    /// - `Err(AppError::StorageUnavailable)` - The update failed
    pub async fn update(&self, id: &str, body: &Value) -> Result<SuggestionType, AppError> {
        let id = ensure_valid_id(id)?;
        let param = UpdateSuggestionTypeParam::verify_update(body)?;
        let repo = SuggestionTypeRepository::new(self.db);

        let existing = repo.find_by_id(&id).await?.ok_or_else(not_found)?;

        let suggestion_type = match repo.update(existing, param).await {
            Ok(suggestion_type) => suggestion_type,
            Err(DbErr::RecordNotUpdated) => return Err(not_found()),
            Err(err) => {
                return Err(AppError::from_write(err, SUGGESTION_TYPE_DUPLICATE_MESSAGE))
            }
        };

        tracing::info!("Updated suggestion type {}", suggestion_type.id);

        Ok(suggestion_type)
    }

    /// Deletes a suggestion type
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = normalize_id(id);
        let repo = SuggestionTypeRepository::new(self.db);

        if repo.find_by_id(&id).await?.is_none() {
            return Err(not_found());
        }

        let deleted = repo
            .delete(&id)
            .await
            .map_err(AppError::StorageUnavailable)?;
        if !deleted {
            return Err(not_found());
        }

        tracing::info!("Deleted suggestion type {}", id);

        Ok(())
    }
}

fn duplicate() -> AppError {
    AppError::Duplicate(SUGGESTION_TYPE_DUPLICATE_MESSAGE.to_string())
}

fn not_found() -> AppError {
    AppError::NotFound(SUGGESTION_TYPE_NOT_FOUND_MESSAGE.to_string())
}
