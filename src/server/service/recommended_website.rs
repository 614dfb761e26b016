use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

use crate::server::{
    data::recommended_website::RecommendedWebsiteRepository,
    error::AppError,
    model::recommended_website::{
        CreateRecommendedWebsiteParam, RecommendedWebsite, UpdateRecommendedWebsiteParam,
    },
    service::{ensure_valid_id, normalize_id},
};

pub const RECOMMENDED_WEBSITE_NOT_FOUND_MESSAGE: &str = "Recommended website not found.";

pub struct RecommendedWebsiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendedWebsiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new recommended website from a raw request body
    ///
    /// Recommended websites have no duplicate key, so no duplicate check is made.
    ///
    /// # Returns
    /// - `Ok(RecommendedWebsite)` - The created website
    /// - `Err(AppError::Validation)` - Required fields missing or invalid
    /// - `Err(AppError::StorageUnavailable)` - The insert failed
    pub async fn create(&self, body: &Value) -> Result<RecommendedWebsite, AppError> {
        let param = CreateRecommendedWebsiteParam::verify_fields(body)?;

        let website = RecommendedWebsiteRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::StorageUnavailable)?;

        tracing::info!("Created recommended website {}", website.id);

        Ok(website)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<RecommendedWebsite, AppError> {
        let id = ensure_valid_id(id)?;

        RecommendedWebsiteRepository::new(self.db)
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_all(&self) -> Result<Vec<RecommendedWebsite>, AppError> {
        Ok(RecommendedWebsiteRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update from a raw request body
    ///
    /// # Returns
    /// - `Ok(RecommendedWebsite)` - The updated website
    /// - `Err(AppError::BadRequest)` - `id` is malformed
    /// - `Err(AppError::Validation)` - No recognized field supplied, or a supplied field is invalid
    /// - `Err(AppError::NotFound)` - No website has this ID
    /// - `Err(AppError::StorageUnavailable)` - The update failed
    pub async fn update(&self, id: &str, body: &Value) -> Result<RecommendedWebsite, AppError> {
        let id = ensure_valid_id(id)?;
        let param = UpdateRecommendedWebsiteParam::verify_update(body)?;
        let repo = RecommendedWebsiteRepository::new(self.db);

        let existing = repo.find_by_id(&id).await?.ok_or_else(not_found)?;

        let website = match repo.update(existing, param).await {
            Ok(website) => website,
            Err(DbErr::RecordNotUpdated) => return Err(not_found()),
            Err(err) => return Err(AppError::StorageUnavailable(err)),
        };

        tracing::info!("Updated recommended website {}", website.id);

        Ok(website)
    }

    /// Deletes a recommended website
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = normalize_id(id);
        let repo = RecommendedWebsiteRepository::new(self.db);

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

        tracing::info!("Deleted recommended website {}", id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound(RECOMMENDED_WEBSITE_NOT_FOUND_MESSAGE.to_string())
}
