//! Recommended website data repository for database operations

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::recommended_website::{
        CreateRecommendedWebsiteParam, RecommendedWebsite, UpdateRecommendedWebsiteParam,
    },
    util::object_id::generate_id,
};

/// Repository providing database operations for recommended website management.
///
/// Recommended websites have no duplicate key, so there is no lookup besides `find_by_id`.
pub struct RecommendedWebsiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendedWebsiteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new recommended website with a freshly generated identifier.
    pub async fn create(
        &self,
        param: CreateRecommendedWebsiteParam,
    ) -> Result<RecommendedWebsite, DbErr> {
        let now = Utc::now();

        let entity = entity::recommended_website::ActiveModel {
            id: ActiveValue::Set(generate_id()),
            title: ActiveValue::Set(param.title),
            url: ActiveValue::Set(param.url),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(RecommendedWebsite::from_entity(entity))
    }

    /// Finds a recommended website by ID, `Ok(None)` when it does not exist.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<RecommendedWebsite>, DbErr> {
        let entity = entity::prelude::RecommendedWebsite::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(RecommendedWebsite::from_entity))
    }

    /// Gets every recommended website, newest first.
    pub async fn get_all(&self) -> Result<Vec<RecommendedWebsite>, DbErr> {
        let entities = entity::prelude::RecommendedWebsite::find()
            .order_by_desc(entity::recommended_website::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(RecommendedWebsite::from_entity)
            .collect())
    }

    /// Applies the supplied fields of `param` onto `existing` and persists the result.
    ///
    /// # Returns
    /// - `Ok(RecommendedWebsite)` - The updated website
    /// - `Err(DbErr::RecordNotUpdated)` - The website was deleted after `existing` was read
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(
        &self,
        existing: RecommendedWebsite,
        param: UpdateRecommendedWebsiteParam,
    ) -> Result<RecommendedWebsite, DbErr> {
        let mut active_model = entity::recommended_website::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(url) = param.url {
            active_model.url = ActiveValue::Set(url);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }

        let entity = active_model.update(self.db).await?;

        Ok(RecommendedWebsite::from_entity(entity))
    }

    /// Deletes the recommended website with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record matched
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RecommendedWebsite::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
