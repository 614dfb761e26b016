use sea_orm_migration::{prelude::*, schema::*};

const ID_LENGTH: u32 = 24;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendedWebsite::Table)
                    .if_not_exists()
                    .col(string_len(RecommendedWebsite::Id, ID_LENGTH).primary_key())
                    .col(string(RecommendedWebsite::Title))
                    .col(string(RecommendedWebsite::Url))
                    .col(text(RecommendedWebsite::Description))
                    .col(timestamp_with_time_zone(RecommendedWebsite::CreatedAt))
                    .col(timestamp_with_time_zone(RecommendedWebsite::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecommendedWebsite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecommendedWebsite {
    Table,
    Id,
    Title,
    Url,
    Description,
    CreatedAt,
    UpdatedAt,
}
