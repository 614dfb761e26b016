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
                    .table(SuggestionType::Table)
                    .if_not_exists()
                    .col(string_len(SuggestionType::Id, ID_LENGTH).primary_key())
                    .col(string_uniq(SuggestionType::Name))
                    .col(timestamp_with_time_zone(SuggestionType::CreatedAt))
                    .col(timestamp_with_time_zone(SuggestionType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SuggestionType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SuggestionType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
