use sea_orm_migration::{prelude::*, schema::*};

/// Length of the hexadecimal record identifiers assigned by the application.
const ID_LENGTH: u32 = 24;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(string_len(Faq::Id, ID_LENGTH).primary_key())
                    .col(string_uniq(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(timestamp_with_time_zone(Faq::CreatedAt))
                    .col(timestamp_with_time_zone(Faq::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faq {
    Table,
    Id,
    Question,
    Answer,
    CreatedAt,
    UpdatedAt,
}
