pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_faq_table;
mod m20261016_000002_create_recommended_website_table;
mod m20261016_000003_create_suggestion_type_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_faq_table::Migration),
            Box::new(m20261016_000002_create_recommended_website_table::Migration),
            Box::new(m20261016_000003_create_suggestion_type_table::Migration),
        ]
    }
}
