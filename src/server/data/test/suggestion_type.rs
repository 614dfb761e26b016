use super::*;
use crate::server::{
    data::suggestion_type::SuggestionTypeRepository,
    model::suggestion_type::{CreateSuggestionTypeParam, UpdateSuggestionTypeParam},
};

/// Tests the duplicate lookup by name.
///
/// Expected: Some for the stored name, None for any other
#[tokio::test]
async fn finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SuggestionType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::suggestion_type::SuggestionTypeFactory::new(db)
        .name("Bug report")
        .build()
        .await?;
    let repo = SuggestionTypeRepository::new(db);

    assert!(repo.find_by_name("Bug report").await?.is_some());
    assert!(repo.find_by_name("Bug").await?.is_none());

    Ok(())
}

/// Tests the storage-level uniqueness of suggestion type names.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_name_at_storage_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SuggestionType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SuggestionTypeRepository::new(db);
    repo.create(CreateSuggestionTypeParam {
        name: "Feature".to_string(),
    })
    .await?;

    let err = repo
        .create(CreateSuggestionTypeParam {
            name: "Feature".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests renaming a suggestion type.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn renames_suggestion_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SuggestionType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_suggestion_type(db).await?;
    let repo = SuggestionTypeRepository::new(db);
    let suggestion_type = repo.find_by_id(&existing.id).await?.unwrap();

    let updated = repo
        .update(
            suggestion_type,
            UpdateSuggestionTypeParam {
                name: Some("Renamed".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(
        SuggestionType::find_by_id(existing.id)
            .one(db)
            .await?
            .unwrap()
            .name,
        "Renamed"
    );

    Ok(())
}

/// Tests deleting an unknown suggestion type.
///
/// Expected: Ok(false), no error
#[tokio::test]
async fn delete_of_unknown_id_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(SuggestionType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_suggestion_type(db).await?;
    let repo = SuggestionTypeRepository::new(db);

    assert!(!repo.delete("ffffffffffffffffffffffff").await?);
    assert_eq!(SuggestionType::find().count(db).await?, 1);

    Ok(())
}
