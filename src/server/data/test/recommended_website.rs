use super::*;
use crate::server::{
    data::recommended_website::RecommendedWebsiteRepository,
    model::recommended_website::{CreateRecommendedWebsiteParam, UpdateRecommendedWebsiteParam},
};

fn website_param() -> CreateRecommendedWebsiteParam {
    CreateRecommendedWebsiteParam {
        title: "Rust".to_string(),
        url: "https://www.rust-lang.org".to_string(),
        description: "The Rust language homepage".to_string(),
    }
}

/// Tests creating identical recommended websites.
///
/// Recommended websites have no duplicate key, so identical content is stored twice.
///
/// Expected: Ok with two distinct records
#[tokio::test]
async fn creates_identical_websites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(RecommendedWebsite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecommendedWebsiteRepository::new(db);
    let first = repo.create(website_param()).await?;
    let second = repo.create(website_param()).await?;

    assert_ne!(first.id, second.id);
    assert!(is_valid_id(&first.id));
    assert_eq!(RecommendedWebsite::find().count(db).await?, 2);

    Ok(())
}

/// Tests a partial update of a recommended website.
///
/// Expected: Ok with url changed, title and description unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(RecommendedWebsite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_recommended_website(db).await?;
    let repo = RecommendedWebsiteRepository::new(db);
    let website = repo.find_by_id(&existing.id).await?.unwrap();

    let updated = repo
        .update(
            website,
            UpdateRecommendedWebsiteParam {
                title: None,
                url: Some("https://docs.rs".to_string()),
                description: None,
            },
        )
        .await?;

    assert_eq!(updated.url, "https://docs.rs");
    assert_eq!(updated.title, existing.title);
    assert_eq!(updated.description, existing.description);

    Ok(())
}

/// Tests deleting a recommended website twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_website() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(RecommendedWebsite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_recommended_website(db).await?;
    let repo = RecommendedWebsiteRepository::new(db);

    assert!(repo.delete(&existing.id).await?);
    assert!(repo.find_by_id(&existing.id).await?.is_none());
    assert!(!repo.delete(&existing.id).await?);

    Ok(())
}
