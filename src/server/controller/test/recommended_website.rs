use super::*;

fn website() -> Value {
    json!({
        "title": "Rust",
        "url": "https://www.rust-lang.org",
        "description": "The Rust programming language",
    })
}

/// Tests that identical websites may be created twice.
///
/// Expected: 201 both times
#[tokio::test]
async fn identical_websites_are_both_created() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (first, _) = test.post("/api/recommended-website", website()).await;
    let (second, _) = test.post("/api/recommended-website", website()).await;
    let (_, list) = test.get("/api/recommended-website").await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
    assert_eq!(list.as_array().unwrap().len(), 2);
}

/// Tests that every missing field is listed.
///
/// Expected: 400 naming title, url and description
#[tokio::test]
async fn create_lists_every_missing_field() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, body) = test
        .post("/api/recommended-website", json!({ "rating": 5 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["title", "url", "description"]);
}

/// Tests a storage fault on create.
///
/// Without the backing table the insert fails for a reason other than a duplicate.
///
/// Expected: 503 with the generic message
#[tokio::test]
async fn storage_fault_on_create_is_unavailable() {
    let test = TestApp::new(TestBuilder::new()).await;

    let (status, body) = test.post("/api/recommended-website", website()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Service unavailable, please try again later.");
}

/// Tests a lookup fault on read.
///
/// Expected: 500 without internal detail
#[tokio::test]
async fn lookup_fault_is_internal_error() {
    let test = TestApp::new(TestBuilder::new()).await;

    let (status, body) = test.get("/api/recommended-website").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error." }));
}

/// Tests a single-field update.
///
/// Expected: 200 with only the url changed
#[tokio::test]
async fn updates_single_field() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test.post("/api/recommended-website", website()).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = test
        .patch(
            &format!("/api/recommended-website/{id}"),
            json!({ "url": "https://doc.rust-lang.org" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["url"], "https://doc.rust-lang.org");
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

/// Tests deleting a website.
///
/// Expected: 204 with empty body, then 404 on lookup
#[tokio::test]
async fn deletes_website() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test.post("/api/recommended-website", website()).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = test
        .delete(&format!("/api/recommended-website/{id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = test.get(&format!("/api/recommended-website/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
