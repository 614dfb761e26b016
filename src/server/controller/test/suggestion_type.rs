use super::*;

/// Tests creating the same suggestion type twice.
///
/// Expected: 201 then 403
#[tokio::test]
async fn duplicate_name_is_forbidden() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (first, _) = test
        .post("/api/suggestion-type", json!({ "name": "Bug" }))
        .await;
    let (second, body) = test
        .post("/api/suggestion-type", json!({ "name": "Bug" }))
        .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Suggestion type already exists.");
}

/// Tests that a missing name is listed.
///
/// Expected: 400 naming the name field
#[tokio::test]
async fn create_requires_name() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, body) = test.post("/api/suggestion-type", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["name"]);
}

/// Tests renaming onto an existing name.
///
/// Expected: 403, the unique constraint catching what the update path does not pre-check
#[tokio::test]
async fn rename_onto_existing_name_is_forbidden() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    test.post("/api/suggestion-type", json!({ "name": "Bug" }))
        .await;
    let (_, feature) = test
        .post("/api/suggestion-type", json!({ "name": "Feature" }))
        .await;
    let id = feature["id"].as_str().unwrap();

    let (status, _) = test
        .patch(
            &format!("/api/suggestion-type/{id}"),
            json!({ "name": "Bug" }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests deleting with a malformed id.
///
/// Expected: 404, the same as for an unknown id
#[tokio::test]
async fn delete_with_malformed_id_is_not_found() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, body) = test.delete("/api/suggestion-type/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Suggestion type not found.");
}
