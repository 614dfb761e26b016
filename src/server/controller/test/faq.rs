use super::*;

/// Tests the full FAQ lifecycle through the router.
///
/// Expected: 201, 403 on the repeated question, 200 on partial update, 204 on delete,
/// then 404 when updating the deleted FAQ
#[tokio::test]
async fn faq_lifecycle() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, created) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["question"], "Q1");
    assert_eq!(created["answer"], "A1");

    let (status, body) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A2" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FAQ with indicated question already exists.");

    let (status, updated) = test
        .patch(&format!("/api/faq/{id}"), json!({ "answer": "A3" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["question"], "Q1");
    assert_eq!(updated["answer"], "A3");

    let (status, body) = test.delete(&format!("/api/faq/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = test
        .patch(&format!("/api/faq/{id}"), json!({ "answer": "A4" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "FAQ not found.");
}

/// Tests that every missing field is listed.
///
/// Expected: 400 naming both question and answer
#[tokio::test]
async fn create_lists_every_missing_field() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, body) = test.post("/api/faq", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid fields.");
    assert_eq!(error_fields(&body), vec!["question", "answer"]);
}

/// Tests updating with a malformed id.
///
/// The database has no tables, so any storage access would fail with a 500.
///
/// Expected: 400
#[tokio::test]
async fn update_with_malformed_id_skips_storage() {
    let test = TestApp::new(TestBuilder::new()).await;

    let (status, body) = test.patch("/api/faq/abc", json!({ "answer": "A3" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id.");
}

/// Tests updating a well-formed but unknown id.
///
/// Expected: 404
#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;

    let (status, _) = test
        .patch("/api/faq/0123456789abcdef01234567", json!({ "answer": "A3" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests updating with an empty object.
///
/// Expected: 400
#[tokio::test]
async fn update_with_empty_body_is_rejected() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = test.patch(&format!("/api/faq/{id}"), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "At least one field to update is required: question, answer."
    );
}

/// Tests repeated and unknown deletes.
///
/// Expected: 204, then 404 for the repeat and for an id that never existed
#[tokio::test]
async fn repeated_delete_is_not_found() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    let id = created["id"].as_str().unwrap();

    assert_eq!(
        test.delete(&format!("/api/faq/{id}")).await.0,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        test.delete(&format!("/api/faq/{id}")).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        test.get(&format!("/api/faq/{id}")).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        test.delete("/api/faq/ffffffffffffffffffffffff").await.0,
        StatusCode::NOT_FOUND
    );
}

/// Tests the read endpoints.
///
/// Expected: list newest first, single FAQ by id
#[tokio::test]
async fn reads_faqs() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    test.post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    let (_, second) = test
        .post("/api/faq", json!({ "question": "Q2", "answer": "A2" }))
        .await;

    let (status, list) = test.get("/api/faq").await;
    assert_eq!(status, StatusCode::OK);
    let questions: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|faq| faq["question"].as_str())
        .collect();
    assert_eq!(questions, vec!["Q2", "Q1"]);

    let id = second["id"].as_str().unwrap();
    let (status, faq) = test.get(&format!("/api/faq/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(faq, second);
}

/// Tests addressing an FAQ with its id spelled in uppercase.
///
/// Expected: read, update and delete all reach the same record
#[tokio::test]
async fn uppercase_id_addresses_same_faq() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    let id = created["id"].as_str().unwrap();
    let upper = id.to_ascii_uppercase();

    let (status, faq) = test.get(&format!("/api/faq/{upper}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(faq["id"], id);

    let (status, updated) = test
        .patch(&format!("/api/faq/{upper}"), json!({ "answer": "A2" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["answer"], "A2");

    let (status, _) = test.delete(&format!("/api/faq/{upper}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(
        test.get(&format!("/api/faq/{id}")).await.0,
        StatusCode::NOT_FOUND
    );
}

/// Tests an update carrying one usable field and one blank field.
///
/// Expected: 200 with the question changed and the answer left as it was
#[tokio::test]
async fn update_ignores_blank_fields() {
    let test = TestApp::new(TestBuilder::new().with_content_tables()).await;
    let (_, created) = test
        .post("/api/faq", json!({ "question": "Q1", "answer": "A1" }))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = test
        .patch(
            &format!("/api/faq/{id}"),
            json!({ "question": "Q2", "answer": "" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["question"], "Q2");
    assert_eq!(updated["answer"], "A1");
}
