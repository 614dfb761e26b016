use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        faq::{CreateFaqDto, FaqDto, UpdateFaqDto},
    },
    server::{
        controller::param::JsonBody, error::AppError, service::faq::FaqService, state::AppState,
    },
};

/// Tag for grouping FAQ endpoints in OpenAPI documentation
pub static FAQ_TAG: &str = "faq";

/// Create a new FAQ.
///
/// Both `question` and `answer` are required. Questions are unique: creating an FAQ whose
/// question matches an existing one exactly is rejected.
///
/// # Returns
/// - `201 Created` - The created FAQ
/// - `400 Bad Request` - Missing or invalid fields, or a malformed body
/// - `403 Forbidden` - An FAQ with the same question already exists
/// - `503 Service Unavailable` - The FAQ could not be stored
#[utoipa::path(
    post,
    path = "/api/faq",
    tag = FAQ_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "Successfully created FAQ", body = FaqDto),
        (status = 400, description = "Missing or invalid fields", body = ValidationErrorDto),
        (status = 403, description = "FAQ with indicated question already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_faq(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(faq.into_dto())))
}

/// Get every FAQ, newest first.
#[utoipa::path(
    get,
    path = "/api/faq",
    tag = FAQ_TAG,
    responses(
        (status = 200, description = "Successfully retrieved FAQs", body = Vec<FaqDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faqs = FaqService::new(&state.db).get_all().await?;

    let dto: Vec<FaqDto> = faqs.into_iter().map(|faq| faq.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/faq/{_id}",
    tag = FAQ_TAG,
    params(
        ("_id" = String, Path, description = "FAQ ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved FAQ", body = FaqDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faq_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(faq.into_dto())))
}

/// Update an FAQ.
///
/// Only the supplied fields are changed. Unrecognized fields are ignored, but at least
/// one of `question` or `answer` must be present.
///
/// # Returns
/// - `200 OK` - The updated FAQ
/// - `400 Bad Request` - Invalid id, no recognized field, or an invalid supplied field
/// - `403 Forbidden` - The new question is already used by another FAQ
/// - `404 Not Found` - No FAQ has this id
/// - `503 Service Unavailable` - The update could not be stored
#[utoipa::path(
    patch,
    path = "/api/faq/{_id}",
    tag = FAQ_TAG,
    params(
        ("_id" = String, Path, description = "FAQ ID")
    ),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "Successfully updated FAQ", body = FaqDto),
        (status = 400, description = "Invalid id or fields", body = ValidationErrorDto),
        (status = 403, description = "FAQ with indicated question already exists", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::new(&state.db).update(&id, &payload).await?;

    Ok((StatusCode::OK, Json(faq.into_dto())))
}

/// Delete an FAQ.
///
/// # Returns
/// - `204 No Content` - The FAQ was deleted
/// - `404 Not Found` - No FAQ has this id
/// - `503 Service Unavailable` - The delete could not be performed
#[utoipa::path(
    delete,
    path = "/api/faq/{_id}",
    tag = FAQ_TAG,
    params(
        ("_id" = String, Path, description = "FAQ ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted FAQ"),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    FaqService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
