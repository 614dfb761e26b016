use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        suggestion_type::{CreateSuggestionTypeDto, SuggestionTypeDto, UpdateSuggestionTypeDto},
    },
    server::{
        controller::param::JsonBody, error::AppError,
        service::suggestion_type::SuggestionTypeService, state::AppState,
    },
};

/// Tag for grouping suggestion type endpoints in OpenAPI documentation
pub static SUGGESTION_TYPE_TAG: &str = "suggestion-type";

/// Create a new suggestion type.
///
/// Names are unique; an exact match on an existing name is rejected.
#[utoipa::path(
    post,
    path = "/api/suggestion-type",
    tag = SUGGESTION_TYPE_TAG,
    request_body = CreateSuggestionTypeDto,
    responses(
        (status = 201, description = "Successfully created suggestion type", body = SuggestionTypeDto),
        (status = 400, description = "Missing or invalid fields", body = ValidationErrorDto),
        (status = 403, description = "Suggestion type already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_suggestion_type(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let suggestion_type = SuggestionTypeService::new(&state.db)
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(suggestion_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/suggestion-type",
    tag = SUGGESTION_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved suggestion types", body = Vec<SuggestionTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggestion_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion_types = SuggestionTypeService::new(&state.db).get_all().await?;

    let dto: Vec<SuggestionTypeDto> = suggestion_types
        .into_iter()
        .map(|suggestion_type| suggestion_type.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/suggestion-type/{_id}",
    tag = SUGGESTION_TYPE_TAG,
    params(
        ("_id" = String, Path, description = "Suggestion type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved suggestion type", body = SuggestionTypeDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Suggestion type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggestion_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion_type = SuggestionTypeService::new(&state.db)
        .get_by_id(&id)
        .await?;

    Ok((StatusCode::OK, Json(suggestion_type.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/suggestion-type/{_id}",
    tag = SUGGESTION_TYPE_TAG,
    params(
        ("_id" = String, Path, description = "Suggestion type ID")
    ),
    request_body = UpdateSuggestionTypeDto,
    responses(
        (status = 200, description = "Successfully updated suggestion type", body = SuggestionTypeDto),
        (status = 400, description = "Invalid id or fields", body = ValidationErrorDto),
        (status = 403, description = "Suggestion type already exists", body = ErrorDto),
        (status = 404, description = "Suggestion type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_suggestion_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let suggestion_type = SuggestionTypeService::new(&state.db)
        .update(&id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(suggestion_type.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/suggestion-type/{_id}",
    tag = SUGGESTION_TYPE_TAG,
    params(
        ("_id" = String, Path, description = "Suggestion type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted suggestion type"),
        (status = 404, description = "Suggestion type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_suggestion_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    SuggestionTypeService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
