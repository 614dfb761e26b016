use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        recommended_website::{
            CreateRecommendedWebsiteDto, RecommendedWebsiteDto, UpdateRecommendedWebsiteDto,
        },
    },
    server::{
        controller::param::JsonBody, error::AppError,
        service::recommended_website::RecommendedWebsiteService, state::AppState,
    },
};

/// Tag for grouping recommended website endpoints in OpenAPI documentation
pub static RECOMMENDED_WEBSITE_TAG: &str = "recommended-website";

/// Create a new recommended website.
///
/// `title`, `url` and `description` are required; `url` must be an absolute http(s) URL.
/// Identical websites may be created more than once.
#[utoipa::path(
    post,
    path = "/api/recommended-website",
    tag = RECOMMENDED_WEBSITE_TAG,
    request_body = CreateRecommendedWebsiteDto,
    responses(
        (status = 201, description = "Successfully created recommended website", body = RecommendedWebsiteDto),
        (status = 400, description = "Missing or invalid fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_recommended_website(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let website = RecommendedWebsiteService::new(&state.db)
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(website.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/recommended-website",
    tag = RECOMMENDED_WEBSITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved recommended websites", body = Vec<RecommendedWebsiteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommended_websites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let websites = RecommendedWebsiteService::new(&state.db).get_all().await?;

    let dto: Vec<RecommendedWebsiteDto> = websites
        .into_iter()
        .map(|website| website.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/recommended-website/{_id}",
    tag = RECOMMENDED_WEBSITE_TAG,
    params(
        ("_id" = String, Path, description = "Recommended website ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recommended website", body = RecommendedWebsiteDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Recommended website not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommended_website_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let website = RecommendedWebsiteService::new(&state.db)
        .get_by_id(&id)
        .await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Update a recommended website.
///
/// Only the supplied fields among `title`, `url` and `description` are changed.
#[utoipa::path(
    patch,
    path = "/api/recommended-website/{_id}",
    tag = RECOMMENDED_WEBSITE_TAG,
    params(
        ("_id" = String, Path, description = "Recommended website ID")
    ),
    request_body = UpdateRecommendedWebsiteDto,
    responses(
        (status = 200, description = "Successfully updated recommended website", body = RecommendedWebsiteDto),
        (status = 400, description = "Invalid id or fields", body = ValidationErrorDto),
        (status = 404, description = "Recommended website not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_recommended_website(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let website = RecommendedWebsiteService::new(&state.db)
        .update(&id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/recommended-website/{_id}",
    tag = RECOMMENDED_WEBSITE_TAG,
    params(
        ("_id" = String, Path, description = "Recommended website ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted recommended website"),
        (status = 404, description = "Recommended website not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_recommended_website(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    RecommendedWebsiteService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
