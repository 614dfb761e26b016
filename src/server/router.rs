use std::any::Any;

use axum::{
    response::Response,
    routing::{get, post},
    Router,
};
use dioxus_logger::tracing;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        faq::{create_faq, delete_faq, get_faq_by_id, get_faqs, update_faq},
        recommended_website::{
            create_recommended_website, delete_recommended_website,
            get_recommended_website_by_id, get_recommended_websites, update_recommended_website,
        },
        suggestion_type::{
            create_suggestion_type, delete_suggestion_type, get_suggestion_type_by_id,
            get_suggestion_types, update_suggestion_type,
        },
    },
    doc::ApiDoc,
    error::internal_server_error,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/faq", post(create_faq).get(get_faqs))
        .route(
            "/api/faq/{_id}",
            get(get_faq_by_id).patch(update_faq).delete(delete_faq),
        )
        .route(
            "/api/recommended-website",
            post(create_recommended_website).get(get_recommended_websites),
        )
        .route(
            "/api/recommended-website/{_id}",
            get(get_recommended_website_by_id)
                .patch(update_recommended_website)
                .delete(delete_recommended_website),
        )
        .route(
            "/api/suggestion-type",
            post(create_suggestion_type).get(get_suggestion_types),
        )
        .route(
            "/api/suggestion-type/{_id}",
            get(get_suggestion_type_by_id)
                .patch(update_suggestion_type)
                .delete(delete_suggestion_type),
        )
}

/// Builds the complete application: API routes, API documentation and middleware layers.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    internal_server_error()
}
