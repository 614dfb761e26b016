//! OpenAPI documentation for the content administration API.

use utoipa::OpenApi;

use crate::model::{
    api::{ErrorDto, FieldErrorDto, ValidationErrorDto},
    faq::{CreateFaqDto, FaqDto, UpdateFaqDto},
    recommended_website::{
        CreateRecommendedWebsiteDto, RecommendedWebsiteDto, UpdateRecommendedWebsiteDto,
    },
    suggestion_type::{CreateSuggestionTypeDto, SuggestionTypeDto, UpdateSuggestionTypeDto},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tinmarin API",
        description = "Management of FAQs, recommended websites and suggestion types."
    ),
    paths(
        crate::server::controller::faq::create_faq,
        crate::server::controller::faq::get_faqs,
        crate::server::controller::faq::get_faq_by_id,
        crate::server::controller::faq::update_faq,
        crate::server::controller::faq::delete_faq,
        crate::server::controller::recommended_website::create_recommended_website,
        crate::server::controller::recommended_website::get_recommended_websites,
        crate::server::controller::recommended_website::get_recommended_website_by_id,
        crate::server::controller::recommended_website::update_recommended_website,
        crate::server::controller::recommended_website::delete_recommended_website,
        crate::server::controller::suggestion_type::create_suggestion_type,
        crate::server::controller::suggestion_type::get_suggestion_types,
        crate::server::controller::suggestion_type::get_suggestion_type_by_id,
        crate::server::controller::suggestion_type::update_suggestion_type,
        crate::server::controller::suggestion_type::delete_suggestion_type,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        ValidationErrorDto,
        FaqDto,
        CreateFaqDto,
        UpdateFaqDto,
        RecommendedWebsiteDto,
        CreateRecommendedWebsiteDto,
        UpdateRecommendedWebsiteDto,
        SuggestionTypeDto,
        CreateSuggestionTypeDto,
        UpdateSuggestionTypeDto,
    )),
    tags(
        (name = "faq", description = "Frequently asked questions"),
        (name = "recommended-website", description = "Recommended websites"),
        (name = "suggestion-type", description = "Suggestion types")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/api/faq",
            "/api/faq/{_id}",
            "/api/recommended-website",
            "/api/recommended-website/{_id}",
            "/api/suggestion-type",
            "/api/suggestion-type/{_id}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {path}");
        }
    }
}
