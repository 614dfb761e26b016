//! Data transfer objects exchanged with API clients.
//!
//! Response DTOs are built from server-side domain models at the controller boundary.
//! Request DTOs only describe the accepted JSON shape for the API documentation: request
//! bodies are read as raw JSON so that validation can report every offending field at once.

pub mod api;
pub mod faq;
pub mod recommended_website;
pub mod suggestion_type;
