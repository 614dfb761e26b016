//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are produced by the
//! field validators (`verify_fields` for creation, `verify_update` for partial updates)
//! from raw request bodies, so a parameter value is always known to be valid.

pub mod faq;
pub mod recommended_website;
pub mod suggestion_type;
