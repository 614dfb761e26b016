//! HTTP request handlers.
//!
//! Controllers extract path parameters and request bodies, call the matching service, and
//! convert domain models into DTOs. Status codes for failures are decided by `AppError`.

pub mod faq;
pub mod param;
pub mod recommended_website;
pub mod suggestion_type;

#[cfg(test)]
mod test;
