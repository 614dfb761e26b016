//! Service layer for business logic and orchestration.
//!
//! Each service implements the request-handling decision sequence for one resource type,
//! sitting between the controllers (HTTP extraction and response shaping) and the
//! repositories (single storage round-trips):
//!
//! - **create**: validate fields → duplicate check (where the resource has a duplicate
//!   key) → insert
//! - **update**: validate id → validate update fields → find by id → update
//! - **delete**: find by id → delete
//!
//! Every anticipated outcome is returned as an `AppError` variant so the controller can
//! map it onto the fixed status vocabulary without inspecting storage errors. The
//! find-then-act sequences are not atomic. A row deleted between the lookup and the write
//! is still reported as not found, because the repositories report "no match" on the
//! write itself.

pub mod faq;
pub mod recommended_website;
pub mod suggestion_type;

#[cfg(test)]
mod test;

use crate::server::{error::AppError, util::object_id::is_valid_id};

/// Message returned when a path identifier is not a well-formed record identifier.
pub const INVALID_ID_MESSAGE: &str = "Invalid id.";

/// Rejects malformed identifiers before any storage access.
///
/// Identifiers are stored in lowercase, so either spelling of the hex digits names the
/// same record.
///
/// # Returns
/// - `Ok(String)` - `id` in its stored, lowercase form
/// - `Err(AppError::BadRequest)` - `id` is not 24 hexadecimal characters
pub fn ensure_valid_id(id: &str) -> Result<String, AppError> {
    if is_valid_id(id) {
        Ok(normalize_id(id))
    } else {
        Err(AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
    }
}

/// Converts an identifier to its stored form without checking its format.
pub fn normalize_id(id: &str) -> String {
    id.to_ascii_lowercase()
}
