//! Database repository layer for the content resources.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and performs exactly one storage
//! round-trip per method, converting entity models into domain models on the way out.
//! Outcomes are reported without panics: a lookup miss is `Ok(None)`, a delete that
//! matched nothing is `Ok(false)`, an update whose row vanished is
//! `Err(DbErr::RecordNotUpdated)`, and every other `Err(DbErr)` is a storage fault for the
//! service layer to classify.

pub mod faq;
pub mod recommended_website;
pub mod suggestion_type;

#[cfg(test)]
mod test;
