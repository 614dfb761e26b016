//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible
//! defaults, reducing boilerplate in tests. Each factory generates a unique, well-formed
//! 24-character hexadecimal identifier so inserted rows look exactly like rows written
//! by the application.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let faq = factory::faq::create_faq(&db).await?;
//!
//!     // Customize
//!     let suggestion_type = factory::suggestion_type::SuggestionTypeFactory::new(&db)
//!         .name("Bug report")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `faq` - Create FAQ entities
//! - `recommended_website` - Create recommended website entities
//! - `suggestion_type` - Create suggestion type entities

pub mod faq;
pub mod helpers;
pub mod recommended_website;
pub mod suggestion_type;

pub use faq::create_faq;
pub use recommended_website::create_recommended_website;
pub use suggestion_type::create_suggestion_type;
