//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has its own module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
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
//!     let dog = factory::dog::create_dog(&db).await?;
//!
//!     let rex = factory::dog::DogFactory::new(&db)
//!         .name("Rex")
//!         .age(3)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dog;
pub mod helpers;

pub use dog::{create_dog, create_dogs};
