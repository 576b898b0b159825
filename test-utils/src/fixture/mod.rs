//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and business logic that take entity models directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let dog = fixture::dog::entity();
//!
//! let puppy = fixture::dog::entity_builder()
//!     .age(0)
//!     .build();
//! ```

pub mod dog;

pub use dog::{entity as dog_entity, entity_builder as dog_entity_builder};
