//! SeaORM entities for the dogs database.

pub mod prelude;

pub mod dog;
