//! Dog factory for creating test dog entities.
//!
//! Provides factory methods for inserting dog rows with sensible defaults. The factory
//! supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dogs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dog::DogFactory;
///
/// let dog = DogFactory::new(&db)
///     .name("Rex")
///     .breed("Labrador")
///     .age(3)
///     .build()
///     .await?;
/// ```
pub struct DogFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    breed: String,
    age: i32,
}

impl<'a> DogFactory<'a> {
    /// Creates a new DogFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dog {id}"` where id is auto-incremented
    /// - description: `"Test dog {id}"`
    /// - breed: `"Mixed"`
    /// - age: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DogFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dog {}", id),
            description: format!("Test dog {}", id),
            breed: "Mixed".to_string(),
            age: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds and inserts the dog entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dog::Model)` - Created dog entity with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dog::Model, DbErr> {
        entity::dog::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            breed: ActiveValue::Set(self.breed),
            age: ActiveValue::Set(self.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dog with default values.
///
/// Shorthand for `DogFactory::new(db).build().await`.
pub async fn create_dog(db: &DatabaseConnection) -> Result<entity::dog::Model, DbErr> {
    DogFactory::new(db).build().await
}

/// Creates `count` dogs with default values, returned in insertion order.
pub async fn create_dogs(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::dog::Model>, DbErr> {
    let mut dogs = Vec::with_capacity(count);

    for _ in 0..count {
        dogs.push(create_dog(db).await?);
    }

    Ok(dogs)
}
