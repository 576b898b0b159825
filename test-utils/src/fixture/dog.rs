//! Dog fixtures for creating in-memory test data.

use entity::dog;

/// Default test dog name.
pub const DEFAULT_NAME: &str = "Rex";

/// Default test dog description.
pub const DEFAULT_DESCRIPTION: &str = "good boy";

/// Default test dog breed.
pub const DEFAULT_BREED: &str = "Lab";

/// Default test dog age.
pub const DEFAULT_AGE: i32 = 3;

/// Creates a dog entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Rex"`
/// - description: `"good boy"`
/// - breed: `"Lab"`
/// - age: `3`
///
/// # Returns
/// - `dog::Model` - In-memory dog entity
pub fn entity() -> dog::Model {
    entity_builder().build()
}

/// Creates a dog entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let dog = fixture::dog::entity_builder()
///     .name("Fido")
///     .age(7)
///     .build();
/// ```
pub fn entity_builder() -> DogEntityBuilder {
    DogEntityBuilder::default()
}

/// Builder for creating customized dog entity models.
pub struct DogEntityBuilder {
    id: i32,
    name: String,
    description: String,
    breed: String,
    age: i32,
}

impl Default for DogEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            breed: DEFAULT_BREED.to_string(),
            age: DEFAULT_AGE,
        }
    }
}

impl DogEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Builds and returns the dog entity model.
    pub fn build(self) -> dog::Model {
        dog::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            breed: self.breed,
            age: self.age,
        }
    }
}
