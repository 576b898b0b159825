//! Domain & parameter models for dog operations
//!
//! Defines the dog domain model and the create/update parameter models, along with the
//! validation that turns a raw JSON body into those parameters.

use serde_json::{Map, Value};

use crate::{
    model::dog::DogDto,
    server::{
        error::AppError,
        util::validate::{PayloadValidator, Presence},
    },
};

/// Keys a dog payload may contain. Anything else is reported as an invalid key.
pub const DOG_FIELDS: [&str; 4] = ["name", "description", "breed", "age"];

/// The dog domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub breed: String,
    pub age: i32,
}

impl Dog {
    /// Converts an entity model to the dog domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Dog` - The converted dog domain model
    pub fn from_entity(entity: entity::dog::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            breed: entity.breed,
            age: entity.age,
        }
    }

    /// Converts the dog domain model to a DTO for API responses.
    pub fn into_dto(self) -> DogDto {
        DogDto {
            id: self.id,
            name: self.name,
            description: self.description,
            breed: self.breed,
            age: self.age,
        }
    }
}

/// Parameters for creating a new dog. Every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDogParam {
    pub name: String,
    pub description: String,
    pub breed: String,
    pub age: i32,
}

impl CreateDogParam {
    /// Validates a create payload.
    ///
    /// Checks `name`, `description`, `breed` and `age` in that order, then rejects any
    /// key outside [`DOG_FIELDS`]. All violations are collected before returning.
    ///
    /// # Returns
    /// - `Ok(CreateDogParam)` - All four fields present with the correct types
    /// - `Err(AppError::Validation)` - Every violation found in the payload
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, AppError> {
        let mut validator = PayloadValidator::new(payload);

        let name = validator.string("name", Presence::Required);
        let description = validator.string("description", Presence::Required);
        let breed = validator.string("breed", Presence::Required);
        let age = validator.whole_number("age", Presence::Required);
        validator.reject_unknown_keys(&DOG_FIELDS);

        let (Some(name), Some(description), Some(breed), Some(age)) =
            (name, description, breed, age)
        else {
            return Err(validator.into_error());
        };
        validator.finish()?;

        Ok(Self {
            name,
            description,
            breed,
            age,
        })
    }
}

/// Parameters for a partial dog update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDogParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
}

impl UpdateDogParam {
    /// Validates a partial update payload.
    ///
    /// Each supplied field must match its type; omitted fields are skipped. Unknown keys
    /// are reported after the field checks.
    ///
    /// # Returns
    /// - `Ok(UpdateDogParam)` - Supplied fields, all with the correct types
    /// - `Err(AppError::Validation)` - Every violation found in the payload
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, AppError> {
        let mut validator = PayloadValidator::new(payload);

        let param = Self {
            name: validator.string("name", Presence::Optional),
            description: validator.string("description", Presence::Optional),
            breed: validator.string("breed", Presence::Optional),
            age: validator.whole_number("age", Presence::Optional),
        };
        validator.reject_unknown_keys(&DOG_FIELDS);

        validator.finish()?;

        Ok(param)
    }

    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.breed.is_none()
            && self.age.is_none()
    }
}
