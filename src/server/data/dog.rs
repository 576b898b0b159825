//! Dog data repository for database operations
//!
//! Provides the `DogRepository` for managing dogs in the database. Each method issues the
//! SeaORM calls for one storage operation and converts entity models into domain models
//! for usage within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::dog::{CreateDogParam, Dog, UpdateDogParam};

/// Repository providing database operations for dog management.
pub struct DogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DogRepository<'a> {
    /// Creates a new DogRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DogRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every dog ordered by ID
    pub async fn find_many(&self) -> Result<Vec<Dog>, DbErr> {
        let dogs = entity::prelude::Dog::find()
            .order_by_asc(entity::dog::Column::Id)
            .all(self.db)
            .await?;

        Ok(dogs.into_iter().map(Dog::from_entity).collect())
    }

    /// Finds a dog by ID
    ///
    /// # Returns
    /// - `Ok(Some(Dog))` - The requested dog if found
    /// - `Ok(None)` - No dog has this ID
    /// - `Err(DbErr)` - Database error during the query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, DbErr> {
        let dog = entity::prelude::Dog::find_by_id(id).one(self.db).await?;

        Ok(dog.map(Dog::from_entity))
    }

    /// Creates a new dog, letting the database assign its ID
    pub async fn create(&self, param: CreateDogParam) -> Result<Dog, DbErr> {
        let entity = entity::dog::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            breed: ActiveValue::Set(param.breed),
            age: ActiveValue::Set(param.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dog::from_entity(entity))
    }

    /// Applies the supplied fields of `param` to an existing dog
    ///
    /// Fetches the current row, overwrites only the fields present in `param` and writes
    /// the merged row back.
    ///
    /// # Returns
    /// - `Ok(Dog)` - The updated dog
    /// - `Err(DbErr::RecordNotFound)` - No dog has this ID
    /// - `Err(DbErr)` - Database error during the query or update
    pub async fn update(&self, id: i32, param: UpdateDogParam) -> Result<Dog, DbErr> {
        let dog = entity::prelude::Dog::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Dog with id {} not found",
                id
            )))?;

        if param.is_empty() {
            return Ok(Dog::from_entity(dog));
        }

        let mut active_model: entity::dog::ActiveModel = dog.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(breed) = param.breed {
            active_model.breed = ActiveValue::Set(breed);
        }
        if let Some(age) = param.age {
            active_model.age = ActiveValue::Set(age);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Dog::from_entity(entity))
    }

    /// Deletes a dog and returns the row as it was before deletion
    ///
    /// The delete must remove the row itself; if it affects no rows, such as when a
    /// concurrent delete got there first, the dog is reported as not found.
    ///
    /// # Returns
    /// - `Ok(Dog)` - The deleted dog
    /// - `Err(DbErr::RecordNotFound)` - No dog has this ID, or the delete removed nothing
    /// - `Err(DbErr)` - Database error during the query or delete
    pub async fn delete(&self, id: i32) -> Result<Dog, DbErr> {
        let dog = entity::prelude::Dog::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Dog with id {} not found",
                id
            )))?;

        let result = entity::prelude::Dog::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Dog with id {} was not deleted",
                id
            )));
        }

        Ok(Dog::from_entity(dog))
    }
}
