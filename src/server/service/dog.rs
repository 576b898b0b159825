use sea_orm::DatabaseConnection;

use crate::server::{
    data::dog::DogRepository,
    error::AppError,
    model::dog::{CreateDogParam, Dog, UpdateDogParam},
};

pub struct DogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every dog
    pub async fn get_all(&self) -> Result<Vec<Dog>, AppError> {
        let repo = DogRepository::new(self.db);

        Ok(repo.find_many().await?)
    }

    /// Gets a specific dog by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let repo = DogRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates a new dog
    pub async fn create(&self, param: CreateDogParam) -> Result<Dog, AppError> {
        let repo = DogRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Merges the supplied fields into an existing dog
    ///
    /// Returns `AppError::DbErr(RecordNotFound)` if the dog doesn't exist
    pub async fn update(&self, id: i32, param: UpdateDogParam) -> Result<Dog, AppError> {
        let repo = DogRepository::new(self.db);

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a dog, returning it as it was before deletion
    ///
    /// Returns `AppError::DbErr(RecordNotFound)` if the dog doesn't exist
    pub async fn delete(&self, id: i32) -> Result<Dog, AppError> {
        let repo = DogRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
