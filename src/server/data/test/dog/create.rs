use super::*;

/// Tests creating a new dog.
///
/// Verifies that the repository inserts the row, assigns an ID and returns the
/// stored values as a domain model.
///
/// Expected: Ok with dog created
#[tokio::test]
async fn creates_dog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DogRepository::new(db);
    let dog = repo
        .create(CreateDogParam {
            name: "Rex".to_string(),
            description: "good boy".to_string(),
            breed: "Lab".to_string(),
            age: 3,
        })
        .await?;

    assert!(dog.id > 0);
    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.description, "good boy");
    assert_eq!(dog.breed, "Lab");
    assert_eq!(dog.age, 3);

    let stored = entity::prelude::Dog::find_by_id(dog.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that each created dog receives its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DogRepository::new(db);
    let param = CreateDogParam {
        name: "Rex".to_string(),
        description: "good boy".to_string(),
        breed: "Lab".to_string(),
        age: 3,
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that creation fails when the table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DogRepository::new(db);
    let result = repo
        .create(CreateDogParam {
            name: "Rex".to_string(),
            description: "good boy".to_string(),
            breed: "Lab".to_string(),
            age: 3,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
