use super::*;

/// Tests deleting a dog by ID.
///
/// Verifies that the repository removes the row and returns it as it was.
///
/// Expected: Ok with the deleted dog returned
#[tokio::test]
async fn deletes_dog_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::dog::DogFactory::new(db).name("Rex").build().await?;

    let dog = DogRepository::new(db).delete(created.id).await?;

    assert_eq!(dog.id, created.id);
    assert_eq!(dog.name, "Rex");

    let db_dog = entity::prelude::Dog::find_by_id(created.id).one(db).await?;
    assert!(db_dog.is_none());

    Ok(())
}

/// Tests that deleting one dog leaves the others in place.
///
/// Expected: Ok with remaining dogs untouched
#[tokio::test]
async fn deletes_only_target_dog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dogs = factory::create_dogs(db, 2).await?;

    DogRepository::new(db).delete(dogs[0].id).await?;

    let remaining = entity::prelude::Dog::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, dogs[1].id);

    Ok(())
}

/// Tests deleting a dog that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_dog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DogRepository::new(db).delete(9999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests a delete that finds the dog but removes no rows.
///
/// A trigger that skips the row stands in for a concurrent delete landing between the
/// lookup and the delete.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_delete_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_dog(db).await?;
    db.execute_unprepared(KEEP_DOGS_TRIGGER).await?;

    let result = DogRepository::new(db).delete(created.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
