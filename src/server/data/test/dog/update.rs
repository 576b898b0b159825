use super::*;

/// Tests updating a single field.
///
/// Verifies that only the supplied field changes and the others keep their values.
///
/// Expected: Ok with age updated and other fields preserved
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::dog::DogFactory::new(db)
        .name("Rex")
        .description("good boy")
        .breed("Lab")
        .age(3)
        .build()
        .await?;

    let dog = DogRepository::new(db)
        .update(
            created.id,
            UpdateDogParam {
                age: Some(5),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(dog.id, created.id);
    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.description, "good boy");
    assert_eq!(dog.breed, "Lab");
    assert_eq!(dog.age, 5);

    let stored = entity::prelude::Dog::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.age, 5);
    assert_eq!(stored.name, "Rex");

    Ok(())
}

/// Tests updating every field at once.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_dog(db).await?;

    let dog = DogRepository::new(db)
        .update(
            created.id,
            UpdateDogParam {
                name: Some("Fido".to_string()),
                description: Some("sleepy".to_string()),
                breed: Some("Beagle".to_string()),
                age: Some(9),
            },
        )
        .await?;

    assert_eq!(dog.name, "Fido");
    assert_eq!(dog.description, "sleepy");
    assert_eq!(dog.breed, "Beagle");
    assert_eq!(dog.age, 9);

    Ok(())
}

/// Tests an update with no fields supplied.
///
/// Expected: Ok with the dog unchanged
#[tokio::test]
async fn empty_update_leaves_dog_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_dog(db).await?;

    let dog = DogRepository::new(db)
        .update(created.id, UpdateDogParam::default())
        .await?;

    assert_eq!(dog.name, created.name);
    assert_eq!(dog.description, created.description);
    assert_eq!(dog.breed, created.breed);
    assert_eq!(dog.age, created.age);

    Ok(())
}

/// Tests updating a dog that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_dog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DogRepository::new(db)
        .update(
            9999,
            UpdateDogParam {
                age: Some(5),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
