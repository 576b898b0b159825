use super::*;

/// Tests a partial update of a single field.
///
/// Expected: 201 with age changed and every other field untouched
#[tokio::test]
async fn updates_only_supplied_field() {
    let app = TestApp::new().await;
    let created = factory::dog::DogFactory::new(&app.db)
        .name("Rex")
        .description("good boy")
        .breed("Lab")
        .age(3)
        .build()
        .await
        .unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/dogs/{}", created.id),
            Some(json!({ "age": 5 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({
            "id": created.id,
            "name": "Rex",
            "description": "good boy",
            "breed": "Lab",
            "age": 5
        })
    );
}

/// Tests that an update is persisted.
///
/// Expected: a later GET returns the new values
#[tokio::test]
async fn persists_update() {
    let app = TestApp::new().await;
    let created = factory::create_dog(&app.db).await.unwrap();
    let uri = format!("/dogs/{}", created.id);

    app.request(
        "PATCH",
        &uri,
        Some(json!({ "name": "Fido", "breed": "Beagle" })),
    )
    .await;
    let response = app.request("GET", &uri, None).await;

    let body = json_body(response).await;
    assert_eq!(body["name"], "Fido");
    assert_eq!(body["breed"], "Beagle");
    assert_eq!(body["description"], json!(created.description));
    assert_eq!(body["age"], json!(created.age));
}

/// Tests that supplied fields of the wrong type and unknown keys are all reported.
///
/// Expected: 400 with every violation and the dog unchanged
#[tokio::test]
async fn reports_every_violation() {
    let app = TestApp::new().await;
    let created = factory::create_dog(&app.db).await.unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/dogs/{}", created.id),
            Some(json!({ "size": "large", "description": 1, "age": null })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({
            "errors": [
                "description should be a string",
                "age should be a number",
                "'size' is not a valid key"
            ]
        })
    );

    let stored = entity::prelude::Dog::find_by_id(created.id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, created);
}

/// Tests that the id is checked before the body.
///
/// Expected: 400 with the id message
#[tokio::test]
async fn rejects_invalid_id() {
    let app = TestApp::new().await;

    let response = app
        .request("PATCH", "/dogs/abc", Some(json!({ "age": "old" })))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "id should be a number" })
    );
}

/// Tests updating a dog that does not exist.
///
/// Expected: 500 with the update error message
#[tokio::test]
async fn returns_internal_error_for_missing_dog() {
    let app = TestApp::new().await;

    let response = app
        .request("PATCH", "/dogs/9999", Some(json!({ "age": 5 })))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "An error occurred while updating the dog" })
    );
}

/// Tests an update with an empty object.
///
/// Expected: 201 with the dog unchanged
#[tokio::test]
async fn empty_body_returns_unchanged_dog() {
    let app = TestApp::new().await;
    let created = factory::create_dog(&app.db).await.unwrap();

    let response = app
        .request("PATCH", &format!("/dogs/{}", created.id), Some(json!({})))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], json!(created.id));
    assert_eq!(body["name"], json!(created.name));
}

/// Tests an update sent with no body and no content type.
///
/// Expected: 201 with the dog unchanged, as for an empty object
#[tokio::test]
async fn missing_body_returns_unchanged_dog() {
    let app = TestApp::new().await;
    let created = factory::create_dog(&app.db).await.unwrap();

    let response = app
        .request("PATCH", &format!("/dogs/{}", created.id), None)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], json!(created.id));
    assert_eq!(body["age"], json!(created.age));
}

/// Tests an update addressed to a fractional id.
///
/// Expected: 500 with the update error, as for a missing dog
#[tokio::test]
async fn fractional_id_fails_like_missing_dog() {
    let app = TestApp::new().await;
    factory::create_dog(&app.db).await.unwrap();

    let response = app
        .request("PATCH", "/dogs/1.5", Some(json!({ "age": 5 })))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "An error occurred while updating the dog" })
    );
}
