use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto, MessageDto},
        dog::{CreateDogDto, DogDto, UpdateDogDto},
    },
    server::{
        controller::param::{IdParam, JsonObjectParam},
        error::AppError,
        model::dog::{CreateDogParam, Dog, UpdateDogParam},
        service::dog::DogService,
        state::AppState,
    },
};

/// Tag for grouping dog endpoints in OpenAPI documentation
pub static DOG_TAG: &str = "dog";

/// Error message returned when a partial update cannot be written.
pub const UPDATE_FAILED_MESSAGE: &str = "An error occurred while updating the dog";

/// List every dog.
///
/// # Returns
/// - `200 OK` - All dogs ordered by ID, no pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dogs",
    tag = DOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dogs", body = Vec<DogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dogs = DogService::new(&state.db).get_all().await?;

    let dtos: Vec<DogDto> = dogs.into_iter().map(Dog::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a dog by ID.
///
/// # Returns
/// - `200 OK` - The requested dog
/// - `204 No Content` - No dog has this ID
/// - `400 Bad Request` - ID is not a non-zero number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(
        ("id" = i32, Path, description = "Dog ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dog", body = DogDto),
        (status = 204, description = "Dog not found"),
        (status = 400, description = "Invalid dog ID", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dog(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Response, AppError> {
    let dog = match id {
        Some(id) => DogService::new(&state.db).get_by_id(id).await?,
        None => None,
    };

    match dog {
        Some(dog) => Ok((StatusCode::OK, Json(dog.into_dto())).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Create a new dog.
///
/// The body must contain exactly `name`, `description`, `breed` and `age`. Every type
/// error and every unknown key is reported in a single response.
///
/// # Returns
/// - `201 Created` - Successfully created dog
/// - `400 Bad Request` - `{ "errors": [...] }` listing every violation
/// - `500 Internal Server Error` - Database error, empty body
#[utoipa::path(
    post,
    path = "/dogs",
    tag = DOG_TAG,
    request_body = CreateDogDto,
    responses(
        (status = 201, description = "Successfully created dog", body = DogDto),
        (status = 400, description = "Invalid dog data", body = ErrorsDto),
        (status = 500, description = "Failed to store dog")
    ),
)]
pub async fn create_dog(
    State(state): State<AppState>,
    JsonObjectParam(payload): JsonObjectParam,
) -> Result<Response, AppError> {
    let param = CreateDogParam::from_payload(&payload)?;

    match DogService::new(&state.db).create(param).await {
        Ok(dog) => Ok((StatusCode::CREATED, Json(dog.into_dto())).into_response()),
        Err(e) => {
            tracing::error!("Failed to create dog: {}", e);
            Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// Partially update a dog.
///
/// Only the supplied fields are changed. Each supplied field must have the right type
/// and unknown keys are rejected; all violations are reported together.
///
/// # Returns
/// - `201 Created` - The updated dog
/// - `400 Bad Request` - Invalid ID, or `{ "errors": [...] }` for an invalid body
/// - `500 Internal Server Error` - Dog not found or database error
#[utoipa::path(
    patch,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(
        ("id" = i32, Path, description = "Dog ID")
    ),
    request_body = UpdateDogDto,
    responses(
        (status = 201, description = "Successfully updated dog", body = DogDto),
        (status = 400, description = "Invalid dog ID or dog data", body = ErrorsDto),
        (status = 500, description = "Failed to update dog", body = ErrorDto)
    ),
)]
pub async fn update_dog(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonObjectParam(payload): JsonObjectParam,
) -> Result<Response, AppError> {
    let param = UpdateDogParam::from_payload(&payload)?;

    let Some(id) = id else {
        tracing::error!("Failed to update dog: requested id matches no record");
        return Ok(update_failed());
    };

    match DogService::new(&state.db).update(id, param).await {
        Ok(dog) => Ok((StatusCode::CREATED, Json(dog.into_dto())).into_response()),
        Err(e) => {
            tracing::error!("Failed to update dog {}: {}", id, e);
            Ok(update_failed())
        }
    }
}

fn update_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: UPDATE_FAILED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// Delete a dog.
///
/// # Returns
/// - `200 OK` - The deleted dog
/// - `204 No Content` - The delete failed, typically because no dog has this ID
/// - `400 Bad Request` - ID is not a non-zero number
#[utoipa::path(
    delete,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(
        ("id" = i32, Path, description = "Dog ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted dog", body = DogDto),
        (status = 204, description = "Dog not found or could not be deleted"),
        (status = 400, description = "Invalid dog ID", body = MessageDto)
    ),
)]
pub async fn delete_dog(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Response, AppError> {
    let Some(id) = id else {
        tracing::warn!("Failed to delete dog: requested id matches no record");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    match DogService::new(&state.db).delete(id).await {
        Ok(dog) => Ok((StatusCode::OK, Json(dog.into_dto())).into_response()),
        Err(e) => {
            tracing::warn!("Failed to delete dog {}: {}", id, e);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}
