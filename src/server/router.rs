use axum::{routing::get, Json, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto, MessageDto},
        dog::{CreateDogDto, DogDto, UpdateDogDto},
    },
    server::{
        controller::{
            dog::{self, create_dog, delete_dog, get_dog, get_dogs, update_dog},
            root::{self, hello},
        },
        middleware::panic::handle_panic,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::hello,
        dog::get_dogs,
        dog::get_dog,
        dog::create_dog,
        dog::update_dog,
        dog::delete_dog,
    ),
    components(schemas(DogDto, CreateDogDto, UpdateDogDto, ErrorDto, ErrorsDto, MessageDto)),
    tags(
        (name = "dog", description = "Dog records")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/dogs", get(get_dogs).post(create_dog))
        .route(
            "/dogs/{id}",
            get(get_dog).patch(update_dog).delete(delete_dog),
        )
        .route("/api/openapi.json", get(openapi))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
