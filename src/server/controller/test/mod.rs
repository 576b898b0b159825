use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Router wired to an in-memory database holding the dog table.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_dog_tables().build().await.unwrap();
        let db = test.db.unwrap();

        Self {
            router: router().with_state(AppState::new(db.clone())),
            db,
        }
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn raw_request(&self, method: &str, uri: &str, content_type: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn rex() -> Value {
    json!({
        "name": "Rex",
        "description": "good boy",
        "breed": "Lab",
        "age": 3
    })
}
