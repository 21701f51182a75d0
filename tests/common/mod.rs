#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

use movieshelf::{AppState, db};

/// Full router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = db::connect_and_migrate("sqlite::memory:").await.expect("in-memory database");
    movieshelf::app(Arc::new(AppState::new(db)))
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send_raw(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_raw(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send_raw(app, Method::PUT, uri, Some(body.to_string())).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send_raw(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POSTs `body` to `collection`, asserts 201 and returns the id from `Location`.
pub async fn create(app: &Router, collection: &str, body: Value) -> i32 {
    let response = post_json(app, collection, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(body_bytes(response).await.is_empty());

    location.rsplit('/').next().unwrap().parse().unwrap()
}

/// Asserts a 404 whose body is a non-empty JSON string.
pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    let text = body.as_str().expect("error text");
    assert!(!text.is_empty());
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect()
}
