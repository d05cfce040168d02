use axum::{body::Body, response::Response};
use axum_test::TestServer;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::{AppState, build_router};

pub(crate) fn must_create_test_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");

    AppState::new(connection).expect("could not initialize test DB")
}

pub(crate) fn must_create_test_server() -> TestServer {
    let app = build_router(must_create_test_state());

    TestServer::new(app).expect("Could not create test server.")
}

pub(crate) async fn parse_json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    serde_json::from_slice(&body).expect("Could not parse response body as JSON")
}
