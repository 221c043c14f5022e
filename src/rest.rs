//! Demo REST handlers
//!
//! Fixed-payload endpoints the plugin registers alongside its GraphQL
//! fields. Handlers return plain JSON values; the host proxies them as-is.

use crate::{PLUGIN_NAME, PLUGIN_VERSION};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

/// GET /hello
pub async fn hello_handler() -> Json<Value> {
    Json(json!({
        "message": "Hello World from REST API!",
        "timestamp": Utc::now().to_rfc3339(),
        "plugin": PLUGIN_NAME,
        "version": PLUGIN_VERSION,
    }))
}

/// POST /custom-hello body. Empty strings count as absent.
#[derive(Deserialize, Debug, Default)]
pub struct CustomHelloBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// POST /custom-hello
pub async fn custom_hello_handler(Json(body): Json<CustomHelloBody>) -> Json<Value> {
    let name = if body.name.is_empty() { "World" } else { &body.name };
    let message = if body.message.is_empty() { "Hello" } else { &body.message };
    tracing::debug!(%name, %message, "custom-hello called");

    Json(json!({
        "greeting": format!("{message}, {name}!"),
        "plugin": PLUGIN_NAME,
        "version": PLUGIN_VERSION,
    }))
}

/// GET /status
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "status": "running",
        "version": PLUGIN_VERSION,
        "features": [
            "GraphQL Queries",
            "GraphQL Mutations",
            "REST APIs",
        ],
    }))
}

/// Router with all demo REST endpoints mounted.
pub fn router() -> Router {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/custom-hello", post(custom_hello_handler))
        .route("/status", get(status_handler))
}
