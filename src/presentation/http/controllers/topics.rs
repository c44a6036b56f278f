// src/presentation/http/controllers/topics.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde_json::{Value, json};

pub async fn list_topics(Extension(state): Extension<HttpState>) -> HttpResult<Json<Value>> {
    let topics = state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()?;

    // The documented wire field is singular even for the collection.
    Ok(Json(json!({ "topic": topics })))
}
