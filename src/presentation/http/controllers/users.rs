// src/presentation/http/controllers/users.rs
use crate::application::queries::users::GetUserQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::{Value, json};

pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Value>> {
    let users = state.services.user_queries.list_users().await.into_http()?;

    // The documented wire field is singular even for the collection.
    Ok(Json(json!({ "user": users })))
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<Value>> {
    let user = state
        .services
        .user_queries
        .get_user(GetUserQuery { username })
        .await
        .into_http()?;

    Ok(Json(json!({ "user": user })))
}
