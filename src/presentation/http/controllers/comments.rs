// src/presentation/http/controllers/comments.rs
use crate::application::commands::comments::{DeleteCommentCommand, IncrementCommentVotesCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde_json::{Value, json};

pub async fn patch_comment_votes(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
    payload: Option<Json<Value>>,
) -> HttpResult<Json<Value>> {
    let Json(payload) = payload.unwrap_or_else(|| Json(Value::Null));

    let comment = state
        .services
        .comment_commands
        .increment_votes(IncrementCommentVotesCommand {
            comment_id,
            payload,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "comment": comment })))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
