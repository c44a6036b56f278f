// src/presentation/http/controllers/manifest.rs
use axum::Json;
use serde_json::{Value, json};

/// `GET /api` — a static description of every endpoint the service exposes.
pub async fn get_manifest() -> Json<Value> {
    Json(json!({
        "GET /api": {
            "description": "serves a json representation of all the available endpoints of the api"
        },
        "GET /api/topics": {
            "description": "serves an array of all topics",
            "queries": []
        },
        "GET /api/articles": {
            "description": "serves an array of all articles with comment counts",
            "queries": ["topic", "sort_by", "order"]
        },
        "POST /api/articles": {
            "description": "creates an article and serves the created row",
            "queries": []
        },
        "GET /api/articles/{article_id}": {
            "description": "serves a single matching article",
            "queries": []
        },
        "PATCH /api/articles/{article_id}": {
            "description": "adjusts an article's vote counter and serves the updated row",
            "queries": []
        },
        "GET /api/articles/{article_id}/comments": {
            "description": "serves an array of comments for the given article",
            "queries": []
        },
        "POST /api/articles/{article_id}/comments": {
            "description": "creates a comment under an article and serves the created row",
            "queries": []
        },
        "PATCH /api/comments/{comment_id}": {
            "description": "adjusts a comment's vote counter and serves the updated row",
            "queries": []
        },
        "DELETE /api/comments/{comment_id}": {
            "description": "deletes a specific comment, no content on success",
            "queries": []
        },
        "GET /api/users": {
            "description": "serves an array of all users",
            "queries": []
        },
        "GET /api/users/{username}": {
            "description": "serves a single matching user",
            "queries": []
        }
    }))
}
