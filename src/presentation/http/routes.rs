// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, comments, manifest, topics, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode},
    routing::get,
};
use serde_json::json;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api", get(manifest::get_manifest))
        .route("/api/topics", get(topics::list_topics))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article).patch(articles::patch_article_votes),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(articles::list_article_comments).post(articles::create_article_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            axum::routing::patch(comments::patch_comment_votes).delete(comments::delete_comment),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user))
        .fallback(page_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn page_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "msg": "page not found" })),
    )
}
