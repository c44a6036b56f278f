// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, IncrementArticleVotesCommand},
    commands::comments::CreateCommentCommand,
    queries::articles::{GetArticleQuery, ListArticlesQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Value>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            sort_by: params.sort_by,
            topic: params.topic,
            order: params.order,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "articles": articles })))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<Value>> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "article": article })))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Option<Json<Value>>,
) -> HttpResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload.unwrap_or_else(|| Json(Value::Null));

    let article = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(json!({ "article": article }))))
}

pub async fn patch_article_votes(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    payload: Option<Json<Value>>,
) -> HttpResult<Json<Value>> {
    let Json(payload) = payload.unwrap_or_else(|| Json(Value::Null));

    let article = state
        .services
        .article_commands
        .increment_votes(IncrementArticleVotesCommand {
            article_id,
            payload,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "article": article })))
}

pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<Value>> {
    let comments = state
        .services
        .article_queries
        .list_comments(ListCommentsQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "comments": comments })))
}

pub async fn create_article_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    payload: Option<Json<Value>>,
) -> HttpResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload.unwrap_or_else(|| Json(Value::Null));

    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            article_id,
            payload,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}
