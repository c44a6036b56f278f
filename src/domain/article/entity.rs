// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// Full article read model. `comment_count` is always computed at query time
/// by aggregating over comments, never stored.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

/// Collection listing shape: everything but the body.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
}
