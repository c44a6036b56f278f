use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into(),
            topic: article.topic.into(),
            author: article.author.into(),
            body: article.body.into(),
            votes: article.votes,
            created_at: article.created_at,
            comment_count: article.comment_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummaryDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(article: ArticleSummary) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into(),
            topic: article.topic.into(),
            author: article.author.into(),
            votes: article.votes,
            created_at: article.created_at,
            comment_count: article.comment_count,
        }
    }
}
