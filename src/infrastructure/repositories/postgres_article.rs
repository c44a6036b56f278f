// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleSort, ArticleSummary,
    ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    votes: i64,
    created_at: DateTime<Utc>,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            body: ArticleBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at,
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    id: i64,
    title: String,
    topic: String,
    author: String,
    votes: i64,
    created_at: DateTime<Utc>,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            votes: row.votes,
            created_at: row.created_at,
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT a.id, a.title, a.topic, a.author, a.body, a.votes, a.created_at,
                    COUNT(c.id) AS comment_count
             FROM articles a
             LEFT JOIN comments c ON c.article_id = a.id
             WHERE a.id = $1
             GROUP BY a.id",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(
        &self,
        sort: ArticleSort,
        topic: Option<&TopicSlug>,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT a.id, a.title, a.topic, a.author, a.votes, a.created_at,
                    COUNT(c.id) AS comment_count
             FROM articles a
             LEFT JOIN comments c ON c.article_id = a.id",
        );

        if let Some(slug) = topic {
            builder.push(" WHERE a.topic = ");
            builder.push_bind(slug.as_str());
        }

        builder.push(" GROUP BY a.id");

        // Sort key and direction come from closed enums, never from raw
        // input; id ascending breaks ties deterministically.
        builder.push(" ORDER BY a.");
        builder.push(sort.key.column());
        builder.push(" ");
        builder.push(sort.direction.sql());
        builder.push(", a.id ASC");

        let rows = builder
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            topic,
            author,
            body,
        } = article;

        // A fresh article cannot have comments yet, so the count is constant.
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, topic, author, body)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, topic, author, body, votes, created_at,
                       0::BIGINT AS comment_count",
        )
        .bind(title.as_str())
        .bind(topic.as_str())
        .bind(author.as_str())
        .bind(body.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn increment_votes(&self, id: ArticleId, delta: i64) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $1 WHERE id = $2
                 RETURNING id, title, topic, author, body, votes, created_at
             )
             SELECT u.id, u.title, u.topic, u.author, u.body, u.votes, u.created_at,
                    (SELECT COUNT(*) FROM comments c WHERE c.article_id = u.id) AS comment_count
             FROM updated u",
        )
        .bind(delta)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
