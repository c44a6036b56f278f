// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentReadRepository, CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: Username::new(row.author)?,
            body: CommentBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author, body, votes, created_at
             FROM comments WHERE article_id = $1",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING id, article_id, author, body, votes, created_at",
        )
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn increment_votes(&self, id: CommentId, delta: i64) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET votes = votes + $1 WHERE id = $2
             RETURNING id, article_id, author, body, votes, created_at",
        )
        .bind(delta)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
