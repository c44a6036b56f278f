// src/infrastructure/repositories/postgres_topic.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{Topic, TopicRepository, TopicSlug};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    slug: String,
    description: String,
}

impl TryFrom<TopicRow> for Topic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Topic {
            slug: TopicSlug::new(row.slug)?,
            description: row.description,
        })
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicRow>("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Topic::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
