use crate::domain::article::entity::{Article, ArticleSummary, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSort};
use crate::domain::errors::DomainResult;
use crate::domain::topic::TopicSlug;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(
        &self,
        sort: ArticleSort,
        topic: Option<&TopicSlug>,
    ) -> DomainResult<Vec<ArticleSummary>>;
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Single-statement read-modify-write; `None` when no row matched.
    async fn increment_votes(&self, id: ArticleId, delta: i64) -> DomainResult<Option<Article>>;
}
