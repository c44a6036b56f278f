use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    /// Storage-natural ordering; callers do not sort comments.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
}

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn increment_votes(&self, id: CommentId, delta: i64) -> DomainResult<Option<Comment>>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: CommentId) -> DomainResult<bool>;
}
