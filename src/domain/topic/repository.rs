use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{Topic, TopicSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Topic>>;
    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool>;
}
