use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation,
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        topic::TopicSlug,
        user::Username,
    },
};
use serde_json::Value;

/// Raw creation payload. Fields stay as loose JSON values so the service can
/// report the precise failure kind instead of a blanket deserialization error.
pub struct CreateArticleCommand {
    pub payload: Value,
}

impl ArticleCommandService {
    /// Checks run in a fixed order and the first failure wins: field types
    /// (author, title, body, topic), then emptiness in the same order, then
    /// referential existence of author and topic.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let payload = &command.payload;

        let author = validation::require_string("author", payload.get("author"))?;
        let title = validation::require_string("title", payload.get("title"))?;
        let body = validation::require_string("body", payload.get("body"))?;
        let topic = validation::require_string("topic", payload.get("topic"))?;

        for (field, value) in [
            ("author", author),
            ("title", title),
            ("body", body),
            ("topic", topic),
        ] {
            if value.is_empty() {
                return Err(ApplicationError::incomplete_input(format!(
                    "article is not complete, {field} is empty"
                )));
            }
        }

        let author = Username::new(author)?;
        let topic = TopicSlug::new(topic)?;

        if !self.user_repo.exists(&author).await? {
            return Err(ApplicationError::not_found(format!(
                "user {author} does not exist"
            )));
        }
        if !self.topic_repo.exists(&topic).await? {
            return Err(ApplicationError::not_found(format!(
                "topic {topic} does not exist"
            )));
        }

        let new_article = NewArticle {
            title: ArticleTitle::new(title)?,
            topic,
            author,
            body: ArticleBody::new(body)?,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
