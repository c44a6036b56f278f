use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    validation,
};
use serde_json::Value;

pub struct IncrementArticleVotesCommand {
    pub article_id: String,
    pub payload: Value,
}

impl ArticleCommandService {
    /// Applies `inc_votes` as one atomic read-modify-write statement and
    /// returns the updated article. Counters may go negative; only the vote
    /// field changes.
    pub async fn increment_votes(
        &self,
        command: IncrementArticleVotesCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = validation::parse_article_id(&command.article_id)?;
        let raw = validation::require_present("inc_votes", command.payload.get("inc_votes"))?;
        let delta = validation::require_integer("inc_votes", raw)?;

        let updated = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        Ok(updated.into())
    }
}
