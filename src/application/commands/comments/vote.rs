use super::CommentCommandService;
use crate::application::{
    dto::CommentDto,
    error::{ApplicationError, ApplicationResult},
    validation,
};
use serde_json::Value;

pub struct IncrementCommentVotesCommand {
    pub comment_id: String,
    pub payload: Value,
}

impl CommentCommandService {
    pub async fn increment_votes(
        &self,
        command: IncrementCommentVotesCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = validation::parse_comment_id(&command.comment_id)?;
        let raw = validation::require_present("inc_votes", command.payload.get("inc_votes"))?;
        let delta = validation::require_integer("inc_votes", raw)?;

        let updated = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("comment {id} not found")))?;

        Ok(updated.into())
    }
}
