use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        validation,
    },
    domain::{
        comment::{CommentBody, NewComment},
        user::Username,
    },
};
use serde_json::Value;

pub struct CreateCommentCommand {
    pub article_id: String,
    pub payload: Value,
}

impl CommentCommandService {
    /// Validation order is part of the contract: id shape, body type, body
    /// emptiness, username type, then user existence BEFORE article
    /// existence. Only the first failing check is reported.
    ///
    /// The existence checks and the insert are sequential, not one
    /// transaction; concurrent deletes in the gap surface as a database
    /// foreign-key fault mapped by the repository layer.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = validation::parse_article_id(&command.article_id)?;
        let payload = &command.payload;

        let body = validation::require_string("body", payload.get("body"))?;
        if body.is_empty() {
            return Err(ApplicationError::empty_content("comment body is empty"));
        }
        let username = validation::require_string("username", payload.get("username"))?;
        let author = Username::new(username)?;

        if !self.user_repo.exists(&author).await? {
            return Err(ApplicationError::not_found(format!(
                "user {author} does not exist"
            )));
        }
        if !self.article_repo.exists(article_id).await? {
            return Err(ApplicationError::not_found(format!(
                "article {article_id} does not exist"
            )));
        }

        let new_comment = NewComment {
            article_id,
            author,
            body: CommentBody::new(body)?,
        };

        let created = self.write_repo.insert(new_comment).await?;
        Ok(created.into())
    }
}
