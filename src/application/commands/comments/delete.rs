use super::CommentCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    validation,
};

pub struct DeleteCommentCommand {
    pub comment_id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = validation::parse_comment_id(&command.comment_id)?;

        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::not_found(format!(
                "comment {id} does not exist"
            )));
        }

        Ok(())
    }
}
