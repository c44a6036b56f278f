use super::ArticleQueryService;
use crate::application::{
    dto::CommentDto,
    error::{ApplicationError, ApplicationResult},
    validation,
};

pub struct ListCommentsQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    /// Comments for one article, storage-natural order.
    ///
    /// The comment join alone cannot distinguish "article has no comments"
    /// from "article does not exist", so an empty result is followed by an
    /// article existence check.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let id = validation::parse_article_id(&query.article_id)?;

        let comments = self.comment_repo.list_by_article(id).await?;

        if comments.is_empty() && !self.read_repo.exists(id).await? {
            return Err(ApplicationError::not_found(format!(
                "article {id} not found"
            )));
        }

        Ok(comments.into_iter().map(Into::into).collect())
    }
}
