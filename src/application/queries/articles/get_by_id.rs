use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    validation,
};

pub struct GetArticleQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = validation::parse_article_id(&query.article_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;
        Ok(article.into())
    }
}
