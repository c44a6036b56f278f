use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleSort, SortDirection, SortKey},
        topic::TopicSlug,
    },
};

pub struct ListArticlesQuery {
    pub sort_by: Option<String>,
    pub topic: Option<String>,
    pub order: Option<String>,
}

impl ArticleQueryService {
    /// List the article collection with computed comment counts.
    ///
    /// A zero-row result with a topic filter is ambiguous, so it triggers a
    /// secondary existence check: a registered topic with no articles is an
    /// empty collection, an unregistered one is `NotFound`.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let sort = Self::resolve_sort(query.sort_by.as_deref(), query.order.as_deref())?;

        let topic = match query.topic.as_deref() {
            None => None,
            Some(raw) => match TopicSlug::new(raw) {
                Ok(slug) => Some(slug),
                // An empty slug can never be registered; report it the same
                // way the post-query existence check would.
                Err(_) => {
                    return Err(ApplicationError::not_found(format!(
                        "topic {raw} does not exist"
                    )));
                }
            },
        };

        let articles = self.read_repo.list(sort, topic.as_ref()).await?;

        if articles.is_empty() {
            if let Some(slug) = &topic {
                if !self.topic_repo.exists(slug).await? {
                    return Err(ApplicationError::not_found(format!(
                        "topic {slug} does not exist"
                    )));
                }
            }
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Sort key is allow-listed and fails fast; order is a normalization and
    /// never fails.
    fn resolve_sort(sort_by: Option<&str>, order: Option<&str>) -> ApplicationResult<ArticleSort> {
        let key = match sort_by {
            None => SortKey::CreatedAt,
            Some(raw) => SortKey::parse(raw)
                .ok_or_else(|| ApplicationError::invalid_query(format!("cannot sort by {raw}")))?,
        };

        Ok(ArticleSort {
            key,
            direction: SortDirection::parse(order),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_sort_defaults() {
        let sort = ArticleQueryService::resolve_sort(None, None).unwrap();
        assert_eq!(sort.key, SortKey::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn resolve_sort_rejects_unknown_key() {
        let err = ArticleQueryService::resolve_sort(Some("not_a_column"), None).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidQuery(_)));
    }

    #[test]
    fn resolve_sort_normalizes_order() {
        let sort = ArticleQueryService::resolve_sort(Some("votes"), Some("invalid")).unwrap();
        assert_eq!(sort.direction, SortDirection::Descending);

        let sort = ArticleQueryService::resolve_sort(Some("votes"), Some("ASC")).unwrap();
        assert_eq!(sort.direction, SortDirection::Ascending);
    }
}
