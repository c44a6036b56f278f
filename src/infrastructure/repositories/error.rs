use crate::domain::errors::DomainError;

const CNT_ARTICLE_TOPIC: &str = "articles_topic_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

/// Translate database faults into the domain taxonomy. Foreign-key failures
/// can still happen in the gap between an existence check and the write; they
/// surface as the same `NotFound` the check would have produced.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TOPIC => DomainError::NotFound("topic does not exist".into()),
                    CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("user does not exist".into())
                    }
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article does not exist".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
