use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author.into(),
            body: comment.body.into(),
            votes: comment.votes,
            created_at: comment.created_at,
        }
    }
}
