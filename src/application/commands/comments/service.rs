// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, comment::CommentWriteRepository, user::UserRepository,
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            write_repo,
            article_repo,
            user_repo,
        }
    }
}
