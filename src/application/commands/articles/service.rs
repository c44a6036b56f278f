// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleWriteRepository, topic::TopicRepository, user::UserRepository,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        user_repo: Arc<dyn UserRepository>,
        topic_repo: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            write_repo,
            user_repo,
            topic_repo,
        }
    }
}
