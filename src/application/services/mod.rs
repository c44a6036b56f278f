// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        queries::{
            articles::ArticleQueryService, topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::{CommentReadRepository, CommentWriteRepository},
        topic::TopicRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_read_repo),
            Arc::clone(&topic_repo),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&user_repo),
            Arc::clone(&topic_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
        ));

        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_queries,
            article_commands,
            comment_commands,
            topic_queries,
            user_queries,
        }
    }
}
