// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_topic;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
pub use postgres_topic::PostgresTopicRepository;
pub use postgres_user::PostgresUserRepository;
