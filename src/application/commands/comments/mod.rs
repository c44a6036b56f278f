mod create;
mod delete;
mod service;
mod vote;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
pub use vote::IncrementCommentVotesCommand;
