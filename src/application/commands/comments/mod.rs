mod create;
mod delete;
mod moderate;
mod service;
mod update;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use moderate::{ApproveCommentCommand, RejectCommentCommand};
pub use service::CommentCommandService;
pub use update::UpdateCommentCommand;
