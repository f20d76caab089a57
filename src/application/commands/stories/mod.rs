// src/application/commands/stories/mod.rs
mod create;
mod delete;
mod moderate;
mod service;
mod submit;
mod update;

pub use create::{CreateStoryCommand, CreateStoryCommandBuilder};
pub use delete::DeleteStoryCommand;
pub use moderate::{ApproveStoryCommand, RejectStoryCommand, ToggleEditorPickCommand};
pub use service::StoryCommandService;
pub use submit::SubmitStoryCommand;
pub use update::UpdateStoryCommand;
