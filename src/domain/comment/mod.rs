pub mod entity;
pub mod repository;
pub mod specifications;
pub mod thread;
pub mod value_objects;

pub use entity::{Comment, CommentUpdate, NewComment};
pub use repository::CommentRepository;
pub use thread::CommentThread;
pub use value_objects::{CommentContent, CommentId, CommentStatus};
