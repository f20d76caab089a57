pub mod auth;
pub mod comments;
pub mod engagement;
pub mod notifications;
pub mod stories;

pub use auth::AuthenticatedUser;
pub use comments::{CommentDto, CommentThreadDto};
pub use engagement::{FollowStatsDto, ToggleStateDto};
pub use notifications::{NotificationDto, UnreadCountDto};
pub use stories::StoryDto;
