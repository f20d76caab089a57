pub mod repository;
pub mod value_objects;

pub use repository::{FollowRepository, LikeRepository, SavedStoryRepository, ToggleRepository};
pub use value_objects::{FollowCounts, FollowKey, LikeKey, SaveKey, Toggle};
