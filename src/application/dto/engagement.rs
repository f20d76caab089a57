use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleStateDto {
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStatsDto {
    pub user_id: i64,
    pub followers: u64,
    pub following: u64,
    /// Whether the viewing user follows `user_id`; false for anonymous viewers.
    pub is_following: bool,
}
