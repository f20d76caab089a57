use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::notifier::NotificationDispatcher,
    },
    domain::{
        engagement::{FollowRepository, LikeRepository, SavedStoryRepository},
        story::{Story, StoryId, StoryRepository},
        user::UserRepository,
    },
};

pub struct EngagementCommandService {
    pub(super) stories: Arc<dyn StoryRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) likes: Arc<dyn LikeRepository>,
    pub(super) follows: Arc<dyn FollowRepository>,
    pub(super) saves: Arc<dyn SavedStoryRepository>,
    pub(super) notifier: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EngagementCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stories: Arc<dyn StoryRepository>,
        users: Arc<dyn UserRepository>,
        likes: Arc<dyn LikeRepository>,
        follows: Arc<dyn FollowRepository>,
        saves: Arc<dyn SavedStoryRepository>,
        notifier: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stories,
            users,
            likes,
            follows,
            saves,
            notifier,
            clock,
        }
    }

    pub(super) async fn load_active_story(&self, id: i64) -> ApplicationResult<Story> {
        let id = StoryId::new(id)?;
        self.stories
            .find_by_id(id)
            .await?
            .filter(|story| story.is_active)
            .ok_or_else(|| ApplicationError::not_found("story not found"))
    }
}
