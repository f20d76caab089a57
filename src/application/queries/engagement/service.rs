use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, FollowStatsDto, ToggleStateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        engagement::{FollowKey, FollowRepository, LikeKey, LikeRepository, SaveKey, SavedStoryRepository},
        story::StoryId,
        user::{UserId, UserRepository},
    },
};

pub struct EngagementQueryService {
    users: Arc<dyn UserRepository>,
    likes: Arc<dyn LikeRepository>,
    follows: Arc<dyn FollowRepository>,
    saves: Arc<dyn SavedStoryRepository>,
}

impl EngagementQueryService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        likes: Arc<dyn LikeRepository>,
        follows: Arc<dyn FollowRepository>,
        saves: Arc<dyn SavedStoryRepository>,
    ) -> Self {
        Self {
            users,
            likes,
            follows,
            saves,
        }
    }

    pub async fn is_liked(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<ToggleStateDto> {
        let key = LikeKey::new(actor.id, StoryId::new(story_id)?);
        Ok(ToggleStateDto {
            active: self.likes.is_active(&key).await?,
        })
    }

    pub async fn is_saved(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<ToggleStateDto> {
        let key = SaveKey::new(actor.id, StoryId::new(story_id)?);
        Ok(ToggleStateDto {
            active: self.saves.is_active(&key).await?,
        })
    }

    pub async fn saved_stories(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<i64>> {
        let ids = self.saves.saved_story_ids(actor.id).await?;
        Ok(ids.into_iter().map(Into::into).collect())
    }

    pub async fn follow_stats(
        &self,
        viewer: Option<&AuthenticatedUser>,
        user_id: i64,
    ) -> ApplicationResult<FollowStatsDto> {
        let user_id = UserId::new(user_id)?;
        self.users
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let counts = self.follows.counts(user_id).await?;
        let is_following = match viewer.filter(|viewer| viewer.id != user_id) {
            Some(viewer) => {
                let key = FollowKey::new(viewer.id, user_id)?;
                self.follows.is_active(&key).await?
            }
            None => false,
        };

        Ok(FollowStatsDto {
            user_id: user_id.into(),
            followers: counts.followers,
            following: counts.following,
            is_following,
        })
    }
}
