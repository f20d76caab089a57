use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::notifier::NotificationDispatcher,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        story::StoryRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) stories: Arc<dyn StoryRepository>,
    pub(super) notifier: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        stories: Arc<dyn StoryRepository>,
        notifier: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            stories,
            notifier,
            clock,
        }
    }

    pub(super) async fn load_active(&self, id: i64) -> ApplicationResult<Comment> {
        let id = CommentId::new(id)?;
        self.comments
            .find_by_id(id)
            .await?
            .filter(|comment| comment.is_active)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
