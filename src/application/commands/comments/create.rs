// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        services::messages::{self, GENERIC_USER},
    },
    domain::{
        comment::{Comment, CommentContent, NewComment},
        story::{Story, StoryId},
    },
};

pub struct CreateCommentCommand {
    pub story_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
}

impl CommentCommandService {
    /// Publishes the comment immediately and notifies either the parent
    /// comment's author (replies) or the story's author (top-level comments).
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;
        let story_id = StoryId::new(command.story_id)?;
        let story = self
            .stories
            .find_by_id(story_id)
            .await?
            .filter(|story| story.is_active)
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        let parent = match command.parent_id {
            Some(parent_id) => Some(self.load_reply_target(&story, parent_id).await?),
            None => None,
        };

        let created = self
            .comments
            .insert(NewComment::approved(
                content,
                actor.id,
                story.id,
                parent.as_ref().map(|p| p.id),
                self.clock.now(),
            ))
            .await?;

        tracing::debug!(
            comment_id = i64::from(created.id),
            story_id = i64::from(story.id),
            "comment created"
        );
        self.notify_about(&story, parent.as_ref(), &created).await;
        Ok(created.into())
    }

    async fn load_reply_target(&self, story: &Story, parent_id: i64) -> ApplicationResult<Comment> {
        let parent = self.load_active(parent_id).await.map_err(|err| match err {
            ApplicationError::NotFound(_) => ApplicationError::not_found("parent comment not found"),
            other => other,
        })?;
        if parent.story_id != story.id {
            return Err(ApplicationError::bad_request(
                "parent comment belongs to a different story",
            ));
        }
        if parent.is_reply() {
            return Err(ApplicationError::bad_request(
                "replies can only answer top-level comments",
            ));
        }
        Ok(parent)
    }

    async fn notify_about(&self, story: &Story, parent: Option<&Comment>, created: &Comment) {
        let recipient = parent.map_or(story.author_id, |p| p.author_id);
        if recipient == created.author_id {
            return;
        }

        let name = self
            .notifier
            .display_name(created.author_id, GENERIC_USER)
            .await;
        let draft = match parent {
            Some(parent) => messages::reply_to_comment(parent, created, &name),
            None => messages::new_comment(story, created, &name),
        };
        self.notifier.notify(draft).await;
    }
}
