use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentContent, CommentUpdate, specifications::CanEditCommentSpec},
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub content: String,
}

impl CommentCommandService {
    /// Replaces the content; the comment waits for moderation again.
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let mut comment = self.load_active(command.id).await?;
        if !CanEditCommentSpec::new(&comment, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can edit a comment",
            ));
        }

        let content = CommentContent::new(command.content)?;
        comment.edit(content.clone(), self.clock.now());

        let update = CommentUpdate::new(comment.id, comment.updated_at)
            .with_content(content)
            .with_status(comment.status);
        Ok(self.comments.update(update).await?.into())
    }
}
