use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_administrator,
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentStatus, CommentUpdate},
};

pub struct ApproveCommentCommand {
    pub id: i64,
}

pub struct RejectCommentCommand {
    pub id: i64,
    pub reason: Option<String>,
}

impl CommentCommandService {
    pub async fn approve_comment(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_administrator(actor)?;
        self.set_status(command.id, CommentStatus::Approved).await
    }

    /// Hides the comment from threads. `comment_count` is left alone: it
    /// tracks creation and deletion, not moderation. The reason is only logged.
    pub async fn reject_comment(
        &self,
        actor: &AuthenticatedUser,
        command: RejectCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_administrator(actor)?;
        let rejected = self.set_status(command.id, CommentStatus::Rejected).await?;
        tracing::info!(
            comment_id = rejected.id,
            admin_id = i64::from(actor.id),
            admin = %actor.username,
            reason = command.reason.as_deref().unwrap_or(""),
            "comment rejected"
        );
        Ok(rejected)
    }

    async fn set_status(&self, id: i64, status: CommentStatus) -> ApplicationResult<CommentDto> {
        let mut comment = self.load_active(id).await?;
        comment.moderate(status, self.clock.now());
        let update = CommentUpdate::new(comment.id, comment.updated_at).with_status(status);
        Ok(self.comments.update(update).await?.into())
    }
}
