use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::specifications::CanDeleteCommentSpec,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self.load_active(command.id).await?;
        if !CanDeleteCommentSpec::new(&comment, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete comment",
            ));
        }

        // A concurrent delete may win between the load and this call.
        if !self.comments.deactivate(comment.id, self.clock.now()).await? {
            return Err(ApplicationError::not_found("comment not found"));
        }
        Ok(())
    }
}
