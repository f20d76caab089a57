use super::{
    EngagementCommandService,
    toggle::{self, Repeat},
};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        services::messages::{self, GENERIC_USER},
    },
    domain::{engagement::FollowKey, user::UserId},
};

impl EngagementCommandService {
    /// Self-follows are a `BadRequest`; administrators cannot be followed
    /// (`Forbidden`); a repeated follow is a `BadRequest`.
    pub async fn follow_user(&self, actor: &AuthenticatedUser, user_id: i64) -> ApplicationResult<()> {
        let key = FollowKey::new(actor.id, UserId::new(user_id)?)?;
        let followed = self
            .users
            .find_by_id(key.followed_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        if followed.is_administrator() {
            return Err(ApplicationError::forbidden(
                "administrators cannot be followed",
            ));
        }

        toggle::activate(
            self.follows.as_ref(),
            &key,
            self.clock.now(),
            Repeat::Reject("already following this user"),
        )
        .await?;

        let follower = self.notifier.display_name(actor.id, GENERIC_USER).await;
        self.notifier
            .notify(messages::new_follower(followed.id, &follower))
            .await;
        Ok(())
    }

    pub async fn unfollow_user(&self, actor: &AuthenticatedUser, user_id: i64) -> ApplicationResult<()> {
        let key = FollowKey::new(actor.id, UserId::new(user_id)?)?;
        toggle::deactivate(
            self.follows.as_ref(),
            &key,
            self.clock.now(),
            "not following this user",
        )
        .await
    }
}
