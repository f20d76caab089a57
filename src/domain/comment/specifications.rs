use crate::domain::comment::entity::Comment;
use crate::domain::user::{Role, UserId};

pub struct CanEditCommentSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> CanEditCommentSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId) -> Self {
        Self { comment, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.comment.author_id == self.user_id
    }
}

pub struct CanDeleteCommentSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
    role: Role,
}

impl<'a> CanDeleteCommentSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId, role: Role) -> Self {
        Self {
            comment,
            user_id,
            role,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role.is_administrator() || self.comment.author_id == self.user_id
    }
}
