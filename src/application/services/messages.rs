// src/application/services/messages.rs
//! Notification wording. Every message names the acting user through
//! `NotificationDispatcher::display_name`, so the fallback nouns live here.
use super::notifier::NotificationDraft;
use crate::domain::{
    comment::Comment,
    notification::NotificationType,
    story::Story,
    user::UserId,
};

pub const GENERIC_USER: &str = "a user";
pub const GENERIC_WRITER: &str = "a writer";

const COMMENT_EXCERPT_CHARS: usize = 100;
const TITLE_EXCERPT_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Cuts `text` to `max_chars` characters and appends an ellipsis when it was
/// longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn new_comment(story: &Story, comment: &Comment, commenter: &str) -> NotificationDraft {
    NotificationDraft::new(
        story.author_id,
        NotificationType::NewComment,
        "New comment",
        format!(
            "{commenter} commented on \"{}\": {}",
            story.title,
            truncate(comment.content.as_str(), COMMENT_EXCERPT_CHARS)
        ),
    )
    .with_story(story.id)
    .with_comment(comment.id)
}

pub fn reply_to_comment(parent: &Comment, reply: &Comment, replier: &str) -> NotificationDraft {
    NotificationDraft::new(
        parent.author_id,
        NotificationType::ReplyToComment,
        "New reply",
        format!(
            "{replier} replied to your comment: {}",
            truncate(reply.content.as_str(), COMMENT_EXCERPT_CHARS)
        ),
    )
    .with_story(reply.story_id)
    .with_comment(reply.id)
}

pub fn story_liked(story: &Story, liker: &str) -> NotificationDraft {
    NotificationDraft::new(
        story.author_id,
        NotificationType::StoryLiked,
        "Your story was liked",
        format!(
            "{liker} liked your story \"{}\"",
            truncate(story.title.as_str(), TITLE_EXCERPT_CHARS)
        ),
    )
    .with_story(story.id)
}

pub fn new_follower(followed_id: UserId, follower: &str) -> NotificationDraft {
    NotificationDraft::new(
        followed_id,
        NotificationType::NewFollower,
        "New follower",
        format!("{follower} started following you"),
    )
}

pub fn story_published(follower_id: UserId, story: &Story, author: &str) -> NotificationDraft {
    NotificationDraft::new(
        follower_id,
        NotificationType::StoryPublished,
        "New story",
        format!("{author} published a new story: \"{}\"", story.title),
    )
    .with_story(story.id)
}
