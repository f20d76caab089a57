// src/domain/comment/thread.rs
use std::collections::HashMap;

use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::CommentId;

/// A top-level comment together with its direct replies.
#[derive(Debug, Clone)]
pub struct CommentThread {
    pub root: Comment,
    pub replies: Vec<Comment>,
}

impl CommentThread {
    /// Groups comments into two-level threads. Only visible comments are kept;
    /// replies whose parent is hidden or is itself a reply are dropped.
    pub fn assemble(comments: Vec<Comment>) -> Vec<CommentThread> {
        let (mut roots, replies): (Vec<Comment>, Vec<Comment>) = comments
            .into_iter()
            .filter(Comment::is_visible)
            .partition(|comment| !comment.is_reply());

        roots.sort_by_key(|c| (c.created_at, c.id));

        let mut by_parent: HashMap<CommentId, Vec<Comment>> = HashMap::new();
        for reply in replies {
            if let Some(parent_id) = reply.parent_id {
                by_parent.entry(parent_id).or_default().push(reply);
            }
        }

        roots
            .into_iter()
            .map(|root| {
                let mut replies = by_parent.remove(&root.id).unwrap_or_default();
                replies.sort_by_key(|c| (c.created_at, c.id));
                CommentThread { root, replies }
            })
            .collect()
    }
}
