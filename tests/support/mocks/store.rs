// tests/support/mocks/store.rs
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use storyhub_core::domain::comment::{
    Comment, CommentId, CommentRepository, CommentStatus, CommentUpdate, NewComment,
};
use storyhub_core::domain::engagement::{
    FollowCounts, FollowKey, FollowRepository, LikeKey, LikeRepository, SaveKey,
    SavedStoryRepository, Toggle, ToggleRepository,
};
use storyhub_core::domain::errors::{DomainError, DomainResult};
use storyhub_core::domain::notification::{
    NewNotification, Notification, NotificationId, NotificationRepository,
};
use storyhub_core::domain::story::{
    NewStory, Story, StoryId, StoryRepository, StorySlug, StoryStatus, StoryUpdate,
};
use storyhub_core::domain::user::{User, UserId, UserRepository};

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    stories: BTreeMap<i64, Story>,
    comments: BTreeMap<i64, Comment>,
    likes: HashMap<(i64, i64), bool>,
    follows: BTreeMap<(i64, i64), bool>,
    saves: BTreeMap<(i64, i64), (bool, DateTime<Utc>)>,
    notifications: Vec<Notification>,
    next_story_id: i64,
    next_comment_id: i64,
    next_notification_id: i64,
    /// Slugs claimed by a writer the probe cannot see yet.
    hidden_slugs: HashSet<String>,
    /// Slugs left behind by renames, keyed to the story that held them.
    retired_slugs: HashMap<String, i64>,
    failing_recipients: HashSet<UserId>,
    fail_follower_lookup: bool,
}

/// Every repository in one process-local store, with hooks for injecting
/// the failures the services must tolerate.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.state.lock().unwrap().users.insert(user.id, user);
    }

    /// Makes notification inserts for `recipient` fail with a persistence
    /// error.
    pub fn fail_notifications_for(&self, recipient: UserId) {
        self.state
            .lock()
            .unwrap()
            .failing_recipients
            .insert(recipient);
    }

    pub fn fail_follower_lookup(&self) {
        self.state.lock().unwrap().fail_follower_lookup = true;
    }

    /// Simulates a concurrent insert that already holds `slug` in the unique
    /// index but is not yet visible to readers.
    pub fn claim_slug_concurrently(&self, slug: &str) {
        self.state
            .lock()
            .unwrap()
            .hidden_slugs
            .insert(slug.to_string());
    }

    pub fn story(&self, id: i64) -> Story {
        self.state.lock().unwrap().stories[&id].clone()
    }

    pub fn comment(&self, id: i64) -> Comment {
        self.state.lock().unwrap().comments[&id].clone()
    }

    pub fn notifications_for(&self, recipient: UserId) -> Vec<Notification> {
        self.state
            .lock()
            .unwrap()
            .notifications
            .iter()
            .filter(|n| n.recipient_id == recipient)
            .cloned()
            .collect()
    }

    pub fn notification_count(&self) -> usize {
        self.state.lock().unwrap().notifications.len()
    }
}

fn visible_slug_owner(state: &State, slug: &str) -> Option<i64> {
    state
        .stories
        .values()
        .find(|s| s.slug.as_str() == slug)
        .map(|s| i64::from(s.id))
        .or_else(|| state.retired_slugs.get(slug).copied())
}

fn slug_in_use(state: &State, slug: &str, except: Option<i64>) -> bool {
    state.hidden_slugs.contains(slug)
        || visible_slug_owner(state, slug).is_some_and(|owner| Some(owner) != except)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }
}

#[async_trait]
impl StoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .stories
            .get(&i64::from(id))
            .cloned())
    }

    async fn find_by_slug(&self, slug: &StorySlug) -> DomainResult<Option<Story>> {
        let state = self.state.lock().unwrap();
        Ok(state.stories.values().find(|s| &s.slug == slug).cloned())
    }

    async fn slug_owner(&self, slug: &StorySlug) -> DomainResult<Option<StoryId>> {
        let state = self.state.lock().unwrap();
        visible_slug_owner(&state, slug.as_str())
            .map(StoryId::new)
            .transpose()
    }

    async fn insert(&self, story: NewStory) -> DomainResult<Story> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&story.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        if slug_in_use(&state, story.slug.as_str(), None) {
            return Err(DomainError::SlugTaken("story slug already exists".into()));
        }

        state.next_story_id += 1;
        let id = state.next_story_id;
        let created = Story {
            id: StoryId::new(id)?,
            title: story.title,
            slug: story.slug,
            content: story.content,
            summary: story.summary,
            status: StoryStatus::Draft,
            author_id: story.author_id,
            category_id: story.category_id,
            tag_ids: story.tag_ids,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            is_editor_pick: false,
            is_active: true,
            published_at: None,
            created_at: story.created_at,
            updated_at: story.created_at,
        };
        state.stories.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);
        let Some(current) = state.stories.get(&id) else {
            return Err(DomainError::Conflict("story update conflict, please retry".into()));
        };
        if current.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("story update conflict, please retry".into()));
        }
        if let Some(slug) = &update.slug {
            if slug_in_use(&state, slug.as_str(), Some(id)) {
                return Err(DomainError::SlugTaken("story slug already exists".into()));
            }
        }

        let state = &mut *state;
        let Some(story) = state.stories.get_mut(&id) else {
            return Err(DomainError::NotFound("story not found".into()));
        };
        if let Some(title) = update.title {
            story.title = title;
        }
        if let Some(slug) = update.slug {
            let previous = std::mem::replace(&mut story.slug, slug);
            state.retired_slugs.remove(story.slug.as_str());
            if previous != story.slug {
                state.retired_slugs.insert(previous.into_inner(), id);
            }
        }
        if let Some(content) = update.content {
            story.content = content;
        }
        if let Some(summary) = update.summary {
            story.summary = Some(summary);
        }
        if let Some(category_id) = update.category_id {
            story.category_id = Some(category_id);
        }
        if let Some(tag_ids) = update.tag_ids {
            story.tag_ids = tag_ids;
        }
        if let Some(change) = update.status {
            story.status = change.status;
            story.published_at = change.published_at;
        }
        if let Some(pick) = update.is_editor_pick {
            story.is_editor_pick = pick;
        }
        if let Some(active) = update.is_active {
            story.is_active = active;
        }
        story.updated_at = update.updated_at;
        Ok(story.clone())
    }

    async fn record_view(&self, id: StoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let story = state
            .stories
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;
        story.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .comments
            .get(&i64::from(id))
            .cloned())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let story_key = i64::from(comment.story_id);
        if !state.stories.contains_key(&story_key) {
            return Err(DomainError::NotFound("story not found".into()));
        }

        state.next_comment_id += 1;
        let id = state.next_comment_id;
        let created = Comment {
            id: CommentId::new(id)?,
            content: comment.content,
            author_id: comment.author_id,
            story_id: comment.story_id,
            parent_id: comment.parent_id,
            status: comment.status,
            like_count: 0,
            is_active: true,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(id, created.clone());
        if let Some(story) = state.stories.get_mut(&story_key).filter(|s| s.is_active) {
            story.comment_count += 1;
        }
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let comment = state
            .comments
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        if let Some(content) = update.content {
            comment.content = content;
        }
        if let Some(status) = update.status {
            comment.status = status;
        }
        comment.updated_at = update.updated_at;
        Ok(comment.clone())
    }

    async fn deactivate(&self, id: CommentId, at: DateTime<Utc>) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(comment) = state.comments.get_mut(&i64::from(id)) else {
            return Ok(false);
        };
        if !comment.is_active {
            return Ok(false);
        }
        comment.is_active = false;
        comment.updated_at = at;
        let story_key = i64::from(comment.story_id);
        if let Some(story) = state.stories.get_mut(&story_key).filter(|s| s.is_active) {
            story.comment_count = story.comment_count.saturating_sub(1);
        }
        Ok(true)
    }

    async fn list_visible_for_story(&self, story_id: StoryId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut visible: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| {
                c.story_id == story_id && c.is_active && c.status == CommentStatus::Approved
            })
            .cloned()
            .collect();
        visible.sort_by_key(|c| (c.created_at, c.id));
        Ok(visible)
    }
}

#[async_trait]
impl ToggleRepository<LikeKey> for InMemoryStore {
    async fn is_active(&self, key: &LikeKey) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        Ok(state.likes.get(&pair).copied().unwrap_or(false))
    }

    async fn activate(&self, key: &LikeKey, _at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        if state.likes.get(&pair).copied().unwrap_or(false) {
            return Ok(Toggle::Unchanged);
        }
        state.likes.insert(pair, true);
        if let Some(story) = state.stories.get_mut(&pair.1).filter(|s| s.is_active) {
            story.like_count += 1;
        }
        Ok(Toggle::Changed)
    }

    async fn deactivate(&self, key: &LikeKey, _at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        if !state.likes.get(&pair).copied().unwrap_or(false) {
            return Ok(Toggle::Unchanged);
        }
        state.likes.insert(pair, false);
        if let Some(story) = state.stories.get_mut(&pair.1).filter(|s| s.is_active) {
            story.like_count = story.like_count.saturating_sub(1);
        }
        Ok(Toggle::Changed)
    }
}

impl LikeRepository for InMemoryStore {}

#[async_trait]
impl ToggleRepository<FollowKey> for InMemoryStore {
    async fn is_active(&self, key: &FollowKey) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        let pair = (i64::from(key.follower_id), i64::from(key.followed_id));
        Ok(state.follows.get(&pair).copied().unwrap_or(false))
    }

    async fn activate(&self, key: &FollowKey, _at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.follower_id), i64::from(key.followed_id));
        if state.follows.insert(pair, true) == Some(true) {
            return Ok(Toggle::Unchanged);
        }
        Ok(Toggle::Changed)
    }

    async fn deactivate(&self, key: &FollowKey, _at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.follower_id), i64::from(key.followed_id));
        match state.follows.get_mut(&pair) {
            Some(active) if *active => {
                *active = false;
                Ok(Toggle::Changed)
            }
            _ => Ok(Toggle::Unchanged),
        }
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn active_followers(&self, followed_id: UserId) -> DomainResult<Vec<UserId>> {
        let state = self.state.lock().unwrap();
        if state.fail_follower_lookup {
            return Err(DomainError::Persistence("follower lookup unavailable".into()));
        }
        let target = i64::from(followed_id);
        state
            .follows
            .iter()
            .filter(|((_, followed), active)| *followed == target && **active)
            .map(|((follower, _), _)| UserId::new(*follower))
            .collect()
    }

    async fn counts(&self, user_id: UserId) -> DomainResult<FollowCounts> {
        let state = self.state.lock().unwrap();
        let id = i64::from(user_id);
        let mut counts = FollowCounts::default();
        for ((follower, followed), active) in &state.follows {
            if !*active {
                continue;
            }
            if *followed == id {
                counts.followers += 1;
            }
            if *follower == id {
                counts.following += 1;
            }
        }
        Ok(counts)
    }
}

#[async_trait]
impl ToggleRepository<SaveKey> for InMemoryStore {
    async fn is_active(&self, key: &SaveKey) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        Ok(state.saves.get(&pair).is_some_and(|(active, _)| *active))
    }

    async fn activate(&self, key: &SaveKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        if state.saves.get(&pair).is_some_and(|(active, _)| *active) {
            return Ok(Toggle::Unchanged);
        }
        state.saves.insert(pair, (true, at));
        Ok(Toggle::Changed)
    }

    async fn deactivate(&self, key: &SaveKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut state = self.state.lock().unwrap();
        let pair = (i64::from(key.user_id), i64::from(key.story_id));
        match state.saves.get_mut(&pair) {
            Some(entry) if entry.0 => {
                *entry = (false, at);
                Ok(Toggle::Changed)
            }
            _ => Ok(Toggle::Unchanged),
        }
    }
}

#[async_trait]
impl SavedStoryRepository for InMemoryStore {
    async fn saved_story_ids(&self, user_id: UserId) -> DomainResult<Vec<StoryId>> {
        let state = self.state.lock().unwrap();
        let id = i64::from(user_id);
        let mut saved: Vec<(DateTime<Utc>, i64)> = state
            .saves
            .iter()
            .filter(|((user, _), (active, _))| *user == id && *active)
            .map(|((_, story), (_, at))| (*at, *story))
            .collect();
        saved.sort_by(|a, b| b.cmp(a));
        saved.into_iter().map(|(_, story)| StoryId::new(story)).collect()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification> {
        let mut state = self.state.lock().unwrap();
        if state.failing_recipients.contains(&notification.recipient_id) {
            return Err(DomainError::Persistence("notification store unavailable".into()));
        }

        state.next_notification_id += 1;
        let stored = Notification {
            id: NotificationId::new(state.next_notification_id)?,
            recipient_id: notification.recipient_id,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            is_read: false,
            related_story_id: notification.related_story_id,
            related_comment_id: notification.related_comment_id,
            created_at: notification.created_at,
        };
        state.notifications.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: NotificationId) -> DomainResult<Option<Notification>> {
        let state = self.state.lock().unwrap();
        Ok(state.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn list_for_recipient(
        &self,
        recipient_id: UserId,
        unread_only: bool,
    ) -> DomainResult<Vec<Notification>> {
        let state = self.state.lock().unwrap();
        let mut listed: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.recipient_id == recipient_id && (!unread_only || !n.is_read))
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        Ok(listed)
    }

    async fn mark_read(&self, id: NotificationId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NotFound("notification not found".into()))?;
        notification.is_read = true;
        Ok(())
    }

    async fn mark_all_read(&self, recipient_id: UserId) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut flipped = 0;
        for notification in state
            .notifications
            .iter_mut()
            .filter(|n| n.recipient_id == recipient_id && !n.is_read)
        {
            notification.is_read = true;
            flipped += 1;
        }
        Ok(flipped)
    }

    async fn count_unread(&self, recipient_id: UserId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .notifications
            .iter()
            .filter(|n| n.recipient_id == recipient_id && !n.is_read)
            .count() as u64)
    }
}
