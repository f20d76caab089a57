// tests/support/helpers.rs
use std::sync::Arc;

use storyhub_core::application::commands::stories::{ApproveStoryCommand, SubmitStoryCommand};
use storyhub_core::application::dto::{AuthenticatedUser, StoryDto};
use storyhub_core::application::ports::{time::Clock, util::SlugGenerator};
use storyhub_core::application::services::{ApplicationServices, Repositories};
use storyhub_core::domain::user::{User, UserId};
use storyhub_core::infrastructure::util::DefaultSlugGenerator;

use super::builders::{UserBuilder, story_command};
use super::mocks::{InMemoryStore, TickingClock};

pub const ADMIN_ID: i64 = 1;

/// Services wired to one in-memory store, with an administrator preloaded.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: ApplicationServices,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(TickingClock::default()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        store.add_user(UserBuilder::new(ADMIN_ID).username("admin").admin().build());

        let repos = Repositories {
            users: store.clone(),
            stories: store.clone(),
            comments: store.clone(),
            likes: store.clone(),
            follows: store.clone(),
            saves: store.clone(),
            notifications: store.clone(),
        };
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
        let services = ApplicationServices::new(&repos, clock, slugger);

        Self { store, services }
    }

    /// Registers `user` and returns the identity it acts with.
    pub fn add_user(&self, user: User) -> AuthenticatedUser {
        let actor = actor_for(&user);
        self.store.add_user(user);
        actor
    }

    pub fn writer(&self, id: i64) -> AuthenticatedUser {
        self.add_user(UserBuilder::new(id).build())
    }

    pub fn admin(&self) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(ADMIN_ID).unwrap(),
            "admin",
            storyhub_core::domain::user::Role::Admin,
        )
    }

    pub async fn draft(&self, author: &AuthenticatedUser, title: &str) -> StoryDto {
        self.services
            .story_commands
            .create_story(author, story_command(title))
            .await
            .unwrap()
    }

    /// Creates, submits and approves a story.
    pub async fn published(&self, author: &AuthenticatedUser, title: &str) -> StoryDto {
        let draft = self.draft(author, title).await;
        self.services
            .story_commands
            .submit_story(author, SubmitStoryCommand { id: draft.id })
            .await
            .unwrap();
        self.services
            .story_commands
            .approve_story(&self.admin(), ApproveStoryCommand { id: draft.id })
            .await
            .unwrap()
    }
}

pub fn actor_for(user: &User) -> AuthenticatedUser {
    let username = user
        .username
        .as_ref()
        .map(|u| u.as_str().to_string())
        .unwrap_or_default();
    AuthenticatedUser::new(user.id, username, user.role)
}
