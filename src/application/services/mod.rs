// src/application/services/mod.rs
pub mod messages;
pub mod notifier;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, engagement::EngagementCommandService,
            notifications::NotificationCommandService, stories::StoryCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            comments::CommentQueryService, engagement::EngagementQueryService,
            notifications::NotificationQueryService, stories::StoryQueryService,
        },
    },
    domain::{
        comment::CommentRepository,
        engagement::{FollowRepository, LikeRepository, SavedStoryRepository},
        notification::NotificationRepository,
        slug::SlugService,
        story::StoryRepository,
        user::UserRepository,
    },
};

use notifier::NotificationDispatcher;

/// Repository implementations the services are built from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub stories: Arc<dyn StoryRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub saves: Arc<dyn SavedStoryRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

pub struct ApplicationServices {
    pub story_commands: Arc<StoryCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub engagement_commands: Arc<EngagementCommandService>,
    pub notification_commands: Arc<NotificationCommandService>,
    pub story_queries: Arc<StoryQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub engagement_queries: Arc<EngagementQueryService>,
    pub notification_queries: Arc<NotificationQueryService>,
    notifier: Arc<NotificationDispatcher>,
}

impl ApplicationServices {
    pub fn new(
        repos: &Repositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let notifier = Arc::new(NotificationDispatcher::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.notifications),
            Arc::clone(&clock),
        ));
        let slug_service = Arc::new(SlugService::new(Arc::clone(&slugger), Arc::clone(&clock)));

        let story_commands = Arc::new(StoryCommandService::new(
            Arc::clone(&repos.stories),
            Arc::clone(&repos.follows),
            slug_service,
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.stories),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));
        let engagement_commands = Arc::new(EngagementCommandService::new(
            Arc::clone(&repos.stories),
            Arc::clone(&repos.users),
            Arc::clone(&repos.likes),
            Arc::clone(&repos.follows),
            Arc::clone(&repos.saves),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));
        let notification_commands = Arc::new(NotificationCommandService::new(Arc::clone(
            &repos.notifications,
        )));

        let story_queries = Arc::new(StoryQueryService::new(Arc::clone(&repos.stories)));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.stories),
        ));
        let engagement_queries = Arc::new(EngagementQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.likes),
            Arc::clone(&repos.follows),
            Arc::clone(&repos.saves),
        ));
        let notification_queries = Arc::new(NotificationQueryService::new(Arc::clone(
            &repos.notifications,
        )));

        Self {
            story_commands,
            comment_commands,
            engagement_commands,
            notification_commands,
            story_queries,
            comment_queries,
            engagement_queries,
            notification_queries,
            notifier,
        }
    }

    /// Direct access to the dispatcher for callers that raise notifications
    /// outside the built-in workflows.
    pub fn notifier(&self) -> Arc<NotificationDispatcher> {
        Arc::clone(&self.notifier)
    }
}
