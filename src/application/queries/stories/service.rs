use std::sync::Arc;

use crate::domain::story::StoryRepository;

pub struct StoryQueryService {
    pub(super) stories: Arc<dyn StoryRepository>,
}

impl StoryQueryService {
    pub fn new(stories: Arc<dyn StoryRepository>) -> Self {
        Self { stories }
    }
}
