// src/domain/story/services.rs
use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugProbe;
use crate::domain::story::repository::StoryRepository;
use crate::domain::story::value_objects::{StoryId, StorySlug};

/// Slug probe over stories. Inactive stories and retired slugs still block a
/// candidate; the story named by `owner` does not block its own slugs.
pub struct StorySlugProbe<'a> {
    repo: &'a dyn StoryRepository,
    owner: Option<StoryId>,
}

impl<'a> StorySlugProbe<'a> {
    pub fn new(repo: &'a dyn StoryRepository, owner: Option<StoryId>) -> Self {
        Self { repo, owner }
    }
}

#[async_trait]
impl SlugProbe for StorySlugProbe<'_> {
    async fn is_taken(&self, candidate: &str) -> DomainResult<bool> {
        let slug = StorySlug::new(candidate)?;
        Ok(match self.repo.slug_owner(&slug).await? {
            Some(holder) => Some(holder) != self.owner,
            None => false,
        })
    }
}
