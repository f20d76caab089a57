// src/domain/slug.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;

/// Answers whether a slug candidate is already stored for one entity kind.
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn is_taken(&self, candidate: &str) -> DomainResult<bool>;
}

/// Produces collision-free slugs for every entity that carries one.
///
/// The probe loop only narrows the window for collisions; the unique index on
/// the slug column stays the real guarantee, and callers retry once through
/// [`SlugService::unique_slug_skipping`] when an insert still loses the race.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub fn base_slug(&self, text: &str, fallback_prefix: &str) -> String {
        let base = self.generator.slugify(text);
        if base.is_empty() {
            format!("{fallback_prefix}-{}", self.clock.now().timestamp())
        } else {
            base
        }
    }

    pub async fn unique_slug_for(
        &self,
        text: &str,
        fallback_prefix: &str,
        probe: &dyn SlugProbe,
    ) -> DomainResult<String> {
        let base = self.base_slug(text, fallback_prefix);
        first_free(&base, probe, None).await
    }

    /// Same as [`Self::unique_slug_for`] but never hands back `taken`, the
    /// candidate a concurrent insert just claimed.
    pub async fn unique_slug_skipping(
        &self,
        text: &str,
        fallback_prefix: &str,
        probe: &dyn SlugProbe,
        taken: &str,
    ) -> DomainResult<String> {
        let base = self.base_slug(text, fallback_prefix);
        first_free(&base, probe, Some(taken)).await
    }
}

async fn first_free(
    base: &str,
    probe: &dyn SlugProbe,
    skip: Option<&str>,
) -> DomainResult<String> {
    let mut candidate = base.to_string();
    let mut counter = 1u64;

    loop {
        if skip != Some(candidate.as_str()) && !probe.is_taken(&candidate).await? {
            return Ok(candidate);
        }
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
}
