mod get_by_id;
mod get_by_slug;
mod service;

pub use get_by_id::GetStoryByIdQuery;
pub use get_by_slug::GetStoryBySlugQuery;
pub use service::StoryQueryService;
