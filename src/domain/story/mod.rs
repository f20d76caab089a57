pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewStory, Story, StoryUpdate};
pub use repository::StoryRepository;
pub use services::StorySlugProbe;
pub use value_objects::{
    CategoryId, StoryContent, StoryId, StorySlug, StoryStatus, StoryTitle, TagId,
};
