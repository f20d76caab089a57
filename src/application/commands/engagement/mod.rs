mod follows;
mod likes;
mod saves;
mod service;
mod toggle;

pub use service::EngagementCommandService;
