mod service;

pub use service::EngagementQueryService;
