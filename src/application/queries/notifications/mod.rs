mod service;

pub use service::NotificationQueryService;
