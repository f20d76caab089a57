mod service;

pub use service::NotificationCommandService;
