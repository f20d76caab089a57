pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNotification, Notification};
pub use repository::NotificationRepository;
pub use value_objects::{NotificationId, NotificationType};
