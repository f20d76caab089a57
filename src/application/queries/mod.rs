pub mod comments;
pub mod engagement;
pub mod notifications;
pub mod stories;
