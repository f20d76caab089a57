pub mod comment;
pub mod engagement;
pub mod errors;
pub mod notification;
pub mod slug;
pub mod story;
pub mod user;
