mod service;

pub use service::CommentQueryService;
