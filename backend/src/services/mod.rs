//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the authorization policy. Every mutation looks the
//! resource up first (404) and authorizes second (403).

pub mod album;
pub mod comment;
pub mod photo;
pub mod post;
pub mod todo;
pub mod user;

pub use album::AlbumService;
pub use comment::CommentService;
pub use photo::PhotoService;
pub use post::PostService;
pub use todo::TodoService;
pub use user::UserService;
