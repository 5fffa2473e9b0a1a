//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod album;
pub mod comment;
pub mod photo;
pub mod post;
pub mod todo;
pub mod user;

pub use album::{AlbumRecord, AlbumRepository};
pub use comment::{CommentRecord, CommentRepository};
pub use photo::{CreatePhoto, PhotoRecord, PhotoRepository};
pub use post::{PostRecord, PostRepository};
pub use todo::{TodoRecord, TodoRepository};
pub use user::{CreateUser, IdentityRecord, UpdateUser, UserRecord, UserRepository};
