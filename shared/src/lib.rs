//! Placeholder API Shared Library
//!
//! Models, request/response types and validators shared by the API server,
//! its integration tests and any Rust client.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

pub use errors::*;
pub use models::*;
pub use types::*;
