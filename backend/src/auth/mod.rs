//! Authentication and authorization
//!
//! JWT bearer tokens, bcrypt password hashing, request extractors and the
//! ownership policy applied by every resource service.

mod jwt;
mod middleware;
mod password;
pub mod policy;

pub use jwt::{extract_bearer_token, Claims, JwtService};
pub use middleware::{authenticate, AdminUser, AuthUser, IdentityStore, MaybeAuthUser};
pub use password::PasswordService;
pub use policy::{authorize, require_found, Action};
