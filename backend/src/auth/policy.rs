//! Ownership and role authorization
//!
//! Every mutating service operation funnels through [`authorize`] after
//! it has confirmed the target exists, so a missing resource is always
//! reported as 404 before any 403.

use super::middleware::AuthUser;
use crate::error::ApiError;
use placeholder_api_shared::Role;
use std::fmt;

/// Kind of mutation being authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// Core rule: owners and administrators may mutate
///
/// `owner_id == None` marks a resource without an owner, which only
/// administrators may touch.
#[inline]
pub fn can_modify(caller_id: i32, caller_role: Role, owner_id: Option<i32>) -> bool {
    caller_role.is_admin() || owner_id == Some(caller_id)
}

/// Authorize `caller` to perform `action` on a `resource` owned by `owner_id`
pub fn authorize(
    caller: &AuthUser,
    owner_id: Option<i32>,
    action: Action,
    resource: &str,
) -> Result<(), ApiError> {
    if can_modify(caller.id, caller.role, owner_id) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "Unauthorized to {} this {}",
            action, resource
        )))
    }
}

/// Turn a lookup result into the resource or a 404
pub fn require_found<T>(found: Option<T>, resource: &str) -> Result<T, ApiError> {
    found.ok_or_else(|| ApiError::NotFound(format!("{} not found", capitalize(resource))))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
