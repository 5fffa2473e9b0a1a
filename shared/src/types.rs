//! API request and response types

use crate::models::{Address, Company, Role, User};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ============================================================================
// Envelopes
// ============================================================================

/// Success envelope wrapping every non-error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Response carrying only data
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Response carrying data and a human-readable message
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Response carrying only a message (e.g. after a delete)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Stable error category, e.g. `NOT_FOUND`
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// A single invalid field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

// ============================================================================
// Authentication
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub name: String,
    #[validate(
        length(min = 3, max = 30, message = "must be between 3 and 30 characters"),
        custom(function = "crate::validation::validate_alphanumeric")
    )]
    pub username: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(
        length(min = 6, message = "must be at least 6 characters"),
        custom(function = "crate::validation::validate_password_bytes")
    )]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid uri"))]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub company: Option<Company>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Result of a successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

// ============================================================================
// Users
// ============================================================================

/// Admin-only user creation; same shape as registration plus a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(flatten)]
    pub user: RegisterRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// The registration fields sit at the top level of the JSON body, so
/// their errors are reported there too.
impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.user.validate()
    }
}

/// Partial user update; `role` is honoured for administrators only
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 3, max = 30, message = "must be between 3 and 30 characters"),
        custom(function = "crate::validation::validate_alphanumeric")
    )]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 6, message = "must be at least 6 characters"),
        custom(function = "crate::validation::validate_password_bytes")
    )]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(url(message = "must be a valid uri"))]
    pub website: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

// ============================================================================
// Posts and comments
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub body: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub post_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub body: Option<String>,
}

// ============================================================================
// Albums and photos
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAlbumRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAlbumRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: String,
    #[validate(url(message = "must be a valid uri"))]
    pub url: String,
    #[validate(url(message = "must be a valid uri"))]
    pub thumbnail_url: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub album_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(url(message = "must be a valid uri"))]
    pub url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "must be a valid uri"))]
    pub thumbnail_url: Option<String>,
}

// ============================================================================
// Todos
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: String,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank"))]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

// ============================================================================
// List filters
// ============================================================================

/// `?userId=` filter for posts, albums and todos
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub user_id: Option<i32>,
}

/// `?postId=` filter for comments
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostFilter {
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub post_id: Option<i32>,
}

/// `?albumId=` filter for photos
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlbumFilter {
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub album_id: Option<i32>,
}
