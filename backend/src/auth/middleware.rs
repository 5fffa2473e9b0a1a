//! Authentication extractors
//!
//! Axum extractors that validate the bearer token, re-load the caller
//! from the store and hand the resolved identity to handlers.
//!
//! Per-request state machine:
//! `NoToken -> (required ? reject : anonymous)`,
//! `Token -> Verifying -> {Valid -> Lookup -> {Found -> Authenticated, Missing -> reject}, Invalid -> reject}`.

use super::jwt::{extract_bearer_token, JwtService};
use crate::error::ApiError;
use crate::repositories::user::{IdentityRecord, UserRepository};
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use placeholder_api_shared::{AuthError, Role};
use serde::Serialize;
use sqlx::PgPool;
use std::convert::Infallible;
use tracing::debug;

/// Authenticated user resolved from a bearer token
///
/// Using this extractor makes authentication mandatory for the handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub username: String,
}

impl AuthUser {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl TryFrom<IdentityRecord> for AuthUser {
    type Error = ApiError;

    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        let role = record
            .role
            .parse::<Role>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
        Ok(Self {
            id: record.id,
            email: record.email,
            role,
            name: record.name,
            username: record.username,
        })
    }
}

/// Authenticated administrator; rejects other roles with 403
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// Optionally authenticated caller
///
/// Never rejects: a missing, invalid or expired token, or a deleted
/// user, all yield `MaybeAuthUser(None)`.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

/// Identity lookup used to confirm a token's subject still exists
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_identity(&self, id: i32) -> anyhow::Result<Option<IdentityRecord>>;
}

#[async_trait]
impl IdentityStore for PgPool {
    async fn find_identity(&self, id: i32) -> anyhow::Result<Option<IdentityRecord>> {
        UserRepository::find_identity(self, id).await
    }
}

/// Resolve the caller from an `Authorization` header value
///
/// Token failures yield 401. A token whose subject no longer exists is
/// also rejected, so deleting a user revokes their outstanding tokens.
/// Store failures propagate unchanged.
pub async fn authenticate<I>(
    store: &I,
    jwt: &JwtService,
    authorization: Option<&str>,
) -> Result<AuthUser, ApiError>
where
    I: IdentityStore + ?Sized,
{
    let token = extract_bearer_token(authorization).ok_or(AuthError::MissingToken);
    let claims = token.and_then(|t| jwt.validate_token(t));
    let user_id = claims.and_then(|c| c.user_id());

    let user_id = match user_id {
        Ok(id) => id,
        Err(err) => return Err(reject(err)),
    };

    match store.find_identity(user_id).await? {
        Some(record) => AuthUser::try_from(record),
        None => Err(reject(AuthError::UnknownUser)),
    }
}

fn reject(err: AuthError) -> ApiError {
    debug!(reason = err.reason(), "Authentication failed");
    metrics::counter!("auth_failures_total", "reason" => err.reason()).increment(1);
    err.into()
}

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authenticate(app_state.db(), app_state.jwt(), authorization_header(parts)).await
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(ApiError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }
        Ok(AdminUser(user))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let user = authenticate(app_state.db(), app_state.jwt(), authorization_header(parts))
            .await
            .ok();
        Ok(MaybeAuthUser(user))
    }
}
