//! User service for authentication and user management
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)
//! - Role changes and deletions are reserved to administrators

use crate::auth::policy::{authorize, can_modify, require_found, Action};
use crate::auth::{AuthUser, JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UpdateUser, UserRecord, UserRepository};
use placeholder_api_shared::{
    AuthError, AuthPayload, RegisterRequest, Role, UpdateUserRequest, User,
};
use sqlx::PgPool;
use tracing::info;

/// User service for account and authentication operations
pub struct UserService;

impl UserService {
    /// List every user
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, ApiError> {
        let records = UserRepository::list(pool).await?;
        let users = records
            .into_iter()
            .map(UserRecord::into_user)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Get a single user
    pub async fn get(pool: &PgPool, id: i32) -> Result<User, ApiError> {
        let record = require_found(UserRepository::find_by_id(pool, id).await?, "user")?;
        Ok(record.into_user()?)
    }

    /// Create a user with the given role
    ///
    /// Rejects a duplicate email or username with 409 before hashing.
    pub async fn create(
        pool: &PgPool,
        passwords: &PasswordService,
        input: RegisterRequest,
        role: Role,
    ) -> Result<User, ApiError> {
        if UserRepository::email_or_username_taken(pool, &input.email, &input.username).await? {
            return Err(ApiError::Conflict(
                "User with this email or username already exists".to_string(),
            ));
        }

        // CPU-intensive; runs on the blocking pool
        let password_hash = passwords.hash_async(input.password).await?;

        let id = UserRepository::create(
            pool,
            CreateUser {
                name: input.name,
                username: input.username,
                email: input.email,
                password_hash,
                phone: input.phone,
                website: input.website,
                role,
                address: input.address,
                company: input.company,
            },
        )
        .await?;

        Self::get(pool, id).await
    }

    /// Register a new account and sign it in
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        passwords: &PasswordService,
        input: RegisterRequest,
    ) -> Result<AuthPayload, ApiError> {
        let user = Self::create(pool, passwords, input, Role::User).await?;
        let token = jwt_service.issue_token(user.id, &user.email, user.role)?;

        metrics::counter!("users_registered_total").increment(1);
        info!(user_id = user.id, "User registered");

        Ok(AuthPayload { user, token })
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same 401 after the
    /// same amount of bcrypt work.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        passwords: &PasswordService,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        let Some(credentials) = UserRepository::find_credentials(pool, email).await? else {
            passwords.verify_unknown_async().await?;
            metrics::counter!("logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid =
            PasswordService::verify_async(password.to_string(), credentials.password_hash).await?;
        if !valid {
            metrics::counter!("logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = Self::get(pool, credentials.id).await?;
        let token = jwt_service.issue_token(user.id, &user.email, user.role)?;

        metrics::counter!("logins_total", "outcome" => "accepted").increment(1);
        info!(user_id = user.id, "User logged in");

        Ok(AuthPayload { user, token })
    }

    /// Update a user
    ///
    /// The caller must be the user or an administrator; only
    /// administrators may change the role.
    pub async fn update(
        pool: &PgPool,
        passwords: &PasswordService,
        caller: &AuthUser,
        id: i32,
        input: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        if !UserRepository::exists(pool, id).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        if !can_modify(caller.id, caller.role, Some(id)) {
            return Err(ApiError::Forbidden(
                "You can only update your own profile".to_string(),
            ));
        }
        if input.role.is_some() && !caller.is_admin() {
            return Err(ApiError::Forbidden(
                "Only administrators can change roles".to_string(),
            ));
        }

        let password_hash = match input.password {
            Some(password) => Some(passwords.hash_async(password).await?),
            None => None,
        };

        let changes = UpdateUser {
            name: input.name,
            username: input.username,
            email: input.email,
            password_hash,
            phone: input.phone,
            website: input.website,
            role: input.role,
        };

        if !UserRepository::update(pool, id, changes).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Self::get(pool, id).await
    }

    /// Delete a user and everything they own
    ///
    /// Administrators only, and never their own account.
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        if !UserRepository::exists(pool, id).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        authorize(caller, None, Action::Delete, "user")?;
        if caller.id == id {
            return Err(ApiError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        UserRepository::delete(pool, id).await?;
        info!(user_id = id, deleted_by = caller.id, "User deleted");
        Ok(())
    }
}
