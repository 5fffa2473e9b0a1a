//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Request handlers use the
//! `*_async` variants, which move the work onto the blocking thread pool.

use anyhow::{bail, Result};
use placeholder_api_shared::validation::PASSWORD_MAX_BYTES;

/// Stand-in hashed when a login names an unknown account
const UNKNOWN_ACCOUNT_PLACEHOLDER: &str = "unknown-account-placeholder";

/// Password hashing service
///
/// The cost factor is fixed for the lifetime of the process. Verification
/// reads the cost embedded in the stored hash, so raising the cost later
/// does not invalidate existing passwords.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordService {
    /// Create a service hashing with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password using bcrypt (blocking operation)
    ///
    /// A fresh random salt is generated on every call. Input past
    /// `PASSWORD_MAX_BYTES` is refused rather than silently truncated.
    pub fn hash(&self, password: &str) -> Result<String> {
        if password.len() > PASSWORD_MAX_BYTES {
            bail!("Password exceeds {} bytes", PASSWORD_MAX_BYTES);
        }
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    ///
    /// Returns `Ok(false)` on mismatch and an error only when the stored
    /// hash cannot be parsed. A password too long to have been hashed
    /// never matches.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if password.len() > PASSWORD_MAX_BYTES {
            return Ok(false);
        }
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Spend one bcrypt round at the configured cost and report a mismatch
    ///
    /// Used when no account matches a login, so unknown emails take as
    /// long to reject as wrong passwords.
    pub async fn verify_unknown_async(&self) -> Result<bool> {
        self.hash_async(UNKNOWN_ACCOUNT_PLACEHOLDER.to_string())
            .await
            .map(|_| false)
    }
}
