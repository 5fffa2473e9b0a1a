//! User repository for database operations

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use placeholder_api_shared::{Address, Company, Geo, Role, User, UserSummary};
use sqlx::PgPool;

/// Users joined with their optional address and company rows
const USER_SELECT: &str = r#"
    SELECT u.id, u.name, u.username, u.email, u.phone, u.website, u.role,
           u.created_at, u.updated_at,
           a.street AS address_street, a.suite AS address_suite,
           a.city AS address_city, a.zipcode AS address_zipcode,
           a.geo_lat, a.geo_lng,
           c.name AS company_name, c.catch_phrase AS company_catch_phrase,
           c.bs AS company_bs
    FROM users u
    LEFT JOIN addresses a ON a.user_id = u.id
    LEFT JOIN companies c ON c.user_id = u.id
"#;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address_street: Option<String>,
    pub address_suite: Option<String>,
    pub address_city: Option<String>,
    pub address_zipcode: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lng: Option<String>,
    pub company_name: Option<String>,
    pub company_catch_phrase: Option<String>,
    pub company_bs: Option<String>,
}

impl UserRecord {
    /// Convert into the public representation; fails on an unknown role
    pub fn into_user(self) -> Result<User> {
        let role: Role = self.role.parse().map_err(|e: String| anyhow!(e))?;

        let address = match (
            self.address_street,
            self.address_suite,
            self.address_city,
            self.address_zipcode,
        ) {
            (Some(street), Some(suite), Some(city), Some(zipcode)) => Some(Address {
                street,
                suite,
                city,
                zipcode,
                geo: match (self.geo_lat, self.geo_lng) {
                    (Some(lat), Some(lng)) => Some(Geo { lat, lng }),
                    _ => None,
                },
            }),
            _ => None,
        };

        let company = match (self.company_name, self.company_catch_phrase, self.company_bs) {
            (Some(name), Some(catch_phrase), Some(bs)) => Some(Company {
                name,
                catch_phrase,
                bs,
            }),
            _ => None,
        };

        Ok(User {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            role,
            address,
            company,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Minimal identity used by request authentication
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IdentityRecord {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub name: String,
    pub username: String,
}

/// Stored credentials for login
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    pub id: i32,
    pub password_hash: String,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub role: Role,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

/// Input for updating a user; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub role: Option<Role>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// List all users ordered by id
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>> {
        let sql = format!("{USER_SELECT} ORDER BY u.id");
        let users = sqlx::query_as::<_, UserRecord>(&sql)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<UserRecord>> {
        let sql = format!("{USER_SELECT} WHERE u.id = $1");
        let user = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find the identity fields used to authenticate a request
    pub async fn find_identity(pool: &PgPool, id: i32) -> Result<Option<IdentityRecord>> {
        let identity = sqlx::query_as::<_, IdentityRecord>(
            r#"
            SELECT id, email, role, name, username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(identity)
    }

    /// Find stored credentials by email
    pub async fn find_credentials(pool: &PgPool, email: &str) -> Result<Option<CredentialRecord>> {
        let credentials = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT id, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(credentials)
    }

    /// Check whether a user exists
    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(exists)
    }

    /// Check whether the email or username is already registered
    pub async fn email_or_username_taken(
        pool: &PgPool,
        email: &str,
        username: &str,
    ) -> Result<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users WHERE email = $1 OR username = $2
            )
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(taken)
    }

    /// Create a user together with its address and company
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<i32> {
        let mut tx = pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (name, username, email, password_hash, phone, website, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(input.role.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if let Some(address) = &input.address {
            let (lat, lng) = match &address.geo {
                Some(geo) => (Some(geo.lat.as_str()), Some(geo.lng.as_str())),
                None => (None, None),
            };

            sqlx::query(
                r#"
                INSERT INTO addresses (user_id, street, suite, city, zipcode, geo_lat, geo_lng)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(id)
            .bind(&address.street)
            .bind(&address.suite)
            .bind(&address.city)
            .bind(&address.zipcode)
            .bind(lat)
            .bind(lng)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(company) = &input.company {
            sqlx::query(
                r#"
                INSERT INTO companies (user_id, name, catch_phrase, bs)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(&company.name)
            .bind(&company.catch_phrase)
            .bind(&company.bs)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(id)
    }

    /// Update user fields; returns false when the user no longer exists
    pub async fn update(pool: &PgPool, id: i32, input: UpdateUser) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                username = COALESCE($3, username),
                email = COALESCE($4, email),
                password_hash = COALESCE($5, password_hash),
                phone = COALESCE($6, phone),
                website = COALESCE($7, website),
                role = COALESCE($8, role),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(input.role.map(|r| r.as_str()))
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a user; owned resources cascade
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Author fields joined onto owned resources
pub(crate) fn summary(id: i32, name: String, username: String, email: Option<String>) -> UserSummary {
    UserSummary {
        id,
        name,
        username,
        email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: None,
            website: None,
            role: "ADMIN".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            address_street: None,
            address_suite: None,
            address_city: None,
            address_zipcode: None,
            geo_lat: None,
            geo_lng: None,
            company_name: None,
            company_catch_phrase: None,
            company_bs: None,
        }
    }

    #[test]
    fn test_into_user_without_relations() {
        let user = record().into_user().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.address.is_none());
        assert!(user.company.is_none());
    }

    #[test]
    fn test_into_user_with_relations() {
        let mut rec = record();
        rec.address_street = Some("Kulas Light".to_string());
        rec.address_suite = Some("Apt. 556".to_string());
        rec.address_city = Some("Gwenborough".to_string());
        rec.address_zipcode = Some("92998-3874".to_string());
        rec.geo_lat = Some("-37.3159".to_string());
        rec.geo_lng = Some("81.1496".to_string());
        rec.company_name = Some("Romaguera-Crona".to_string());
        rec.company_catch_phrase = Some("Multi-layered client-server neural-net".to_string());
        rec.company_bs = Some("harness real-time e-markets".to_string());

        let user = rec.into_user().unwrap();
        let address = user.address.unwrap();
        assert_eq!(address.city, "Gwenborough");
        assert_eq!(address.geo.unwrap().lat, "-37.3159");
        assert_eq!(user.company.unwrap().name, "Romaguera-Crona");
    }

    #[test]
    fn test_into_user_rejects_unknown_role() {
        let mut rec = record();
        rec.role = "ROOT".to_string();
        assert!(rec.into_user().is_err());
    }
}
