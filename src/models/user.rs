//! User model and credential types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Stored user row. `key` and `secret` form the credential pair and are kept
/// in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
}

/// Signup request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
}

/// Response shape for user endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    pub user: User,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self { user }
    }
}

/// Caller identity established by the credential check for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub name: Option<String>,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
