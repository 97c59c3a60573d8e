//! Credential check service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Principal,
    repository::UserGateway,
};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserGateway>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserGateway>) -> Self {
        Self { users }
    }

    /// Resolve the `key`/`sign` header pair to a stored user.
    ///
    /// Absent or empty values fail with `Unauthenticated` without touching the
    /// store; a pair matching no user fails with `InvalidCredentials`.
    pub async fn authenticate(&self, key: Option<&str>, sign: Option<&str>) -> AppResult<Principal> {
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Unauthenticated("Missing key header".to_string()))?;
        let sign = sign
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Unauthenticated("Missing sign header".to_string()))?;

        match self.users.find_by_credentials(key, sign).await? {
            Some(user) => {
                tracing::debug!(user_id = user.id, key, "request authenticated");
                Ok(Principal::from(user))
            }
            None => {
                tracing::warn!(key, "rejected credentials");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
