//! User signup and lookup service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{NewUser, User},
    repository::UserGateway,
};

#[derive(Clone)]
pub struct UsersService {
    users: Arc<dyn UserGateway>,
}

impl UsersService {
    pub fn new(users: Arc<dyn UserGateway>) -> Self {
        Self { users }
    }

    pub async fn signup(&self, user: &NewUser) -> AppResult<User> {
        let created = self.users.insert(user).await?;
        tracing::info!(user_id = created.id, "user signed up");
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
