//! Business logic services

pub mod auth;
pub mod books;
pub mod users;

use std::sync::Arc;

use crate::repository::{BookGateway, Repository, UserGateway};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services backed by the PostgreSQL repository
    pub fn new(repository: Repository) -> Self {
        Self::with_gateways(Arc::new(repository.books), Arc::new(repository.users))
    }

    /// Create all services over arbitrary gateway implementations
    pub fn with_gateways(books: Arc<dyn BookGateway>, users: Arc<dyn UserGateway>) -> Self {
        Self {
            auth: auth::AuthService::new(users.clone()),
            books: books::BooksService::new(books),
            users: users::UsersService::new(users),
        }
    }
}
