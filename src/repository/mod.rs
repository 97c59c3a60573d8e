//! Persistence gateway: entity-scoped storage operations
//!
//! Handlers and services only ever see the [`BookGateway`] and
//! [`UserGateway`] traits; [`Repository`] bundles the PostgreSQL
//! implementations sharing one connection pool.

pub mod books;
pub mod users;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, BookPatch, NewBook, NewUser, User},
};

/// Storage operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookGateway: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// First match by ISBN, lowest identifier wins on duplicates
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Insert and return the row with its assigned identifier
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Write only the fields present in `patch`. Fails with `NotFound` when
    /// no book has this identifier.
    async fn update_fields(&self, id: i64, patch: &BookPatch) -> AppResult<()>;

    /// Fails with `NotFound` when no book has this identifier
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Storage operations on users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Match on both credential columns at once
    async fn find_by_credentials(&self, key: &str, secret: &str) -> AppResult<Option<User>>;

    async fn insert(&self, user: &NewUser) -> AppResult<User>;
}

/// PostgreSQL gateways sharing one connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool),
        }
    }
}
