//! In-memory gateways for driving the router without PostgreSQL

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use bookshelf_server::{
    api,
    error::{AppError, AppResult},
    models::{Book, BookPatch, NewBook, NewUser, User},
    repository::{BookGateway, UserGateway},
    services::Services,
    AppState,
};

#[derive(Default)]
pub struct MemoryBooks {
    rows: Mutex<BTreeMap<i64, Book>>,
    last_id: Mutex<i64>,
    writes: AtomicUsize,
    write_error: Mutex<Option<fn() -> AppError>>,
}

impl MemoryBooks {
    /// Number of insert/update/delete calls that reached the store
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every later write fail with the error built by `make`
    pub fn fail_writes_with(&self, make: fn() -> AppError) {
        *self.write_error.lock().unwrap() = Some(make);
    }

    fn begin_write(&self) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match *self.write_error.lock().unwrap() {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookGateway for MemoryBooks {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|b| b.isbn.as_deref() == Some(isbn)).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        self.begin_write()?;
        let id = {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            *last_id
        };
        let row = Book {
            id,
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            published: book.published,
            pages: book.pages,
            status: book.status,
        };
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn update_fields(&self, id: i64, patch: &BookPatch) -> AppResult<()> {
        self.begin_write()?;
        let mut rows = self.rows.lock().unwrap();
        let book = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        patch.apply(book);
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.begin_write()?;
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserGateway for MemoryUsers {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_credentials(&self, key: &str, secret: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.key.as_deref() == Some(key) && u.secret.as_deref() == Some(secret))
            .cloned())
    }

    async fn insert(&self, user: &NewUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let row = User {
            id: rows.len() as i64 + 1,
            name: user.name.clone(),
            key: user.key.clone(),
            secret: user.secret.clone(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

pub struct TestApp {
    pub router: Router,
    pub books: Arc<MemoryBooks>,
}

impl TestApp {
    pub fn new() -> Self {
        let books = Arc::new(MemoryBooks::default());
        let users = Arc::new(MemoryUsers::default());
        let services = Services::with_gateways(books.clone(), users);
        Self {
            router: api::create_router(AppState::new(services)),
            books,
        }
    }

    /// Send a request and decode the JSON envelope
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Register the `k1`/`s1` user used by most tests
    pub async fn signup(&self) -> Value {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/signup",
                None,
                serde_json::json!({"name": "A", "key": "k1", "secret": "s1"}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

pub const CREDENTIALS: Option<(&str, &str)> = Some(("k1", "s1"));

pub fn request(method: &str, uri: &str, credentials: Option<(&str, &str)>) -> Request<Body> {
    builder(method, uri, credentials).body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: Value,
) -> Request<Body> {
    raw_request(method, uri, credentials, body.to_string())
}

pub fn raw_request(
    method: &str,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: String,
) -> Request<Body> {
    builder(method, uri, credentials)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn builder(method: &str, uri: &str, credentials: Option<(&str, &str)>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((key, sign)) = credentials {
        builder = builder.header("key", key).header("sign", sign);
    }
    builder
}
