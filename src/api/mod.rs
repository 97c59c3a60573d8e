//! API handlers for bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{request::Parts, HeaderMap},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    models::Principal,
    AppState,
};

/// Header carrying the credential key
pub const KEY_HEADER: &str = "key";
/// Header carrying the credential secret
pub const SIGN_HEADER: &str = "sign";

/// Extractor for the caller authenticated by the `key`/`sign` headers.
///
/// Declare it before any `ApiPath`/`ApiJson` argument so the credential check
/// runs ahead of decoding.
pub struct Authenticated(pub Principal);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = header_str(&parts.headers, KEY_HEADER);
        let sign = header_str(&parts.headers, SIGN_HEADER);

        let principal = state.services.auth.authenticate(key, sign).await?;
        Ok(Authenticated(principal))
    }
}

/// Non-UTF-8 header values count as absent
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// JSON body extractor answering decode failures with the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor answering decode failures with the error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Validate a raw path segment as a record identifier
pub fn parse_id(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::MissingIdentifier("id cannot be empty".to_string()));
    }
    raw.parse()
        .map_err(|_| AppError::MalformedInput(format!("invalid identifier: {}", raw)))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/signup", post(users::signup))
        .route("/myself/:id", get(users::get_myself))
        // Books; the ISBN lookup shares its segment with the id-based mutations
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:param",
            get(books::get_book_by_isbn)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        .route("/book_by_id/:id", get(books::get_book_by_id))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
