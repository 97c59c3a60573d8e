//! Book catalog endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::{BookPatch, BookView, Envelope, NewBook},
    AppState,
};

use super::{parse_id, ApiJson, ApiPath, Authenticated};

/// List every book with its status
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("key" = [], "sign" = [])),
    responses(
        (status = 200, description = "All books, possibly empty", body = crate::models::BookListEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
) -> AppResult<Json<Envelope<Vec<BookView>>>> {
    let books = state.services.books.list().await?;
    Ok(Json(Envelope::ok(books.into_iter().map(BookView::from).collect())))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("key" = [], "sign" = [])),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book created", body = crate::models::BookEnvelope),
        (status = 400, description = "Store rejected the book", body = crate::models::MessageEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 422, description = "Malformed body", body = crate::models::MessageEnvelope)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    ApiJson(book): ApiJson<NewBook>,
) -> AppResult<Json<Envelope<BookView>>> {
    tracing::debug!(caller = principal.id, "creating book");
    let created = state.services.books.create(&book).await?;
    Ok(Json(Envelope::ok(created.into())))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{param}",
    tag = "books",
    security(("key" = [], "sign" = [])),
    params(
        ("param" = String, Path, description = "ISBN for GET, book ID for PATCH and DELETE")
    ),
    responses(
        (status = 200, description = "Book details", body = crate::models::BookEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 404, description = "Book not found", body = crate::models::MessageEnvelope)
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    ApiPath(isbn): ApiPath<String>,
) -> AppResult<Json<Envelope<BookView>>> {
    if isbn.trim().is_empty() {
        return Err(AppError::MissingIdentifier("isbn cannot be empty".to_string()));
    }
    tracing::debug!(isbn = %isbn, "book lookup by isbn");

    let book = state.services.books.get_by_isbn(&isbn).await?;
    Ok(Json(Envelope::ok(book.into())))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/book_by_id/{id}",
    tag = "books",
    security(("key" = [], "sign" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = crate::models::BookEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 404, description = "Book not found", body = crate::models::MessageEnvelope)
    )
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Envelope<BookView>>> {
    let id = parse_id(&id)?;
    tracing::debug!(book_id = id, "book lookup by id");

    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(Envelope::ok(book.into())))
}

/// Partially update a book; absent fields keep their stored values
#[utoipa::path(
    patch,
    path = "/books/{param}",
    tag = "books",
    security(("key" = [], "sign" = [])),
    params(
        ("param" = String, Path, description = "ISBN for GET, book ID for PATCH and DELETE")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book as stored after the update", body = crate::models::BookEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 404, description = "Book not found", body = crate::models::MessageEnvelope),
        (status = 422, description = "Malformed body", body = crate::models::MessageEnvelope)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<BookPatch>,
) -> AppResult<Json<Envelope<BookView>>> {
    let id = parse_id(&id)?;
    tracing::debug!(caller = principal.id, book_id = id, "updating book");

    let book = state.services.books.update(id, &patch).await?;
    Ok(Json(Envelope::ok(book.into())))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{param}",
    tag = "books",
    security(("key" = [], "sign" = [])),
    params(
        ("param" = String, Path, description = "ISBN for GET, book ID for PATCH and DELETE")
    ),
    responses(
        (status = 200, description = "Book deleted", body = crate::models::MessageEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 404, description = "Book not found", body = crate::models::MessageEnvelope)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Envelope<String>>> {
    let id = parse_id(&id)?;
    tracing::debug!(caller = principal.id, book_id = id, "deleting book");

    state.services.books.delete(id).await?;
    Ok(Json(Envelope::ok("Successfully deleted".to_string())))
}
