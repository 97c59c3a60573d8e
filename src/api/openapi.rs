//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users, KEY_HEADER, SIGN_HEADER};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "Book and user CRUD REST API. Authenticated endpoints expect the `key` and `sign` headers of a registered user."
    ),
    paths(
        // Health
        health::health_check,
        // Users
        users::signup,
        users::get_myself,
        // Books
        books::list_books,
        books::create_book,
        books::get_book_by_isbn,
        books::get_book_by_id,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookRecord,
            crate::models::book::BookView,
            crate::models::book::NewBook,
            crate::models::book::BookPatch,
            // Users
            crate::models::user::User,
            crate::models::user::UserView,
            crate::models::user::NewUser,
            // Envelopes
            crate::models::BookEnvelope,
            crate::models::BookListEnvelope,
            crate::models::UserEnvelope,
            crate::models::MessageEnvelope,
            // Health
            health::HealthResponse,
        )
    ),
    modifiers(&CredentialHeaders),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User signup and lookup"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Registers the `key` and `sign` header schemes
struct CredentialHeaders;

impl Modify for CredentialHeaders {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                KEY_HEADER,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(KEY_HEADER))),
            );
            components.add_security_scheme(
                SIGN_HEADER,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(SIGN_HEADER))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
