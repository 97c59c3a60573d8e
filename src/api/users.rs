//! User signup and lookup endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Envelope, NewUser, UserView},
    AppState,
};

use super::{parse_id, ApiJson, ApiPath, Authenticated};

/// Register a user and its credential pair
#[utoipa::path(
    post,
    path = "/signup",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = crate::models::UserEnvelope),
        (status = 400, description = "Store rejected the user", body = crate::models::MessageEnvelope),
        (status = 422, description = "Malformed body", body = crate::models::MessageEnvelope)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(user): ApiJson<NewUser>,
) -> AppResult<Json<Envelope<UserView>>> {
    let created = state.services.users.signup(&user).await?;
    Ok(Json(Envelope::ok(created.into())))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/myself/{id}",
    tag = "users",
    security(("key" = [], "sign" = [])),
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = crate::models::UserEnvelope),
        (status = 401, description = "Missing or invalid credentials", body = crate::models::MessageEnvelope),
        (status = 404, description = "User not found", body = crate::models::MessageEnvelope)
    )
)]
pub async fn get_myself(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Envelope<UserView>>> {
    let id = parse_id(&id)?;
    tracing::debug!(caller = principal.id, user_id = id, "user lookup");

    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(Envelope::ok(user.into())))
}
