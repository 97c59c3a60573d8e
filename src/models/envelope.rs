//! Uniform response envelope

use serde::Serialize;
use utoipa::ToSchema;

use super::{BookView, UserView};

/// Wrapper carried by every response, success or failure
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    BookEnvelope = Envelope<BookView>,
    BookListEnvelope = Envelope<Vec<BookView>>,
    UserEnvelope = Envelope<UserView>,
    MessageEnvelope = Envelope<String>
)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(rename = "isOk")]
    pub is_ok: bool,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            is_ok: true,
            message: "ok".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            is_ok: false,
            message: message.into(),
        }
    }
}
