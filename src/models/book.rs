//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Stored book row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Publication year
    pub published: Option<i32>,
    /// Page count
    pub pages: Option<i32>,
    /// Reading state code, defined by the client application
    pub status: Option<i32>,
}

/// Book fields as returned to clients, status excluded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookRecord {
    pub id: i64,
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub published: Option<i32>,
    pub pages: Option<i32>,
}

/// Response shape pairing the book fields with its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookView {
    pub book: BookRecord,
    pub status: Option<i32>,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        Self {
            status: book.status,
            book: BookRecord {
                id: book.id,
                isbn: book.isbn,
                title: book.title,
                author: book.author,
                published: book.published,
                pages: book.pages,
            },
        }
    }
}

/// Create book request. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewBook {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub published: Option<i32>,
    pub pages: Option<i32>,
    pub status: Option<i32>,
}

/// Partial book update.
///
/// Each field is tri-state: `None` when the key is absent from the body (the
/// column is left untouched), `Some(None)` for an explicit `null` (the column
/// is cleared) and `Some(Some(v))` to set a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub isbn: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub published: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub pages: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub status: Option<Option<i32>>,
}

impl BookPatch {
    /// True when the body named no known field
    pub fn is_empty(&self) -> bool {
        self.isbn.is_none()
            && self.title.is_none()
            && self.author.is_none()
            && self.published.is_none()
            && self.pages.is_none()
            && self.status.is_none()
    }

    /// Apply the present fields onto a stored book
    pub fn apply(&self, book: &mut Book) {
        if let Some(isbn) = &self.isbn {
            book.isbn = isbn.clone();
        }
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(published) = self.published {
            book.published = published;
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
        if let Some(status) = self.status {
            book.status = status;
        }
    }
}
