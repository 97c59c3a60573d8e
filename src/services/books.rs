//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPatch, NewBook},
    repository::BookGateway,
};

#[derive(Clone)]
pub struct BooksService {
    books: Arc<dyn BookGateway>,
}

impl BooksService {
    pub fn new(books: Arc<dyn BookGateway>) -> Self {
        Self { books }
    }

    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = self.books.insert(book).await?;
        tracing::info!(book_id = created.id, "book created");
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.books.find_all().await
    }

    /// Apply a partial update, then return the row as persisted
    pub async fn update(&self, id: i64, patch: &BookPatch) -> AppResult<Book> {
        self.books.update_fields(id, patch).await?;
        tracing::info!(book_id = id, "book updated");
        // Re-read so the response reflects stored state, not the submitted patch
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.books.delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBookGateway;
    use mockall::{predicate::eq, Sequence};

    fn book(status: Option<i32>) -> Book {
        Book {
            id: 1,
            isbn: Some("123".to_string()),
            title: Some("T".to_string()),
            author: Some("Au".to_string()),
            published: Some(2020),
            pages: Some(100),
            status,
        }
    }

    #[tokio::test]
    async fn test_update_refetches_after_write() {
        let mut books = MockBookGateway::new();
        let mut seq = Sequence::new();
        let patch = BookPatch {
            status: Some(Some(2)),
            ..Default::default()
        };

        books
            .expect_update_fields()
            .with(eq(1i64), eq(patch.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        books
            .expect_find_by_id()
            .with(eq(1i64))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(book(Some(2)))));

        let service = BooksService::new(Arc::new(books));
        let updated = service.update(1, &patch).await.unwrap();
        assert_eq!(updated, book(Some(2)));
    }

    #[tokio::test]
    async fn test_update_missing_book_skips_refetch() {
        let mut books = MockBookGateway::new();
        books
            .expect_update_fields()
            .returning(|id, _| Err(AppError::NotFound(format!("Book {} not found", id))));
        books.expect_find_by_id().never();

        let service = BooksService::new(Arc::new(books));
        let err = service.update(9, &BookPatch::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_isbn_is_not_found() {
        let mut books = MockBookGateway::new();
        books
            .expect_find_by_isbn()
            .with(eq("000"))
            .returning(|_| Ok(None));

        let service = BooksService::new(Arc::new(books));
        let err = service.get_by_isbn("000").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
