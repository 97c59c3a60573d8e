//! Data models for the bookshelf server

pub mod book;
pub mod envelope;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookPatch, BookRecord, BookView, NewBook};
pub use envelope::{BookEnvelope, BookListEnvelope, Envelope, MessageEnvelope, UserEnvelope};
pub use user::{NewUser, Principal, User, UserView};
