//! User store contract and the records it deals in.
//!
//! The store is an opaque collaborator keyed by id and email. Implementations
//! live in `crate::adapters`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::auth::gate::OwnerScope;
use crate::errors::domain::DomainError;

/// A book saved to a user's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// User record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    /// Normalized (see [`normalize_email`])
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub saved_books: Vec<Book>,
}

/// Input for [`UserStore::create`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Public projection of a user record; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub book_count: usize,
    pub saved_books: Vec<Book>,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            book_count: record.saved_books.len(),
            saved_books: record.saved_books,
        }
    }
}

/// Trim, NFKC-normalize and lowercase an email address.
///
/// Every lookup and insert goes through this so `Alice@X.com ` and
/// `alice@x.com` name the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Lookup by email; the argument is normalized by the store.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Insert a new record. Fails with `ConflictKind::UniqueEmail` when the
    /// normalized email is already registered.
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, DomainError>;

    /// Add a book to the scoped owner's list. Set semantics on `book_id`.
    async fn add_saved_book(
        &self,
        scope: &OwnerScope,
        book: Book,
    ) -> Result<UserRecord, DomainError>;

    /// Remove a book from the scoped owner's list. Missing ids are a no-op.
    async fn remove_saved_book(
        &self,
        scope: &OwnerScope,
        book_id: &str,
    ) -> Result<UserRecord, DomainError>;
}
