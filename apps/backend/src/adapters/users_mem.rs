//! In-memory `UserStore`.
//!
//! One `RwLock` guards both the id map and the email index so uniqueness
//! checks and inserts happen atomically.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::auth::gate::OwnerScope;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::repos::users::{normalize_email, Book, NewUser, UserRecord, UserStore};

#[derive(Default)]
struct Tables {
    by_id: HashMap<String, UserRecord>,
    /// normalized email -> id
    email_index: HashMap<String, String>,
}

#[derive(Default)]
pub struct InMemoryUserStore {
    tables: RwLock<Tables>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update_owned<F>(&self, scope: &OwnerScope, f: F) -> Result<UserRecord, DomainError>
    where
        F: FnOnce(&mut Vec<Book>),
    {
        let mut tables = self.tables.write();
        let record = tables
            .by_id
            .get_mut(scope.subject_id())
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))?;
        f(&mut record.saved_books);
        Ok(record.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.tables.read().by_id.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let email = normalize_email(email);
        let tables = self.tables.read();
        Ok(tables
            .email_index
            .get(&email)
            .and_then(|id| tables.by_id.get(id))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, DomainError> {
        let email = normalize_email(&new_user.email);
        let mut tables = self.tables.write();

        if tables.email_index.contains_key(&email) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "An account with this email already exists",
            ));
        }
        if tables.by_id.contains_key(&new_user.id) {
            return Err(DomainError::conflict(
                ConflictKind::Other("duplicate_id".into()),
                "User id already exists",
            ));
        }

        let record = UserRecord {
            id: new_user.id,
            username: new_user.username,
            email: email.clone(),
            password_hash: new_user.password_hash,
            saved_books: Vec::new(),
        };

        tables.email_index.insert(email, record.id.clone());
        tables.by_id.insert(record.id.clone(), record.clone());

        debug!(user_id = %record.id, email = %Redacted(&record.email), "User record created");
        Ok(record)
    }

    async fn add_saved_book(
        &self,
        scope: &OwnerScope,
        book: Book,
    ) -> Result<UserRecord, DomainError> {
        self.update_owned(scope, |books| {
            if !books.iter().any(|b| b.book_id == book.book_id) {
                books.push(book);
            }
        })
    }

    async fn remove_saved_book(
        &self,
        scope: &OwnerScope,
        book_id: &str,
    ) -> Result<UserRecord, DomainError> {
        self.update_owned(scope, |books| books.retain(|b| b.book_id != book_id))
    }
}
