use tracing::debug;

use crate::auth::gate::OwnerScope;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::users::{Book, UserProfile, UserStore};

fn validate_book(book: &Book) -> Result<(), DomainError> {
    if book.book_id.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Book,
            "book_id cannot be empty",
        ));
    }
    if book.title.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Book,
            "title cannot be empty",
        ));
    }
    Ok(())
}

/// Add a book to the caller's saved list.
pub async fn save_book(
    scope: &OwnerScope,
    book: Book,
    store: &dyn UserStore,
) -> Result<UserProfile, AppError> {
    validate_book(&book)?;
    let book_id = book.book_id.clone();
    let record = store.add_saved_book(scope, book).await?;
    debug!(user_id = %scope.subject_id(), %book_id, "Book saved");
    Ok(UserProfile::from(record))
}

/// Remove a book from the caller's saved list.
pub async fn remove_book(
    scope: &OwnerScope,
    book_id: &str,
    store: &dyn UserStore,
) -> Result<UserProfile, AppError> {
    let record = store.remove_saved_book(scope, book_id).await?;
    debug!(user_id = %scope.subject_id(), %book_id, "Book removed");
    Ok(UserProfile::from(record))
}
