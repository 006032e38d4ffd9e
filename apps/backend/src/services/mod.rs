pub mod books;
pub mod passwords;
pub mod users;
