pub mod users;

pub use users::{Book, NewUser, UserProfile, UserRecord, UserStore};
