pub mod users_mem;

pub use users_mem::InMemoryUserStore;
