pub mod dashmap_session_store;
pub mod hashmap_account_store;
pub mod sqlite_account_store;

pub use dashmap_session_store::DashMapSessionStore;
pub use hashmap_account_store::HashMapAccountStore;
pub use sqlite_account_store::SqliteAccountStore;
