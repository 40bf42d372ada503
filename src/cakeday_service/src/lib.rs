pub mod cakeday_service;
pub mod helpers;
mod tracing;

pub use cakeday_service::CakedayService;
pub use helpers::{configure_sqlite, get_sqlite_pool, spawn_session_purge};
