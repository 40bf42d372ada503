pub mod env {
    pub const PREFIX: &str = "CAKEDAY";
    pub const SEPARATOR: &str = "__";
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 10000;
    pub const ASSETS_DIR: &str = "public";
    pub const DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
    pub const MAX_CONNECTIONS: u32 = 5;
    pub const SESSION_COOKIE_NAME: &str = "sid";
    pub const SESSION_TIME_TO_LIVE_SECS: u64 = 7 * 24 * 60 * 60;
    pub const SESSION_PURGE_INTERVAL_SECS: u64 = 5 * 60;
    pub const MINIMUM_AGE: u32 = 14;
    pub const ADMIN_USERNAME: &str = "admin";
    pub const HASH_MEMORY_KIB: u32 = 15000;
    pub const HASH_ITERATIONS: u32 = 2;
    pub const HASH_PARALLELISM: u32 = 1;
}

/// Lowest password hashing cost accepted from configuration.
pub mod minimums {
    pub const HASH_MEMORY_KIB: u32 = super::defaults::HASH_MEMORY_KIB;
    pub const HASH_ITERATIONS: u32 = super::defaults::HASH_ITERATIONS;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const DATABASE_URL: &str = "sqlite::memory:";
}
