/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Address the HTTP listener binds to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,

    /// Upper bound on pooled SQLite connections.
    /// Default: 5
    pub db_max_connections: u32,

    /// Lifetime of newly minted sessions, in days.
    /// Default: 30
    pub session_ttl_days: i64,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing or malformed.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env")?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or("DB_MAX_CONNECTIONS must be a positive integer")?;

        let session_ttl_days = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or("SESSION_TTL_DAYS must be a positive integer")?;

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            session_ttl_days,
        })
    }

    /// Config for tests. Uses an in-memory database URL.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            db_max_connections: 1,
            session_ttl_days: 30,
        }
    }
}
