/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// Database connection URL (PostgreSQL or SQLite).
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `API_PORT`.
    pub api_port: u16,
    /// Upper bound on pooled database connections (default 10).
    /// Env var: `DATABASE_MAX_CONNECTIONS`.
    pub database_max_connections: u32,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: parse_or("API_PORT", 3114),
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
