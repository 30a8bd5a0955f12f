use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub log_level: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://elevator.db".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "81".to_string())
                .parse()
                .unwrap_or(81),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }
}
