use std::env;

/// Runtime settings, read once at startup.
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Connection URL for the SQLite database.
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a number");
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Config {
            host,
            port,
            database_url,
        }
    }
}
