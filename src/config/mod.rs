//! Configuration module for the NavHub backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default branding title, also used when no `branding_title` config row exists.
pub const DEFAULT_APP_NAME: &str = "个人导航网站";

/// Default search engine base URL.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Placeholder secret shipped for local development only.
const INSECURE_DEFAULT_SECRET: &str = "insecure_default_key";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// HMAC secret used to sign bearer tokens
    pub secret_key: String,
    /// Bearer token lifetime in minutes
    pub token_ttl_mins: i64,
    /// Application name, used as the default branding title
    pub app_name: String,
    /// Default search engine URL when no `search_engine_url` row exists
    pub search_url: String,
    /// Username of the protected initial admin account
    pub initial_admin_username: String,
    /// Password the initial admin account is created with
    pub initial_admin_password: String,
    /// Optional JSON fixture imported at startup when the store is empty
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("NAVHUB_DB_PATH")
            .unwrap_or_else(|_| "./data/navhub.sqlite".to_string())
            .into();

        let bind_addr = env::var("NAVHUB_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid NAVHUB_BIND_ADDR format");

        let log_level = env::var("NAVHUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let secret_key =
            env::var("NAVHUB_SECRET_KEY").unwrap_or_else(|_| INSECURE_DEFAULT_SECRET.to_string());

        let token_ttl_mins = env::var("NAVHUB_TOKEN_TTL_MINS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .expect("Invalid NAVHUB_TOKEN_TTL_MINS format");

        let app_name = env::var("NAVHUB_APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());

        let search_url =
            env::var("NAVHUB_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        let initial_admin_username =
            env::var("NAVHUB_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

        let initial_admin_password =
            env::var("NAVHUB_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        let seed_path = env::var("NAVHUB_SEED_PATH").ok().map(PathBuf::from);

        Self {
            db_path,
            bind_addr,
            log_level,
            secret_key,
            token_ttl_mins,
            app_name,
            search_url,
            initial_admin_username,
            initial_admin_password,
            seed_path,
        }
    }

    /// Whether the signing secret is still the insecure built-in default.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == INSECURE_DEFAULT_SECRET
    }
}
