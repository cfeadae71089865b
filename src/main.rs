//! NavHub Backend
//!
//! REST backend for a personal navigation site: categorized link cards,
//! site configuration, and a token-protected admin API over SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod seed;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use errors::AppError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NavHub Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn when running on the built-in signing secret
    if config.uses_default_secret() {
        tracing::warn!(
            "NAVHUB_SECRET_KEY is not set. Tokens are signed with the insecure default key!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Make sure the initial admin account exists
    ensure_initial_admin(&repo, &config).await?;

    // Import the seed fixture when one is configured
    if let Some(seed_path) = &config.seed_path {
        seed::run(&repo, seed_path).await?;
    }

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the initial superuser account when its username is absent.
async fn ensure_initial_admin(repo: &Repository, config: &Config) -> Result<(), AppError> {
    if repo
        .get_user_by_username(&config.initial_admin_username)
        .await?
        .is_none()
    {
        let hashed = auth::password::hash_password(&config.initial_admin_password)?;
        repo.create_user(&config.initial_admin_username, &hashed, true, true)
            .await?;
        tracing::info!(
            username = %config.initial_admin_username,
            "created initial admin user"
        );
    }
    Ok(())
}

/// Create the application router with all routes.
///
/// Write access is enforced per handler through the guard extractors, not
/// by a router-level layer, so the public read endpoints share the router
/// with the admin API.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Public surface
        .route("/navigation", get(api::get_navigation))
        .route("/status", get(api::get_status))
        .route("/auth/token", post(api::login))
        // Categories
        .route("/categories", get(api::list_categories))
        .route("/categories", post(api::create_category))
        .route("/categories/{id}", put(api::update_category))
        .route("/categories/{id}", delete(api::delete_category))
        // Cards
        .route("/cards", get(api::list_cards))
        .route("/cards", post(api::create_card))
        .route("/cards/{id}", put(api::update_card))
        .route("/cards/{id}", delete(api::delete_card))
        // Users (superuser only)
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{id}", put(api::update_user))
        .route("/users/{id}", delete(api::delete_user))
        // Site configuration (superuser only)
        .route("/configs/search", get(api::get_search_config))
        .route("/configs/search", put(api::update_search_config))
        .route("/configs/branding", get(api::get_branding_config))
        .route("/configs/branding", put(api::update_branding_config));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
