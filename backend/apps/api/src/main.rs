//! API Server Entry Point
//!
//! Application entry point and server initialization. Configuration is
//! read from the environment here, once, and handed to the routers as
//! explicit objects. Uses `anyhow` for startup errors; request-level
//! errors go through `kernel::error`.

use accounts::{AccountsConfig, PgAccountRepository, accounts_router};
use axum::{Json, Router, http, routing::get};
use kernel::envelope::Envelope;
use platform::token::{TOKEN_TTL, TokenService};
use projects::{PgProjectRepository, projects_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,accounts=info,projects=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token service. Debug builds fall back to a random per-process
    // secret; production must configure one so tokens survive restarts.
    let tokens = if cfg!(debug_assertions) {
        match env::var("AUTH_TOKEN_SECRET") {
            Ok(secret) => TokenService::new(secret.as_bytes(), TOKEN_TTL),
            Err(_) => TokenService::with_random_secret(TOKEN_TTL),
        }
    } else {
        let secret =
            env::var("AUTH_TOKEN_SECRET").expect("AUTH_TOKEN_SECRET must be set in production");
        TokenService::new(secret.as_bytes(), TOKEN_TTL)
    };
    let tokens = Arc::new(tokens);

    let accounts_config = AccountsConfig {
        password_pepper: env::var("PASSWORD_PEPPER").ok().map(String::into_bytes),
    };

    // CORS: public API, token auth, no cookies.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            http::header::CONTENT_TYPE,
            http::header::AUTHORIZATION,
            http::header::ACCEPT,
        ]));

    // Build router
    let api_v1 = Router::new()
        .merge(accounts_router(
            PgAccountRepository::new(pool.clone()),
            tokens.clone(),
            accounts_config,
        ))
        .merge(projects_router(
            PgProjectRepository::new(pool.clone()),
            tokens.clone(),
        ));

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/api", get(api_index_handler))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root_handler() -> Json<Envelope> {
    Json(Envelope::message("Welcome to the agency back office API"))
}

async fn api_index_handler() -> Json<Envelope> {
    Json(Envelope::message(
        "Welcome; the API surface is mounted under /api/v1",
    ))
}
