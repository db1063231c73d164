mod auth;
mod conversation;
mod db;
mod error;
mod item;
mod message;
mod middleware;
mod rating;
mod routes;
mod search;
mod state;
mod user;

use std::sync::Arc;

use db::{create_pool, run_migrations};
use routes::create_router;
use state::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,neighborly=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    // Create repositories
    let user_repository = user::user_repository::UserRepository::new(db.clone());
    let item_repository = item::item_repository::ItemRepository::new(db.clone());
    let conversation_repository =
        conversation::conversation_repository::ConversationRepository::new(db.clone());
    let message_repository = message::message_repository::MessageRepository::new(db.clone());
    let rating_repository = rating::rating_repository::RatingRepository::new(db.clone());

    // Create services
    let auth_service = auth::auth_service::AuthService::new(
        user_repository,
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
    );
    let item_service = item::item_service::ItemService::new(item_repository.clone());
    let search_service = search::search_service::SearchService::new(item_repository.clone());
    let conversation_service = conversation::conversation_service::ConversationService::new(
        db.clone(),
        conversation_repository.clone(),
        item_repository,
    );
    let message_service = message::message_service::MessageService::new(
        db.clone(),
        message_repository,
        conversation_repository,
    );
    let rating_service = rating::rating_service::RatingService::new(rating_repository);

    // Create application state
    let state = AppState {
        db: db.clone(),
        config,
        auth_service,
        item_service,
        search_service,
        conversation_service,
        message_service,
        rating_service,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the pool so in-flight transactions finish cleanly
    tracing::info!("Shutting down, closing database pool");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
