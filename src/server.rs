//! HTTP server initialization and runtime setup.
//!
//! Handles the MongoDB connection, state construction, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::application::services::BookingService;
use crate::config::{Config, DEFAULT_DATABASE};
use crate::infrastructure::persistence::MongoBookingRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (database taken from the URI path, falling back to
///   the default)
/// - Booking repository and service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    // The driver connects lazily; ping so a bad URI fails at startup.
    database.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB (database: {})", database.name());

    let repository = Arc::new(MongoBookingRepository::new(&database));
    let bookings = Arc::new(BookingService::new(repository));
    let state = AppState::new(bookings, &config.api_key);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
