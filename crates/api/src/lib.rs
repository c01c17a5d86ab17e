//! # Timetable API
//!
//! The API crate serves class timetables over HTTP. Each section posts its
//! form submission, gets a freshly generated week back, and can download the
//! rendered table as a printable document.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Parse submissions, drive generation and export
//! - **Middleware**: Error to response mapping
//! - **Render / Export**: HTML table and page document output
//! - **Config**: Environment configuration
//!
//! All sections share one pair registry, so pairs entered for one section
//! are scheduled for every section generated afterwards.

/// Configuration module for API settings
pub mod config;
/// Printable document export
pub mod export;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// HTML rendering of timetable grids
pub mod render;
/// Route definitions and API endpoint structure
pub mod routes;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use timetable_core::generator::GeneratorSettings;
use timetable_core::models::section::SectionTimetable;
use timetable_core::registry::PairRegistry;
use timetable_core::time_label::SlotClock;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, RwLock};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// A section's latest timetable together with its rendered table.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub timetable: SectionTimetable,
    pub table_html: String,
}

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Pairs submitted by any section, in first-seen order
    pub registry: Mutex<PairRegistry>,
    /// Latest rendered timetable per section identifier
    pub sections: RwLock<HashMap<String, RenderedSection>>,
    /// Random source used for every generation
    pub rng: Mutex<StdRng>,
    pub generator: GeneratorSettings,
    pub clock: SlotClock,
}

impl ApiState {
    /// Creates empty state. Without a seed the random source is seeded from
    /// OS entropy.
    pub fn new(generator: GeneratorSettings, clock: SlotClock, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            registry: Mutex::new(PairRegistry::new()),
            sections: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
            generator,
            clock,
        }
    }

    pub fn from_config(config: &config::ApiConfig) -> Self {
        Self::new(config.generator.clone(), config.clock, config.seed)
    }
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Section timetable endpoints
        .merge(routes::timetable::routes())
        // Shared pair registry endpoints
        .merge(routes::pairs::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration
///
/// Installs the tracing subscriber, builds shared state and serves until
/// the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_config(&config));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
