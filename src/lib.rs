//! # catalogd: Product Catalog Service
//!
//! `catalogd` is a small control plane for a product catalog. It exposes a
//! RESTful CRUD API over a single MongoDB collection: list, fetch, create,
//! replace, and delete products. There is intentionally no business logic
//! beyond pass-through persistence - no caching, no pagination, and no
//! transactional semantics beyond what the driver provides.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses MongoDB for persistence. The collection handle is
//! opened once at startup from configuration and shared into every request
//! handler through [`AppState`].
//!
//! ### Request Flow
//!
//! A request to `/products/*` is routed to a handler in
//! [`api::handlers::products`], which binds path and body parameters,
//! dispatches a single call to the [`db::handlers::Products`] repository, and
//! maps the outcome to an HTTP response (200/201/204 on success, 404 when the
//! identifier names nothing). Driver failures propagate unrecovered and
//! surface as 500 through [`errors::Error`]'s `IntoResponse` - there is no
//! retry or circuit breaking.
//!
//! Each request runs on its own tokio task; every persistence call is an
//! await point. Update and delete perform a read-before-write existence check
//! to produce their 404s, which is not atomic with the subsequent write - a
//! concurrent delete can turn a "successful" replace into a silent store-side
//! no-op.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use catalogd::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Parse CLI arguments and load configuration
//!     let args = catalogd::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     // Initialize telemetry (structured logging)
//!     catalogd::telemetry::init_telemetry()?;
//!
//!     // Create and start the application
//!     let app = Application::new(config).await?;
//!
//!     // Run with graceful shutdown on Ctrl+C
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use crate::db::handlers::Products;
use anyhow::Context;
use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use bon::Builder;
pub use config::Config;
use mongodb::Client;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Contains the shared resources needed by the API handlers: the product
/// repository (wrapping the collection handle opened at startup) and the
/// loaded configuration. Both are immutable for the process lifetime.
#[derive(Clone, Builder)]
pub struct AppState {
    pub products: Products,
    pub config: Config,
}

/// Build the application router from shared state.
///
/// Routes are registered explicitly; there is no reflection-based wiring.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        // Product catalog CRUD
        .route("/products", get(api::handlers::products::list_products))
        .route("/products", post(api::handlers::products::create_product))
        .route("/products/{id}", get(api::handlers::products::get_product))
        .route("/products/{id}", put(api::handlers::products::update_product))
        .route("/products/{id}", delete(api::handlers::products::delete_product))
        .with_state(state);

    // API docs: interactive UI plus the raw document
    let router = router
        .route("/api-docs/openapi.json", get(|| async { Json(openapi::ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()));

    // Add tracing layer
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The assembled application, ready to serve.
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized.
    ///
    /// Builds the MongoDB client from configuration (a malformed connection
    /// string fails here, before the listener ever binds) and opens the
    /// catalog collection handle that lives for the rest of the process.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting catalog service with configuration: {:#?}", config);

        let client = Client::with_uri_str(&config.database.url)
            .await
            .context("failed to initialize the MongoDB client")?;
        let database = client.database(&config.database.name);
        let products = Products::new(&database, &config.database.collection);

        let state = AppState::builder().products(products).config(config.clone()).build();

        let router = build_router(state);

        Ok(Self { router, config })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Catalog service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
