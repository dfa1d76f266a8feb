use std::sync::Arc;

use tower_http::cors::CorsLayer;

use izurvive_backend::api;
use izurvive_backend::catalog::Catalog;
use izurvive_backend::config::Config;
use izurvive_backend::metrics;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load();

    // The catalog is a startup requirement; without it there is nothing to serve.
    let catalog = match Catalog::load(&config.locations_file) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(
                "Failed to load location catalog from {}: {e}",
                config.locations_file.display()
            );
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} locations with {} spellings from {}",
        catalog.location_count(),
        catalog.spelling_count(),
        config.locations_file.display()
    );

    metrics::register_metrics();
    metrics::CATALOG_LOCATIONS.set(catalog.location_count() as i64);
    metrics::CATALOG_SPELLINGS.set(catalog.spelling_count() as i64);

    let app = api::router(Arc::new(catalog)).layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    tracing::info!("iZurvive backend listening on port {}", config.port);
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
