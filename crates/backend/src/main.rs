mod config;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ServerConfig;

/// Build a cache-controlled static file router.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>SafePath Mine Hazard Map</title></head>
<body>
<h1>SafePath Mine Hazard Map</h1>
<p>Frontend not built yet. Run <code>dx bundle</code> in <code>crates/frontend</code> and point <code>DIST_DIR</code> at the output.</p>
</body>
</html>"#;

/// Build the full application router.
fn build_app(config: Arc<ServerConfig>) -> Router {
    // Static file routers are stateless, merge them before adding app state
    let static_files = Router::new()
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_index))
        .route("/at/{lat}/{lng}", get(serve_index))
        .route("/health", get(|| async { "OK" }))
        .with_state(config)
        .merge(static_files)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Every client-side route gets the same SPA shell; the router in the
/// bundle decides what to show.
async fn serve_index(State(config): State<Arc<ServerConfig>>) -> Html<String> {
    match tokio::fs::read_to_string(config.index_path()).await {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::debug!(path = %config.index_path().display(), error = %e, "index not built, serving fallback");
            Html(FALLBACK_INDEX.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = Arc::new(ServerConfig::from_env());
    tracing::info!(dist = %config.dist_dir.display(), "serving frontend");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running at http://localhost:{}", addr.port());
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
