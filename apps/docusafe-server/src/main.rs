//! DocuSafe Audit Server
//!
//! Accepts contract uploads (PDF, DOCX or plain text), extracts their text
//! and runs clause audit rules over it. Provides REST API endpoints for:
//!
//! - Rule listing
//! - Document analysis (upload or raw text)
//! - Findings summary export
//!
//! ## Architecture
//!
//! Extraction runs on the blocking pool under a timeout; auditing is pure and
//! synchronous. Per-IP rate limiting is applied via tower-governor.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_analyze_text, handle_analyze_upload, handle_health, handle_list_rules, handle_report,
};

/// Command-line arguments for the DocuSafe server
#[derive(Parser, Debug)]
#[command(name = "docusafe-server")]
#[command(about = "DocuSafe Audit server for contract clause analysis")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "DOCUSAFE_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "DOCUSAFE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Text extraction timeout in milliseconds
    #[arg(long, env = "DOCUSAFE_EXTRACT_TIMEOUT_MS", default_value = "15000")]
    extract_timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "DOCUSAFE_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// Maximum upload size in megabytes
    #[arg(long, env = "DOCUSAFE_MAX_UPLOAD_MB", default_value = "25")]
    max_upload_mb: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Text extraction timeout in milliseconds
    pub extract_timeout_ms: u64,
}

/// Build the application router without the rate limiter
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/rules", get(handle_list_rules))
        .route("/api/analyze", post(handle_analyze_upload))
        .route("/api/analyze/text", post(handle_analyze_text))
        .route("/api/report", post(handle_report))
        // Apply middleware
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DocuSafe server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let rate_limit = args.rate_limit.max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(u64::from(1000 / rate_limit).max(1))
            .burst_size(rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow!("invalid rate limiter configuration"))?,
    );

    let state = AppState {
        extract_timeout_ms: args.extract_timeout_ms,
    };

    let app = build_router(state, args.max_upload_mb * 1024 * 1024).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", rate_limit);
    info!("Extraction timeout: {}ms", args.extract_timeout_ms);
    info!("Max upload size: {}MB", args.max_upload_mb);

    // The governor keys on peer IP, which needs connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
