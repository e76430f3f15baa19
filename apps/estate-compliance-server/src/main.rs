//! Estate Compliance Server
//!
//! Serves the 50-state estate-planning compliance engine over HTTP:
//!
//! - Jurisdiction listing and rule lookup
//! - Will validation and recommendations
//! - Jurisdiction comparison
//! - Compliance reports with legal update notices
//!
//! The engine is synchronous and read-only; handlers share one
//! `ComplianceService` through cheap clones.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use estate_compliance::{ComplianceService, KnowledgeBase};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_compare, handle_get_state, handle_get_updates, handle_health, handle_list_states,
    handle_recommendations, handle_report, handle_resolve, handle_validate,
};

/// Command-line arguments for the compliance server
#[derive(Parser, Debug)]
#[command(name = "estate-compliance-server")]
#[command(about = "50-state estate-planning compliance API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3002")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "ESTATE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// JSON file replacing the embedded jurisdiction table
    #[arg(long, env = "ESTATE_JURISDICTIONS")]
    jurisdictions: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: ComplianceService,
}

/// Build the API router
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Jurisdiction rules
        .route("/api/compliance/states", get(handle_list_states))
        .route("/api/compliance/state/:code", get(handle_get_state))
        .route("/api/compliance/state/:code/updates", get(handle_get_updates))
        .route("/api/compliance/resolve", get(handle_resolve))
        // Will checks
        .route("/api/compliance/validate", post(handle_validate))
        .route("/api/compliance/recommendations", post(handle_recommendations))
        .route("/api/compliance/compare", post(handle_compare))
        .route("/api/compliance/report", post(handle_report))
        .with_state(state)
}

fn load_knowledge_base(path: Option<&PathBuf>) -> anyhow::Result<KnowledgeBase> {
    match path {
        Some(path) => {
            info!("Loading jurisdiction table from {}", path.display());
            KnowledgeBase::from_path(path)
                .with_context(|| format!("loading jurisdictions from {}", path.display()))
        }
        None => KnowledgeBase::builtin().context("loading embedded jurisdiction table"),
    }
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

    let knowledge_base = load_knowledge_base(args.jurisdictions.as_ref())?;
    info!("Loaded {} jurisdictions", knowledge_base.len());

    let state = AppState {
        service: ComplianceService::new(knowledge_base),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
