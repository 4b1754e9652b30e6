use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dreamjob_api::cache::TtlCache;
use dreamjob_api::catalog::{SalaryCatalog, SubjectCatalog};
use dreamjob_api::config::{default_log_directive, Config};
use dreamjob_api::esco::EscoClient;
use dreamjob_api::routes::build_router;
use dreamjob_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DreamJob API v{}", env!("CARGO_PKG_VERSION"));

    // Load static catalogs once; a missing or broken file degrades to an
    // empty table rather than failing startup.
    let subjects = Arc::new(SubjectCatalog::load(&config.subjects_file));
    info!("Subject catalog loaded ({} skills)", subjects.len());

    let salaries = Arc::new(SalaryCatalog::load(&config.salary_file));
    if salaries.is_empty() {
        info!("Salary catalog is empty; salary lookups will return no data");
    }

    // ESCO client with an injected TTL response cache
    let cache = Arc::new(TtlCache::new(Duration::from_secs(config.cache_ttl_secs)));
    let esco = EscoClient::new(config.esco_base_url.clone(), cache);
    info!("ESCO client initialized ({})", config.esco_base_url);

    let state = AppState {
        occupations: Arc::new(esco),
        subjects,
        salaries,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
