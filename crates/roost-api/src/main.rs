//! roost-api - HTTP API server for the roost listing service.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roost_api::{config::Config, router, upload::UploadGateway, AppState};
use roost_catalog::{ContactIntake, PropertyCatalog};
use roost_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: "roost_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "roost_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("roost-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
            layer = layer.with_ansi(log_ansi.unwrap_or(false)); // no ANSI in files
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        // Console-only output
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    let config = Config::from_env()?;
    let backend = match &config.store {
        roost_store::StoreConfig::Memory => "memory",
        roost_store::StoreConfig::File { .. } => "file",
        roost_store::StoreConfig::Postgres { .. } => "postgres",
    };
    info!(
        host = %config.host,
        port = config.port,
        backend,
        "Configuration loaded"
    );

    // Open the configured storage backend
    let store = Store::open(config.store.clone()).await?;

    // Prepare the upload gateway
    let uploads = UploadGateway::new(&config.upload_dir, config.public_base_url.clone());
    uploads.ensure_dir().await?;
    info!(upload_dir = %config.upload_dir.display(), "Upload storage ready");

    if config.admin_code.is_none() {
        info!("ADMIN_CODE not set; admin gate will reject every code");
    }

    let state = AppState {
        catalog: Arc::new(PropertyCatalog::new(store.properties)),
        intake: Arc::new(ContactIntake::new(store.contacts)),
        uploads: Arc::new(uploads),
        admin_code: config.admin_code.clone(),
    };

    let app = router(state, &config.upload_dir);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
