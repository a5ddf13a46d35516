use barsha_core::config;
use barsha_core::engine::Engine;
use barsha_server::api::create_router;
use barsha_server::api::handlers::AppState;
use barsha_server::api::metrics;
use barsha_server::ingest;
use clap::Parser;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "barsha", about = "BM25 retrieval service for Tunisian Derja")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Corpus directory of *.jsonl record files
    #[arg(short, long, default_value = config::DEFAULT_CORPUS_DIR)]
    corpus_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "barsha_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "barsha_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    let corpus_path = std::path::Path::new(&args.corpus_dir);
    if corpus_path.exists() && !corpus_path.is_dir() {
        eprintln!(
            "Error: corpus_dir '{}' exists but is not a directory",
            args.corpus_dir
        );
        std::process::exit(1);
    }

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let engine = Engine::new(&args.corpus_dir)?;
    let http = ingest::build_client()?;

    let index = engine.snapshot();
    metrics::update_index_metrics(&index);

    let state = AppState {
        engine: engine.clone(),
        http,
        prometheus_handle,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", args.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        corpus_dir = %args.corpus_dir,
        chunks = index.chunk_count(),
        terms = index.term_count(),
        "barsha ready"
    );

    // Spawn index metrics background task
    let metrics_engine = engine.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(15));
        loop {
            interval.tick().await;
            metrics::update_index_metrics(&metrics_engine.snapshot());
        }
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
