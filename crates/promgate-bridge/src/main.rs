//! promgate bridge
//!
//! Bridges a stream-processing framework's internal metrics topic onto a
//! Prometheus scrape endpoint:
//! - Kafka consumer: decode each report, reconcile it into gauges
//! - HTTP: `/metrics` (scrape), `/healthz`, `/readyz`

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use promgate_bridge::{app_state, config, consumer, registry, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "promgate.yaml".into());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let kafka = cfg.kafka.clone();
    let listen: SocketAddr = cfg
        .http
        .listen
        .parse()
        .expect("http.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let vault = registry::MetricVault::new(state.exporter().clone(), state.stats().clone());
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "promgate-bridge starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    tokio::select! {
        res = consumer::run(kafka, state, vault) => {
            // run() only returns on a structural failure
            if let Err(e) = res {
                tracing::error!(error = %e, "consumer failed");
                std::process::exit(1);
            }
        }
        res = axum::serve(listener, app) => {
            res.expect("server failed");
        }
    }
}
