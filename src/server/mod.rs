//! HTTP front end: the heatwave trend endpoint and a health check.

use crate::aggregator::HeatwaveAnalyzer;
use crate::analysis::threshold::ThresholdStrategy;
use crate::error::HeatwaveError;
use crate::sources::TemperatureSource;
use crate::store::ResultStore;
use crate::types::heatwave::{HeatwaveRequest, YearResult};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const HEATWAVE_TREND_PATH: &str = "/api/heatwave-trend";
pub const HEALTH_PATH: &str = "/health";

/// Builds the router around a shared analyzer.
///
/// Cross-origin requests are allowed from any origin, with any method and
/// header, so a browser front end can be served from elsewhere.
pub fn router<S, R, T>(analyzer: Arc<HeatwaveAnalyzer<S, R, T>>) -> Router
where
    S: TemperatureSource + 'static,
    R: ResultStore + 'static,
    T: ThresholdStrategy + 'static,
{
    Router::new()
        .route(HEATWAVE_TREND_PATH, post(heatwave_trend::<S, R, T>))
        .route(HEALTH_PATH, get(health))
        .layer(CorsLayer::very_permissive())
        .with_state(analyzer)
}

async fn heatwave_trend<S, R, T>(
    State(analyzer): State<Arc<HeatwaveAnalyzer<S, R, T>>>,
    Json(request): Json<HeatwaveRequest>,
) -> Json<Vec<YearResult>>
where
    S: TemperatureSource,
    R: ResultStore,
    T: ThresholdStrategy,
{
    Json(analyzer.analyze(&request).await)
}

async fn health() -> &'static str {
    "ok"
}

/// Serves `router` on `addr` until `shutdown` resolves, then waits for
/// in-flight requests to finish.
pub async fn serve<F>(addr: SocketAddr, router: Router, shutdown: F) -> Result<(), HeatwaveError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| HeatwaveError::Bind(addr, e))?;
    info!(
        "Listening on {}",
        listener.local_addr().map_err(HeatwaveError::Serve)?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(HeatwaveError::Serve)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
