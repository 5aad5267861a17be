use crate::analysis::error::AnalysisError;
use crate::sources::error::TemperatureSourceError;
use crate::store::error::StoreError;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatwaveError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    TemperatureSource(#[from] TemperatureSourceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to determine data directory for the database")]
    DataDirResolution,

    #[error("Failed to bind to {0}")]
    Bind(SocketAddr, #[source] std::io::Error),

    #[error("Server error")]
    Serve(#[source] std::io::Error),
}
