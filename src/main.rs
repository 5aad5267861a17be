use clap::Parser;
use heatwave_trend::config::Config;
use heatwave_trend::server::{router, serve, shutdown_signal};
use heatwave_trend::{HeatwaveAnalyzer, HeatwaveError, OpenMeteoSource, SqliteStore};
use log::{info, warn};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), HeatwaveError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let store = match config.database_path()? {
        Some(path) => SqliteStore::open(&path).await?,
        None => {
            info!("Using in-memory database");
            SqliteStore::open_in_memory()?
        }
    };
    let source = OpenMeteoSource::builder()
        .base_url(config.archive_url.clone())
        .timeout(config.fetch_timeout())
        .build()?;
    let criteria = config.criteria();
    info!(
        "Heatwave criteria: days above the {} percentile, runs of at least {} days; archive {}",
        criteria.percentile,
        criteria.min_run_days,
        source.base_url()
    );

    let analyzer = Arc::new(HeatwaveAnalyzer::new(source, store, criteria)?);
    serve(config.bind, router(Arc::clone(&analyzer)), shutdown_signal()).await?;

    match Arc::try_unwrap(analyzer) {
        Ok(analyzer) => analyzer.into_store().close()?,
        Err(_) => warn!("Database still in use at shutdown, leaving it to be dropped"),
    }
    info!("Shut down cleanly");
    Ok(())
}
