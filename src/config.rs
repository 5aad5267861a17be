//! Command line and environment configuration for the service binary.

use crate::analysis::criteria::HeatwaveCriteria;
use crate::error::HeatwaveError;
use crate::sources::open_meteo::DEFAULT_ARCHIVE_URL;
use crate::utils::default_database_path;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "heatwave-trend",
    version,
    about = "Serve yearly heatwave counts computed from historic daily maximum temperatures"
)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "HEATWAVE_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// SQLite database file. Defaults to a file in the platform data directory.
    #[arg(long, env = "HEATWAVE_DATABASE", conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Keep results in an in-memory database that is discarded on exit.
    #[arg(long, env = "HEATWAVE_IN_MEMORY")]
    pub in_memory: bool,

    /// Open-Meteo compatible archive endpoint.
    #[arg(long, env = "HEATWAVE_ARCHIVE_URL", default_value = DEFAULT_ARCHIVE_URL)]
    pub archive_url: String,

    /// Timeout for each archive request, in seconds.
    #[arg(long, env = "HEATWAVE_FETCH_TIMEOUT_SECS", default_value_t = 30,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub fetch_timeout_secs: u64,

    /// Percentile of a year's temperatures above which a day is hot.
    #[arg(long, env = "HEATWAVE_PERCENTILE", default_value_t = 95.0, value_parser = parse_percentile)]
    pub percentile: f64,

    /// Minimum number of consecutive hot days that make a heatwave.
    #[arg(long, env = "HEATWAVE_MIN_RUN_DAYS", default_value_t = 3,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub min_run_days: u64,
}

impl Config {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn criteria(&self) -> HeatwaveCriteria {
        HeatwaveCriteria::builder()
            .percentile(self.percentile)
            .min_run_days(self.min_run_days as usize)
            .build()
    }

    /// Database file to open, or `None` when running in memory.
    pub fn database_path(&self) -> Result<Option<PathBuf>, HeatwaveError> {
        if self.in_memory {
            return Ok(None);
        }
        match &self.database {
            Some(path) => Ok(Some(path.clone())),
            None => default_database_path()
                .map(Some)
                .ok_or(HeatwaveError::DataDirResolution),
        }
    }
}

fn parse_percentile(value: &str) -> Result<f64, String> {
    let pct: f64 = value
        .parse()
        .map_err(|e| format!("`{}` is not a number: {}", value, e))?;
    if pct.is_finite() && (0.0..=100.0).contains(&pct) {
        Ok(pct)
    } else {
        Err(format!("percentile must be between 0 and 100, got {}", pct))
    }
}
