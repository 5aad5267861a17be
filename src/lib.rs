//! Heatwave trends from historic daily maximum temperatures.
//!
//! For a location and a range of years, each year's daily maximum
//! temperatures are fetched from a weather archive, days above the year's
//! 95th percentile are marked hot, and every run of at least three hot days
//! counts as one heatwave event. Counts are persisted per year and served
//! over HTTP.

mod aggregator;
mod analysis;
pub mod config;
mod error;
pub mod server;
mod sources;
mod store;
mod types;
mod utils;

pub use aggregator::HeatwaveAnalyzer;
pub use error::HeatwaveError;

pub use analysis::criteria::HeatwaveCriteria;
pub use analysis::error::AnalysisError;
pub use analysis::events::{count_heatwave_events, count_runs, heatwave_flags, MIN_HEATWAVE_DAYS};
pub use analysis::threshold::{percentile, PercentileThreshold, ThresholdStrategy, DEFAULT_PERCENTILE};

pub use sources::error::TemperatureSourceError;
pub use sources::open_meteo::{OpenMeteoSource, DEFAULT_ARCHIVE_URL, DEFAULT_FETCH_TIMEOUT};
pub use sources::TemperatureSource;

pub use store::error::StoreError;
pub use store::sqlite::{SqliteStore, StoredYear};
pub use store::ResultStore;

pub use types::heatwave::{HeatwaveRequest, YearResult};
pub use types::location::LatLon;
pub use types::series::TemperatureSeries;
pub use types::year::{Year, YearRange};

pub use utils::default_database_path;
