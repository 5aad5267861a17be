//! Where daily maximum temperatures come from.

pub mod error;
pub mod open_meteo;

use crate::sources::error::TemperatureSourceError;
use crate::types::location::LatLon;
use crate::types::series::TemperatureSeries;
use crate::types::year::Year;
use std::future::Future;

/// Supplies one year of daily maximum temperatures for a location.
///
/// Implementations return an empty series when the archive has no data for
/// the year, and an error when the archive could not be queried at all.
pub trait TemperatureSource: Send + Sync {
    fn daily_max(
        &self,
        location: LatLon,
        year: Year,
    ) -> impl Future<Output = Result<TemperatureSeries, TemperatureSourceError>> + Send;
}
