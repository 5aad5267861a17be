//! Daily maximum temperatures from the Open-Meteo historical weather archive.

use crate::sources::error::TemperatureSourceError;
use crate::sources::TemperatureSource;
use crate::types::location::LatLon;
use crate::types::series::TemperatureSeries;
use crate::types::year::Year;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const DAILY_VARIABLE: &str = "temperature_2m_max";

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<DailyValues>,
}

#[derive(Debug, Deserialize)]
struct DailyValues {
    temperature_2m_max: Option<Vec<Option<f64>>>,
}

/// Client for the Open-Meteo archive API.
///
/// One request is made per year, asking for `temperature_2m_max` from
/// January 1st to December 31st in UTC.
///
/// # Examples
///
/// ```no_run
/// use heatwave_trend::{LatLon, OpenMeteoSource, TemperatureSource, Year};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = OpenMeteoSource::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// let series = source.daily_max(LatLon(28.61, 77.23), Year(2020)).await?;
/// println!("{} days of data", series.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    client: Client,
    base_url: String,
}

#[bon]
impl OpenMeteoSource {
    /// Creates a client.
    ///
    /// * `.base_url(..)`: Optional. Archive endpoint, defaults to [`DEFAULT_ARCHIVE_URL`].
    /// * `.timeout(Duration)`: Optional. Per-request timeout, defaults to [`DEFAULT_FETCH_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// [`TemperatureSourceError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TemperatureSourceError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT))
            .build()
            .map_err(TemperatureSourceError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_ARCHIVE_URL.to_string()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TemperatureSource for OpenMeteoSource {
    async fn daily_max(
        &self,
        location: LatLon,
        year: Year,
    ) -> Result<TemperatureSeries, TemperatureSourceError> {
        let (start, end) = year
            .date_span()
            .ok_or(TemperatureSourceError::InvalidYear(year.get()))?;
        let query = [
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
            ("daily", DAILY_VARIABLE.to_string()),
            ("timezone", "UTC".to_string()),
        ];
        info!("Fetching {} for {} in {} from {}", DAILY_VARIABLE, location, year, self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| TemperatureSourceError::NetworkRequest(self.base_url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.base_url, e);
                return Err(match e.status() {
                    Some(status) => TemperatureSourceError::HttpStatus {
                        url: self.base_url.clone(),
                        status,
                        source: e,
                    },
                    None => TemperatureSourceError::NetworkRequest(self.base_url.clone(), e),
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| TemperatureSourceError::NetworkRequest(self.base_url.clone(), e))?;
        parse_daily_max(&body)
    }
}

/// Extracts the daily maximum series from an archive response body.
///
/// A body without `daily.temperature_2m_max` yields an empty series. Days
/// reported as `null` are dropped.
fn parse_daily_max(body: &[u8]) -> Result<TemperatureSeries, TemperatureSourceError> {
    let parsed: ArchiveResponse = serde_json::from_slice(body)?;
    let Some(raw) = parsed.daily.and_then(|daily| daily.temperature_2m_max) else {
        debug!("Archive response has no {} series", DAILY_VARIABLE);
        return Ok(TemperatureSeries::empty());
    };

    let series = TemperatureSeries::from_days(raw);
    let missing = series.missing_days();
    if missing > 0 {
        debug!("{} of {} days have no reading", missing, series.len());
    }
    Ok(series)
}
