//! Walks a year range and turns each year's temperatures into a heatwave count.

use crate::analysis::criteria::HeatwaveCriteria;
use crate::analysis::error::AnalysisError;
use crate::analysis::events::count_runs;
use crate::analysis::threshold::{PercentileThreshold, ThresholdStrategy};
use crate::sources::TemperatureSource;
use crate::store::ResultStore;
use crate::types::heatwave::{HeatwaveRequest, YearResult};
use crate::types::location::LatLon;
use crate::types::series::TemperatureSeries;
use crate::types::year::Year;
use log::{debug, error, info, warn};

/// Computes per-year heatwave counts for a location and persists them.
///
/// The temperature source and the result store are injected, so the analyzer
/// can run against stubs in tests and against the Open-Meteo archive and
/// SQLite in the service.
///
/// Years are processed one after another. A year whose temperatures cannot
/// be fetched counts as having no data (0 events) instead of failing the
/// whole request, and a failed store write is logged without dropping the
/// year from the response. Only counts that were actually computed are
/// written to the store.
pub struct HeatwaveAnalyzer<S, R, T = PercentileThreshold> {
    source: S,
    store: R,
    threshold: T,
    min_run_days: usize,
}

impl<S, R> HeatwaveAnalyzer<S, R, PercentileThreshold>
where
    S: TemperatureSource,
    R: ResultStore,
{
    /// Creates an analyzer using a percentile threshold.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidPercentile`] if the criteria's percentile is outside `0..=100`.
    pub fn new(source: S, store: R, criteria: HeatwaveCriteria) -> Result<Self, AnalysisError> {
        Ok(Self::with_threshold(
            source,
            store,
            criteria.threshold()?,
            criteria.min_run_days,
        ))
    }
}

impl<S, R, T> HeatwaveAnalyzer<S, R, T>
where
    S: TemperatureSource,
    R: ResultStore,
    T: ThresholdStrategy,
{
    pub fn with_threshold(source: S, store: R, threshold: T, min_run_days: usize) -> Self {
        Self {
            source,
            store,
            threshold,
            min_run_days,
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Gives back the store, e.g. to close it on shutdown.
    pub fn into_store(self) -> R {
        self.store
    }

    /// Heatwave counts for every year of the request, in ascending order.
    ///
    /// An inverted range (`start_year > end_year`) yields an empty list.
    pub async fn analyze(&self, request: &HeatwaveRequest) -> Vec<YearResult> {
        let location = request.location();
        let years = request.years();
        info!("Analyzing heatwaves at {} for {}", location, years);

        // Grows per processed year; a request may span all of i32.
        let mut results = Vec::new();
        for year in years {
            let series = self.fetch_series(location, year).await;

            if series.is_empty() {
                debug!("No temperatures for {} in {}", location, year);
                results.push(YearResult::new(year.get(), 0));
                continue;
            }

            let Some(events) = self.count_events(&series, year) else {
                results.push(YearResult::new(year.get(), 0));
                continue;
            };
            let result = YearResult::new(year.get(), events);
            if let Err(e) = self.store.upsert(result).await {
                error!("Failed to store heatwave count for {}: {}", year, e);
            }
            results.push(result);
        }
        results
    }

    async fn fetch_series(&self, location: LatLon, year: Year) -> TemperatureSeries {
        match self.source.daily_max(location, year).await {
            Ok(series) => series,
            Err(e) => {
                warn!(
                    "Fetching temperatures for {} in {} failed, treating year as empty: {}",
                    location, year, e
                );
                TemperatureSeries::empty()
            }
        }
    }

    /// Counts heatwave events in a series with at least one reading, or `None`
    /// when no threshold could be derived for it.
    fn count_events(&self, series: &TemperatureSeries, year: Year) -> Option<u32> {
        let threshold = match self.threshold.threshold(series) {
            Ok(threshold) => threshold,
            Err(e) => {
                warn!("No threshold for {}, not storing a count: {}", year, e);
                return None;
            }
        };
        let flags = series.hot_days(threshold);
        let events = count_runs(&flags, self.min_run_days);
        debug!(
            "{}: threshold {:.2}, {} hot days, {} events",
            year,
            threshold,
            flags.iter().filter(|&&hot| hot).count(),
            events
        );
        Some(u32::try_from(events).unwrap_or(u32::MAX))
    }
}
