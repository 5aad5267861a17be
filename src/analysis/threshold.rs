//! Per-year hot-day thresholds.

use crate::analysis::error::AnalysisError;
use crate::types::series::TemperatureSeries;
use ordered_float::OrderedFloat;

/// Percentile used to define a hot day when nothing else is configured.
pub const DEFAULT_PERCENTILE: f64 = 95.0;

/// Computes the temperature above which a day counts as hot.
///
/// The aggregator only calls this with a series that has at least one reading.
pub trait ThresholdStrategy: Send + Sync {
    fn threshold(&self, series: &TemperatureSeries) -> Result<f64, AnalysisError>;
}

/// Threshold at a fixed percentile of the year's own temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileThreshold {
    percentile: f64,
}

impl PercentileThreshold {
    pub fn new(percentile: f64) -> Result<Self, AnalysisError> {
        validate_percentile(percentile)?;
        Ok(Self { percentile })
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }
}

impl Default for PercentileThreshold {
    fn default() -> Self {
        Self {
            percentile: DEFAULT_PERCENTILE,
        }
    }
}

impl ThresholdStrategy for PercentileThreshold {
    fn threshold(&self, series: &TemperatureSeries) -> Result<f64, AnalysisError> {
        percentile(&series.readings(), self.percentile)
    }
}

/// Returns the `pct`-th percentile of `values`, linearly interpolating between
/// the two nearest ranks of the sorted values.
///
/// The rank is `pct / 100 * (n - 1)`; the result lies between the sorted values
/// at the floor and ceiling of that rank.
///
/// # Errors
///
/// [`AnalysisError::EmptySeries`] if `values` is empty and
/// [`AnalysisError::InvalidPercentile`] if `pct` is not within `0..=100`.
///
/// # Examples
///
/// ```
/// use heatwave_trend::percentile;
///
/// let values: Vec<f64> = (1..=100).map(f64::from).collect();
/// let p95 = percentile(&values, 95.0).unwrap();
/// assert!((p95 - 95.05).abs() < 1e-9);
/// ```
pub fn percentile(values: &[f64], pct: f64) -> Result<f64, AnalysisError> {
    validate_percentile(pct)?;
    if values.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let mut sorted: Vec<OrderedFloat<f64>> = values.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    let low = sorted[lower].into_inner();
    let high = sorted[upper].into_inner();
    Ok(low + (high - low) * weight)
}

fn validate_percentile(pct: f64) -> Result<(), AnalysisError> {
    if pct.is_finite() && (0.0..=100.0).contains(&pct) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidPercentile(pct))
    }
}
