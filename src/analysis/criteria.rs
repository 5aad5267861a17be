use crate::analysis::error::AnalysisError;
use crate::analysis::events::MIN_HEATWAVE_DAYS;
use crate::analysis::threshold::{PercentileThreshold, DEFAULT_PERCENTILE};
use bon::Builder;

/// What counts as a heatwave: days above a percentile of the year's own
/// temperatures, lasting at least `min_run_days` in a row.
///
/// The defaults (95th percentile, 3 days) are the standard definition.
///
/// # Examples
///
/// ```
/// use heatwave_trend::HeatwaveCriteria;
///
/// let standard = HeatwaveCriteria::default();
/// assert_eq!(standard.percentile, 95.0);
/// assert_eq!(standard.min_run_days, 3);
///
/// let stricter = HeatwaveCriteria::builder().percentile(98.0).min_run_days(5).build();
/// assert!(stricter.threshold().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct HeatwaveCriteria {
    #[builder(default = DEFAULT_PERCENTILE)]
    pub percentile: f64,
    #[builder(default = MIN_HEATWAVE_DAYS)]
    pub min_run_days: usize,
}

impl HeatwaveCriteria {
    pub fn threshold(&self) -> Result<PercentileThreshold, AnalysisError> {
        PercentileThreshold::new(self.percentile)
    }
}

impl Default for HeatwaveCriteria {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(HeatwaveCriteria::builder().build(), HeatwaveCriteria::default());
    }

    #[test]
    fn test_out_of_range_percentile_has_no_threshold() {
        let criteria = HeatwaveCriteria::builder().percentile(120.0).build();
        assert_eq!(
            criteria.threshold(),
            Err(AnalysisError::InvalidPercentile(120.0))
        );
    }
}
