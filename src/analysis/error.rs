use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Cannot compute a threshold for an empty temperature series")]
    EmptySeries,

    #[error("Percentile {0} is outside the range 0..=100")]
    InvalidPercentile(f64),
}
