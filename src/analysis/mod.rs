//! Heatwave detection: percentile thresholds and hot-day run counting.

pub mod criteria;
pub mod error;
pub mod events;
pub mod threshold;
