//! Request and response shapes of the heatwave trend endpoint.

use crate::types::location::LatLon;
use crate::types::year::YearRange;
use serde::{Deserialize, Serialize};

/// Body of a heatwave trend request.
///
/// ```
/// use heatwave_trend::HeatwaveRequest;
///
/// let request: HeatwaveRequest =
///     serde_json::from_str(r#"{"lat": 28.61, "lon": 77.23, "start_year": 2000, "end_year": 2020}"#)
///         .unwrap();
/// assert_eq!(request.years().len(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatwaveRequest {
    pub lat: f64,
    pub lon: f64,
    pub start_year: i32,
    pub end_year: i32,
}

impl HeatwaveRequest {
    pub fn location(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }

    pub fn years(&self) -> YearRange {
        YearRange::new(self.start_year, self.end_year)
    }
}

/// Number of heatwave events counted for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearResult {
    pub year: i32,
    pub heatwave_events: u32,
}

impl YearResult {
    pub fn new(year: i32, heatwave_events: u32) -> Self {
        Self {
            year,
            heatwave_events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_result_serializes_with_field_names() {
        let json = serde_json::to_value(YearResult::new(2021, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2021, "heatwave_events": 4}));
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        let parsed = serde_json::from_str::<HeatwaveRequest>(r#"{"lat": 1.0, "lon": 2.0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_request_location() {
        let request = HeatwaveRequest {
            lat: -33.87,
            lon: 151.21,
            start_year: 2010,
            end_year: 2012,
        };
        assert_eq!(request.location(), LatLon(-33.87, 151.21));
        assert_eq!(request.years().len(), 3);
    }
}
