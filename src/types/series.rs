/// One year of daily maximum temperatures in chronological order.
///
/// A day the archive has no reading for is kept as `None`, so that it still
/// separates the days around it. A series without any reading means no data
/// was available for the year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureSeries(Vec<Option<f64>>);

impl TemperatureSeries {
    /// A series where every day has a reading.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }

    /// A series that may contain days without a reading.
    pub fn from_days(days: Vec<Option<f64>>) -> Self {
        Self(days)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn days(&self) -> &[Option<f64>] {
        &self.0
    }

    /// The days that have a reading, in order.
    pub fn readings(&self) -> Vec<f64> {
        self.0.iter().flatten().copied().collect()
    }

    /// Number of days, including days without a reading.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn missing_days(&self) -> usize {
        self.0.iter().filter(|day| day.is_none()).count()
    }

    /// True when no day has a reading.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Marks each day whose reading strictly exceeds `threshold`. Days without
    /// a reading are never hot.
    pub fn hot_days(&self, threshold: f64) -> Vec<bool> {
        self.0
            .iter()
            .map(|day| matches!(day, Some(t) if *t > threshold))
            .collect()
    }
}

impl From<Vec<f64>> for TemperatureSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_day_is_never_hot() {
        let series = TemperatureSeries::from_days(vec![Some(35.0), None, Some(35.0), Some(10.0)]);
        assert_eq!(series.hot_days(20.0), vec![true, false, true, false]);
        assert_eq!(series.len(), 4);
        assert_eq!(series.missing_days(), 1);
        assert_eq!(series.readings(), vec![35.0, 35.0, 10.0]);
    }

    #[test]
    fn test_all_missing_counts_as_empty() {
        assert!(TemperatureSeries::from_days(vec![None, None]).is_empty());
        assert!(TemperatureSeries::empty().is_empty());
        assert!(!TemperatureSeries::new(vec![1.0]).is_empty());
    }
}
