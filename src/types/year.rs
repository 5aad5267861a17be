//! Calendar years and inclusive year ranges, as used to walk a heatwave request.

use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

impl Year {
    pub fn get(self) -> i32 {
        self.0
    }

    /// First and last day of the year, or `None` if the year is outside chrono's range.
    pub fn date_span(self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        ))
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// An inclusive range of years, iterated in ascending order.
///
/// A range whose start lies after its end is empty.
///
/// # Examples
///
/// ```
/// use heatwave_trend::{Year, YearRange};
///
/// let years: Vec<Year> = YearRange::new(2019, 2021).into_iter().collect();
/// assert_eq!(years, vec![Year(2019), Year(2020), Year(2021)]);
///
/// assert_eq!(YearRange::new(2021, 2019).into_iter().count(), 0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start: Year(start_year),
            end: Year(end_year),
        }
    }

    /// Number of years in the range, saturating at `usize::MAX` on targets
    /// where the full `i32` span does not fit.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            let years = i64::from(self.end.0) - i64::from(self.start.0) + 1;
            usize::try_from(years).unwrap_or(usize::MAX)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for YearRange {
    type Item = Year;
    type IntoIter = std::iter::Map<std::ops::RangeInclusive<i32>, fn(i32) -> Year>;

    fn into_iter(self) -> Self::IntoIter {
        (self.start.0..=self.end.0).map(Year as fn(i32) -> Year)
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_span_covers_whole_year() {
        let (start, end) = Year(2020).date_span().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
    }

    #[test]
    fn test_date_span_out_of_range() {
        assert!(Year(i32::MAX).date_span().is_none());
    }

    #[test]
    fn test_single_year_range() {
        let range = YearRange::new(2005, 2005);
        assert_eq!(range.len(), 1);
        assert_eq!(range.into_iter().collect::<Vec<_>>(), vec![Year(2005)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = YearRange::new(2010, 2000);
        assert!(range.is_empty());
        assert_eq!(range.into_iter().next(), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_full_i32_range_len() {
        let range = YearRange::new(i32::MIN, i32::MAX);
        assert_eq!(range.len(), 1usize << 32);
        assert_eq!(range.into_iter().next(), Some(Year(i32::MIN)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Year(987).to_string(), "0987");
        assert_eq!(YearRange::new(2000, 2020).to_string(), "2000..=2020");
    }
}
