//! Counting heatwave events in a year of daily temperatures.

/// Shortest run of consecutive hot days that counts as a heatwave event.
pub const MIN_HEATWAVE_DAYS: usize = 3;

/// Marks each day whose temperature strictly exceeds `threshold`.
pub fn heatwave_flags(temperatures: &[f64], threshold: f64) -> Vec<bool> {
    temperatures.iter().map(|&t| t > threshold).collect()
}

/// Counts maximal runs of `true` that are at least `min_len` long.
///
/// Runs are closed by a `false` flag or by the end of the sequence. A
/// `min_len` of zero behaves like one.
pub fn count_runs(flags: &[bool], min_len: usize) -> usize {
    let min_len = min_len.max(1);
    let mut events = 0;
    let mut run = 0;

    for &hot in flags {
        if hot {
            run += 1;
            continue;
        }
        if run >= min_len {
            events += 1;
        }
        run = 0;
    }

    // The final run has no terminating cool day.
    if run >= min_len {
        events += 1;
    }
    events
}

/// Counts heatwave events: runs of at least [`MIN_HEATWAVE_DAYS`] hot days.
///
/// # Examples
///
/// ```
/// use heatwave_trend::count_heatwave_events;
///
/// assert_eq!(count_heatwave_events(&[true, true, false, true, true, true]), 1);
/// assert_eq!(count_heatwave_events(&[true, false, true, false]), 0);
/// ```
pub fn count_heatwave_events(flags: &[bool]) -> usize {
    count_runs(flags, MIN_HEATWAVE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    // Counts runs by splitting on cool days, independently of the scanner.
    fn reference_count(flags: &[bool], min_len: usize) -> usize {
        flags
            .split(|hot| !hot)
            .filter(|run| !run.is_empty() && run.len() >= min_len)
            .count()
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(count_heatwave_events(&[]), 0);
    }

    #[test]
    fn test_all_hot_is_one_event() {
        assert_eq!(count_heatwave_events(&[T; 5]), 1);
        assert_eq!(count_heatwave_events(&[T; 3]), 1);
        assert_eq!(count_heatwave_events(&[T; 365]), 1);
    }

    #[test]
    fn test_short_run_then_qualifying_trailing_run() {
        assert_eq!(count_heatwave_events(&[T, T, F, T, T, T]), 1);
    }

    #[test]
    fn test_alternating_has_no_events() {
        assert_eq!(count_heatwave_events(&[T, F, T, F]), 0);
    }

    #[test]
    fn test_two_separate_events() {
        assert_eq!(count_heatwave_events(&[T, T, T, F, T, T, T]), 2);
    }

    #[test]
    fn test_two_day_run_does_not_qualify() {
        assert_eq!(count_heatwave_events(&[F, T, T, F]), 0);
        assert_eq!(count_heatwave_events(&[T, T]), 0);
    }

    #[test]
    fn test_consecutive_cool_days_between_runs() {
        assert_eq!(count_heatwave_events(&[T, T, T, T, F, F, F, T, T, T, F]), 2);
    }

    #[test]
    fn test_matches_reference_for_every_short_sequence() {
        for len in 0..=12usize {
            for bits in 0u32..(1 << len) {
                let flags: Vec<bool> = (0..len).map(|i| bits & (1 << i) != 0).collect();
                for min_len in 1..=4 {
                    assert_eq!(
                        count_runs(&flags, min_len),
                        reference_count(&flags, min_len),
                        "flags {:?} min_len {}",
                        flags,
                        min_len
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_min_len_counts_every_run() {
        assert_eq!(count_runs(&[T, F, T, T, F, F], 0), 2);
    }

    #[test]
    fn test_flags_use_strict_comparison() {
        let flags = heatwave_flags(&[29.9, 30.0, 30.1, 35.0], 30.0);
        assert_eq!(flags, vec![F, F, T, T]);
    }
}
