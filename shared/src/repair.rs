//! Detection of gaps in the results of a calculation.
//!
//! A calculation produces one tuple per candle of its chart. Consecutive
//! tuples are expected `range_size` minutes apart. A gap in the tuples only
//! needs repairing when the candles themselves are contiguous at that point.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Earliest point from which a calculation has to be recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRepair {
    #[serde(with = "crate::wire::iso_timestamp::required")]
    pub time: DateTime<Utc>,
    pub range_size: i32,
}

/// Finds the first tuple whose distance to its predecessor is not
/// `range_size` minutes while the candle at the same time is contiguous.
///
/// Neither input has to be sorted. The first record of each series has no
/// predecessor and is never reported.
pub fn inconsistent_time<T, O>(tuple_times: T, ohlc_times: O, range_size: i32) -> Option<CalculationRepair>
where
    T: IntoIterator<Item = DateTime<Utc>>,
    O: IntoIterator<Item = DateTime<Utc>>,
{
    let expected = Duration::minutes(i64::from(range_size));

    let irregular_candles: HashSet<DateTime<Utc>> = irregular(ohlc_times, expected).into_iter().collect();

    irregular(tuple_times, expected)
        .into_iter()
        .filter(|time| !irregular_candles.contains(time))
        .min()
        .map(|time| CalculationRepair { time, range_size })
}

/// Times whose gap to the previous time differs from `expected`.
fn irregular<I>(times: I, expected: Duration) -> Vec<DateTime<Utc>>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut sorted: Vec<DateTime<Utc>> = times.into_iter().collect();
    sorted.sort();

    sorted
        .windows(2)
        .filter(|pair| pair[1] - pair[0] != expected)
        .map(|pair| pair[1])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn minute(m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 10, 25, 10, m, 0).unwrap()
    }

    #[test]
    fn test_contiguous_series_needs_no_repair() {
        let times: Vec<_> = (0..10).map(minute).collect();
        assert_eq!(inconsistent_time(times.clone(), times, 1), None);
    }

    #[test]
    fn test_missing_tuple_is_reported() {
        let candles: Vec<_> = (0..10).map(minute).collect();
        let tuples: Vec<_> = (0..10).filter(|m| *m != 4).map(minute).collect();

        let repair = inconsistent_time(tuples, candles, 1).unwrap();
        assert_eq!(repair.time, minute(5));
        assert_eq!(repair.range_size, 1);
    }

    #[test]
    fn test_gap_shared_with_candles_is_ignored() {
        let times: Vec<_> = (0..10).filter(|m| *m != 4).map(minute).collect();
        assert_eq!(inconsistent_time(times.clone(), times, 1), None);
    }

    #[test]
    fn test_earliest_gap_wins_regardless_of_input_order() {
        let candles: Vec<_> = (0..20).map(minute).collect();
        let mut tuples: Vec<_> = (0..20).filter(|m| *m != 3 && *m != 12).map(minute).collect();
        tuples.reverse();

        let repair = inconsistent_time(tuples, candles, 1).unwrap();
        assert_eq!(repair.time, minute(4));
    }
}
