use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use otpa_core::util::time_utils;

/// minute offsets spread evenly either side of a departure:
/// `-m, .., -m/n, 0, m/n, .., m` for `m` minutes and `n` each side
pub fn nearby_minute_offsets(nearby_minutes: f64, num_each_side: u32) -> Vec<f64> {
    let n = num_each_side as f64;
    let before = (1..=num_each_side)
        .rev()
        .map(|i| -nearby_minutes * i as f64 / n);
    let after = (1..=num_each_side).map(|i| nearby_minutes * i as f64 / n);
    before.chain(std::iter::once(0.0)).chain(after).collect()
}

/// departures at each offset from `date` and `time`. offsets may cross midnight.
pub fn nearby_departures(date: NaiveDate, time: NaiveTime, offsets: &[f64]) -> Vec<NaiveDateTime> {
    let base = date.and_time(time);
    offsets
        .iter()
        .map(|minutes| base + time_utils::from_seconds(minutes * 60.0))
        .collect()
}
