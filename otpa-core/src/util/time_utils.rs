use chrono::TimeDelta;

/// fractional seconds in a duration
pub fn total_seconds(delta: &TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

pub fn total_minutes(delta: &TimeDelta) -> f64 {
    total_seconds(delta) / 60.0
}

/// a duration from fractional seconds, at millisecond precision
pub fn from_seconds(seconds: f64) -> TimeDelta {
    TimeDelta::milliseconds((seconds * 1000.0).round() as i64)
}

/// `part` as a percentage of `whole`, 0 when `whole` is zero
pub fn percent_of(part: &TimeDelta, whole: &TimeDelta) -> f64 {
    let whole_s = total_seconds(whole);
    if whole_s == 0.0 {
        0.0
    } else {
        total_seconds(part) / whole_s * 100.0
    }
}

pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// renders a duration as `[-]H:MM:SS`
pub fn format_duration(delta: &TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&TimeDelta::seconds(3725)), "1:02:05");
        assert_eq!(format_duration(&TimeDelta::seconds(-90)), "-0:01:30");
    }

    #[test]
    fn test_conversions() {
        assert_relative_eq!(total_minutes(&TimeDelta::seconds(90)), 1.5);
        assert_eq!(from_seconds(1.5), TimeDelta::milliseconds(1500));
        assert_relative_eq!(
            percent_of(&TimeDelta::minutes(15), &TimeDelta::hours(1)),
            25.0
        );
        assert_relative_eq!(percent_of(&TimeDelta::minutes(15), &TimeDelta::zero()), 0.0);
        assert_relative_eq!(round_to(2.34567, 2), 2.35);
    }
}
