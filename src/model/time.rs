//! Clock and duration formatting for fractional hours.
//!
//! Tachograph data carries times as fractional hours since midnight; all
//! presentation strings are derived from those numbers here.

/// Format an elapsed time in fractional hours as `HH:MM`.
///
/// Hours are the integer floor of the total, minutes the remainder, both
/// zero-padded to two digits. The remainder is rounded to the nearest whole
/// minute so repeating decimals from recorded data (e.g. `6.01666…`) land on
/// the minute they encode, but it is capped at 59 so rounding never carries
/// into the floored hour (`6.99999` stays "06:59").
#[must_use]
pub fn format_clock(hours: f64) -> String {
    let hours = hours.max(0.0);
    let h = hours.floor() as u64;
    let m = (((hours - hours.floor()) * 60.0).round() as u64).min(59);
    format!("{h:02}:{m:02}")
}

/// Humanize a duration in fractional hours: "5 hours 34 minutes".
#[must_use]
pub fn humanize_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    let (h, m) = (total_minutes / 60, total_minutes % 60);

    let mut parts = Vec::new();
    if h == 1 {
        parts.push("1 hour".to_string());
    } else if h > 1 {
        parts.push(format!("{h} hours"));
    }
    if m == 1 {
        parts.push("1 minute".to_string());
    } else if m > 1 {
        parts.push(format!("{m} minutes"));
    }

    if parts.is_empty() {
        "0 minutes".to_string()
    } else {
        parts.join(" ")
    }
}

/// Compact duration form: "5h 34m", "3m", "2h".
#[must_use]
pub fn compact_duration(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    let (h, m) = (total_minutes / 60, total_minutes % 60);

    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_floor_and_pad() {
        assert_eq!(format_clock(6.016666666666667), "06:01");
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(13.166666666666666), "13:10");
        assert_eq!(format_clock(24.0), "24:00");
        assert_eq!(format_clock(5.566666666666666), "05:34");
    }

    #[test]
    fn clock_minutes_never_carry_into_the_hour() {
        assert_eq!(format_clock(6.99999), "06:59");
        assert_eq!(format_clock(23.999999), "23:59");
    }

    #[test]
    fn clock_negative_floored_to_zero() {
        assert_eq!(format_clock(-1.5), "00:00");
    }

    #[test]
    fn humanize_singular_plural() {
        assert_eq!(humanize_hours(5.566666666666666), "5 hours 34 minutes");
        assert_eq!(humanize_hours(1.0 + 1.0 / 60.0), "1 hour 1 minute");
        assert_eq!(humanize_hours(7.0), "7 hours");
        assert_eq!(humanize_hours(0.05), "3 minutes");
        assert_eq!(humanize_hours(0.0), "0 minutes");
    }

    #[test]
    fn compact_forms() {
        assert_eq!(compact_duration(5.566666666666666), "5h 34m");
        assert_eq!(compact_duration(0.05), "3m");
        assert_eq!(compact_duration(2.0), "2h");
        assert_eq!(compact_duration(0.0), "0m");
    }
}
