fn normalize_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() {
        return 0;
    }
    seconds.max(0.0).round() as u64
}

fn split(seconds: f64) -> (u64, u64, u64) {
    let total = normalize_seconds(seconds);
    (total / 3600, total % 3600 / 60, total % 60)
}

/// `HH:mm:ss`, e.g. `01:23:45`.
pub fn format_time_full(seconds: f64) -> String {
    let (h, m, s) = split(seconds);
    format!("{h:02}:{m:02}:{s:02}")
}

/// `mm:ss`, e.g. `03:42`. Minutes keep counting past an hour.
pub fn format_time_short(seconds: f64) -> String {
    let total = normalize_seconds(seconds);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Korean units, e.g. `1시간 3분 42초`.
pub fn format_time_korean(seconds: f64) -> String {
    join_units(seconds, ["시간", "분", "초"])
}

/// English units, e.g. `1h 3m 42s`.
pub fn format_time_english(seconds: f64) -> String {
    join_units(seconds, ["h", "m", "s"])
}

/// Seconds alone under a minute (`32s`), English units otherwise.
pub fn format_time_auto(seconds: f64) -> String {
    let total = normalize_seconds(seconds);
    if total < 60 {
        return format!("{total}s");
    }
    format_time_english(total as f64)
}

fn join_units(seconds: f64, units: [&str; 3]) -> String {
    let (h, m, s) = split(seconds);
    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(format!("{h}{}", units[0]));
    }
    if m > 0 {
        parts.push(format!("{m}{}", units[1]));
    }
    if s > 0 || parts.is_empty() {
        parts.push(format!("{s}{}", units[2]));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clock_shapes() {
        assert_eq!(format_time_full(5025.0), "01:23:45");
        assert_eq!(format_time_short(222.0), "03:42");
        assert_eq!(format_time_short(3725.0), "62:05");
    }

    #[test]
    fn unit_shapes_skip_zero_parts() {
        assert_eq!(format_time_english(3822.0), "1h 3m 42s");
        assert_eq!(format_time_english(3600.0), "1h");
        assert_eq!(format_time_korean(3822.0), "1시간 3분 42초");
        assert_eq!(format_time_korean(0.0), "0초");
    }

    #[test]
    fn auto_switches_at_one_minute() {
        assert_eq!(format_time_auto(32.4), "32s");
        assert_eq!(format_time_auto(59.6), "1m");
        assert_eq!(format_time_auto(90.0), "1m 30s");
    }

    #[test]
    fn bad_input_normalizes_to_zero() {
        assert_eq!(format_time_full(f64::NAN), "00:00:00");
        assert_eq!(format_time_short(-12.0), "00:00");
        assert_eq!(format_time_english(f64::INFINITY), "0s");
    }
}
