const MAX_FRACTION_DIGITS: usize = 3;

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

/// Groups the integer part with commas and keeps up to three fraction digits, trimming
/// trailing zeros: `1234567.891` → `1,234,567.891`, `12.5` → `12.5`.
pub fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// `₩12,345`
pub fn format_currency_krw(value: Option<f64>) -> String {
    finite(value).map_or_else(|| "₩0".to_string(), |v| format!("₩{}", group_thousands(v)))
}

/// `$12,345`
pub fn format_currency_usd(value: Option<f64>) -> String {
    finite(value).map_or_else(|| "$0".to_string(), |v| format!("${}", group_thousands(v)))
}

/// `12,345원`
pub fn format_number_krw(value: Option<f64>) -> String {
    finite(value).map_or_else(|| "0원".to_string(), |v| format!("{}원", group_thousands(v)))
}

/// `12,345달러`
pub fn format_number_usd(value: Option<f64>) -> String {
    finite(value).map_or_else(
        || "0달러".to_string(),
        |v| format!("{}달러", group_thousands(v)),
    )
}

/// `12,345 point`
pub fn format_number_point_en(value: Option<f64>) -> String {
    finite(value).map_or_else(
        || "0 point".to_string(),
        |v| format!("{} point", group_thousands(v)),
    )
}

/// `12,345 포인트`
pub fn format_number_point_kr(value: Option<f64>) -> String {
    finite(value).map_or_else(
        || "0포인트".to_string(),
        |v| format!("{} 포인트", group_thousands(v)),
    )
}

/// Rounds to `fraction_digits` decimals and returns the number.
pub fn format_fixed(value: Option<f64>, fraction_digits: usize) -> f64 {
    finite(value)
        .and_then(|v| format!("{v:.fraction_digits$}").parse().ok())
        .unwrap_or(0.0)
}

/// Latency text: `247ms` below one second, `1.3s` from one second on.
pub fn format_latency_ms(value: Option<f64>, fraction_digits: usize) -> String {
    let Some(ms) = finite(value).map(|v| v.max(0.0)) else {
        return "0ms".to_string();
    };
    if ms < 1000.0 {
        return format!("{}ms", ms.round());
    }
    format!("{}s", format_fixed(Some(ms / 1000.0), fraction_digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.891), "1,234,567.891");
        assert_eq!(group_thousands(-12345.5), "-12,345.5");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[test]
    fn currency_and_suffix_forms() {
        assert_eq!(format_currency_krw(Some(12345.0)), "₩12,345");
        assert_eq!(format_currency_usd(Some(12345.0)), "$12,345");
        assert_eq!(format_number_krw(Some(12345.0)), "12,345원");
        assert_eq!(format_number_usd(Some(12345.0)), "12,345달러");
        assert_eq!(format_number_point_en(Some(12345.0)), "12,345 point");
        assert_eq!(format_number_point_kr(Some(12345.0)), "12,345 포인트");
    }

    #[test]
    fn missing_values_use_zero_forms() {
        assert_eq!(format_currency_krw(None), "₩0");
        assert_eq!(format_currency_usd(Some(f64::NAN)), "$0");
        assert_eq!(format_number_point_kr(None), "0포인트");
        assert_eq!(format_fixed(Some(f64::INFINITY), 1), 0.0);
    }

    #[test]
    fn fixed_and_latency() {
        assert_eq!(format_fixed(Some(3.14159), 2), 3.14);
        assert_eq!(format_fixed(Some(2.0), 1), 2.0);
        assert_eq!(format_latency_ms(Some(247.4), 1), "247ms");
        assert_eq!(format_latency_ms(Some(1340.0), 1), "1.3s");
        assert_eq!(format_latency_ms(Some(2000.0), 1), "2s");
        assert_eq!(format_latency_ms(Some(-5.0), 1), "0ms");
        assert_eq!(format_latency_ms(None, 1), "0ms");
    }
}
