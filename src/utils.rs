pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(fallback)
}

/// Seconds with one decimal, as shown in the properties panel.
pub fn format_seconds(value: f64) -> String {
    format!("{:.1}s", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_input() {
        assert_eq!(parse_f64_input(" 42.5 ", 0.0), 42.5);
        assert_eq!(parse_f64_input("", 7.0), 7.0);
        assert_eq!(parse_f64_input("abc", 7.0), 7.0);
        assert_eq!(parse_f64_input("NaN", 7.0), 7.0);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(10.0), "10.0s");
        assert_eq!(format_seconds(45.25), "45.2s");
    }
}
