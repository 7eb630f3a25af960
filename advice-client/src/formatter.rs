//! Presentation helpers for advice results.
//!
//! Amounts and dates follow German (de-DE) conventions: `.` groups
//! thousands, months are spelled out.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Fallback badge colors for values outside the known sets
pub const NEUTRAL_PRIORITY_COLOR: &str = "#757575";
pub const NEUTRAL_DIFFICULTY_COLOR: &str = "#9e9e9e";

/// Format a EUR amount without decimals, e.g. `€1.500`. Absent is `€0`.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "€0".to_string();
    };

    if value.is_nan() {
        return "€NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "€∞" } else { "€-∞" }.to_string();
    }

    // f64::round rounds half away from zero
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("€-{}", grouped)
    } else {
        format!("€{}", grouped)
    }
}

/// Long German date with time, e.g. `21. Dezember 2025 um 10:30`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let month = GERMAN_MONTHS[date.month0() as usize];
    format!(
        "{}. {} {} um {:02}:{:02}",
        date.day(),
        month,
        date.year(),
        date.hour(),
        date.minute()
    )
}

/// Parse a backend timestamp and format it in local time.
///
/// Naive timestamps are taken as UTC. Unparseable input is returned as is.
pub fn format_date_str(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return format_date(&parsed.with_timezone(&Local));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return format_date(&naive.and_utc().with_timezone(&Local));
    }

    raw.to_string()
}

/// `heating_cooling` -> `Heating Cooling`
pub fn format_category(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Badge color for a priority value
pub fn priority_color(priority: &str) -> &'static str {
    match priority.to_lowercase().as_str() {
        "critical" => "#d32f2f",
        "high" => "#f57c00",
        "medium" => "#fbc02d",
        "low" => "#388e3c",
        _ => NEUTRAL_PRIORITY_COLOR,
    }
}

/// Badge color for a difficulty value
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty.to_lowercase().as_str() {
        "easy" => "#4caf50",
        "moderate" => "#ff9800",
        "difficult" => "#f44336",
        _ => NEUTRAL_DIFFICULTY_COLOR,
    }
}

/// Parse `#rrggbb` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(None), "€0");
        assert_eq!(format_currency(Some(0.0)), "€0");
        assert_eq!(format_currency(Some(1500.0)), "€1.500");
        assert_eq!(format_currency(Some(999.0)), "€999");
        assert_eq!(format_currency(Some(1234567.0)), "€1.234.567");
        assert_eq!(format_currency(Some(250.5)), "€251");
        assert_eq!(format_currency(Some(149.49)), "€149");
        assert_eq!(format_currency(Some(-2500.4)), "€-2.500");
        assert_eq!(format_currency(Some(-0.2)), "€0");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2025, 12, 21, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date), "21. Dezember 2025 um 10:30");

        let date = Utc.with_ymd_and_hms(2026, 3, 5, 7, 4, 0).unwrap();
        assert_eq!(format_date(&date), "5. März 2026 um 07:04");
    }

    #[test]
    fn test_format_date_str_leniency() {
        assert_eq!(format_date_str("yesterday"), "yesterday");
        // Both forms parse; the exact text depends on the local timezone
        assert!(format_date_str("2025-12-21T10:30:00Z").contains("2025 um"));
        assert!(format_date_str("2025-12-21T10:30:00.123456").contains("2025 um"));
    }

    #[test]
    fn test_format_category() {
        assert_eq!(format_category("heating_cooling"), "Heating Cooling");
        assert_eq!(format_category("RENEWABLE_ENERGY"), "Renewable Energy");
        assert_eq!(format_category("windows"), "Windows");
        assert_eq!(format_category(""), "");
    }

    #[test]
    fn test_colors() {
        assert_eq!(priority_color("Critical"), "#d32f2f");
        assert_eq!(priority_color("low"), "#388e3c");
        assert_eq!(priority_color("whenever"), NEUTRAL_PRIORITY_COLOR);
        assert_eq!(difficulty_color("EASY"), "#4caf50");
        assert_eq!(difficulty_color("unknown"), NEUTRAL_DIFFICULTY_COLOR);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#d32f2f"), Some((0xd3, 0x2f, 0x2f)));
        assert_eq!(hex_to_rgb("ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }
}
