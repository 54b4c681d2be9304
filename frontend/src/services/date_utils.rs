use chrono::{NaiveDate, Utc};

/// Current date as the browser's `toISOString()` reports it (UTC)
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today's date in YYYY-MM-DD format, for prefilling date inputs
pub fn today_iso() -> String {
    today_utc().format("%Y-%m-%d").to_string()
}

/// Parse YYYY-MM-DD (optionally followed by a time part) into components
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let date_part = date_str.split('T').next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Format a YYYY-MM-DD date as DD/MM/YYYY for the entries table
pub fn format_date_dmy(date_str: &str) -> String {
    match parse_date_string(date_str) {
        Some((year, month, day)) => format!("{:02}/{:02}/{:04}", day, month, year),
        None => date_str.to_string(),
    }
}

/// Rounded calorie label, e.g. "303 kcal"
pub fn format_calories(calories: Option<f64>) -> String {
    match calories {
        Some(value) if value.is_finite() => format!("{:.0} kcal", value),
        _ => "- kcal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_dmy() {
        assert_eq!(format_date_dmy("2026-10-18"), "18/10/2026");
        assert_eq!(format_date_dmy("2026-01-05T00:00:00.000Z"), "05/01/2026");
        assert_eq!(format_date_dmy("yesterday"), "yesterday");
        assert_eq!(format_date_dmy("2026-13-01"), "2026-13-01");
    }

    #[test]
    fn test_format_calories() {
        assert_eq!(format_calories(Some(303.6)), "304 kcal");
        assert_eq!(format_calories(None), "- kcal");
    }

    #[test]
    fn test_today_iso_is_parseable() {
        let iso = today_iso();
        assert!(NaiveDate::parse_from_str(&iso, "%Y-%m-%d").is_ok());
        assert!(parse_date_string(&iso).is_some());
    }
}
