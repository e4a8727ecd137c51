use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// "03" -> "March". Unknown values are returned unchanged.
pub fn month_label(value: &str) -> String {
    MONTHS
        .iter()
        .find(|(v, label)| *v == value || label.eq_ignore_ascii_case(value))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Selectable years: next year down to three years back
pub fn year_options(current_year: i32) -> Vec<String> {
    ((current_year - 3)..=(current_year + 1))
        .rev()
        .map(|y| y.to_string())
        .collect()
}

/// Payroll is uploaded for the month that just ended
pub fn default_period(today: NaiveDate) -> (String, String) {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    (format!("{:02}", month), year.to_string())
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(size, 2), UNITS[unit])
}

/// Thousands-separated amount with at most two decimals: 5400.5 -> "5,400.5"
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let text = trim_decimals(rounded, 2);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && rounded != 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${}", format_amount(value))
}

fn trim_decimals(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Server timestamps arrive as RFC 3339, RFC 2822 (Flask's default) or a
/// naive ISO string. Anything else is shown as received.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels() {
        assert_eq!(month_label("03"), "March");
        assert_eq!(month_label("march"), "March");
        assert_eq!(month_label("13"), "13");
    }

    #[test]
    fn default_period_is_previous_month() {
        let march = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
        assert_eq!(default_period(march), ("02".to_string(), "2025".to_string()));

        let january = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(default_period(january), ("12".to_string(), "2024".to_string()));
    }

    #[test]
    fn years_span_around_current() {
        assert_eq!(year_options(2025), vec!["2026", "2025", "2024", "2023", "2022"]);
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(5000.0), "5,000");
        assert_eq!(format_amount(5400.5), "5,400.5");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(-1200.0), "-1,200");
        assert_eq!(format_currency(4450.0), "$4,450");
    }

    #[test]
    fn dates_from_server_formats() {
        assert_eq!(format_date("2025-03-15T10:30:00Z"), "Mar 15, 2025");
        assert_eq!(format_date("Sat, 15 Mar 2025 10:30:00 GMT"), "Mar 15, 2025");
        assert_eq!(format_date("2025-03-15T10:30:00.123456"), "Mar 15, 2025");
        assert_eq!(format_date("2025-03-15"), "Mar 15, 2025");
        assert_eq!(format_date("last tuesday"), "last tuesday");
        assert_eq!(format_date_time("2025-03-15 08:05:00"), "Mar 15, 2025 08:05");
    }
}
