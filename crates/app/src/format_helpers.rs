//! Shared formatting utilities for the UI layer.
//!
//! Date helpers accept ISO-8601 strings ("2026-08-25" or full datetimes)
//! and fall back to the raw input when parsing fails.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// The current month as the `YYYY-MM` key the monthly attendance endpoint
/// takes.
pub fn current_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}

/// Group an integer amount with thousands separators: 95000 -> "95,000".
pub fn format_salary(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_date_only_and_datetime_inputs() {
        assert_eq!(format_date_human("2026-08-25"), "Aug 25, 2026");
        assert_eq!(format_date_human("2026-01-03T09:15:00Z"), "Jan 3, 2026");
    }

    #[test]
    fn garbage_dates_fall_back_to_input() {
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2026-99-01"), "2026-99-01");
    }

    #[test]
    fn salary_grouping() {
        assert_eq!(format_salary(0.0), "0");
        assert_eq!(format_salary(950.0), "950");
        assert_eq!(format_salary(95000.0), "95,000");
        assert_eq!(format_salary(1234567.0), "1,234,567");
    }
}
