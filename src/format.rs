//! Display formatting for numbers, money and dates

use chrono::NaiveDate;

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a number the way an en-US locale does: grouped thousands and at
/// most three fraction digits with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Whole-number style money, e.g. `$850` or `$1,234.5`
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(value))
}

/// Money with exactly two decimals, e.g. `$25.00`
pub fn format_amount(symbol: &str, value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Integer count with grouped thousands
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Short date, e.g. `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(850.0), "850");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(0.1234), "0.123");
        assert_eq!(format_number(-2500.25), "-2,500.25");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("$", 850.0), "$850");
        assert_eq!(format_currency("$", 12_450.0), "$12,450");
        assert_eq!(format_currency("€", 0.0), "€0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 25.0), "$25.00");
        assert_eq!(format_amount("$", 7.5), "$7.50");
        assert_eq!(format_amount("$", 1999.999), "$2,000.00");
        assert_eq!(format_amount("$", -3.0), "-$3.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1,234");
        assert_eq!(format_count(12_450_000), "12,450,000");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }
}
