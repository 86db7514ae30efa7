//! Display formatting for amounts and dates
//!
//! Keeps the whole console consistent: amounts with a space as
//! thousands separator and 2 decimals, dates as DD/MM/YYYY.

use chrono::NaiveDate;

/// Format a number with a thousands separator (space) and the given
/// number of decimals. 1234.567 with 2 decimals -> "1 234.57"
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // insert a space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money amount: 2 decimals, space separated. 1234567.89 -> "1 234 567.89"
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Weight in kilograms: 1 decimal. 12.35 -> "12.3"
pub fn format_weight(value: f64) -> String {
    format_number_with_decimals(value, 1)
}

/// Date in French order: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Optional date, em dash when absent
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format_date(d),
        None => "—".to_string(),
    }
}

/// Parse the value of an `<input type="date">` (YYYY-MM-DD)
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Value for an `<input type="date">` from an optional date
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(12.35), "12.3");
        assert_eq!(format_weight(5.0), "5.0");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
        assert_eq!(format_date_opt(Some(date)), "15/03/2024");
        assert_eq!(format_date_opt(None), "—");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_date_input("2024-01-05"), Some(date));
        assert_eq!(parse_date_input("n'importe quoi"), None);
        assert_eq!(date_input_value(Some(date)), "2024-01-05");
        assert_eq!(date_input_value(None), "");
    }
}
