//! Форматирование дат и чисел для таблиц остатков

use crate::shared::list_engine::predicates::parse_timestamp;

/// Format ISO date or datetime to "Mon DD, YYYY"
/// Example: "2023-10-24" -> "Oct 24, 2023"
pub fn format_short_date(date_str: &str) -> String {
    match parse_timestamp(date_str) {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Целое число с индийской группировкой разрядов: 1,23,45,678
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Ведущие разряды идут парами, считая справа
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{}{},{}", sign, groups.join(","), tail)
}

/// Денежная сумма в рупиях: ₹8,999
pub fn format_inr(value: i64) -> String {
    format!("₹{}", format_grouped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2023-10-24"), "Oct 24, 2023");
        assert_eq!(format_short_date("2024-01-05"), "Jan 05, 2024");
        assert_eq!(format_short_date("2024-06-15T10:00:00Z"), "Jun 15, 2024");
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_short_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(450), "450");
        assert_eq!(format_grouped(8999), "8,999");
        assert_eq!(format_grouped(29925), "29,925");
        assert_eq!(format_grouped(100000), "1,00,000");
        assert_eq!(format_grouped(1234567), "12,34,567");
        assert_eq!(format_grouped(-1234), "-1,234");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(37500), "₹37,500");
        assert_eq!(format_inr(375), "₹375");
    }
}
