//! Formatting and HTML helpers shared by the page renderers

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an integer with a thousands separator ("15420" -> "15,420")
pub fn format_number<T: ToString>(n: T) -> String {
    group_digits(&n.to_string(), ",")
}

/// Insert `separator` between every three digits of the integer part
pub fn group_digits(digits: &str, separator: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

/// Money formatting options, mirrored from the currency config section
#[derive(Debug, Clone)]
pub struct MoneyFormat<'a> {
    pub symbol: &'a str,
    pub decimal_places: u32,
    pub thousands_separator: &'a str,
    pub decimal_separator: &'a str,
    pub symbol_after: bool,
}

impl Default for MoneyFormat<'_> {
    fn default() -> Self {
        Self {
            symbol: "$",
            decimal_places: 2,
            thousands_separator: ",",
            decimal_separator: ".",
            symbol_after: false,
        }
    }
}

/// Format a decimal amount ("1250" -> "$1,250.00")
pub fn format_money(amount: Decimal, fmt: &MoneyFormat<'_>) -> String {
    let rounded = amount
        .round_dp_with_strategy(fmt.decimal_places, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let text = format!("{:.*}", fmt.decimal_places as usize, rounded);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut number = group_digits(int_part, fmt.thousands_separator);
    if let Some(frac) = frac_part {
        number.push_str(fmt.decimal_separator);
        number.push_str(frac);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    if fmt.symbol_after {
        format!("{}{} {}", sign, number, fmt.symbol)
    } else {
        format!("{}{}{}", sign, fmt.symbol, number)
    }
}

/// Escape text for safe inclusion in HTML bodies and attributes
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15420), "15,420");
        assert_eq!(format_number(245000), "245,000");
        assert_eq!(format_number(52), "52");
        assert_eq!(format_number(-1247), "-1,247");
    }

    #[test]
    fn test_format_money() {
        let fmt = MoneyFormat::default();
        assert_eq!(format_money(Decimal::new(125000, 2), &fmt), "$1,250.00");
        assert_eq!(format_money(Decimal::new(75050, 2), &fmt), "$750.50");
        assert_eq!(format_money(Decimal::new(-45075, 2), &fmt), "-$450.75");
    }

    #[test]
    fn test_format_money_symbol_after() {
        let fmt = MoneyFormat {
            symbol: "EUR",
            thousands_separator: ".",
            decimal_separator: ",",
            symbol_after: true,
            ..MoneyFormat::default()
        };
        assert_eq!(format_money(Decimal::new(320000, 2), &fmt), "3.200,00 EUR");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_html("Visa ****4532"), "Visa ****4532");
    }
}
