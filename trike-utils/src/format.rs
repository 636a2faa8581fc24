//! Text formatting shared across views.

/// Currency symbol used across the admin views.
pub const PESO_SIGN: char = '₱';

/// Group an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}

/// Price label as shown in tables: grouped, trailing zero cents dropped.
///
/// `1299.5` renders as `₱1,299.5`, `45000.0` as `₱45,000`.
pub fn format_price(amount: f64) -> String {
    let (sign, whole, cents) = split_amount(amount);
    let mut out = format!("{sign}{PESO_SIGN}{}", group_thousands(whole));

    if cents > 0 {
        let fraction = format!("{cents:02}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out
}

/// Currency amount with exactly two decimals, e.g. `₱1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let (sign, whole, cents) = split_amount(amount);
    format!("{sign}{PESO_SIGN}{}.{cents:02}", group_thousands(whole))
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn split_amount(amount: f64) -> (&'static str, u64, u64) {
    if !amount.is_finite() {
        return ("", 0, 0);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    (sign, total_cents / 100, total_cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn prices_drop_zero_cents() {
        assert_eq!(format_price(45000.0), "₱45,000");
        assert_eq!(format_price(1299.5), "₱1,299.5");
        assert_eq!(format_price(1299.25), "₱1,299.25");
    }

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(format_currency(1234.5), "₱1,234.50");
        assert_eq!(format_currency(-12.0), "-₱12.00");
        assert_eq!(format_currency(f64::NAN), "₱0.00");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("électrique", 5), "élec…");
    }
}
