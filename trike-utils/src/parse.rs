use crate::pagination::normalize_page_size;

/// Parse a product id argument (`42` or `#42`).
pub fn parse_product_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let numeric = trimmed.strip_prefix('#').unwrap_or(trimmed);

    numeric.parse::<u64>().ok().filter(|id| *id > 0)
}

/// Parse a page-size argument.
///
/// Zero, negative, and non-numeric values are rejected.
pub fn parse_page_size(raw: &str) -> Option<usize> {
    let size = raw.trim().parse::<usize>().ok()?;
    if size == 0 {
        return None;
    }

    Some(normalize_page_size(size))
}

/// Parse a compact duration token like `30s`, `10m`, `2h`, `1d`, or plain seconds.
pub fn parse_duration_seconds(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let mut chars = value.chars();
    let unit = chars.next_back();

    let (number_raw, multiplier) = match unit {
        Some('s') | Some('S') => (chars.as_str(), 1_u64),
        Some('m') | Some('M') => (chars.as_str(), 60_u64),
        Some('h') | Some('H') => (chars.as_str(), 60_u64 * 60),
        Some('d') | Some('D') => (chars.as_str(), 60_u64 * 60 * 24),
        Some(last) if last.is_ascii_digit() => (value, 1_u64),
        _ => return None,
    };

    let number = number_raw.parse::<u64>().ok()?;
    if number == 0 {
        return None;
    }

    number.checked_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids() {
        assert_eq!(parse_product_id("42"), Some(42));
        assert_eq!(parse_product_id(" #7 "), Some(7));
        assert_eq!(parse_product_id("0"), None);
        assert_eq!(parse_product_id("abc"), None);
    }

    #[test]
    fn page_sizes_must_be_positive() {
        assert_eq!(parse_page_size("25"), Some(25));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("-5"), None);
        assert_eq!(parse_page_size(""), None);
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration_seconds("15s"), Some(15));
        assert_eq!(parse_duration_seconds("2m"), Some(120));
        assert_eq!(parse_duration_seconds("90"), Some(90));
        assert_eq!(parse_duration_seconds("0s"), None);
        assert_eq!(parse_duration_seconds("5w"), None);
        assert_eq!(parse_duration_seconds(""), None);
    }
}
