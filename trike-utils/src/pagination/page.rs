//! Pure pagination math and page-window shaping helpers.

use std::ops::Range;

/// Normalise a requested page size so it can never divide by zero.
pub fn normalize_page_size(per_page: usize) -> usize {
    per_page.max(1)
}

/// Compute the number of pages for a paginated list.
///
/// An empty list still has one (empty) page.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(normalize_page_size(per_page)).max(1)
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return the item range shown on a page.
///
/// Pages past the end yield an empty range anchored at `total_items`.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> Range<usize> {
    let safe_per_page = normalize_page_size(per_page);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    start.min(total_items)..end
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
/// A missing argument means the first page.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
