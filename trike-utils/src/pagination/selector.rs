//! Page-selector layout: pinned first/last pages around a sliding block.

use super::SELECTOR_BLOCK_LEN;

/// One clickable (or decorative) slot in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEntry {
    /// Button jumping to a 1-based page.
    Page(usize),
    /// Gap marker between non-adjacent pages.
    Ellipsis,
}

impl SelectorEntry {
    /// Page number carried by this entry, if any.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// First and last page of the contiguous block around `current_page`.
///
/// The block tries to center on the current page and slides back from the
/// end so it always holds `min(5, total_pages)` pages.
pub fn selector_block(total_pages: usize, current_page: usize) -> (usize, usize) {
    let total_pages = total_pages.max(1);
    let len = SELECTOR_BLOCK_LEN.min(total_pages);
    let start = current_page
        .saturating_sub(2)
        .min(total_pages.saturating_sub(SELECTOR_BLOCK_LEN - 1))
        .max(1);
    let end = (start + len - 1).min(total_pages);
    (start, end)
}

/// Build the selector layout for a page set.
///
/// Returns an empty layout when there is at most one page. Page 1 is pinned
/// in front of the block once the current page is past 3, with an ellipsis
/// after it past page 4. Page `total_pages` is pinned behind the block while
/// the current page is before `total_pages - 2`, with an ellipsis before it
/// while the current page is before `total_pages - 3`. Pins never repeat a
/// page already in the block.
pub fn selector_layout(total_pages: usize, current_page: usize) -> Vec<SelectorEntry> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let (start, end) = selector_block(total_pages, current_page);
    let mut layout = Vec::with_capacity(SELECTOR_BLOCK_LEN + 4);

    if current_page > 3 && start > 1 {
        layout.push(SelectorEntry::Page(1));
        if current_page > 4 {
            layout.push(SelectorEntry::Ellipsis);
        }
    }

    layout.extend((start..=end).map(SelectorEntry::Page));

    if current_page.saturating_add(2) < total_pages && end < total_pages {
        if current_page.saturating_add(3) < total_pages {
            layout.push(SelectorEntry::Ellipsis);
        }
        layout.push(SelectorEntry::Page(total_pages));
    }

    layout
}
