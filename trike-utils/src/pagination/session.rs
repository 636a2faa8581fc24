//! Pagination session state owned by a table view.

use std::ops::Range;

use super::page::{clamp_page, normalize_page_size, page_window, total_pages};
use super::selector::{SelectorEntry, selector_layout};

/// Items, page size, and current page for one paginated table.
///
/// Everything else (window, selector, totals) is recomputed on demand from
/// these three values.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

/// Snapshot handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub visible_items: &'a [T],
    pub selector: Vec<SelectorEntry>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Item range of the visible window, used for "Showing X to Y of N".
    pub range: Range<usize>,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<'a, T> PageView<'a, T> {
    /// Whether the page selector should be rendered at all.
    pub fn shows_selector(&self) -> bool {
        self.total_pages > 1
    }
}

impl<T> Paginator<T> {
    /// Start a session on page 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: normalize_page_size(page_size),
            current_page: 1,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Item range shown on the current page.
    pub fn window(&self) -> Range<usize> {
        page_window(self.items.len(), self.page_size, self.current_page)
    }

    /// Items shown on the current page.
    pub fn visible(&self) -> &[T] {
        &self.items[self.window()]
    }

    pub fn selector(&self) -> Vec<SelectorEntry> {
        selector_layout(self.total_pages(), self.current_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Change the page size. Always returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = normalize_page_size(page_size);
        self.current_page = 1;
    }

    /// Move to `page`, clamped into the valid range. Returns the page landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = clamp_page(page, self.total_pages());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> usize {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.set_page(self.total_pages())
    }

    /// Swap in a fresh item list, keeping the page when it still exists.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_current_page();
    }

    /// Remove the first item matching `predicate`, pulling the current page
    /// back if it no longer exists.
    pub fn remove_first(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(predicate)?;
        let removed = self.items.remove(index);
        self.clamp_current_page();
        Some(removed)
    }

    pub fn view(&self) -> PageView<'_, T> {
        let range = self.window();
        PageView {
            visible_items: &self.items[range.clone()],
            selector: self.selector(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            range,
            total_items: self.items.len(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    fn clamp_current_page(&mut self) {
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }
}
