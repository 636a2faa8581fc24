//! Text composition helpers for paginated views.

use super::PAGE_SIZE_OPTIONS;
use super::selector::SelectorEntry;
use super::session::PageView;

const PREVIOUS_LABEL: &str = "< Previous";
const NEXT_LABEL: &str = "Next >";
const ELLIPSIS: &str = "...";

/// "Showing X to Y of N {noun}" header line.
pub fn showing_summary<T>(view: &PageView<'_, T>, noun: &str) -> String {
    let first = if view.total_items == 0 {
        0
    } else {
        view.range.start + 1
    };
    format!(
        "Showing {} to {} of {} {}",
        first, view.range.end, view.total_items, noun
    )
}

/// Page-size picker with the active size bracketed.
pub fn page_size_picker(active: usize) -> String {
    let mut parts: Vec<String> = PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| {
            if *size == active {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();

    if !PAGE_SIZE_OPTIONS.contains(&active) {
        parts.push(format!("[{active}]"));
    }

    format!("Show: {} per page", parts.join(" "))
}

/// Render selector entries with the current page bracketed.
pub fn render_selector(selector: &[SelectorEntry], current_page: usize) -> String {
    selector
        .iter()
        .map(|entry| match entry {
            SelectorEntry::Page(page) if *page == current_page => format!("[{page}]"),
            SelectorEntry::Page(page) => page.to_string(),
            SelectorEntry::Ellipsis => ELLIPSIS.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Footer with page position, previous/next affordances, and the selector.
///
/// Returns `None` when the list fits on a single page.
pub fn pagination_footer<T>(view: &PageView<'_, T>) -> Option<String> {
    if !view.shows_selector() {
        return None;
    }

    let previous = nav_label(PREVIOUS_LABEL, view.has_previous);
    let next = nav_label(NEXT_LABEL, view.has_next);

    Some(format!(
        "Page {} of {}   {}  {}  {}",
        view.current_page,
        view.total_pages,
        previous,
        render_selector(&view.selector, view.current_page),
        next
    ))
}

fn nav_label(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_owned()
    } else {
        format!("({label})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Paginator;

    #[test]
    fn summary_counts_from_one() {
        let mut pager = Paginator::new((0..23).collect::<Vec<_>>(), 10);
        pager.last_page();

        assert_eq!(
            showing_summary(&pager.view(), "products"),
            "Showing 21 to 23 of 23 products"
        );
    }

    #[test]
    fn summary_for_empty_list() {
        let pager: Paginator<u8> = Paginator::new(Vec::new(), 10);

        assert_eq!(
            showing_summary(&pager.view(), "products"),
            "Showing 0 to 0 of 0 products"
        );
    }

    #[test]
    fn footer_marks_disabled_ends() {
        let pager = Paginator::new((0..23).collect::<Vec<_>>(), 10);

        assert_eq!(
            pagination_footer(&pager.view()).as_deref(),
            Some("Page 1 of 3   (< Previous)  [1] 2 3  Next >")
        );
    }

    #[test]
    fn footer_hidden_for_single_page() {
        let pager = Paginator::new(vec![1, 2, 3], 10);

        assert_eq!(pagination_footer(&pager.view()), None);
    }

    #[test]
    fn selector_brackets_current_page() {
        let mut pager = Paginator::new((0..100).collect::<Vec<_>>(), 10);
        pager.set_page(5);

        assert_eq!(
            render_selector(&pager.selector(), 5),
            "1 ... 3 4 [5] 6 7 ... 10"
        );
    }

    #[test]
    fn picker_shows_custom_sizes() {
        assert_eq!(page_size_picker(10), "Show: 5 [10] 25 50 per page");
        assert_eq!(page_size_picker(7), "Show: 5 10 25 50 [7] per page");
    }
}
