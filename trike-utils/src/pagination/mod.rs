//! Stable facade for pagination helpers used by table views.

/// Page sizes offered by table page-size pickers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
/// Page size a table opens with.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Maximum number of pages in the selector's contiguous block.
pub const SELECTOR_BLOCK_LEN: usize = 5;

mod page;
mod selector;
mod session;
mod view;

pub use page::{clamp_page, normalize_page_size, page_window, parse_one_based_page, total_pages};
pub use selector::{SelectorEntry, selector_block, selector_layout};
pub use session::{PageView, Paginator};
pub use view::{page_size_picker, pagination_footer, render_selector, showing_summary};
