/// Currency and text formatting helpers shared across views.
pub mod format;
/// Pagination engine, selector layout, and table session state.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
