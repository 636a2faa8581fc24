//! Product table commands: paging, page size, details, delete, refresh.

pub mod table;

use tracing::{error, info};
use trike_api::ProductData;
use trike_core::Context;
use trike_utils::{
    pagination::{Paginator, parse_one_based_page},
    parse::{parse_page_size, parse_product_id},
};

use crate::CommandMeta;

pub const META_PRODUCTS: CommandMeta = CommandMeta {
    name: "products",
    desc: "Show the product table, optionally at a page.",
    category: "products",
    usage: "products [page]",
};

pub const META_PAGE: CommandMeta = CommandMeta {
    name: "page",
    desc: "Jump to a page of the product table.",
    category: "products",
    usage: "page <n>",
};

pub const META_NEXT: CommandMeta = CommandMeta {
    name: "next",
    desc: "Go to the next page.",
    category: "products",
    usage: "next",
};

pub const META_PREV: CommandMeta = CommandMeta {
    name: "prev",
    desc: "Go to the previous page.",
    category: "products",
    usage: "prev",
};

pub const META_FIRST: CommandMeta = CommandMeta {
    name: "first",
    desc: "Go to the first page.",
    category: "products",
    usage: "first",
};

pub const META_LAST: CommandMeta = CommandMeta {
    name: "last",
    desc: "Go to the last page.",
    category: "products",
    usage: "last",
};

pub const META_SIZE: CommandMeta = CommandMeta {
    name: "size",
    desc: "Change products per page (returns to page 1).",
    category: "products",
    usage: "size <5|10|25|50|n>",
};

pub const META_SHOW: CommandMeta = CommandMeta {
    name: "show",
    desc: "Show every detail of one product.",
    category: "products",
    usage: "show <id>",
};

pub const META_DELETE: CommandMeta = CommandMeta {
    name: "delete",
    desc: "Delete a product through the API.",
    category: "products",
    usage: "delete <id>",
};

pub const META_REFRESH: CommandMeta = CommandMeta {
    name: "refresh",
    desc: "Reload the product list from the API.",
    category: "products",
    usage: "refresh",
};

/// Product table view state.
pub struct ProductTable {
    pager: Paginator<ProductData>,
    loaded: bool,
}

impl ProductTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            pager: Paginator::new(Vec::new(), page_size),
            loaded: false,
        }
    }

    /// Install a freshly fetched product list.
    pub fn load(&mut self, products: Vec<ProductData>) {
        self.pager.replace_items(products);
        self.loaded = true;
    }

    pub fn pager(&self) -> &Paginator<ProductData> {
        &self.pager
    }

    /// Render the current page.
    pub fn render(&self) -> String {
        if !self.loaded {
            return "Products are not loaded yet. Run `refresh`.".to_owned();
        }

        table::render_table(&self.pager.view(), self.pager.page_size())
    }

    fn find(&self, id: u64) -> Option<&ProductData> {
        self.pager.items().iter().find(|product| product.id == Some(id))
    }
}

/// `products [page]`
pub fn list(table: &mut ProductTable, arg1: Option<&str>) -> String {
    if arg1.is_none() {
        return table.render();
    }

    page(table, arg1)
}

/// `page <n>`
///
/// Error behavior:
/// - returns usage text on invalid page input.
/// - returns bounds text when the requested page is out of range.
pub fn page(table: &mut ProductTable, arg1: Option<&str>) -> String {
    let Some(requested_page) = arg1.and_then(|raw| parse_one_based_page(Some(raw))) else {
        return format!("Usage: `{}` (page starts at 1)", META_PAGE.usage);
    };

    let total = table.pager.total_pages();
    if requested_page > total {
        return format!("Page {requested_page} does not exist. Available pages: 1-{total}.");
    }

    table.pager.set_page(requested_page);
    table.render()
}

pub fn next(table: &mut ProductTable) -> String {
    if !table.pager.has_next() {
        return "Already on the last page.".to_owned();
    }

    table.pager.next_page();
    table.render()
}

pub fn prev(table: &mut ProductTable) -> String {
    if !table.pager.has_previous() {
        return "Already on the first page.".to_owned();
    }

    table.pager.previous_page();
    table.render()
}

pub fn first(table: &mut ProductTable) -> String {
    table.pager.first_page();
    table.render()
}

pub fn last(table: &mut ProductTable) -> String {
    table.pager.last_page();
    table.render()
}

/// `size <n>`: any positive size; always returns to page 1.
pub fn size(table: &mut ProductTable, arg1: Option<&str>) -> String {
    let Some(page_size) = arg1.and_then(parse_page_size) else {
        return format!("Usage: `{}` (size must be at least 1)", META_SIZE.usage);
    };

    table.pager.set_page_size(page_size);
    table.render()
}

/// `show <id>`
pub fn show(table: &ProductTable, arg1: Option<&str>) -> String {
    let Some(id) = arg1.and_then(parse_product_id) else {
        return format!("Usage: `{}`", META_SHOW.usage);
    };

    match table.find(id) {
        Some(product) => table::render_detail(product),
        None => format!("Product #{id} is not in the loaded list."),
    }
}

/// `delete <id>`
///
/// Removes the product locally only after the API confirms the delete.
pub async fn delete(
    ctx: &Context,
    table: &mut ProductTable,
    arg1: Option<&str>,
) -> anyhow::Result<String> {
    let Some(id) = arg1.and_then(parse_product_id) else {
        return Ok(format!("Usage: `{}`", META_DELETE.usage));
    };

    if let Err(source) = ctx.api.delete_product(id).await {
        error!(?source, product_id = id, "product delete failed");
        return Ok(format!("Failed to delete product #{id}: {source}"));
    }

    info!(product_id = id, "product deleted");
    let removed = table.pager.remove_first(|product| product.id == Some(id));
    let headline = match removed {
        Some(product) => format!("Deleted {} (#{id}).", product.name),
        None => format!("Deleted product #{id}."),
    };

    Ok(format!("{headline}\n\n{}", table.render()))
}

/// `refresh`
///
/// A failed fetch keeps whatever list was loaded before.
pub async fn refresh(ctx: &Context, table: &mut ProductTable) -> anyhow::Result<String> {
    match ctx.api.products().await {
        Ok(products) => {
            info!(count = products.len(), "products loaded");
            table.load(products);
            Ok(table.render())
        }
        Err(source) => {
            error!(?source, "failed to load products");
            Ok(format!("Failed to load products: {source}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> ProductData {
        ProductData {
            id: Some(id),
            name: format!("Trike {id}"),
            model: None,
            description: None,
            category: None,
            price: Some(1000.0),
            original_price: None,
            colors: None,
            images: None,
            in_stock: true,
            featured: false,
            ideal_for: None,
            specifications: None,
        }
    }

    fn loaded(count: u64) -> ProductTable {
        let mut table = ProductTable::new(10);
        table.load((1..=count).map(product).collect());
        table
    }

    #[test]
    fn unloaded_table_asks_for_refresh() {
        let table = ProductTable::new(10);

        assert!(table.render().contains("Run `refresh`"));
    }

    #[test]
    fn page_validates_input() {
        let mut table = loaded(23);

        assert_eq!(page(&mut table, None), "Usage: `page <n>` (page starts at 1)");
        assert_eq!(
            page(&mut table, Some("0")),
            "Usage: `page <n>` (page starts at 1)"
        );
        assert_eq!(
            page(&mut table, Some("4")),
            "Page 4 does not exist. Available pages: 1-3."
        );

        page(&mut table, Some("3"));
        assert_eq!(table.pager().current_page(), 3);
    }

    #[test]
    fn next_and_prev_stop_at_the_ends() {
        let mut table = loaded(23);

        assert_eq!(prev(&mut table), "Already on the first page.");
        last(&mut table);
        assert_eq!(next(&mut table), "Already on the last page.");
        prev(&mut table);
        assert_eq!(table.pager().current_page(), 2);
        first(&mut table);
        assert_eq!(table.pager().current_page(), 1);
    }

    #[test]
    fn size_resets_to_first_page() {
        let mut table = loaded(100);
        page(&mut table, Some("5"));

        let out = size(&mut table, Some("25"));

        assert_eq!(table.pager().current_page(), 1);
        assert_eq!(table.pager().window(), 0..25);
        assert!(out.contains("Showing 1 to 25 of 100 products"));
        assert!(out.contains("Show: 5 10 [25] 50 per page"));
    }

    #[test]
    fn size_rejects_zero() {
        let mut table = loaded(5);

        assert!(size(&mut table, Some("0")).starts_with("Usage:"));
        assert_eq!(table.pager().page_size(), 10);
    }

    #[test]
    fn show_finds_loaded_products() {
        let table = loaded(3);

        assert!(show(&table, Some("#2")).starts_with("#2"));
        assert_eq!(show(&table, Some("9")), "Product #9 is not in the loaded list.");
        assert_eq!(show(&table, None), "Usage: `show <id>`");
    }

    #[test]
    fn reload_clamps_current_page() {
        let mut table = loaded(30);
        last(&mut table);

        table.load((1..=12).map(product).collect());

        assert_eq!(table.pager().current_page(), 2);
    }
}
