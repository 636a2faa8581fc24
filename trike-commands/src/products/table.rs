//! Text rendering for the product table and product details.

use trike_api::ProductData;
use trike_utils::{
    format::{format_price, truncate_chars},
    pagination::{PageView, page_size_picker, pagination_footer, showing_summary},
};

/// Colour swatches shown per row before collapsing into `+k`.
pub const MAX_ROW_COLORS: usize = 4;

const DESCRIPTION_WIDTH: usize = 60;
const EMPTY_STATE: &str =
    "No Products Found\nStart by adding your first electric vehicle product.";

/// Render the visible page of products with header and pagination footer.
pub fn render_table(view: &PageView<'_, ProductData>, page_size: usize) -> String {
    if view.total_items == 0 {
        return EMPTY_STATE.to_owned();
    }

    let mut out = format!(
        "Products\n{}    {}\n",
        showing_summary(view, "products"),
        page_size_picker(page_size)
    );

    for product in view.visible_items {
        out.push('\n');
        out.push_str(&render_row(product));
    }

    if let Some(footer) = pagination_footer(view) {
        out.push_str("\n\n");
        out.push_str(&footer);
    }

    out
}

/// One product as two table lines: summary columns, then the description.
pub fn render_row(product: &ProductData) -> String {
    let id = product
        .id
        .map_or_else(|| "#-".to_owned(), |id| format!("#{id}"));
    let model = product
        .model
        .as_deref()
        .filter(|model| !model.is_empty())
        .map(|model| format!(" ({model})"))
        .unwrap_or_default();
    let category = product.category.as_deref().unwrap_or("Uncategorized");

    let mut line = format!(
        "{id:<5} {}{model}  [{category}]  {}",
        product.name,
        price_label(product)
    );

    let colors = color_summary(product);
    if !colors.is_empty() {
        line.push_str("  ");
        line.push_str(&colors);
    }

    line.push_str("  ");
    line.push_str(&status_label(product));

    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str("\n      ");
        line.push_str(&truncate_chars(description, DESCRIPTION_WIDTH));
    }

    line
}

/// Full detail block for a single product.
pub fn render_detail(product: &ProductData) -> String {
    let mut out = render_row(product)
        .lines()
        .next()
        .unwrap_or_default()
        .to_owned();

    let discount = product.discount_percent();
    if discount > 0 {
        out.push_str(&format!("\nSave {discount}%"));
    }

    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("\n\n{description}"));
    }

    if let Some(colors) = product.colors.as_ref().filter(|colors| !colors.is_empty()) {
        out.push_str("\n\nColors:");
        for color in colors {
            out.push_str(&format!("\n  - {} {}", color.name, color.value));
        }
    }

    if let Some(uses) = product.ideal_for.as_ref().filter(|uses| !uses.is_empty()) {
        out.push_str(&format!("\n\nIdeal For: {}", uses.join(", ")));
    }

    let specs = product
        .specifications
        .as_ref()
        .map(|specs| specs.entries())
        .unwrap_or_default();
    if !specs.is_empty() {
        out.push_str("\n\nTechnical Specifications:");
        for (label, value) in specs {
            out.push_str(&format!("\n  {label}: {value}"));
        }
    }

    if let Some(images) = product.images.as_ref().filter(|images| !images.is_empty()) {
        out.push_str("\n\nImages:");
        for image in images {
            out.push_str(&format!("\n  - {image}"));
        }
    }

    out
}

fn price_label(product: &ProductData) -> String {
    let mut label = product
        .price
        .map_or_else(|| "no price".to_owned(), format_price);

    if let (Some(price), Some(original)) = (product.price, product.original_price)
        && original > price
    {
        label.push_str(&format!(" (was {})", format_price(original)));
    }

    label
}

fn color_summary(product: &ProductData) -> String {
    let Some(colors) = product.colors.as_ref() else {
        return String::new();
    };

    let extra = colors.len().saturating_sub(MAX_ROW_COLORS);
    let mut names: Vec<String> = colors
        .iter()
        .take(MAX_ROW_COLORS)
        .map(|color| color.name.clone())
        .collect();
    if extra > 0 {
        names.push(format!("+{extra}"));
    }

    names.join(", ")
}

fn status_label(product: &ProductData) -> String {
    let stock = if product.in_stock {
        "In Stock"
    } else {
        "Out of Stock"
    };

    if product.featured {
        format!("{stock}, Featured")
    } else {
        stock.to_owned()
    }
}
