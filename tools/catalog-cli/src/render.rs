//! Terminal rendering of catalog views.

use catalog_commerce::catalog::{format_category_name, Category, Product};
use catalog_commerce::search::Pagination;
use catalog_commerce::format_price;
use catalog_store::CatalogView;
use console::style;

use crate::output::{status_badge, truncate, Output};

const ID_WIDTH: usize = 5;
const CATEGORY_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 18;
const RATING_WIDTH: usize = 5;
const STOCK_WIDTH: usize = 5;
const MIN_TITLE_WIDTH: usize = 20;
const MAX_TITLE_WIDTH: usize = 48;

/// Page numbers shown in the pager.
const PAGER_WIDTH: usize = 5;

/// Price column: discounted price, with the discount when there is one.
pub fn price_cell(product: &Product) -> String {
    let price = format_price(product.discounted_price());
    if product.has_discount() {
        format!("{} (-{:.0}%)", price, product.discount_percentage)
    } else {
        price
    }
}

/// `« 3 4 [5] 6 7 »`; arrows only when there is somewhere to go.
pub fn pager(pagination: &Pagination) -> String {
    let mut parts = Vec::new();
    if pagination.has_prev() {
        parts.push("«".to_string());
    }
    for page in pagination.page_numbers(PAGER_WIDTH) {
        if page == pagination.current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if pagination.has_next() {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

/// `Showing 13-24 of 100 products (Page 2 of 9)`.
pub fn showing_line(pagination: &Pagination) -> String {
    format!(
        "Showing {}-{} of {} products (Page {} of {})",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total_items,
        pagination.current_page,
        pagination.total_pages
    )
}

/// One-line summary of the active filters.
pub fn filter_summary(view: &CatalogView) -> String {
    let category = view
        .category_name()
        .map(str::to_string)
        .unwrap_or_else(|| "All Categories".to_string());
    let mut summary = format!("{} · {}", category, view.filters.sort_by.display_name());
    if !view.filters.search_term.trim().is_empty() {
        summary.push_str(&format!(" · search \"{}\"", view.filters.search_term));
    }
    summary
}

/// Shown under a load error.
const RETRY_HINT: &str = ":retry to load again, :dismiss to hide this message";

/// What the main panel of a catalog page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
    Loading,
    /// A load error replaces the list entirely.
    Error(&'a str),
    Empty,
    Products,
}

/// Pick the panel for a view.
pub fn panel(view: &CatalogView) -> Panel<'_> {
    if view.loading {
        Panel::Loading
    } else if let Some(error) = &view.error {
        Panel::Error(error)
    } else if view.snapshot.is_empty() {
        Panel::Empty
    } else {
        Panel::Products
    }
}

/// Full page: header, then either the error panel or the product table and pager.
pub fn catalog_page(output: &Output, view: &CatalogView) {
    output.header(&format!("Products ({})", filter_summary(view)));
    output.kv("status", &status_badge(view.status));

    match panel(view) {
        Panel::Loading => {
            output.info("Loading products...");
            return;
        }
        Panel::Error(error) => {
            output.error(error);
            output.line(&format!("  {}", style(RETRY_HINT).dim()));
            return;
        }
        Panel::Empty => output.info("No products found. Try adjusting your search or filters."),
        Panel::Products => product_table(output, view.products()),
    }

    output.line("");
    output.line(&format!("  {}", style(showing_line(view.pagination())).dim()));
    if view.pagination().total_pages > 1 {
        output.line(&format!("  {}", pager(view.pagination())));
    }
}

/// Product rows.
pub fn product_table(output: &Output, products: &[Product]) {
    let fixed = ID_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH + RATING_WIDTH + STOCK_WIDTH + 2 * 6 + 2;
    let title_width = output
        .term_width()
        .saturating_sub(fixed)
        .clamp(MIN_TITLE_WIDTH, MAX_TITLE_WIDTH);
    let widths = [
        ID_WIDTH,
        title_width,
        CATEGORY_WIDTH,
        PRICE_WIDTH,
        RATING_WIDTH,
        STOCK_WIDTH,
    ];

    output.table_header(&["ID", "Title", "Category", "Price", "Rating", "Stock"], &widths);
    for product in products {
        let id = product.id.to_string();
        let title = truncate(&product.title, title_width);
        let category = truncate(&format_category_name(&product.category), CATEGORY_WIDTH);
        let price = price_cell(product);
        let rating = format!("{:.1}", product.rating);
        let stock = product.stock.to_string();
        output.table_row(
            &[
                id.as_str(),
                title.as_str(),
                category.as_str(),
                price.as_str(),
                rating.as_str(),
                stock.as_str(),
            ],
            &widths,
        );
    }
}

/// Detail view of one product.
pub fn product_detail(output: &Output, product: &Product, categories: &[Category]) {
    let category = categories
        .iter()
        .find(|category| category.slug == product.category)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| format_category_name(&product.category));

    output.header(&product.title);
    output.kv("id", &product.id.to_string());
    if let Some(brand) = &product.brand {
        output.kv("brand", brand);
    }
    output.kv("category", &category);

    let price = format_price(product.discounted_price());
    if product.has_discount() {
        output.kv(
            "price",
            &format!(
                "{} {} {}",
                style(price).green().bold(),
                style(format_price(product.price)).dim(),
                style(format!("-{:.0}%", product.discount_percentage)).red()
            ),
        );
    } else {
        output.kv("price", &style(price).green().bold().to_string());
    }

    output.kv(
        "rating",
        &format!("{} ({:.1})", style(product.stars()).yellow(), product.rating),
    );
    let stock = if product.is_in_stock() {
        style(format!("{} in stock", product.stock)).green().to_string()
    } else {
        style("Out of stock").red().to_string()
    };
    output.kv("stock", &stock);

    if !product.description.is_empty() {
        output.line("");
        output.line(&format!("  {}", product.description));
    }

    let gallery = product.gallery();
    if gallery.iter().any(|url| !url.is_empty()) {
        output.line("");
        output.line(&format!("  {}", style("Images").bold()));
        for url in gallery.into_iter().filter(|url| !url.is_empty()) {
            output.list_item(url);
        }
    }
}

/// Category list with the number of loaded products in each.
pub fn category_list(output: &Output, categories: &[Category], counts: &[usize]) {
    let width = categories
        .iter()
        .map(|category| category.slug.chars().count())
        .max()
        .unwrap_or(0);

    output.table_header(&["Slug", "Name", "Loaded"], &[width, 24, 6]);
    for (category, count) in categories.iter().zip(counts) {
        output.table_row(
            &[
                category.slug.as_str(),
                category.name.as_str(),
                count.to_string().as_str(),
            ],
            &[width, 24, 6],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_commerce::search::{pipeline, FilterState, PageRequest, SortOption};
    use catalog_store::LoadStatus;

    #[test]
    fn test_price_cell() {
        let plain = Product::new(1, "Lamp", 40.0);
        assert_eq!(price_cell(&plain), "$40.00");

        let discounted = Product::new(2, "Sofa", 1000.0).with_discount(25.0);
        assert_eq!(price_cell(&discounted), "$750.00 (-25%)");
    }

    #[test]
    fn test_pager_marks_current_page() {
        let pagination = Pagination::new(5, 10, 100);
        assert_eq!(pager(&pagination), "« 3 4 [5] 6 7 »");

        let first = Pagination::new(1, 12, 25);
        assert_eq!(pager(&first), "[1] 2 3 »");

        let last = Pagination::new(3, 12, 25);
        assert_eq!(pager(&last), "« 1 2 [3]");
    }

    #[test]
    fn test_showing_line() {
        assert_eq!(
            showing_line(&Pagination::new(2, 12, 100)),
            "Showing 13-24 of 100 products (Page 2 of 9)"
        );
        assert_eq!(
            showing_line(&Pagination::new(1, 12, 0)),
            "Showing 0-0 of 0 products (Page 1 of 1)"
        );
    }

    #[test]
    fn test_filter_summary() {
        let view = CatalogView {
            filters: FilterState::new()
                .with_category("home-decoration")
                .with_sort(SortOption::PriceDesc)
                .with_search("lamp"),
            categories: vec![Category::from_slug("home-decoration")],
            ..Default::default()
        };
        let summary = filter_summary(&view);
        assert!(summary.starts_with("Home Decoration · "));
        assert!(summary.ends_with("search \"lamp\""));

        let plain = filter_summary(&CatalogView::default());
        assert!(plain.starts_with("All Categories · "));
        assert!(!plain.contains("search"));
    }

    #[test]
    fn test_error_replaces_product_list() {
        let snapshot = pipeline::apply(
            &[Product::new(1, "Lamp", 40.0), Product::new(2, "Rug", 25.0)],
            &FilterState::new(),
            PageRequest::default(),
        );
        let mut view = CatalogView {
            snapshot,
            status: LoadStatus::Failed,
            error: Some("HTTP error! status: 503 (https://dummyjson.com/products)".into()),
            ..Default::default()
        };
        assert!(!view.snapshot.is_empty());
        assert_eq!(
            panel(&view),
            Panel::Error("HTTP error! status: 503 (https://dummyjson.com/products)")
        );

        view.error = None;
        assert_eq!(panel(&view), Panel::Products);
    }

    #[test]
    fn test_panel_loading_and_empty() {
        let loading = CatalogView {
            status: LoadStatus::Loading,
            loading: true,
            ..Default::default()
        };
        assert_eq!(panel(&loading), Panel::Loading);

        let empty = CatalogView {
            status: LoadStatus::Ready,
            ..Default::default()
        };
        assert_eq!(panel(&empty), Panel::Empty);
    }
}
