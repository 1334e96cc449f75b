//! Inventory page and its JSON twin.
//!
//! [`summarize`] holds the filtering and stats so `/inventory` and
//! `/api/inventory` always agree. Catalog commands render as POST forms
//! that the server answers with 501.

use super::format::{fill, format_percent, format_rupees};
use super::html::HtmlBuilder;
use super::layout::page;
use crate::catalog::ProductStatus;
use crate::metrics::{self, CategoryShare, ALL_STATUSES};
use crate::shell::{Route, ViewContext};
use serde::Serialize;

/// Status filter choices in the order the select lists them.
const STATUS_OPTIONS: [(&str, Option<ProductStatus>); 4] = [
    (ALL_STATUSES, None),
    ("in stock", Some(ProductStatus::InStock)),
    ("low stock", Some(ProductStatus::LowStock)),
    ("out of stock", Some(ProductStatus::OutOfStock)),
];

/// One visible inventory row.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRow {
    /// 1-based position in the filtered list
    pub serial: usize,
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub stock: u32,
    pub price: f64,
    pub status: ProductStatus,
    pub status_label: &'static str,
    /// False when the authored status disagrees with the stock level
    pub status_consistent: bool,
}

/// The inventory page's data, shared by the HTML view and the JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub language: &'static str,
    pub search: String,
    pub status: String,
    pub total_items: usize,
    pub low_stock: usize,
    pub categories: usize,
    pub total_value: f64,
    /// Stock value per category in the active language
    pub value_by_category: Vec<CategoryShare<'static>>,
    pub shown: usize,
    pub rows: Vec<InventoryRow>,
}

/// Filter the catalog and compute the inventory stats.
///
/// Stats cover the whole catalog; only `rows` follows the filter.
pub fn summarize(ctx: &ViewContext<'_>, search: &str, status: &str) -> InventorySummary {
    let products = ctx.catalog.products;
    let status = if status.is_empty() { ALL_STATUSES } else { status };

    let rows: Vec<InventoryRow> = metrics::filter_products(products, search, status, ctx.language)
        .into_iter()
        .filter_map(|product| {
            Some((
                product,
                product.name.get(ctx.language)?,
                product.category.get(ctx.language)?,
            ))
        })
        .enumerate()
        .map(|(index, (product, name, category))| InventoryRow {
            serial: index + 1,
            id: product.id,
            name,
            category,
            stock: product.stock,
            price: product.price,
            status: product.status,
            status_label: product.status.label(ctx.strings),
            status_consistent: metrics::derived_status(product.stock, ctx.low_stock_threshold)
                == product.status,
        })
        .collect();

    InventorySummary {
        language: ctx.language.code(),
        search: search.to_string(),
        status: status.to_string(),
        total_items: products.len(),
        low_stock: metrics::low_stock_count(products),
        categories: metrics::distinct_category_count(products),
        total_value: metrics::total_stock_value(products),
        value_by_category: metrics::stock_value_by_category(products, ctx.language),
        shown: rows.len(),
        rows,
    }
}

/// Inventory page: stats, search/filter form, product table.
pub fn render(ctx: &ViewContext<'_>, search: &str, status: &str) -> String {
    let summary = summarize(ctx, search, status);
    let labels = &ctx.strings.inventory;

    page(ctx, labels.title, |html| {
        html.element("h1", &[], labels.title);
        stats(html, ctx, &summary);
        filter_form(html, ctx, &summary);

        html.open(
            "form",
            &[("method", "post"), ("action", "/inventory/products")],
        )
        .element("button", &[("type", "submit")], &format!("+ {}", labels.add_product))
        .close("form");

        product_table(html, ctx, &summary);

        let results = fill(
            labels.results_summary,
            &[
                ("shown", summary.shown.to_string()),
                ("total", summary.total_items.to_string()),
            ],
        );
        html.element("p", &[("class", "results")], &results);

        value_by_category(html, ctx, &summary);
    })
}

fn stats(html: &mut HtmlBuilder, ctx: &ViewContext<'_>, summary: &InventorySummary) {
    let labels = &ctx.strings.inventory;
    let cards = [
        (labels.total_items, summary.total_items.to_string()),
        (labels.low_stock, summary.low_stock.to_string()),
        (labels.categories, summary.categories.to_string()),
        (labels.value, format_rupees(summary.total_value)),
    ];

    html.open("div", &[("class", "grid")]);
    for (label, value) in &cards {
        html.open("div", &[("class", "card")])
            .element("div", &[("class", "label")], label)
            .element("div", &[("class", "value")], value)
            .close("div");
    }
    html.close("div");
}

fn value_by_category(html: &mut HtmlBuilder, ctx: &ViewContext<'_>, summary: &InventorySummary) {
    let labels = &ctx.strings.inventory;

    html.element("h2", &[], labels.value_by_category)
        .open("table", &[("class", "category-value")])
        .open("tr", &[])
        .element("th", &[], labels.category)
        .element("th", &[], labels.value)
        .element("th", &[], ctx.strings.reports.share)
        .close("tr");
    for share in &summary.value_by_category {
        html.open("tr", &[])
            .element("td", &[], share.category)
            .element("td", &[], &format_rupees(share.total))
            .element("td", &[], &format_percent(share.percentage))
            .close("tr");
    }
    html.close("table");
}

fn status_option_label(ctx: &ViewContext<'_>, status: Option<ProductStatus>) -> &'static str {
    match status {
        Some(status) => status.label(ctx.strings),
        None => ctx.strings.inventory.all,
    }
}

fn filter_form(html: &mut HtmlBuilder, ctx: &ViewContext<'_>, summary: &InventorySummary) {
    let labels = &ctx.strings.inventory;

    html.open("form", &[("method", "get"), ("action", Route::Inventory.path())])
        .void(
            "input",
            &[
                ("type", "search"),
                ("name", "q"),
                ("value", summary.search.as_str()),
                ("placeholder", labels.search),
            ],
        )
        .open("select", &[("name", "status")]);

    for (value, status) in STATUS_OPTIONS {
        let label = status_option_label(ctx, status);
        if summary.status == value {
            html.element("option", &[("value", value), ("selected", "selected")], label);
        } else {
            html.element("option", &[("value", value)], label);
        }
    }

    html.close("select")
        .element("button", &[("type", "submit")], labels.filter)
        .close("form");
}

fn status_class(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::InStock => "badge status-in-stock",
        ProductStatus::LowStock => "badge status-low-stock",
        ProductStatus::OutOfStock => "badge status-out-of-stock",
    }
}

fn inline_post(action: &str) -> [(&'static str, &str); 3] {
    [("class", "inline"), ("method", "post"), ("action", action)]
}

fn product_table(html: &mut HtmlBuilder, ctx: &ViewContext<'_>, summary: &InventorySummary) {
    let labels = &ctx.strings.inventory;

    html.open("table", &[("class", "inventory")]).open("tr", &[]);
    for heading in [
        labels.sn,
        labels.name,
        labels.category,
        labels.stock,
        labels.price,
        labels.status,
        labels.actions,
    ] {
        html.element("th", &[], heading);
    }
    html.close("tr");

    for row in &summary.rows {
        let edit_action = format!("/inventory/products/{}/edit", row.id);
        let delete_action = format!("/inventory/products/{}/delete", row.id);
        let row_class = if row.status_consistent { "" } else { "mismatch" };

        html.open("tr", &[("class", row_class)])
            .element("td", &[], &row.serial.to_string())
            .element("td", &[], row.name)
            .element("td", &[], row.category)
            .element("td", &[], &row.stock.to_string())
            .element("td", &[], &format_rupees(row.price))
            .open("td", &[])
            .element("span", &[("class", status_class(row.status))], row.status_label)
            .close("td")
            .open("td", &[])
            .open("form", &inline_post(&edit_action))
            .element("button", &[("type", "submit")], labels.edit)
            .close("form")
            .open("form", &inline_post(&delete_action))
            .element("button", &[("type", "submit")], labels.delete)
            .close("form")
            .close("td")
            .close("tr");
    }

    html.close("table");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::i18n::Language;

    fn ctx(language: Language, catalog: &Catalog) -> ViewContext<'_> {
        ViewContext::new(language, Route::Inventory, catalog)
    }

    // ==================== Summary Tests ====================

    #[test]
    fn test_summary_without_filters() {
        let catalog = Catalog::sample();
        let summary = summarize(&ctx(Language::ENGLISH, &catalog), "", ALL_STATUSES);

        assert_eq!(summary.total_items, 14);
        assert_eq!(summary.low_stock, 3);
        assert_eq!(summary.categories, 6);
        assert_eq!(summary.total_value, 610_600.0);
        assert_eq!(summary.shown, 14);
        assert_eq!(summary.rows[0].serial, 1);
        assert_eq!(summary.rows[13].serial, 14);
    }

    #[test]
    fn test_summary_stats_ignore_filter() {
        let catalog = Catalog::sample();
        let summary = summarize(&ctx(Language::ENGLISH, &catalog), "buddha", ALL_STATUSES);

        assert_eq!(summary.total_items, 14);
        assert_eq!(summary.shown, 2);
        let ids: Vec<u32> = summary.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![3, 10]);
        assert_eq!(summary.rows[1].serial, 2);
    }

    #[test]
    fn test_summary_empty_status_means_all() {
        let catalog = Catalog::sample();
        let summary = summarize(&ctx(Language::ENGLISH, &catalog), "", "");
        assert_eq!(summary.status, ALL_STATUSES);
        assert_eq!(summary.shown, 14);
    }

    #[test]
    fn test_summary_flags_inconsistent_status() {
        let catalog = Catalog::sample();
        let summary = summarize(&ctx(Language::ENGLISH, &catalog), "", ALL_STATUSES);
        assert!(summary.rows.iter().all(|row| row.status_consistent));

        let strict = ViewContext {
            low_stock_threshold: 6,
            ..ctx(Language::ENGLISH, &catalog)
        };
        let summary = summarize(&strict, "Bronze", ALL_STATUSES);
        assert!(!summary.rows[0].status_consistent);
    }

    #[test]
    fn test_summary_value_by_category_covers_whole_catalog() {
        let catalog = Catalog::sample();
        let summary = summarize(&ctx(Language::ENGLISH, &catalog), "zzz", ALL_STATUSES);

        assert_eq!(summary.shown, 0);
        assert_eq!(summary.value_by_category.len(), 6);
        let total: f64 = summary.value_by_category.iter().map(|share| share.total).sum();
        assert_eq!(total, summary.total_value);
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_low_stock_filter() {
        let catalog = Catalog::sample();
        let html = render(&ctx(Language::ENGLISH, &catalog), "", "low stock");

        assert!(html.contains("<td>Wooden Buddha</td>"));
        assert!(html.contains("<td>Dhaka Topi</td>"));
        assert!(html.contains("<td>Bamboo Basket</td>"));
        assert!(!html.contains("<td>Clay Pot</td>"));
        assert!(html.contains("Showing 3 of 14 products"));
        assert!(html.contains("<option value=\"low stock\" selected=\"selected\">"));
    }

    #[test]
    fn test_render_escapes_search_term() {
        let catalog = Catalog::sample();
        let html = render(&ctx(Language::ENGLISH, &catalog), "<script>", ALL_STATUSES);

        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Showing 0 of 14 products"));
    }

    #[test]
    fn test_render_action_forms() {
        let catalog = Catalog::sample();
        let html = render(&ctx(Language::ENGLISH, &catalog), "", ALL_STATUSES);

        assert!(html.contains("action=\"/inventory/products\""));
        assert!(html.contains("action=\"/inventory/products/7/edit\""));
        assert!(html.contains("action=\"/inventory/products/7/delete\""));
    }

    #[test]
    fn test_render_value_by_category_table() {
        let catalog = Catalog::sample();
        let html = render(&ctx(Language::ENGLISH, &catalog), "", ALL_STATUSES);
        assert!(html.contains("<h2>Stock Value by Category</h2>"));
        assert!(html.contains("<td>Textiles</td><td>रू 120,500</td>"));

        let html = render(&ctx(Language::NEPALI, &catalog), "", ALL_STATUSES);
        assert!(html.contains("<h2>श्रेणी अनुसार स्टक मूल्य</h2>"));
        assert!(html.contains("<td>कपडा</td><td>रू 120,500</td>"));
    }

    #[test]
    fn test_render_nepali_search() {
        let catalog = Catalog::sample();
        let html = render(&ctx(Language::NEPALI, &catalog), "ढाका", ALL_STATUSES);

        assert!(html.contains("<td>ढाका टोपी</td>"));
        assert!(html.contains("<td>ढाका कपडा</td>"));
        assert!(!html.contains("<td>Dhaka Topi</td>"));
        assert!(html.contains("सामान व्यवस्थापन"));
    }
}
