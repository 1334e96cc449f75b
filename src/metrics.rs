//! Derived metrics: aggregates and filters computed from catalog records.
//!
//! Every function here is pure and total. Records with an absent localized
//! field or an unusable number are skipped instead of failing the page.

use crate::catalog::{Product, ProductStatus, SaleRecord, StockAlert};
use crate::i18n::Language;
use serde::Serialize;
use std::collections::BTreeSet;

/// Status filter value that disables status filtering.
pub const ALL_STATUSES: &str = "all";

/// Below this many units the dashboard's category panel flags a product.
pub const STOCK_TONE_THRESHOLD: u32 = 20;

fn usable_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Sum of `price * stock` over all products.
pub fn total_stock_value(products: &[Product]) -> f64 {
    products
        .iter()
        .filter(|product| usable_amount(product.price))
        .map(|product| product.price * f64::from(product.stock))
        .sum()
}

/// Number of products whose authored status is `LowStock`.
pub fn low_stock_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|product| product.status == ProductStatus::LowStock)
        .count()
}

/// Products matching both the search term and the status filter, in input order.
///
/// - The search term matches when it is a case-insensitive substring of the
///   product's localized name or localized category. An empty term matches
///   everything.
/// - The status filter matches when it is [`ALL_STATUSES`] or a
///   case-insensitive substring of the canonical status string
///   ("In Stock", "Low Stock", "Out of Stock").
///
/// A product missing its name or category in `language` never matches.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    status_filter: &str,
    language: Language,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    let status_needle = status_filter.to_lowercase();

    products
        .iter()
        .filter(|product| matches_search(product, &needle, language))
        .filter(|product| status_filter == ALL_STATUSES || matches_status(product, &status_needle))
        .collect()
}

fn matches_search(product: &Product, needle: &str, language: Language) -> bool {
    let (Some(name), Some(category)) = (
        product.name.get(language),
        product.category.get(language),
    ) else {
        return false;
    };

    name.to_lowercase().contains(needle) || category.to_lowercase().contains(needle)
}

fn matches_status(product: &Product, status_needle: &str) -> bool {
    product
        .status
        .as_str()
        .to_lowercase()
        .contains(status_needle)
}

/// One category's part of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare<'a> {
    pub category: &'a str,
    pub total: f64,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Share of a numeric field per category, categories in first-seen order.
///
/// Inputs need not be normalized; percentages are computed against the sum
/// of all usable values. Records without a category or with a negative or
/// non-finite value are skipped. An all-zero input yields no shares.
pub fn category_totals<'a, T, C, V>(
    records: &'a [T],
    category_of: C,
    value_of: V,
) -> Vec<CategoryShare<'a>>
where
    C: Fn(&'a T) -> Option<&'a str>,
    V: Fn(&'a T) -> f64,
{
    let mut shares: Vec<CategoryShare<'a>> = Vec::new();

    for record in records {
        let Some(category) = category_of(record) else {
            continue;
        };
        let value = value_of(record);
        if !usable_amount(value) {
            continue;
        }

        match shares.iter_mut().find(|share| share.category == category) {
            Some(share) => share.total += value,
            None => shares.push(CategoryShare {
                category,
                total: value,
                percentage: 0.0,
            }),
        }
    }

    let grand_total: f64 = shares.iter().map(|share| share.total).sum();
    if grand_total <= 0.0 {
        return Vec::new();
    }

    for share in &mut shares {
        share.percentage = share.total / grand_total * 100.0;
    }
    shares
}

/// Stock value per localized category.
pub fn stock_value_by_category(products: &[Product], language: Language) -> Vec<CategoryShare<'_>> {
    category_totals(
        products,
        |product| product.category.get(language),
        |product| product.price * f64::from(product.stock),
    )
}

/// Sum of sale amounts (the dashboard's "today's sales").
pub fn sales_total(sales: &[SaleRecord]) -> f64 {
    sales
        .iter()
        .map(|sale| sale.amount)
        .filter(|amount| usable_amount(*amount))
        .sum()
}

/// Number of distinct product categories, identified by their English name.
pub fn distinct_category_count(products: &[Product]) -> usize {
    products
        .iter()
        .map(|product| product.category.en)
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Products whose English category equals `category`, in input order.
pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category.en == category)
        .collect()
}

/// Revenue per transaction, or `None` for a month without transactions.
pub fn average_order_value(revenue: f64, transactions: u32) -> Option<f64> {
    (transactions > 0 && usable_amount(revenue)).then(|| revenue / f64::from(transactions))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Critical,
    Warning,
}

/// An alert is critical once stock has fallen to a third of its minimum.
pub fn alert_level(alert: &StockAlert) -> AlertLevel {
    if alert.min > 0 && u64::from(alert.current) * 3 <= u64::from(alert.min) {
        AlertLevel::Critical
    } else {
        AlertLevel::Warning
    }
}

/// The status a product would carry if it were derived from its stock.
pub fn derived_status(stock: u32, low_stock_threshold: u32) -> ProductStatus {
    match stock {
        0 => ProductStatus::OutOfStock,
        s if s <= low_stock_threshold => ProductStatus::LowStock,
        _ => ProductStatus::InStock,
    }
}

/// Products whose authored status disagrees with [`derived_status`].
pub fn status_mismatches(products: &[Product], low_stock_threshold: u32) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| derived_status(product.stock, low_stock_threshold) != product.status)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTone {
    Alert,
    Healthy,
}

pub fn stock_tone(stock: u32) -> StockTone {
    if stock < STOCK_TONE_THRESHOLD {
        StockTone::Alert
    } else {
        StockTone::Healthy
    }
}
