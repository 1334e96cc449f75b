//! Sample record store: the shop's fixed products, sales and report data.
//!
//! Everything here is `'static` and never mutated. The views receive the
//! data through a [`Catalog`] so tests can substitute their own records.

use crate::i18n::{Language, LanguageStrings};
use serde::Serialize;

/// A display string in both dashboard languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub np: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, np: &'static str) -> Self {
        Self { en, np }
    }

    /// Text for `language`, or `None` when that translation is empty.
    pub fn get(&self, language: Language) -> Option<&'static str> {
        let text = match language.code() {
            "en" => self.en,
            "np" => self.np,
            _ => "",
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Stock-level classification authored on each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    /// Canonical status string; the status filter matches against this.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "In Stock",
            ProductStatus::LowStock => "Low Stock",
            ProductStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            ProductStatus::InStock => strings.inventory.in_stock,
            ProductStatus::LowStock => strings.inventory.low_stock_label,
            ProductStatus::OutOfStock => strings.inventory.out_of_stock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: LocalizedText,
    pub category: LocalizedText,
    pub stock: u32,
    pub price: f64,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SaleRecord {
    pub id: u32,
    pub item: LocalizedText,
    pub quantity: u32,
    pub amount: f64,
}

/// Restock alert: `current` units on hand against a `min` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockAlert {
    pub id: u32,
    pub item: LocalizedText,
    pub current: u32,
    pub min: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    /// Index into the label table's month names
    pub month: usize,
    pub revenue: f64,
    pub transactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub month: usize,
    /// Month-over-month growth in percent
    pub growth: f64,
}

/// One slice of the sales-by-category distribution. Values are relative
/// weights and need not add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySale {
    pub name: LocalizedText,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductPerformance {
    pub id: u32,
    pub name: LocalizedText,
    pub quantity: u32,
    pub value: f64,
    /// Signed growth in percent
    pub growth: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequentItem {
    pub rank: u32,
    pub name: LocalizedText,
    pub frequency: u32,
    pub avg_per_day: f64,
}

/// Headline totals that have no per-record breakdown in the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodSales {
    pub weekly: f64,
    pub monthly: f64,
}

/// The dashboard's three featured categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainCategory {
    Pottery,
    Textiles,
    Arts,
}

impl MainCategory {
    pub const ALL: [MainCategory; 3] = [
        MainCategory::Pottery,
        MainCategory::Textiles,
        MainCategory::Arts,
    ];

    /// Value of the dashboard's `?category=` parameter.
    pub fn slug(&self) -> &'static str {
        match self {
            MainCategory::Pottery => "pottery",
            MainCategory::Textiles => "textiles",
            MainCategory::Arts => "arts",
        }
    }

    pub fn from_slug(slug: &str) -> Option<MainCategory> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MainCategory::Pottery => "🏺",
            MainCategory::Textiles => "🧵",
            MainCategory::Arts => "🎨",
        }
    }

    /// English product category the featured group draws its products from.
    pub fn product_category(&self) -> &'static str {
        match self {
            MainCategory::Pottery => "Pottery",
            MainCategory::Textiles => "Textiles",
            MainCategory::Arts => "Art",
        }
    }

    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            MainCategory::Pottery => strings.dashboard.pottery,
            MainCategory::Textiles => strings.dashboard.textiles,
            MainCategory::Arts => strings.dashboard.arts,
        }
    }
}

/// Bundle of every record set the views read.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub products: &'static [Product],
    pub daily_sales: &'static [SaleRecord],
    pub stock_alerts: &'static [StockAlert],
    pub period_sales: PeriodSales,
    pub revenue: &'static [MonthlyRevenue],
    pub growth: &'static [GrowthPoint],
    pub category_sales: &'static [CategorySale],
    pub top_products: &'static [ProductPerformance],
    pub low_products: &'static [ProductPerformance],
    pub frequent_items: &'static [FrequentItem],
}

impl Catalog {
    /// The shop's built-in sample data.
    pub fn sample() -> Self {
        Self {
            products: PRODUCTS,
            daily_sales: DAILY_SALES,
            stock_alerts: STOCK_ALERTS,
            period_sales: PERIOD_SALES,
            revenue: REVENUE,
            growth: GROWTH,
            category_sales: CATEGORY_SALES,
            top_products: TOP_PRODUCTS,
            low_products: LOW_PRODUCTS,
            frequent_items: FREQUENT_ITEMS,
        }
    }
}

const fn product(
    id: u32,
    name: LocalizedText,
    category: LocalizedText,
    stock: u32,
    price: f64,
    status: ProductStatus,
) -> Product {
    Product {
        id,
        name,
        category,
        stock,
        price,
        status,
    }
}

const TEXTILES: LocalizedText = LocalizedText::new("Textiles", "कपडा");
const POTTERY: LocalizedText = LocalizedText::new("Pottery", "माटोको भाँडा");
const SCULPTURES: LocalizedText = LocalizedText::new("Sculptures", "मूर्ति");
const ART: LocalizedText = LocalizedText::new("Art", "कला");
const ACCESSORIES: LocalizedText = LocalizedText::new("Accessories", "एसेसरीज");
const CRAFTS: LocalizedText = LocalizedText::new("Crafts", "हस्तकला");

use ProductStatus::{InStock, LowStock};

pub static PRODUCTS: &[Product] = &[
    product(1, LocalizedText::new("Pashmina Shawl", "पश्मिना शल"), TEXTILES, 25, 2500.0, InStock),
    product(2, LocalizedText::new("Clay Pot", "माटोको भाँडो"), POTTERY, 40, 800.0, InStock),
    product(3, LocalizedText::new("Wooden Buddha", "काठको बुद्ध"), SCULPTURES, 5, 4500.0, LowStock),
    product(4, LocalizedText::new("Thangka Painting", "थाङ्का"), ART, 10, 15000.0, InStock),
    product(5, LocalizedText::new("Dhaka Topi", "ढाका टोपी"), ACCESSORIES, 3, 1200.0, LowStock),
    product(6, LocalizedText::new("Singing Bowl", "गाइने बाटा"), CRAFTS, 15, 3500.0, InStock),
    product(7, LocalizedText::new("Mithila Painting", "मिथिला चित्र"), ART, 8, 8500.0, InStock),
    product(8, LocalizedText::new("Bamboo Basket", "बाँसको डोको"), CRAFTS, 4, 1500.0, LowStock),
    product(9, LocalizedText::new("Dhaka Scarf", "ढाका मफलर"), TEXTILES, 20, 800.0, InStock),
    product(
        10,
        LocalizedText::new("Bronze Buddha", "कांस्य बुद्ध"),
        SCULPTURES,
        6,
        12000.0,
        InStock,
    ),
    product(
        11,
        LocalizedText::new("Decorative Vase", "सजावटी भाँडो"),
        POTTERY,
        15,
        1800.0,
        InStock,
    ),
    product(
        12,
        LocalizedText::new("Clay Lamp Set", "माटोको दियो सेट"),
        POTTERY,
        30,
        600.0,
        InStock,
    ),
    product(
        13,
        LocalizedText::new("Dhaka Fabric Roll", "ढाका कपडा"),
        TEXTILES,
        12,
        3500.0,
        InStock,
    ),
    product(14, LocalizedText::new("Mandala Art", "मण्डला कला"), ART, 7, 5500.0, InStock),
];

pub static DAILY_SALES: &[SaleRecord] = &[
    SaleRecord {
        id: 1,
        item: LocalizedText::new("Clay Pot", "माटोको भाँडा"),
        quantity: 5,
        amount: 2500.0,
    },
    SaleRecord {
        id: 2,
        item: LocalizedText::new("Pashmina", "पस्मिना"),
        quantity: 3,
        amount: 4500.0,
    },
    SaleRecord {
        id: 3,
        item: LocalizedText::new("Thangka", "थाङ्का"),
        quantity: 1,
        amount: 5500.0,
    },
];

pub static STOCK_ALERTS: &[StockAlert] = &[
    StockAlert {
        id: 1,
        item: LocalizedText::new("Wooden Statue", "काठको मूर्ति"),
        current: 2,
        min: 5,
    },
    StockAlert {
        id: 2,
        item: LocalizedText::new("Pashmina Shawl", "पाशमिना शल"),
        current: 3,
        min: 10,
    },
    StockAlert {
        id: 3,
        item: LocalizedText::new("Clay Pot", "माटोको गमला"),
        current: 4,
        min: 15,
    },
];

pub const PERIOD_SALES: PeriodSales = PeriodSales {
    weekly: 82_500.0,
    monthly: 325_000.0,
};

pub static REVENUE: &[MonthlyRevenue] = &[
    MonthlyRevenue { month: 0, revenue: 250_000.0, transactions: 145 },
    MonthlyRevenue { month: 1, revenue: 285_000.0, transactions: 168 },
    MonthlyRevenue { month: 2, revenue: 325_000.0, transactions: 192 },
    MonthlyRevenue { month: 3, revenue: 315_000.0, transactions: 188 },
    MonthlyRevenue { month: 4, revenue: 358_000.0, transactions: 205 },
    MonthlyRevenue { month: 5, revenue: 402_000.0, transactions: 232 },
];

pub static GROWTH: &[GrowthPoint] = &[
    GrowthPoint { month: 0, growth: 5.0 },
    GrowthPoint { month: 1, growth: 8.0 },
    GrowthPoint { month: 2, growth: 12.0 },
    GrowthPoint { month: 3, growth: 10.0 },
    GrowthPoint { month: 4, growth: 15.0 },
    GrowthPoint { month: 5, growth: 18.0 },
];

pub static CATEGORY_SALES: &[CategorySale] = &[
    CategorySale { name: TEXTILES, value: 35.0 },
    CategorySale { name: POTTERY, value: 25.0 },
    CategorySale { name: SCULPTURES, value: 20.0 },
    CategorySale { name: ART, value: 15.0 },
    CategorySale { name: ACCESSORIES, value: 5.0 },
];

pub static TOP_PRODUCTS: &[ProductPerformance] = &[
    ProductPerformance {
        id: 1,
        name: LocalizedText::new("Thangka Painting", "थाङ्का"),
        quantity: 25,
        value: 375_000.0,
        growth: 15,
    },
    ProductPerformance {
        id: 2,
        name: LocalizedText::new("Pashmina Shawl", "पश्मिना शल"),
        quantity: 48,
        value: 120_000.0,
        growth: 22,
    },
    ProductPerformance {
        id: 3,
        name: LocalizedText::new("Bronze Buddha", "कांस्य बुद्ध"),
        quantity: 18,
        value: 216_000.0,
        growth: 10,
    },
];

pub static LOW_PRODUCTS: &[ProductPerformance] = &[
    ProductPerformance {
        id: 1,
        name: LocalizedText::new("Clay Pot", "माटोको भाँडो"),
        quantity: 5,
        value: 4_000.0,
        growth: -15,
    },
    ProductPerformance {
        id: 2,
        name: LocalizedText::new("Bamboo Basket", "बाँसको डोको"),
        quantity: 3,
        value: 4_500.0,
        growth: -20,
    },
];

pub static FREQUENT_ITEMS: &[FrequentItem] = &[
    FrequentItem {
        rank: 1,
        name: LocalizedText::new("Dhaka Topi", "ढाका टोपी"),
        frequency: 85,
        avg_per_day: 2.8,
    },
    FrequentItem {
        rank: 2,
        name: LocalizedText::new("Pashmina Shawl", "पश्मिना शल"),
        frequency: 72,
        avg_per_day: 2.4,
    },
    FrequentItem {
        rank: 3,
        name: LocalizedText::new("Singing Bowl", "गाइने बाटा"),
        frequency: 65,
        avg_per_day: 2.2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_fourteen_unique_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.products.len(), 14);

        let mut ids: Vec<_> = catalog.products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_every_sample_text_is_bilingual() {
        for product in Catalog::sample().products {
            assert!(product.name.get(Language::ENGLISH).is_some());
            assert!(product.name.get(Language::NEPALI).is_some());
            assert!(product.category.get(Language::NEPALI).is_some());
        }
    }

    #[test]
    fn test_localized_text_empty_is_absent() {
        let text = LocalizedText::new("Clay Pot", "");
        assert_eq!(text.get(Language::ENGLISH), Some("Clay Pot"));
        assert_eq!(text.get(Language::NEPALI), None);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ProductStatus::InStock.as_str(), "In Stock");
        assert_eq!(ProductStatus::LowStock.as_str(), "Low Stock");
        assert_eq!(ProductStatus::OutOfStock.as_str(), "Out of Stock");
        assert_eq!(
            serde_json::to_string(&ProductStatus::LowStock).unwrap(),
            "\"Low Stock\""
        );
    }

    #[test]
    fn test_status_labels_are_localized() {
        let strings = Language::NEPALI.strings();
        assert_eq!(ProductStatus::LowStock.label(strings), "न्यून स्टक");
    }

    #[test]
    fn test_main_category_slugs_round_trip() {
        for category in MainCategory::ALL {
            assert_eq!(MainCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(MainCategory::from_slug("sculptures"), None);
    }
}
