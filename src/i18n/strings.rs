use crate::i18n::Language;

/// All localized labels for one language.
///
/// Labels are stored raw; the view layer escapes them for HTML. A handful
/// carry `{placeholder}` slots filled in by the views.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Shop name shown in the navbar and page title
    pub brand: &'static str,
    pub nav: NavLabels,
    pub dashboard: DashboardLabels,
    pub alerts: AlertLabels,
    pub daily_sales: DailySalesLabels,
    pub inventory: InventoryLabels,
    pub sales: SalesLabels,
    pub reports: ReportLabels,
    /// Month names for the six months covered by the sample series
    pub months: [&'static str; 6],
}

#[derive(Debug, Clone)]
pub struct NavLabels {
    pub dashboard: &'static str,
    pub inventory: &'static str,
    pub sales: &'static str,
    pub reports: &'static str,
    /// Tooltip of the language toggle button
    pub switch_language: &'static str,
}

#[derive(Debug, Clone)]
pub struct DashboardLabels {
    pub today_sales: &'static str,
    pub low_stock: &'static str,
    pub total_products: &'static str,
    pub main_categories: &'static str,
    pub pottery: &'static str,
    pub textiles: &'static str,
    pub arts: &'static str,
    pub price: &'static str,
    pub stock: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Clone)]
pub struct AlertLabels {
    pub title: &'static str,
    pub critical: &'static str,
    pub warning: &'static str,
}

#[derive(Debug, Clone)]
pub struct DailySalesLabels {
    pub title: &'static str,
    pub total: &'static str,
}

#[derive(Debug, Clone)]
pub struct InventoryLabels {
    pub title: &'static str,
    pub search: &'static str,
    pub filter: &'static str,
    pub total_items: &'static str,
    pub low_stock: &'static str,
    pub categories: &'static str,
    pub value: &'static str,
    pub value_by_category: &'static str,
    pub add_product: &'static str,
    pub sn: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub stock: &'static str,
    pub price: &'static str,
    pub status: &'static str,
    pub actions: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub all: &'static str,
    pub in_stock: &'static str,
    pub low_stock_label: &'static str,
    pub out_of_stock: &'static str,
    /// Placeholders: {shown}, {total}
    pub results_summary: &'static str,
    /// Body of the 501 response for add/edit/delete
    pub not_implemented: &'static str,
}

#[derive(Debug, Clone)]
pub struct SalesLabels {
    pub title: &'static str,
    pub today_sales: &'static str,
    pub weekly_sales: &'static str,
    pub monthly_sales: &'static str,
    pub revenue: &'static str,
    pub transactions: &'static str,
    pub average_order: &'static str,
    pub month: &'static str,
}

#[derive(Debug, Clone)]
pub struct ReportLabels {
    pub title: &'static str,
    pub frequent_items: &'static str,
    pub frequency: &'static str,
    pub avg_per_day: &'static str,
    pub trending: &'static str,
    pub sales_by_category: &'static str,
    pub share: &'static str,
    pub growth_trend: &'static str,
    pub growth: &'static str,
    pub month: &'static str,
    pub main_products: &'static str,
    pub top_selling: &'static str,
    pub low_selling: &'static str,
    pub name: &'static str,
    pub quantity: &'static str,
    pub value: &'static str,
}

const MONTH_KEYS: [&str; 6] = [
    "months.0", "months.1", "months.2", "months.3", "months.4", "months.5",
];

macro_rules! label_entries {
    ($strings:expr; $($section:ident . $field:ident),* $(,)?) => {
        vec![$((
            concat!(stringify!($section), ".", stringify!($field)),
            $strings.$section.$field,
        )),*]
    };
}

impl LanguageStrings {
    /// The bundled label table for a language, if one exists.
    pub fn for_language(language: Language) -> Option<&'static LanguageStrings> {
        match language.code() {
            "en" => Some(&ENGLISH_STRINGS),
            "np" => Some(&NEPALI_STRINGS),
            _ => None,
        }
    }

    /// Flatten the table into `(key, label)` pairs, keys dotted by section.
    ///
    /// This is the keyed view the validator compares across languages.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries = vec![("brand", self.brand)];
        entries.extend(label_entries![self;
            nav.dashboard, nav.inventory, nav.sales, nav.reports, nav.switch_language,
            dashboard.today_sales, dashboard.low_stock, dashboard.total_products,
            dashboard.main_categories, dashboard.pottery, dashboard.textiles, dashboard.arts,
            dashboard.price, dashboard.stock, dashboard.close,
            alerts.title, alerts.critical, alerts.warning,
            daily_sales.title, daily_sales.total,
            inventory.title, inventory.search, inventory.filter, inventory.total_items,
            inventory.low_stock, inventory.categories, inventory.value, inventory.value_by_category,
            inventory.add_product, inventory.sn, inventory.name, inventory.category,
            inventory.stock, inventory.price,
            inventory.status, inventory.actions, inventory.edit, inventory.delete, inventory.all,
            inventory.in_stock, inventory.low_stock_label, inventory.out_of_stock,
            inventory.results_summary, inventory.not_implemented,
            sales.title, sales.today_sales, sales.weekly_sales, sales.monthly_sales,
            sales.revenue, sales.transactions, sales.average_order, sales.month,
            reports.title, reports.frequent_items, reports.frequency, reports.avg_per_day,
            reports.trending, reports.sales_by_category, reports.share, reports.growth_trend,
            reports.growth, reports.month, reports.main_products, reports.top_selling,
            reports.low_selling, reports.name, reports.quantity, reports.value,
        ]);
        entries.extend(MONTH_KEYS.iter().copied().zip(self.months.iter().copied()));
        entries
    }

    /// Month name by index into the sample series. Out-of-range indexes
    /// yield `None` so the caller can skip the row.
    pub fn month(&self, index: usize) -> Option<&'static str> {
        self.months.get(index).copied()
    }
}

// ==================== English Strings ====================

/// English labels (canonical)
pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    brand: "Lokriti",
    nav: NavLabels {
        dashboard: "Dashboard",
        inventory: "Inventory",
        sales: "Sales",
        reports: "Reports",
        switch_language: "Switch language",
    },
    dashboard: DashboardLabels {
        today_sales: "Today's Sales",
        low_stock: "Low Stock",
        total_products: "Total Products",
        main_categories: "Main Categories",
        pottery: "Pottery",
        textiles: "Textiles",
        arts: "Arts",
        price: "Price",
        stock: "Stock",
        close: "Close",
    },
    alerts: AlertLabels {
        title: "Stock Alerts",
        critical: "Critical",
        warning: "Warning",
    },
    daily_sales: DailySalesLabels {
        title: "Today's Sales",
        total: "Total Sales",
    },
    inventory: InventoryLabels {
        title: "Inventory Management",
        search: "Search products...",
        filter: "Filter",
        total_items: "Total Items",
        low_stock: "Low Stock Items",
        categories: "Categories",
        value: "Total Value",
        value_by_category: "Stock Value by Category",
        add_product: "Add Product",
        sn: "S.N.",
        name: "Product Name",
        category: "Category",
        stock: "Stock",
        price: "Price",
        status: "Status",
        actions: "Actions",
        edit: "Edit",
        delete: "Delete",
        all: "All",
        in_stock: "In Stock",
        low_stock_label: "Low Stock",
        out_of_stock: "Out of Stock",
        results_summary: "Showing {shown} of {total} products",
        not_implemented: "This action is not available yet.",
    },
    sales: SalesLabels {
        title: "Sales Overview",
        today_sales: "Today's Sales",
        weekly_sales: "Weekly Sales",
        monthly_sales: "Monthly Sales",
        revenue: "Revenue",
        transactions: "Transactions",
        average_order: "Average Order",
        month: "Month",
    },
    reports: ReportLabels {
        title: "Monthly Business Report",
        frequent_items: "Frequently Sold Items",
        frequency: "Frequency",
        avg_per_day: "Avg/Day",
        trending: "Trending",
        sales_by_category: "Sales by Category",
        share: "Share",
        growth_trend: "Growth Trend",
        growth: "Growth",
        month: "Month",
        main_products: "Main Products",
        top_selling: "Top Selling Products",
        low_selling: "Low Performing Products",
        name: "Name",
        quantity: "Quantity",
        value: "Value",
    },
    months: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
};

// ==================== Nepali Strings ====================

/// Nepali labels
pub static NEPALI_STRINGS: LanguageStrings = LanguageStrings {
    brand: "Lokriti",
    nav: NavLabels {
        dashboard: "ड्यासबोर्ड",
        inventory: "सामान",
        sales: "बिक्री",
        reports: "रिपोर्ट",
        switch_language: "भाषा परिवर्तन गर्नुहोस्",
    },
    dashboard: DashboardLabels {
        today_sales: "आजको बिक्री",
        low_stock: "न्यून स्टक",
        total_products: "जम्मा सामान",
        main_categories: "मुख्य उत्पादनहरू",
        pottery: "माटोको भाँडा",
        textiles: "कपडा",
        arts: "कला",
        price: "मूल्य",
        stock: "स्टक",
        close: "बन्द",
    },
    alerts: AlertLabels {
        title: "स्टक अलर्ट",
        critical: "गम्भीर",
        warning: "चेतावनी",
    },
    daily_sales: DailySalesLabels {
        title: "आजको बिक्री",
        total: "कुल बिक्री",
    },
    inventory: InventoryLabels {
        title: "सामान व्यवस्थापन",
        search: "सामान खोज्नुहोस्...",
        filter: "फिल्टर",
        total_items: "जम्मा सामान",
        low_stock: "न्यून स्टक",
        categories: "श्रेणीहरू",
        value: "कुल मूल्य",
        value_by_category: "श्रेणी अनुसार स्टक मूल्य",
        add_product: "सामान थप्नुहोस्",
        sn: "क्र.सं.",
        name: "सामानको नाम",
        category: "श्रेणी",
        stock: "स्टक",
        price: "मूल्य",
        status: "स्थिति",
        actions: "कार्यहरू",
        edit: "सम्पादन",
        delete: "मेटाउनुहोस्",
        all: "सबै",
        in_stock: "स्टकमा",
        low_stock_label: "न्यून स्टक",
        out_of_stock: "स्टक सकियो",
        results_summary: "{total} मध्ये {shown} सामान देखाइँदै",
        not_implemented: "यो कार्य अहिले उपलब्ध छैन।",
    },
    sales: SalesLabels {
        title: "बिक्री विवरण",
        today_sales: "आजको बिक्री",
        weekly_sales: "साप्ताहिक बिक्री",
        monthly_sales: "मासिक बिक्री",
        revenue: "आम्दानी",
        transactions: "कारोबार",
        average_order: "औसत अर्डर",
        month: "महिना",
    },
    reports: ReportLabels {
        title: "मासिक व्यवसाय प्रतिवेदन",
        frequent_items: "बारम्बार बिक्री हुने सामानहरू",
        frequency: "आवृत्ति",
        avg_per_day: "औसत/दिन",
        trending: "बढ्दो",
        sales_by_category: "श्रेणी अनुसार बिक्री",
        share: "हिस्सा",
        growth_trend: "वृद्धि प्रवृत्ति",
        growth: "वृद्धि",
        month: "महिना",
        main_products: "मुख्य उत्पादनहरू",
        top_selling: "उच्च बिक्री सामानहरू",
        low_selling: "न्यून बिक्री सामानहरू",
        name: "नाम",
        quantity: "मात्रा",
        value: "मूल्य",
    },
    months: ["बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज"],
};
