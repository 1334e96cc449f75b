//! Dashboard page: headline stats, the three featured categories with an
//! optional product panel, stock alerts and today's sales.

use super::format::format_rupees;
use super::html::HtmlBuilder;
use super::layout::page;
use crate::catalog::MainCategory;
use crate::metrics::{self, AlertLevel, StockTone};
use crate::shell::{Route, ViewContext};

/// Dashboard: headline stats, featured categories, stock alerts and today's
/// sales. `selected` opens the product panel for one featured category.
pub fn render(ctx: &ViewContext<'_>, selected: Option<MainCategory>) -> String {
    let title = Route::Dashboard.label(ctx.strings);
    page(ctx, title, |html| {
        stats_grid(html, ctx);
        categories(html, ctx);
        if let Some(category) = selected {
            category_panel(html, ctx, category);
        }
        html.open("div", &[("class", "grid")]);
        stock_alerts(html, ctx);
        daily_sales(html, ctx);
        html.close("div");
    })
}

fn stat_card(html: &mut HtmlBuilder, icon: &str, label: &str, value: &str) {
    html.open("div", &[("class", "card")])
        .element("div", &[("class", "icon")], icon)
        .element("div", &[("class", "label")], label)
        .element("div", &[("class", "value")], value)
        .close("div");
}

fn stats_grid(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.dashboard;
    let catalog = ctx.catalog;

    html.open("div", &[("class", "grid")]);
    stat_card(
        html,
        "💰",
        labels.today_sales,
        &format_rupees(metrics::sales_total(catalog.daily_sales)),
    );
    stat_card(
        html,
        "⚠️",
        labels.low_stock,
        &metrics::low_stock_count(catalog.products).to_string(),
    );
    stat_card(
        html,
        "📦",
        labels.total_products,
        &catalog.products.len().to_string(),
    );
    html.close("div");
}

fn categories(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    html.element("h2", &[], ctx.strings.dashboard.main_categories)
        .open("div", &[("class", "grid")]);

    for category in MainCategory::ALL {
        let href = format!("{}?category={}", Route::Dashboard.path(), category.slug());
        html.open("a", &[("class", "card"), ("href", href.as_str())])
            .element("div", &[("class", "icon")], category.icon())
            .element("div", &[("class", "label")], category.label(ctx.strings))
            .close("a");
    }

    html.close("div");
}

fn category_panel(html: &mut HtmlBuilder, ctx: &ViewContext<'_>, category: MainCategory) {
    let labels = &ctx.strings.dashboard;
    let products = metrics::products_in_category(ctx.catalog.products, category.product_category());
    let heading = format!("{} {}", category.icon(), category.label(ctx.strings));

    html.open("section", &[("class", "card panel"), ("id", "category-panel")])
        .element("h2", &[], &heading)
        .open("table", &[])
        .open("tr", &[])
        .element("th", &[], ctx.strings.inventory.name)
        .element("th", &[], labels.price)
        .element("th", &[], labels.stock)
        .close("tr");

    for product in products {
        let Some(name) = product.name.get(ctx.language) else {
            continue;
        };
        let tone = match metrics::stock_tone(product.stock) {
            StockTone::Alert => "tone-alert",
            StockTone::Healthy => "tone-healthy",
        };
        html.open("tr", &[])
            .element("td", &[], name)
            .element("td", &[], &format_rupees(product.price))
            .element("td", &[("class", tone)], &product.stock.to_string())
            .close("tr");
    }

    html.close("table")
        .element("a", &[("href", Route::Dashboard.path())], labels.close)
        .close("section");
}

fn stock_alerts(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.alerts;
    let heading = format!("⚠️ {}", labels.title);

    html.open("section", &[("class", "card")])
        .element("h2", &[], &heading)
        .open("ul", &[]);

    for alert in ctx.catalog.stock_alerts {
        let Some(item) = alert.item.get(ctx.language) else {
            continue;
        };
        let (class, level) = match metrics::alert_level(alert) {
            AlertLevel::Critical => ("level-critical", labels.critical),
            AlertLevel::Warning => ("level-warning", labels.warning),
        };
        html.open("li", &[])
            .element("strong", &[], item)
            .text(&format!(" {}/{} ", alert.current, alert.min))
            .element("span", &[("class", class)], level)
            .close("li");
    }

    html.close("ul").close("section");
}

fn daily_sales(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.daily_sales;
    let heading = format!("💰 {}", labels.title);

    html.open("section", &[("class", "card")])
        .element("h2", &[], &heading)
        .open("ul", &[]);

    for sale in ctx.catalog.daily_sales {
        let Some(item) = sale.item.get(ctx.language) else {
            continue;
        };
        html.open("li", &[])
            .text(&format!("{} × {} ", item, sale.quantity))
            .element("strong", &[], &format_rupees(sale.amount))
            .close("li");
    }

    let total = format!(
        "{}: {}",
        labels.total,
        format_rupees(metrics::sales_total(ctx.catalog.daily_sales))
    );
    html.close("ul")
        .element("p", &[("class", "total")], &total)
        .close("section");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::i18n::Language;

    fn render_with(language: Language, selected: Option<MainCategory>) -> String {
        let catalog = Catalog::sample();
        let ctx = ViewContext::new(language, Route::Dashboard, &catalog);
        render(&ctx, selected)
    }

    #[test]
    fn test_stats_are_derived_from_records() {
        let html = render_with(Language::ENGLISH, None);
        assert!(html.contains("रू 12,500"));
        assert!(html.contains("<div class=\"label\">Low Stock</div><div class=\"value\">3</div>"));
        assert!(html
            .contains("<div class=\"label\">Total Products</div><div class=\"value\">14</div>"));
    }

    #[test]
    fn test_categories_link_to_panel() {
        let html = render_with(Language::ENGLISH, None);
        for category in MainCategory::ALL {
            assert!(html.contains(&format!("/dashboard?category={}", category.slug())));
        }
        assert!(!html.contains("category-panel"));
    }

    #[test]
    fn test_category_panel_lists_products_with_stock_tone() {
        let html = render_with(Language::ENGLISH, Some(MainCategory::Arts));
        assert!(html.contains("category-panel"));
        assert!(html.contains("<td>Thangka Painting</td>"));
        assert!(html.contains("<td>Mandala Art</td>"));
        assert!(!html.contains("<td>Clay Pot</td>"));
        assert!(html.contains("<td class=\"tone-alert\">10</td>"));
    }

    #[test]
    fn test_pottery_panel_marks_healthy_stock() {
        let html = render_with(Language::ENGLISH, Some(MainCategory::Pottery));
        assert!(html.contains("<td class=\"tone-healthy\">40</td>"));
        assert!(html.contains("<td class=\"tone-alert\">15</td>"));
    }

    #[test]
    fn test_stock_alert_levels() {
        let html = render_with(Language::ENGLISH, None);
        assert!(html.contains(
            "<strong>Wooden Statue</strong> 2/5 <span class=\"level-warning\">Warning</span>"
        ));
        assert!(html.contains(
            "<strong>Clay Pot</strong> 4/15 <span class=\"level-critical\">Critical</span>"
        ));
    }

    #[test]
    fn test_nepali_dashboard() {
        let html = render_with(Language::NEPALI, None);
        assert!(html.contains("थाङ्का"));
        assert!(html.contains("स्टक अलर्ट"));
        assert!(!html.contains("Wooden Statue"));
    }
}
