//! Monthly report page.
//!
//! Charts are drawn as tables; category shares get a width bar.

use super::format::{format_amount, format_percent, format_rupees, format_signed_percent};
use super::html::HtmlBuilder;
use super::layout::page;
use crate::catalog::ProductPerformance;
use crate::metrics;
use crate::shell::ViewContext;

/// Reports page: frequent items, category distribution, growth trend and
/// the top/low product tables. Charts render as tables.
pub fn render(ctx: &ViewContext<'_>) -> String {
    let labels = &ctx.strings.reports;

    page(ctx, labels.title, |html| {
        html.element("h1", &[], labels.title);
        frequent_items(html, ctx);
        category_distribution(html, ctx);
        growth_trend(html, ctx);

        html.element("h2", &[], labels.main_products);
        performance_table(html, ctx, labels.top_selling, ctx.catalog.top_products);
        performance_table(html, ctx, labels.low_selling, ctx.catalog.low_products);
    })
}

fn frequent_items(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.reports;

    html.element("h2", &[], labels.frequent_items)
        .open("div", &[("class", "grid")]);

    for item in ctx.catalog.frequent_items {
        let Some(name) = item.name.get(ctx.language) else {
            continue;
        };
        html.open("div", &[("class", "card")])
            .element("div", &[("class", "label")], &format!("#{}", item.rank))
            .element("div", &[("class", "value")], name)
            .element(
                "div",
                &[],
                &format!("{}: {}", labels.frequency, item.frequency),
            )
            .element(
                "div",
                &[],
                &format!("{}: {}", labels.avg_per_day, format_amount(item.avg_per_day)),
            )
            .element("div", &[("class", "growth-up")], &format!("↗ {}", labels.trending))
            .close("div");
    }

    html.close("div");
}

fn category_distribution(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.reports;
    let shares = metrics::category_totals(
        ctx.catalog.category_sales,
        |sale| sale.name.get(ctx.language),
        |sale| sale.value,
    );

    html.element("h2", &[], labels.sales_by_category)
        .open("table", &[("class", "distribution")])
        .open("tr", &[])
        .element("th", &[], ctx.strings.inventory.category)
        .element("th", &[], labels.share)
        .element("th", &[], "")
        .close("tr");

    for share in &shares {
        let bar_style = format!("width: {:.1}%", share.percentage);
        html.open("tr", &[])
            .element("td", &[], share.category)
            .element("td", &[], &format_percent(share.percentage))
            .open("td", &[])
            .element("div", &[("class", "bar"), ("style", bar_style.as_str())], "")
            .close("td")
            .close("tr");
    }

    html.close("table");
}

fn growth_trend(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let labels = &ctx.strings.reports;

    html.element("h2", &[], labels.growth_trend)
        .open("table", &[("class", "growth")])
        .open("tr", &[])
        .element("th", &[], labels.month)
        .element("th", &[], labels.growth)
        .close("tr");

    for point in ctx.catalog.growth {
        let Some(month) = ctx.strings.month(point.month) else {
            continue;
        };
        html.open("tr", &[])
            .element("td", &[], month)
            .element("td", &[], &format!("{}%", format_amount(point.growth)))
            .close("tr");
    }

    html.close("table");
}

fn performance_table(
    html: &mut HtmlBuilder,
    ctx: &ViewContext<'_>,
    heading: &str,
    products: &[ProductPerformance],
) {
    let labels = &ctx.strings.reports;

    html.element("h3", &[], heading)
        .open("table", &[("class", "performance")])
        .open("tr", &[]);
    for column in [labels.name, labels.quantity, labels.value, labels.growth] {
        html.element("th", &[], column);
    }
    html.close("tr");

    for product in products {
        let Some(name) = product.name.get(ctx.language) else {
            continue;
        };
        let class = if product.growth < 0 {
            "badge growth-down"
        } else {
            "badge growth-up"
        };
        html.open("tr", &[])
            .element("td", &[], name)
            .element("td", &[], &product.quantity.to_string())
            .element("td", &[], &format_rupees(product.value))
            .open("td", &[])
            .element("span", &[("class", class)], &format_signed_percent(product.growth))
            .close("td")
            .close("tr");
    }

    html.close("table");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CategorySale, LocalizedText};
    use crate::i18n::Language;
    use crate::shell::Route;

    fn render_sample(language: Language) -> String {
        let catalog = Catalog::sample();
        render(&ViewContext::new(language, Route::Reports, &catalog))
    }

    #[test]
    fn test_category_shares() {
        let html = render_sample(Language::ENGLISH);
        assert!(html.contains("<td>Textiles</td><td>35%</td>"));
        assert!(html.contains("<td>Accessories</td><td>5%</td>"));
        assert!(html.contains("width: 35.0%"));
    }

    #[test]
    fn test_frequent_items() {
        let html = render_sample(Language::ENGLISH);
        let first = "<div class=\"label\">#1</div><div class=\"value\">Dhaka Topi</div>";
        assert!(html.contains(first));
        assert!(html.contains("Avg/Day: 2.8"));
    }

    #[test]
    fn test_growth_badges() {
        let html = render_sample(Language::ENGLISH);
        assert!(html.contains("<span class=\"badge growth-up\">+22%</span>"));
        assert!(html.contains("<span class=\"badge growth-down\">-20%</span>"));
        assert!(html.contains("<td>Jun</td><td>18%</td>"));
    }

    #[test]
    fn test_nepali_reports() {
        let html = render_sample(Language::NEPALI);
        assert!(html.contains("मासिक व्यवसाय प्रतिवेदन"));
        assert!(html.contains("<td>कपडा</td><td>35%</td>"));
        assert!(!html.contains("Thangka Painting"));
    }

    #[test]
    fn test_category_without_translation_is_skipped() {
        static SALES: [CategorySale; 2] = [
            CategorySale { name: LocalizedText::new("Textiles", "कपडा"), value: 30.0 },
            CategorySale { name: LocalizedText::new("Jewelry", ""), value: 10.0 },
        ];
        let catalog = Catalog {
            category_sales: &SALES,
            ..Catalog::sample()
        };
        let html = render(&ViewContext::new(Language::NEPALI, Route::Reports, &catalog));

        assert!(html.contains("<td>कपडा</td><td>100%</td>"));
        assert!(!html.contains("Jewelry"));
    }
}
