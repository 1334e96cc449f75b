//! Sales page: period cards and the monthly revenue table.

use super::format::{format_amount, format_rupees};
use super::layout::page;
use crate::metrics;
use crate::shell::ViewContext;

/// Sales page: period totals and the monthly revenue series.
pub fn render(ctx: &ViewContext<'_>) -> String {
    let labels = &ctx.strings.sales;
    let catalog = ctx.catalog;

    page(ctx, labels.title, |html| {
        html.element("h1", &[], labels.title);

        let cards = [
            ("💰", labels.today_sales, metrics::sales_total(catalog.daily_sales)),
            ("📅", labels.weekly_sales, catalog.period_sales.weekly),
            ("📈", labels.monthly_sales, catalog.period_sales.monthly),
        ];
        html.open("div", &[("class", "grid")]);
        for (icon, label, amount) in cards {
            html.open("div", &[("class", "card")])
                .element("div", &[("class", "icon")], icon)
                .element("div", &[("class", "label")], label)
                .element("div", &[("class", "value")], &format_rupees(amount))
                .close("div");
        }
        html.close("div");

        html.element("h2", &[], labels.revenue)
            .open("table", &[("class", "revenue")])
            .open("tr", &[]);
        for heading in [
            labels.month,
            labels.revenue,
            labels.transactions,
            labels.average_order,
        ] {
            html.element("th", &[], heading);
        }
        html.close("tr");

        for point in catalog.revenue {
            // Rows outside the label table's month range are dropped.
            let Some(month) = ctx.strings.month(point.month) else {
                continue;
            };
            let average = metrics::average_order_value(point.revenue, point.transactions)
                .map(format_rupees)
                .unwrap_or_else(|| "-".to_string());

            html.open("tr", &[])
                .element("td", &[], month)
                .element("td", &[], &format_rupees(point.revenue))
                .element("td", &[], &format_amount(f64::from(point.transactions)))
                .element("td", &[], &average)
                .close("tr");
        }
        html.close("table");
    })
}
