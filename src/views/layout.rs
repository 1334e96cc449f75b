//! Page frame shared by every view: document head, navbar, language toggle.

use super::html::HtmlBuilder;
use crate::shell::{Route, ViewContext};

const STYLE: &str = r#"
:root {
  --primary: #D35400;
  --secondary: #8E44AD;
  --background: #FDF2E9;
  --accent: #E67E22;
  --text: #2C3E50;
  --text-muted: #7F8C8D;
  --alert: #C0392B;
}
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--background);
  color: var(--text);
}
nav {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  background: var(--primary);
  color: #fff;
}
nav .brand { font-weight: 700; font-size: 1.25rem; margin-right: auto; }
nav a { color: #fff; text-decoration: none; padding: 0.25rem 0.5rem; border-radius: 4px; }
nav a.active { background: rgba(255, 255, 255, 0.2); }
nav form { margin: 0; }
nav button {
  background: #fff;
  color: var(--primary);
  border: 0;
  border-radius: 4px;
  padding: 0.35rem 0.75rem;
  cursor: pointer;
}
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
  margin-bottom: 1.5rem;
}
.card {
  background: #fff;
  border-radius: 8px;
  padding: 1rem;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.card .value { font-size: 1.5rem; font-weight: 700; color: var(--primary); }
.card .label { color: var(--text-muted); }
table { width: 100%; border-collapse: collapse; background: #fff; margin-bottom: 1.5rem; }
th, td { padding: 0.5rem 0.75rem; text-align: left; border-bottom: 1px solid #eee; }
th { background: var(--background); }
.badge { padding: 0.15rem 0.5rem; border-radius: 999px; font-size: 0.85rem; }
.status-in-stock { background: #E8F8F0; color: #1E8449; }
.status-low-stock { background: #FEF5E7; color: var(--accent); }
.status-out-of-stock, .level-critical, .tone-alert, .growth-down { color: var(--alert); }
.level-warning { color: var(--accent); }
.tone-healthy, .growth-up { color: #1E8449; }
.mismatch { outline: 2px dashed var(--alert); }
.bar { height: 0.6rem; background: var(--secondary); border-radius: 4px; }
.panel { border: 2px solid var(--primary); }
form.inline { display: inline; }
"#;

/// Wrap `body` in the full document for the context's route and language.
pub fn page(ctx: &ViewContext<'_>, title: &str, body: impl FnOnce(&mut HtmlBuilder)) -> String {
    let mut html = HtmlBuilder::new();
    let full_title = format!("{} | {}", title, ctx.strings.brand);

    html.raw("<!DOCTYPE html>")
        .open("html", &[("lang", html_lang(ctx))])
        .open("head", &[])
        .void("meta", &[("charset", "utf-8")])
        .void(
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
        )
        .element("title", &[], &full_title)
        .open("style", &[])
        .raw(STYLE)
        .close("style")
        .close("head")
        .open("body", &[]);

    navbar(&mut html, ctx);

    html.open("main", &[]);
    body(&mut html);
    html.close("main").close("body").close("html");

    html.into_string()
}

/// BCP 47 tag for the document; the dashboard's own "np" code is not one.
fn html_lang(ctx: &ViewContext<'_>) -> &'static str {
    match ctx.language.code() {
        "np" => "ne",
        code => code,
    }
}

fn navbar(html: &mut HtmlBuilder, ctx: &ViewContext<'_>) {
    let other = ctx.language.toggled();
    let toggle_text = format!("{} {}", other.flag(), other.native_name());

    html.open("nav", &[])
        .element("span", &[("class", "brand")], ctx.strings.brand);

    for route in Route::ALL {
        let class = if route == ctx.route { "active" } else { "" };
        html.element(
            "a",
            &[("href", route.path()), ("class", class)],
            route.label(ctx.strings),
        );
    }

    html.open(
        "form",
        &[("method", "post"), ("action", "/language/toggle")],
    )
    .element(
        "button",
        &[("type", "submit"), ("title", ctx.strings.nav.switch_language)],
        &toggle_text,
    )
    .close("form")
    .close("nav");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::i18n::Language;

    fn render(language: Language, route: Route) -> String {
        let catalog = Catalog::sample();
        let ctx = ViewContext::new(language, route, &catalog);
        page(&ctx, "Title", |html| {
            html.element("p", &[], "body");
        })
    }

    #[test]
    fn test_english_page_offers_nepali_toggle() {
        let html = render(Language::ENGLISH, Route::Dashboard);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("🇳🇵 नेपाली"));
        assert!(html.contains("<title>Title | Lokriti</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_nepali_page_offers_english_toggle() {
        let html = render(Language::NEPALI, Route::Sales);
        assert!(html.contains("<html lang=\"ne\">"));
        assert!(html.contains("🇬🇧 English"));
        assert!(html.contains(">बिक्री</a>"));
    }

    #[test]
    fn test_active_route_is_marked() {
        let html = render(Language::ENGLISH, Route::Inventory);
        assert!(html.contains("<a href=\"/inventory\" class=\"active\">Inventory</a>"));
        assert!(html.contains("<a href=\"/sales\" class=\"\">Sales</a>"));
    }

    #[test]
    fn test_toggle_posts_to_language_route() {
        let html = render(Language::ENGLISH, Route::Reports);
        assert!(html.contains("<form method=\"post\" action=\"/language/toggle\">"));
    }
}
