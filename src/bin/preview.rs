//! Preview binary - renders one dashboard page without starting the server
//!
//! Usage:
//!   cargo run --bin preview                              # Dashboard, English
//!   cargo run --bin preview -- inventory --lang np       # Inventory, Nepali
//!   cargo run --bin preview -- inventory --search dhaka --status "low stock"
//!   cargo run --bin preview -- dashboard --category arts
//!   cargo run --bin preview -- reports --out preview.html
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (used when --lang is absent, defaults to en)
//! - LOW_STOCK_THRESHOLD (defaults to 5)

use anyhow::{Context, Result};
use clap::Parser;
use lokriti_dashboard::catalog::{Catalog, MainCategory};
use lokriti_dashboard::config::Config;
use lokriti_dashboard::i18n::{self, Language};
use lokriti_dashboard::shell::{NavigationShell, Route};
use lokriti_dashboard::views::{self, ViewRequest};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Render one Lokriti dashboard page to stdout or a file")]
struct PreviewArgs {
    /// Page to render: dashboard, inventory, sales or reports
    #[arg(value_name = "PAGE", default_value = "dashboard")]
    route: String,

    /// Language code (en or np); defaults to DEFAULT_LANGUAGE
    #[arg(short, long)]
    lang: Option<String>,

    /// Inventory search term
    #[arg(short, long, default_value = "")]
    search: String,

    /// Inventory status filter ("all", "in stock", "low stock", "out of stock")
    #[arg(long, default_value = "")]
    status: String,

    /// Dashboard category panel: pottery, textiles or arts
    #[arg(short, long)]
    category: Option<String>,

    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl PreviewArgs {
    fn request(&self) -> Result<ViewRequest> {
        let name = self.route.trim_start_matches('/');
        let route = Route::from_path(&format!("/{}", name)).with_context(|| {
            format!(
                "Unknown page '{}' (expected dashboard, inventory, sales or reports)",
                name
            )
        })?;

        Ok(match route {
            Route::Dashboard => {
                let category = match self.category.as_deref() {
                    Some(slug) => Some(
                        MainCategory::from_slug(slug)
                            .with_context(|| format!("Unknown category '{}'", slug))?,
                    ),
                    None => None,
                };
                ViewRequest::Dashboard { category }
            }
            Route::Inventory => ViewRequest::Inventory {
                search: self.search.clone(),
                status: self.status.clone(),
            },
            other => ViewRequest::from(other),
        })
    }
}

fn main() -> Result<()> {
    let args = PreviewArgs::parse();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging (stderr, so stdout stays clean HTML)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lokriti_dashboard=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    i18n::validate_label_tables()?;

    let language = match args.lang.as_deref() {
        Some(code) => Language::from_code(code)?,
        None => config.default_language,
    };
    let request = args.request()?;

    let mut shell = NavigationShell::new(language);
    shell.navigate(request.route());

    let catalog = Catalog::sample();
    let ctx = shell.context(&catalog, config.low_stock_threshold);
    let html = views::render(&ctx, &request);

    match &args.out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} page ({}) to {}",
                request.route().path(),
                language.code(),
                path.display()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}
