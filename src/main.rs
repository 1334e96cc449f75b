use anyhow::Result;
use lokriti_dashboard::{catalog::Catalog, config, i18n, metrics, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables are set by the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lokriti_dashboard=info".parse()?),
        )
        .init();

    info!("Starting Lokriti dashboard");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Step 1: Refuse to start with an incomplete label table
    i18n::validate_label_tables()?;
    info!("Label tables validated");

    // Step 2: Report authored statuses that disagree with stock levels
    let catalog = Catalog::sample();
    for product in metrics::status_mismatches(catalog.products, config.low_stock_threshold) {
        warn!(
            id = product.id,
            name = product.name.en,
            stock = product.stock,
            status = product.status.as_str(),
            threshold = config.low_stock_threshold,
            "Product status disagrees with stock level"
        );
    }

    // Step 3: Serve
    info!(
        language = config.default_language.code(),
        "Serving {} products",
        catalog.products.len()
    );
    server::serve(config).await
}
