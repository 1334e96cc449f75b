//! HTTP surface: page routes, the language toggle, the catalog command
//! boundary and a couple of JSON endpoints.

use crate::actions::{ActionError, CatalogAction, CommandHandler, StubCommandHandler};
use crate::catalog::{Catalog, MainCategory};
use crate::config::Config;
use crate::i18n::Language;
use crate::shell::{NavigationShell, Route};
use crate::usage::{UsageMetrics, UsageReport};
use crate::views::{self, inventory::InventorySummary, ViewRequest};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<Mutex<NavigationShell>>,
    pub catalog: Catalog,
    pub config: Arc<Config>,
    pub commands: Arc<dyn CommandHandler>,
}

impl AppState {
    /// Sample catalog, read-only command handler, shell in the configured language.
    pub fn new(config: Config) -> Self {
        Self {
            shell: Arc::new(Mutex::new(NavigationShell::new(config.default_language))),
            catalog: Catalog::sample(),
            config: Arc::new(config),
            commands: Arc::new(StubCommandHandler),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("navigation state lock is poisoned")]
    ShellPoisoned,

    #[error("{source}")]
    Command {
        source: ActionError,
        language: Language,
    },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::ShellPoisoned => {
                error!("Navigation state lock is poisoned");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            ServerError::Command { source, language } => match source {
                ActionError::NotImplemented(_) => (
                    StatusCode::NOT_IMPLEMENTED,
                    language.strings().inventory.not_implemented,
                )
                    .into_response(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InventoryQuery {
    pub q: String,
    pub status: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/dashboard", get(dashboard))
        .route("/inventory", get(inventory))
        .route("/sales", get(sales))
        .route("/reports", get(reports))
        .route("/language/toggle", post(toggle_language))
        .route("/inventory/products", post(add_product))
        .route("/inventory/products/:id/edit", post(edit_product))
        .route("/inventory/products/:id/delete", post(delete_product))
        .route("/api/inventory", get(inventory_json))
        .route("/api/usage", get(usage_json))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(AppState::new(config)))
        .await
        .context("Server error")?;
    Ok(())
}

// ==================== Shell access ====================

fn current_shell(state: &AppState) -> Result<NavigationShell, ServerError> {
    state
        .shell
        .lock()
        .map(|shell| *shell)
        .map_err(|_| ServerError::ShellPoisoned)
}

fn navigate(state: &AppState, route: Route) -> Result<NavigationShell, ServerError> {
    let mut shell = state.shell.lock().map_err(|_| ServerError::ShellPoisoned)?;
    shell.navigate(route);
    Ok(*shell)
}

fn render_page(state: &AppState, request: ViewRequest) -> Result<Html<String>, ServerError> {
    let route = request.route();
    let shell = navigate(state, route)?;
    let ctx = shell.context(&state.catalog, state.config.low_stock_threshold);

    let html = views::render(&ctx, &request);
    UsageMetrics::global().record_render(route);
    debug!(route = route.path(), language = ctx.language.code(), "Rendered page");

    Ok(Html(html))
}

fn run_command(state: &AppState, action: CatalogAction) -> Result<StatusCode, ServerError> {
    let language = current_shell(state)?.language();
    state
        .commands
        .handle(action)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|source| ServerError::Command { source, language })
}

// ==================== Pages ====================

async fn root() -> Redirect {
    Redirect::to(Route::Dashboard.path())
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ServerError> {
    let category = query.category.as_deref().and_then(MainCategory::from_slug);
    render_page(&state, ViewRequest::Dashboard { category })
}

async fn inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Html<String>, ServerError> {
    render_page(
        &state,
        ViewRequest::Inventory {
            search: query.q,
            status: query.status,
        },
    )
}

async fn sales(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    render_page(&state, ViewRequest::Sales)
}

async fn reports(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    render_page(&state, ViewRequest::Reports)
}

async fn toggle_language(State(state): State<AppState>) -> Result<Redirect, ServerError> {
    let route = {
        let mut shell = state.shell.lock().map_err(|_| ServerError::ShellPoisoned)?;
        shell.toggle_language();
        shell.route()
    };
    UsageMetrics::global().record_language_toggle();
    Ok(Redirect::to(route.path()))
}

// ==================== Catalog commands ====================

async fn add_product(State(state): State<AppState>) -> Result<StatusCode, ServerError> {
    run_command(&state, CatalogAction::AddProduct)
}

async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ServerError> {
    run_command(&state, CatalogAction::EditProduct(id))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ServerError> {
    run_command(&state, CatalogAction::DeleteProduct(id))
}

// ==================== JSON ====================

async fn inventory_json(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<InventorySummary>, ServerError> {
    let shell = current_shell(&state)?;
    let ctx = shell.context(&state.catalog, state.config.low_stock_threshold);
    Ok(Json(views::inventory::summarize(&ctx, &query.q, &query.status)))
}

async fn usage_json() -> Json<UsageReport> {
    Json(UsageMetrics::global().report())
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
