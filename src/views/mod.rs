//! View composers: turn a [`ViewContext`] into a full HTML page.
//!
//! Views are pure. They read labels and records from the context and never
//! touch the shell, the usage counters or any other shared state.

pub mod dashboard;
pub mod format;
pub mod html;
pub mod inventory;
mod layout;
pub mod reports;
pub mod sales;

use crate::catalog::MainCategory;
use crate::shell::{Route, ViewContext};

/// A page request with its route-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    Dashboard { category: Option<MainCategory> },
    Inventory { search: String, status: String },
    Sales,
    Reports,
}

impl ViewRequest {
    pub fn route(&self) -> Route {
        match self {
            ViewRequest::Dashboard { .. } => Route::Dashboard,
            ViewRequest::Inventory { .. } => Route::Inventory,
            ViewRequest::Sales => Route::Sales,
            ViewRequest::Reports => Route::Reports,
        }
    }
}

impl From<Route> for ViewRequest {
    /// The route's page with no parameters.
    fn from(route: Route) -> Self {
        match route {
            Route::Dashboard => ViewRequest::Dashboard { category: None },
            Route::Inventory => ViewRequest::Inventory {
                search: String::new(),
                status: crate::metrics::ALL_STATUSES.to_string(),
            },
            Route::Sales => ViewRequest::Sales,
            Route::Reports => ViewRequest::Reports,
        }
    }
}

/// Render the page for `request`.
pub fn render(ctx: &ViewContext<'_>, request: &ViewRequest) -> String {
    match request {
        ViewRequest::Dashboard { category } => dashboard::render(ctx, *category),
        ViewRequest::Inventory { search, status } => inventory::render(ctx, search, status),
        ViewRequest::Sales => sales::render(ctx),
        ViewRequest::Reports => reports::render(ctx),
    }
}
