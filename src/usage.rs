//! Usage counters for the dashboard process.
//!
//! Tracks page renders per route, language toggles and rejected catalog
//! commands. Counters live for the process only.

use crate::shell::Route;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global usage counters singleton.
pub struct UsageMetrics {
    started_at: DateTime<Utc>,
    dashboard_renders: AtomicUsize,
    inventory_renders: AtomicUsize,
    sales_renders: AtomicUsize,
    reports_renders: AtomicUsize,
    language_toggles: AtomicUsize,
    rejected_actions: AtomicUsize,
}

static METRICS: OnceLock<UsageMetrics> = OnceLock::new();

impl UsageMetrics {
    /// Get the global usage counters, initializing them on first call.
    pub fn global() -> &'static UsageMetrics {
        METRICS.get_or_init(|| UsageMetrics {
            started_at: Utc::now(),
            dashboard_renders: AtomicUsize::new(0),
            inventory_renders: AtomicUsize::new(0),
            sales_renders: AtomicUsize::new(0),
            reports_renders: AtomicUsize::new(0),
            language_toggles: AtomicUsize::new(0),
            rejected_actions: AtomicUsize::new(0),
        })
    }

    fn render_counter(&self, route: Route) -> &AtomicUsize {
        match route {
            Route::Dashboard => &self.dashboard_renders,
            Route::Inventory => &self.inventory_renders,
            Route::Sales => &self.sales_renders,
            Route::Reports => &self.reports_renders,
        }
    }

    /// Count one successful page render for `route`.
    pub fn record_render(&self, route: Route) {
        self.render_counter(route).fetch_add(1, Ordering::Relaxed);
    }

    /// Count one language toggle.
    pub fn record_language_toggle(&self) {
        self.language_toggles.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one catalog command answered with "not implemented".
    pub fn record_rejected_action(&self) {
        self.rejected_actions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn renders(&self, route: Route) -> usize {
        self.render_counter(route).load(Ordering::Relaxed)
    }

    pub fn language_toggles(&self) -> usize {
        self.language_toggles.load(Ordering::Relaxed)
    }

    pub fn rejected_actions(&self) -> usize {
        self.rejected_actions.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> UsageReport {
        let dashboard = self.renders(Route::Dashboard);
        let inventory = self.renders(Route::Inventory);
        let sales = self.renders(Route::Sales);
        let reports = self.renders(Route::Reports);

        UsageReport {
            started_at: self.started_at,
            total_renders: dashboard + inventory + sales + reports,
            dashboard_renders: dashboard,
            inventory_renders: inventory,
            sales_renders: sales,
            reports_renders: reports,
            language_toggles: self.language_toggles(),
            rejected_actions: self.rejected_actions(),
        }
    }

    /// Reset all counters to zero (useful for testing).
    pub fn reset(&self) {
        for counter in [
            &self.dashboard_renders,
            &self.inventory_renders,
            &self.sales_renders,
            &self.reports_renders,
            &self.language_toggles,
            &self.rejected_actions,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Snapshot of the usage counters.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub started_at: DateTime<Utc>,
    pub total_renders: usize,
    pub dashboard_renders: usize,
    pub inventory_renders: usize,
    pub sales_renders: usize,
    pub reports_renders: usize,
    pub language_toggles: usize,
    pub rejected_actions: usize,
}
