//! Navigation shell: the current page and the current language.
//!
//! The shell is the only mutable state in the dashboard. Views never read
//! it directly; they get a [`ViewContext`] snapshot built from it.

use crate::catalog::Catalog;
use crate::i18n::{Language, LanguageStrings};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Inventory,
    Sales,
    Reports,
}

impl Route {
    /// Navbar order.
    pub const ALL: [Route; 4] = [Route::Dashboard, Route::Inventory, Route::Sales, Route::Reports];

    /// URL path the route is served at, e.g. `/inventory`.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Inventory => "/inventory",
            Route::Sales => "/sales",
            Route::Reports => "/reports",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Navbar label in the given label table.
    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            Route::Dashboard => strings.nav.dashboard,
            Route::Inventory => strings.nav.inventory,
            Route::Sales => strings.nav.sales,
            Route::Reports => strings.nav.reports,
        }
    }
}

/// Current language and route. Nothing here outlives the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationShell {
    language: Language,
    route: Route,
}

impl NavigationShell {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            route: Route::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Flip to the other language and return it.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        debug!(language = self.language.code(), "Language toggled");
        self.language
    }

    /// Make `route` the current page. The language is untouched.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Snapshot handed to a view composer.
    pub fn context<'a>(&self, catalog: &'a Catalog, low_stock_threshold: u32) -> ViewContext<'a> {
        ViewContext {
            language: self.language,
            route: self.route,
            strings: self.language.strings(),
            catalog,
            low_stock_threshold,
        }
    }
}

/// Everything a view needs to render, passed in explicitly.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub language: Language,
    pub route: Route,
    pub strings: &'static LanguageStrings,
    pub catalog: &'a Catalog,
    pub low_stock_threshold: u32,
}

impl<'a> ViewContext<'a> {
    pub fn new(language: Language, route: Route, catalog: &'a Catalog) -> Self {
        Self {
            language,
            route,
            strings: language.strings(),
            catalog,
            low_stock_threshold: crate::config::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}
