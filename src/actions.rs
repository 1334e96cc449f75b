//! Catalog commands: the add/edit/delete controls on the inventory page.
//!
//! The catalog is read-only sample data, so the only handler shipped
//! rejects every command with [`ActionError::NotImplemented`].

use std::fmt;
use thiserror::Error;
use tracing::warn;

use crate::usage::UsageMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    AddProduct,
    EditProduct(u32),
    DeleteProduct(u32),
}

impl fmt::Display for CatalogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogAction::AddProduct => write!(f, "add product"),
            CatalogAction::EditProduct(id) => write!(f, "edit product {}", id),
            CatalogAction::DeleteProduct(id) => write!(f, "delete product {}", id),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("{0} is not implemented")]
    NotImplemented(CatalogAction),
}

/// Executes catalog commands.
pub trait CommandHandler: Send + Sync {
    fn handle(&self, action: CatalogAction) -> Result<(), ActionError>;
}

/// Handler for the read-only catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCommandHandler;

impl CommandHandler for StubCommandHandler {
    fn handle(&self, action: CatalogAction) -> Result<(), ActionError> {
        warn!(%action, "Rejected catalog command");
        UsageMetrics::global().record_rejected_action();
        Err(ActionError::NotImplemented(action))
    }
}
