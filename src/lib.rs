pub mod actions;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod metrics;
pub mod server;
pub mod shell;
pub mod usage;
pub mod views;
