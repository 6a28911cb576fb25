//! Shelfmark Personal Library Catalog
//!
//! A small catalog manager that keeps book records in a flat JSON store
//! and exposes add, remove, search, list and lending-status operations
//! through an interactive text menu.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
