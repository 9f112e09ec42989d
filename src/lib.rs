//! PhoneDesk Office Phone Allocation Tracker
//!
//! A Rust REST API server tracking office phones, employees and the
//! allocations pairing them, with interchangeable in-memory and PostgreSQL
//! storage backends.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
