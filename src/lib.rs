//! Design-system button
//!
//! A styled button for a utility-class design system, with its documentation
//! gallery served over HTTP.
//!
//! # Architecture
//!
//! - **Button**: pure style resolution and a framework-agnostic render plan
//! - **Gallery**: server-rendered page showing every variant, size and state
//! - **Server**: Axum routes for the gallery and a resolve/render playground
//!
//! # Modules
//!
//! - [`button`]: variants, style resolver, slot policy, icons and rendering
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`error`]: parsing errors for string inputs
//! - [`gallery`]: documentation page
//! - [`server`]: HTTP router and handlers

pub mod button;
pub mod config;
pub mod error;
pub mod gallery;
pub mod server;

use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Pre-rendered gallery page.
    pub gallery: Arc<str>,
}
