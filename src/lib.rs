//! Weather API - a CRUD REST backend for weather data
//!
//! Locations, forecasts, and alerts stored in a document repository,
//! with an in-process TTL cache fronting the forecast read paths.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use services::ForecastCache;
pub use tasks::spawn_cleanup_task;
