//! API Module
//!
//! HTTP handlers and routing for the weather REST API.
//!
//! # Endpoints (under /api/v1)
//! - `GET|POST /forecasts`, `GET|PUT|DELETE /forecasts/:id`,
//!   `GET /forecasts/location/:location_id`
//! - `GET|POST /alerts`, `GET|PUT|DELETE /alerts/:id`,
//!   `GET /alerts/location/:location_id`
//! - `GET|POST /locations`, `GET|PUT|DELETE /locations/:id`
//! - `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
