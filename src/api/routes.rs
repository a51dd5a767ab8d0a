//! API Routes
//!
//! Configures the Axum router with all weather API endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_alert, create_forecast, create_location, delete_alert, delete_forecast,
    delete_location, get_alert, get_alerts_by_location, get_forecast,
    get_forecasts_by_location, get_location, health_handler, list_alerts, list_forecasts,
    list_locations, update_alert, update_forecast, update_location, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: allows any origin (tighten for production)
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/forecasts", get(list_forecasts))
        .route("/forecasts", post(create_forecast))
        .route("/forecasts/:id", get(get_forecast))
        .route("/forecasts/:id", put(update_forecast))
        .route("/forecasts/:id", delete(delete_forecast))
        .route(
            "/forecasts/location/:location_id",
            get(get_forecasts_by_location),
        )
        .route("/alerts", get(list_alerts))
        .route("/alerts", post(create_alert))
        .route("/alerts/:id", get(get_alert))
        .route("/alerts/:id", put(update_alert))
        .route("/alerts/:id", delete(delete_alert))
        .route("/alerts/location/:location_id", get(get_alerts_by_location))
        .route("/locations", get(list_locations))
        .route("/locations", post(create_location))
        .route("/locations/:id", get(get_location))
        .route("/locations/:id", put(update_location))
        .route("/locations/:id", delete(delete_location));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
