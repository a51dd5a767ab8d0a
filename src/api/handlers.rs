//! API Handlers
//!
//! Thin controllers mapping HTTP verbs onto service calls. Validation
//! failures and missing records are turned into `ApiError` here; the
//! services never see HTTP concerns.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{
    Alert, AlertPatch, ApiResponse, CreateAlertRequest, CreateForecastRequest,
    CreateLocationRequest, Forecast, ForecastPatch, Location, LocationPatch,
};
use crate::models::response::HealthResponse;
use crate::repository::DocumentRepository;
use crate::services::{AlertService, ForecastCache, ForecastService, LocationService};

// == App State ==
/// Shared service handles for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub forecasts: Arc<ForecastService>,
    pub alerts: Arc<AlertService>,
    pub locations: Arc<LocationService>,
}

impl AppState {
    /// Wires the services to one repository and one forecast cache.
    pub fn new(repo: Arc<dyn DocumentRepository>, cache: ForecastCache) -> Self {
        Self {
            forecasts: Arc::new(ForecastService::new(repo.clone(), cache)),
            alerts: Arc::new(AlertService::new(repo.clone())),
            locations: Arc::new(LocationService::new(repo)),
        }
    }
}

// == Forecast Handlers ==

pub async fn list_forecasts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Forecast>>>> {
    let forecasts = state.forecasts.get_all().await?;
    Ok(Json(ApiResponse::success(
        forecasts,
        "Forecasts retrieved successfully",
    )))
}

pub async fn get_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Forecast>>> {
    let forecast = state
        .forecasts
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Forecast".to_string()))?;
    Ok(Json(ApiResponse::success(
        forecast,
        "Forecast retrieved successfully",
    )))
}

pub async fn get_forecasts_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Forecast>>>> {
    let forecasts = state.forecasts.get_by_location(&location_id).await?;
    if forecasts.is_empty() {
        return Err(ApiError::NotFound("Forecasts for this location".to_string()));
    }
    Ok(Json(ApiResponse::success(
        forecasts,
        "Forecasts retrieved successfully",
    )))
}

pub async fn create_forecast(
    State(state): State<AppState>,
    Json(req): Json<CreateForecastRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Forecast>>)> {
    let forecast = req.validate().map_err(ApiError::Validation)?;
    let created = state.forecasts.create(forecast).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Forecast created successfully")),
    ))
}

pub async fn update_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ForecastPatch>,
) -> Result<Json<ApiResponse<Forecast>>> {
    let updated = state
        .forecasts
        .update(&id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Forecast".to_string()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Forecast updated successfully",
    )))
}

pub async fn delete_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    if !state.forecasts.delete(&id).await? {
        return Err(ApiError::NotFound("Forecast".to_string()));
    }
    Ok(Json(ApiResponse::success(
        true,
        "Forecast deleted successfully",
    )))
}

// == Alert Handlers ==

pub async fn list_alerts(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Alert>>>> {
    let alerts = state.alerts.get_all().await?;
    Ok(Json(ApiResponse::success(
        alerts,
        "Alerts retrieved successfully",
    )))
}

pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Alert>>> {
    let alert = state
        .alerts
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Alert".to_string()))?;
    Ok(Json(ApiResponse::success(
        alert,
        "Alert retrieved successfully",
    )))
}

pub async fn get_alerts_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Alert>>>> {
    let alerts = state.alerts.get_by_location(&location_id).await?;
    if alerts.is_empty() {
        return Err(ApiError::NotFound("Alerts for this location".to_string()));
    }
    Ok(Json(ApiResponse::success(
        alerts,
        "Alerts retrieved successfully",
    )))
}

pub async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Alert>>)> {
    let alert = req.validate().map_err(ApiError::Validation)?;
    let created = state.alerts.create(alert).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Alert created successfully")),
    ))
}

pub async fn update_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<AlertPatch>,
) -> Result<Json<ApiResponse<Alert>>> {
    let updated = state
        .alerts
        .update(&id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Alert".to_string()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Alert updated successfully",
    )))
}

pub async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    if !state.alerts.delete(&id).await? {
        return Err(ApiError::NotFound("Alert".to_string()));
    }
    Ok(Json(ApiResponse::success(true, "Alert deleted successfully")))
}

// == Location Handlers ==

pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Location>>>> {
    let locations = state.locations.get_all().await?;
    Ok(Json(ApiResponse::success(
        locations,
        "Locations retrieved successfully",
    )))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Location>>> {
    let location = state
        .locations
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location".to_string()))?;
    Ok(Json(ApiResponse::success(
        location,
        "Location retrieved successfully",
    )))
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(req): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>)> {
    let location = req.validate().map_err(ApiError::Validation)?;
    let created = state.locations.create(location).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Location created successfully")),
    ))
}

pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> Result<Json<ApiResponse<Location>>> {
    let updated = state
        .locations
        .update(&id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location".to_string()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Location updated successfully",
    )))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    if !state.locations.delete(&id).await? {
        return Err(ApiError::NotFound("Location".to_string()));
    }
    Ok(Json(ApiResponse::success(
        true,
        "Location deleted successfully",
    )))
}

// == Health Handler ==

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
