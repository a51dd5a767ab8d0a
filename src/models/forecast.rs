//! Forecast model and request DTOs

use serde::{Deserialize, Serialize};

// == Forecast ==
/// A weather forecast record for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Document id, absent until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the location this forecast is for
    pub location_id: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Forecast date (ISO 8601 day)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

// == Create Request ==
/// Body for POST /forecasts.
///
/// All fields are optional at the serde level so a missing required
/// field surfaces as a 400 with a message rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForecastRequest {
    /// Caller-supplied document id (optional)
    pub id: Option<String>,
    pub location_id: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub date: Option<String>,
}

impl CreateForecastRequest {
    /// Validates required fields and builds the domain model.
    pub fn validate(self) -> Result<Forecast, String> {
        let location_id = self
            .location_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| "locationId is required".to_string())?;
        let temperature = self
            .temperature
            .ok_or_else(|| "temperature is required".to_string())?;
        let humidity = self
            .humidity
            .ok_or_else(|| "humidity is required".to_string())?;
        let wind_speed = self
            .wind_speed
            .ok_or_else(|| "windSpeed is required".to_string())?;

        Ok(Forecast {
            id: self.id,
            location_id,
            temperature,
            humidity,
            wind_speed,
            date: self.date,
        })
    }
}

// == Patch ==
/// Body for PUT /forecasts/:id. Only the supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
