//! Location model and request DTOs

use serde::{Deserialize, Serialize};

// == Location ==
/// A place forecasts and alerts are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

// == Create Request ==
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreateLocationRequest {
    pub fn validate(self) -> Result<Location, String> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| "name is required".to_string())?;
        let country = self
            .country
            .filter(|c| !c.is_empty())
            .ok_or_else(|| "country is required".to_string())?;
        let latitude = self
            .latitude
            .ok_or_else(|| "latitude is required".to_string())?;
        let longitude = self
            .longitude
            .ok_or_else(|| "longitude is required".to_string())?;

        Ok(Location {
            id: self.id,
            name,
            country,
            latitude,
            longitude,
        })
    }
}

// == Patch ==
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
