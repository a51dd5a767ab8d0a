//! Weather alert model and request DTOs

use serde::{Deserialize, Serialize};

// == Alert Kind ==
/// Category of weather event an alert covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Storm,
    Rain,
    Snow,
    Heat,
    Cold,
}

// == Alert Severity ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

// == Alert ==
/// An active weather alert for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub description: String,
    pub severity: AlertSeverity,
    /// Alert window start (ISO 8601)
    pub start_time: String,
    /// Alert window end (ISO 8601)
    pub end_time: String,
}

// == Create Request ==
/// Body for POST /alerts; required fields checked by `validate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub id: Option<String>,
    pub location_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AlertKind>,
    pub description: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl CreateAlertRequest {
    pub fn validate(self) -> Result<Alert, String> {
        let location_id = self
            .location_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| "locationId is required".to_string())?;
        let kind = self.kind.ok_or_else(|| "type is required".to_string())?;
        let description = self
            .description
            .ok_or_else(|| "description is required".to_string())?;
        let severity = self
            .severity
            .ok_or_else(|| "severity is required".to_string())?;
        let start_time = self
            .start_time
            .ok_or_else(|| "startTime is required".to_string())?;
        let end_time = self
            .end_time
            .ok_or_else(|| "endTime is required".to_string())?;

        Ok(Alert {
            id: self.id,
            location_id,
            kind,
            description,
            severity,
            start_time,
            end_time,
        })
    }
}

// == Patch ==
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AlertKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlertSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}
