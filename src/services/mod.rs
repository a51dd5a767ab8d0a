//! Service layer
//!
//! Business logic between the HTTP handlers and the document repository.
//! Forecast reads go through the TTL cache; alerts and locations are
//! plain pass-throughs.

pub mod alert;
pub mod forecast;
pub mod location;

pub use alert::AlertService;
pub use forecast::{ForecastCache, ForecastService};
pub use location::LocationService;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Deserializes a stored document into a domain model.
pub(crate) fn decode<T: DeserializeOwned>(doc: Value) -> Result<T> {
    serde_json::from_value(doc)
        .map_err(|e| ApiError::Persistence(format!("Malformed document: {}", e)))
}

/// Serializes a domain model or patch for the repository.
pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::Persistence(format!("Failed to encode document: {}", e)))
}
