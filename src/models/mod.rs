//! Domain models and API DTOs
//!
//! One module per weather entity, plus the shared success/error response
//! envelope. Field names serialize in camelCase to match the wire format
//! the clients expect.

pub mod alert;
pub mod forecast;
pub mod location;
pub mod response;

// Re-export commonly used types
pub use alert::{Alert, AlertKind, AlertPatch, AlertSeverity, CreateAlertRequest};
pub use forecast::{CreateForecastRequest, Forecast, ForecastPatch};
pub use location::{CreateLocationRequest, Location, LocationPatch};
pub use response::{ApiResponse, HealthResponse};
