//! Request types for the attendance API.

use serde::{Deserialize, Serialize};

/// Request body for the `/average` endpoint.
///
/// Both fields are optional at the wire level so that an absent field is
/// reported as a validation error naming that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AverageRequest {
    /// The employee's full name, matched exactly against the roster.
    #[serde(default)]
    pub name: Option<String>,
    /// The new running average.
    #[serde(default)]
    pub average: Option<f64>,
}
