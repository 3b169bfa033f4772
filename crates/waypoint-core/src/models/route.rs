//! Travel route model definition.

use serde::{Deserialize, Serialize};

use super::{RiskLevel, TransportMode};

/// One leg of a journey, owned by a single plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelRoute {
    pub id: String,
    pub from: String,
    pub to: String,

    /// Free-form distance such as "600 km"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,

    /// Free-form duration such as "14 hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    pub transport_mode: TransportMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_dependent: Option<bool>,
}
