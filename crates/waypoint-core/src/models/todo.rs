//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{RiskLevel, TodoType};

/// A single actionable task inside a plan.
///
/// Everything except `completed` is fixed once the task exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    /// Unique identifier for the task
    pub id: String,

    /// Task text as extracted or entered
    pub title: String,

    /// Optional longer explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task has been ticked off
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Category assigned from the task text
    #[serde(rename = "type", default)]
    pub todo_type: TodoType,

    /// Known place mentioned by the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Altitude in metres mentioned by the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<u32>,

    /// Severity of the task
    #[serde(default)]
    pub risk_level: RiskLevel,

    /// Marks altitude or medical relevance
    #[serde(default)]
    pub health_alert: bool,
}

impl TodoItem {
    /// Creates an uncategorised, low-risk task.
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            completed: false,
            created_at,
            todo_type: TodoType::General,
            location: None,
            altitude: None,
            risk_level: RiskLevel::Low,
            health_alert: false,
        }
    }
}
