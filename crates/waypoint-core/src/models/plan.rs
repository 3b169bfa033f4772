//! Plan model definition and related functionality.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{PlanType, TodoItem, TravelRoute};

/// Start and end day of a trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelDates {
    pub start: Date,
    pub end: Date,
}

/// Represents a complete plan with its tasks and travel metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// Title of the plan
    pub title: String,

    /// Tasks owned by this plan, in extraction order
    #[serde(default)]
    pub todos: Vec<TodoItem>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Kind of plan
    #[serde(rename = "type", default)]
    pub plan_type: PlanType,

    /// Route legs added after creation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<TravelRoute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<TravelDates>,
}

impl Plan {
    pub fn is_travel(&self) -> bool {
        self.plan_type == PlanType::Travel
    }

    /// Looks up a task by id.
    pub fn todo(&self, todo_id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    /// `start → end`, or whichever end is known.
    pub fn route_label(&self) -> Option<String> {
        match (&self.start_location, &self.end_location) {
            (Some(start), Some(end)) => Some(format!("{start} → {end}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

/// Optional part of a plan supplied when it is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanMetadata {
    #[serde(rename = "type", default)]
    pub plan_type: PlanType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<TravelRoute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<TravelDates>,
}

impl PlanMetadata {
    /// Metadata tagging a travel plan with no known endpoints yet.
    pub fn travel() -> Self {
        Self {
            plan_type: PlanType::Travel,
            ..Default::default()
        }
    }
}
