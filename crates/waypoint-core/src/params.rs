//! Parameter structures for Waypoint operations.
//!
//! These are plain data shared between the session and its front ends. The
//! CLI wraps each one in a `clap` struct and converts with `.into()`, so the
//! core stays free of argument-parsing derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Plans and tasks are addressed by id here. Resolving positions typed by a
//! user happens in the front end.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    models::{PlanType, TransportMode},
};

/// Parameters for creating a plan by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlan {
    /// Title of the plan (required)
    pub title: String,
    /// Task titles, in order
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Plan kind, `general` when absent
    #[serde(default)]
    pub plan_type: Option<String>,
}

impl AddPlan {
    /// Validates the title and returns the trimmed task titles with the
    /// parsed plan type.
    ///
    /// # Errors
    ///
    /// * `WaypointError::InvalidInput` - When the title is blank
    /// * `WaypointError::InvalidInput` - When the plan type is unknown
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::params::AddPlan;
    ///
    /// let params = AddPlan {
    ///     title: "Weekend".to_string(),
    ///     tasks: vec![" Pack ".to_string(), "".to_string()],
    ///     plan_type: Some("personal".to_string()),
    /// };
    /// let (tasks, _) = params.validate()?;
    /// assert_eq!(tasks, vec!["Pack".to_string()]);
    /// # Ok::<(), waypoint_core::WaypointError>(())
    /// ```
    pub fn validate(&self) -> Result<(Vec<String>, PlanType)> {
        if self.title.trim().is_empty() {
            return Err(WaypointError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        let plan_type = match &self.plan_type {
            Some(raw) => PlanType::from_str(raw)
                .map_err(|e| WaypointError::invalid_input("type").with_reason(e))?,
            None => PlanType::General,
        };
        let tasks = self
            .tasks
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Ok((tasks, plan_type))
    }
}

/// Addresses one task inside one plan.
///
/// Used for toggling completion and selecting a task for discussion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRef {
    pub plan_id: String,
    pub todo_id: String,
}

impl TodoRef {
    pub fn new(plan_id: impl Into<String>, todo_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            todo_id: todo_id.into(),
        }
    }
}

/// Parameters for appending a route leg to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddRoute {
    pub plan_id: String,
    pub from: String,
    pub to: String,
    /// `flight`, `road` or `train`
    pub transport_mode: String,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

impl AddRoute {
    /// Checks both endpoints and parses the transport mode.
    ///
    /// # Errors
    ///
    /// * `WaypointError::InvalidInput` - When an endpoint is blank
    /// * `WaypointError::InvalidInput` - When the mode is not a known transport mode
    pub fn validate(&self) -> Result<TransportMode> {
        for (field, value) in [("from", &self.from), ("to", &self.to)] {
            if value.trim().is_empty() {
                return Err(WaypointError::invalid_input(field).with_reason("Location cannot be empty"));
            }
        }
        TransportMode::from_str(&self.transport_mode).map_err(|e| {
            WaypointError::invalid_input("transport_mode")
                .with_reason(format!("{e}. Must be 'flight', 'road', or 'train'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_plan_blank_title() {
        let params = AddPlan {
            title: "  ".to_string(),
            ..Default::default()
        };
        match params.validate().unwrap_err() {
            WaypointError::InvalidInput { field, .. } => assert_eq!(field, "title"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_plan_unknown_type() {
        let params = AddPlan {
            title: "Trip".to_string(),
            plan_type: Some("vacation".to_string()),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid plan type: vacation"));
    }

    #[test]
    fn test_add_plan_defaults_to_general() {
        let params = AddPlan {
            title: "Errands".to_string(),
            tasks: vec!["Buy milk".to_string()],
            plan_type: None,
        };
        let (tasks, plan_type) = params.validate().unwrap();
        assert_eq!(tasks, vec!["Buy milk".to_string()]);
        assert_eq!(plan_type, PlanType::General);
    }

    #[test]
    fn test_add_route_modes() {
        let mut params = AddRoute {
            plan_id: "p1".to_string(),
            from: "Karachi".to_string(),
            to: "Gilgit".to_string(),
            transport_mode: "fly".to_string(),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), TransportMode::Flight);

        params.transport_mode = "boat".to_string();
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Must be 'flight', 'road', or 'train'"));
    }

    #[test]
    fn test_add_route_blank_endpoint() {
        let params = AddRoute {
            plan_id: "p1".to_string(),
            from: "Karachi".to_string(),
            to: String::new(),
            transport_mode: "road".to_string(),
            ..Default::default()
        };
        match params.validate().unwrap_err() {
            WaypointError::InvalidInput { field, .. } => assert_eq!(field, "to"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }
}
