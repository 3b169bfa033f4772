//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanType, RiskLevel};

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Kind of plan
    pub plan_type: PlanType,
    /// Where the journey begins, if known
    pub start_location: Option<String>,
    /// Where the journey ends, if known
    pub end_location: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
    /// Number of tasks rated high risk
    pub high_risk_tasks: u32,
    /// Number of tasks carrying a health alert
    pub health_alerts: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let count = |pred: &dyn Fn(&super::TodoItem) -> bool| {
            plan.todos.iter().filter(|t| pred(t)).count() as u32
        };

        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            plan_type: plan.plan_type,
            start_location: plan.start_location.clone(),
            end_location: plan.end_location.clone(),
            created_at: plan.created_at,
            total_tasks: plan.todos.len() as u32,
            completed_tasks: count(&|t| t.completed),
            high_risk_tasks: count(&|t| t.risk_level == RiskLevel::High),
            health_alerts: count(&|t| t.health_alert),
        }
    }
}
