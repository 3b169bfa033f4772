//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Type labels, risk badges and health alerts on every task
//! - A compact one-line task format for use inside plans

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Message, Plan, PlanSummary, PlanType, RiskLevel, Role, TodoItem, TodoType, TransportMode,
    TravelRoute,
};

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TodoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::User => writeln!(f, "> {}", self.content),
            Role::Assistant => writeln!(f, "{}", self.content),
        }
    }
}

impl TodoItem {
    /// Comma-separated annotations: type, risk badge, alert, place, altitude.
    fn annotations(&self) -> String {
        let mut parts = vec![
            self.todo_type.with_icon().to_string(),
            self.risk_level.badge().to_string(),
        ];
        if self.health_alert {
            parts.push("Health alert".to_string());
        }
        if let Some(location) = &self.location {
            parts.push(format!("📍 {location}"));
        }
        if let Some(altitude) = self.altitude {
            parts.push(format!("{altitude}m"));
        }
        parts.join(", ")
    }

    fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }

    /// Format the task as a single numbered list line.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>, position: usize) -> fmt::Result {
        writeln!(
            f,
            "{position}. {} {} ({}) `{}`",
            self.checkbox(),
            self.title,
            self.annotations(),
            self.id
        )
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {}", self.checkbox(), self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Type: {}", self.todo_type.with_icon())?;
        writeln!(f, "- Risk: {}", self.risk_level.badge())?;
        if self.health_alert {
            writeln!(f, "- Health alert: yes")?;
        }
        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
        }
        if let Some(altitude) = self.altitude {
            writeln!(f, "- Altitude: {altitude}m")?;
        }
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TravelRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} → {} ({}", self.from, self.to, self.transport_mode)?;
        if let Some(distance) = &self.distance {
            write!(f, ", {distance}")?;
        }
        if let Some(time) = &self.estimated_time {
            write!(f, ", {time}")?;
        }
        if let Some(altitude) = self.altitude {
            write!(f, ", {altitude}m")?;
        }
        if let Some(risk) = self.risk_level {
            write!(f, ", {}", risk.badge())?;
        }
        if self.weather_dependent == Some(true) {
            write!(f, ", weather dependent")?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_travel() {
            writeln!(f, "# {} (Travel Plan)", self.title)?;
        } else {
            writeln!(f, "# {}", self.title)?;
        }
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Type: {}", self.plan_type)?;
        if let Some(route) = self.route_label() {
            writeln!(f, "- Route: {route}")?;
        }
        if let Some(dates) = &self.travel_dates {
            writeln!(f, "- Dates: {} to {}", dates.start, dates.end)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.todos.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
        } else {
            let done = self.todos.iter().filter(|t| t.completed).count();
            writeln!(f, "\n## Tasks ({done}/{})", self.todos.len())?;
            writeln!(f)?;
            for (idx, todo) in self.todos.iter().enumerate() {
                todo.fmt_line(f, idx + 1)?;
            }
        }

        if !self.routes.is_empty() {
            writeln!(f, "\n## Routes")?;
            writeln!(f)?;
            for route in &self.routes {
                write!(f, "{route}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Type**: {}", self.plan_type)?;

        if let (Some(start), Some(end)) = (&self.start_location, &self.end_location) {
            writeln!(f, "- **Route**: {start} → {end}")?;
        }

        if self.high_risk_tasks > 0 || self.health_alerts > 0 {
            writeln!(
                f,
                "- **Alerts**: {} high risk, {} health alert{}",
                self.high_risk_tasks,
                self.health_alerts,
                if self.health_alerts == 1 { "" } else { "s" }
            )?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}
