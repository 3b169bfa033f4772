//! Data models for messages, plans, tasks and routes.
//!
//! This module contains the core domain models of the Waypoint planning
//! assistant. Display implementations for these models live in
//! [`crate::display::models`] to keep data structures apart from presentation
//! logic.
//!
//! # Ownership
//!
//! - A [`Plan`] owns its [`TodoItem`]s and [`TravelRoute`]s exclusively.
//! - Only [`TodoItem::completed`] changes after creation; routes are appended
//!   and never removed.
//! - [`Message`]s are immutable and only ever appended to a transcript.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Plan, PlanType, RiskLevel, TodoItem, TodoType};
//! use jiff::Timestamp;
//!
//! let mut todo = TodoItem::new("t1", "Pack oxygen canisters", Timestamp::UNIX_EPOCH);
//! todo.todo_type = TodoType::Health;
//! todo.health_alert = true;
//!
//! let plan = Plan {
//!     id: "p1".to_string(),
//!     title: "Karakoram Highway".to_string(),
//!     todos: vec![todo],
//!     created_at: Timestamp::UNIX_EPOCH,
//!     plan_type: PlanType::Travel,
//! #   routes: vec![],
//! #   start_location: None,
//! #   end_location: None,
//! #   travel_dates: None,
//! };
//! assert_eq!(plan.todos[0].risk_level, RiskLevel::Low);
//! println!("{plan}");
//! ```

pub mod kinds;
pub mod message;
pub mod plan;
pub mod route;
pub mod summary;
pub mod todo;

#[cfg(test)]
mod tests;

pub use kinds::{PlanType, RiskLevel, Role, TodoType, TransportMode};
pub use message::Message;
pub use plan::{Plan, PlanMetadata, TravelDates};
pub use route::TravelRoute;
pub use summary::PlanSummary;
pub use todo::TodoItem;
