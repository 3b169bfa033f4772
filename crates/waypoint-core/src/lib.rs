//! Core library for the Waypoint travel planning assistant.
//!
//! This crate holds everything behind the chat: the guided questionnaire,
//! request composition for the Gemini API, heuristic plan extraction from
//! replies, the in-memory plan store and the session that drives them.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Collections, planning history and
//!   turn notices
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use waypoint_core::{PlanExtractor, PlanStore, ids::SequentialIds};
//!
//! let ids = Arc::new(SequentialIds::new("id"));
//! let extractor = PlanExtractor::new(ids.clone());
//! let mut store = PlanStore::new(ids);
//!
//! let reply = "Karachi to Khunjerab Pass travel route\n\
//!              1. Book a flight from Karachi to Gilgit\n\
//!              2. Acclimatise in Hunza before the 4,700m pass";
//! if let Some(plan) = extractor.extract(reply) {
//!     let plan = store.add_plan(plan.title, plan.todos, Some(plan.metadata));
//!     println!("{plan}");
//! }
//! assert_eq!(store.len(), 1);
//! ```

pub mod assistant;
pub mod credentials;
pub mod display;
pub mod error;
pub mod extract;
pub mod ids;
pub mod models;
pub mod params;
pub mod prompt;
pub mod questionnaire;
pub mod session;
pub mod store;
pub mod trigger;

// Re-export commonly used types
pub use assistant::{Assistant, AssistantError, GeminiClient, GeminiConfig};
pub use credentials::{ApiKey, KeyStore};
pub use display::{Notice, PlanHistory, PlanSummaries};
pub use error::{Result, WaypointError};
pub use extract::{ExtractedPlan, PlanExtractor};
pub use models::{
    Message, Plan, PlanMetadata, PlanSummary, PlanType, RiskLevel, Role, TodoItem, TodoType,
    TransportMode, TravelRoute,
};
pub use params::{AddPlan, AddRoute, TodoRef};
pub use questionnaire::{Answers, Questionnaire};
pub use session::{CreatedPlan, Session, SessionBuilder, Turn};
pub use store::PlanStore;
