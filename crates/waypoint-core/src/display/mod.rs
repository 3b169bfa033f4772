//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections, the planning history and turn
//! notices. Everything renders as markdown so the CLI can pass it straight to
//! the terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`PlanSummaries`], [`PlanHistory`])
//! - [`status`]: Turn outcome messages ([`Notice`])
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::display::Notice;
//!
//! let notice = Notice::success("Travel plan created!", "Added 4 tasks to your itinerary.");
//! assert!(notice.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{HistoryDay, PlanHistory, PlanSummaries};
pub use datetime::{DayLabel, LocalDateTime, LocalTime};
pub use status::Notice;
