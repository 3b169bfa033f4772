//! Heuristic plan extraction from free-form assistant replies.
//!
//! The extractor looks for numbered or bulleted lines, turns each into a
//! [`TodoItem`] classified by the keyword tables in [`rules`], and picks a
//! title and route endpoints from the surrounding text. A reply without any
//! usable list item yields `None`.
//!
//! ```rust
//! use std::sync::Arc;
//! use waypoint_core::{extract::PlanExtractor, ids::SequentialIds, models::TodoType};
//!
//! let extractor = PlanExtractor::new(Arc::new(SequentialIds::new("todo")));
//! let plan = extractor
//!     .extract("Your travel plan:\n1. Book a flight from Karachi to Gilgit")
//!     .unwrap();
//! assert_eq!(plan.todos[0].todo_type, TodoType::Transport);
//! assert!(extractor.extract("Here is some advice.").is_none());
//! ```

pub mod rules;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use jiff::Timestamp;
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::{
    error::Result,
    ids::SharedIds,
    models::{PlanMetadata, RiskLevel, TodoItem},
};

/// `1. text`, `- text`, `* text` or `• text`; the space after the marker is
/// optional.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+\.|[-*•])\s*(.+)$").expect("list item pattern is valid")
});

/// Lines opening with a list marker never become the title.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.|[-*•])").expect("list marker pattern is valid"));

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("heading pattern is valid"));

/// Items this short or shorter are dropped.
const MIN_ITEM_CHARS: usize = 3;

/// Title candidates must be longer than this.
const MIN_TITLE_CHARS: usize = 5;

/// A plan recovered from a reply, ready for the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedPlan {
    pub title: String,
    pub todos: Vec<TodoItem>,
    pub metadata: PlanMetadata,
}

impl ExtractedPlan {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Turns assistant replies into candidate plans.
#[derive(Clone)]
pub struct PlanExtractor {
    ids: SharedIds,
}

impl PlanExtractor {
    pub fn new(ids: SharedIds) -> Self {
        Self { ids }
    }

    /// Extracts a plan, stamping tasks with the current time.
    pub fn extract(&self, text: &str) -> Option<ExtractedPlan> {
        self.extract_at(text, Timestamp::now())
    }

    /// Extracts a plan, stamping tasks with `now`.
    ///
    /// Given the same id sequence and `now`, the output depends only on
    /// `text`.
    pub fn extract_at(&self, text: &str, now: Timestamp) -> Option<ExtractedPlan> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let todos: Vec<TodoItem> = lines
            .iter()
            .filter_map(|line| item_text(line))
            .map(|item| self.classify(item, now))
            .collect();

        if todos.is_empty() {
            debug!("extract: no list items in {} lines", lines.len());
            return None;
        }

        debug!("extract: {} tasks", todos.len());
        Some(ExtractedPlan {
            title: title(&lines),
            todos,
            metadata: metadata(text),
        })
    }

    fn classify(&self, text: String, now: Timestamp) -> TodoItem {
        let lower = text.to_lowercase();
        let mut todo = TodoItem::new(self.ids.next_id(), text, now);

        let mut category_risk = RiskLevel::Low;
        if let Some(rule) = rules::categorize(&lower) {
            todo.todo_type = rule.todo_type;
            todo.health_alert = rule.health_alert;
            category_risk = rule.risk;
        }
        todo.risk_level = category_risk.max(rules::keyword_risk(&lower));
        todo.location = rules::location(&lower);
        todo.altitude = rules::altitude(&lower);
        todo
    }
}

/// Item text with the list marker and emphasis removed, if the line is a
/// list item long enough to keep.
fn item_text(line: &str) -> Option<String> {
    let captures = LIST_ITEM.captures(line)?;
    let text = captures[1].replace("**", "").replace("__", "");
    let text = text.trim();
    (text.chars().count() > MIN_ITEM_CHARS).then(|| text.to_string())
}

fn starts_with_marker(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

fn title(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|line| {
            let lower = line.to_lowercase();
            !starts_with_marker(line)
                && line.chars().count() > MIN_TITLE_CHARS
                && !line.contains("**")
                && rules::TITLE_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .map(|line| HEADING_MARKER.replace(line, "").trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| rules::DEFAULT_TITLE.to_string())
}

fn metadata(text: &str) -> PlanMetadata {
    let lower = text.to_lowercase();
    let anchor = |(needle, label): (&str, &str)| lower.contains(needle).then(|| label.to_string());
    PlanMetadata {
        start_location: anchor(rules::START_ANCHOR),
        end_location: anchor(rules::END_ANCHOR),
        ..PlanMetadata::travel()
    }
}
