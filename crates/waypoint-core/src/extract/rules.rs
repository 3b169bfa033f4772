//! Keyword tables driving task classification.
//!
//! All matching is case-insensitive substring search over the task text.
//! Tables are ordered; where a lookup says "first match wins" the order
//! below is the precedence.

use crate::models::{RiskLevel, TodoType};

/// Category assigned when any keyword appears in the task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub todo_type: TodoType,
    /// Risk implied by the category alone
    pub risk: RiskLevel,
    pub health_alert: bool,
}

impl CategoryRule {
    pub fn matches(&self, lower: &str) -> bool {
        contains_any(lower, self.keywords)
    }
}

/// Category table, first match wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &[
            "hotel",
            "accommodation",
            "guesthouse",
            "hostel",
            "lodge",
            "resort",
            "camping",
        ],
        todo_type: TodoType::Accommodation,
        risk: RiskLevel::Low,
        health_alert: false,
    },
    CategoryRule {
        keywords: &["flight", "transport", "ticket", "bus", "drive"],
        todo_type: TodoType::Transport,
        risk: RiskLevel::Low,
        health_alert: false,
    },
    CategoryRule {
        keywords: &["health", "altitude", "medical", "oxygen"],
        todo_type: TodoType::Health,
        risk: RiskLevel::Low,
        health_alert: true,
    },
    CategoryRule {
        keywords: &["emergency", "contact", "sos", "safety"],
        todo_type: TodoType::Emergency,
        risk: RiskLevel::High,
        health_alert: false,
    },
    CategoryRule {
        keywords: &["weather", "alert", "forecast"],
        todo_type: TodoType::Weather,
        risk: RiskLevel::Low,
        health_alert: false,
    },
];

/// Risk keywords, checked highest first.
pub const RISK_RULES: &[(&[&str], RiskLevel)] = &[
    (&["high risk", "dangerous", "extreme"], RiskLevel::High),
    (&["medium risk", "caution", "careful"], RiskLevel::Medium),
];

/// Known places, in lookup order.
pub const GAZETTEER: &[&str] = &[
    "karachi",
    "islamabad",
    "gilgit",
    "hunza",
    "naran",
    "kaghan",
    "chilas",
    "khunjerab",
];

/// Altitude literals in metres, in precedence order.
pub const ALTITUDE_LITERALS: &[(&[&str], u32)] = &[
    (&["4700", "4,700"], 4700),
    (&["15000", "15,000"], 15000),
];

/// Whole-response anchors for plan endpoints: `(needle, label)`.
pub const START_ANCHOR: (&str, &str) = ("karachi", "Karachi");
pub const END_ANCHOR: (&str, &str) = ("khunjerab", "Khunjerab Pass");

/// Words that make a non-list line eligible as the plan title.
pub const TITLE_HINTS: &[&str] = &["route", "travel", "plan"];

pub const DEFAULT_TITLE: &str = "New Travel Plan";

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

/// First matching category rule.
pub fn categorize(lower: &str) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.matches(lower))
}

/// Risk implied by keywords alone.
pub fn keyword_risk(lower: &str) -> RiskLevel {
    RISK_RULES
        .iter()
        .find(|(needles, _)| contains_any(lower, needles))
        .map(|(_, level)| *level)
        .unwrap_or_default()
}

/// First gazetteer entry present, capitalised.
pub fn location(lower: &str) -> Option<String> {
    GAZETTEER
        .iter()
        .find(|place| lower.contains(*place))
        .map(|place| capitalize(place))
}

pub fn altitude(lower: &str) -> Option<u32> {
    ALTITUDE_LITERALS
        .iter()
        .find(|(needles, _)| contains_any(lower, needles))
        .map(|(_, metres)| *metres)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
