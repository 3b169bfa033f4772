//! Closed enumerations for message roles, task and plan categories, risk
//! levels and transport modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Category of a task, assigned by the extractor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoType {
    #[default]
    General,
    Accommodation,
    Transport,
    Health,
    Emergency,
    Weather,
}

impl TodoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoType::General => "general",
            TodoType::Accommodation => "accommodation",
            TodoType::Transport => "transport",
            TodoType::Health => "health",
            TodoType::Emergency => "emergency",
            TodoType::Weather => "weather",
        }
    }

    /// Short bracketed label used in task listings.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TodoType::General => "○ General",
            TodoType::Accommodation => "⌂ Accommodation",
            TodoType::Transport => "✈ Transport",
            TodoType::Health => "♥ Health",
            TodoType::Emergency => "⚠ Emergency",
            TodoType::Weather => "☁ Weather",
        }
    }
}

/// Three-tier severity tag attached to a task or route.
///
/// Ordered so that `max` picks the more severe level.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Badge text shown next to a task.
    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Kind of plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    General,
    Travel,
    Business,
    Personal,
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(PlanType::General),
            "travel" => Ok(PlanType::Travel),
            "business" => Ok(PlanType::Business),
            "personal" => Ok(PlanType::Personal),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::General => "general",
            PlanType::Travel => "travel",
            PlanType::Business => "business",
            PlanType::Personal => "personal",
        }
    }
}

/// How a route leg is travelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Road,
    Train,
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" | "fly" => Ok(TransportMode::Flight),
            "road" | "drive" => Ok(TransportMode::Road),
            "train" | "rail" => Ok(TransportMode::Train),
            _ => Err(format!("Invalid transport mode: {s}")),
        }
    }
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Road => "road",
            TransportMode::Train => "train",
        }
    }
}
