use std::sync::Arc;

use jiff::Timestamp;

use super::*;
use crate::{
    ids::SequentialIds,
    models::{PlanType, RiskLevel, TodoType},
};

fn extractor() -> PlanExtractor {
    PlanExtractor::new(Arc::new(SequentialIds::new("todo")))
}

fn fixed_now() -> Timestamp {
    "2025-06-01T08:00:00Z".parse().unwrap()
}

const KKH_REPLY: &str = "\
# Karachi to Khunjerab Pass Travel Route

Here is what you need to do:

1. Book a flight from Karachi to Gilgit
2. **Reserve a guesthouse in Hunza**
- High risk: crossing Khunjerab Pass at 4,700m requires oxygen
- Save emergency contact numbers
* Check the weather forecast before leaving Naran
• Drive carefully with caution on the Karakoram Highway
3. Go
";

#[test]
fn test_no_list_items_yields_none() {
    assert!(extractor().extract("Here is some advice.").is_none());
    assert!(extractor().extract("").is_none());
    assert!(extractor().extract("1. Go\n- ok").is_none());
}

#[test]
fn test_transport_item() {
    let plan = extractor()
        .extract_at("1. Book a flight from Karachi to Gilgit", fixed_now())
        .unwrap();
    let todo = &plan.todos[0];
    assert_eq!(todo.title, "Book a flight from Karachi to Gilgit");
    assert_eq!(todo.todo_type, TodoType::Transport);
    assert_eq!(todo.location.as_deref(), Some("Karachi"));
    assert_eq!(todo.risk_level, RiskLevel::Low);
    assert!(!todo.health_alert);
    assert_eq!(todo.altitude, None);
    assert!(!todo.completed);
}

#[test]
fn test_high_altitude_item() {
    let plan = extractor()
        .extract_at(
            "- High risk: crossing Khunjerab Pass at 4,700m requires oxygen",
            fixed_now(),
        )
        .unwrap();
    let todo = &plan.todos[0];
    assert_eq!(todo.todo_type, TodoType::Health);
    assert!(todo.health_alert);
    assert_eq!(todo.risk_level, RiskLevel::High);
    assert_eq!(todo.altitude, Some(4700));
    assert_eq!(todo.location.as_deref(), Some("Khunjerab"));
}

#[test]
fn test_full_reply() {
    let plan = extractor().extract_at(KKH_REPLY, fixed_now()).unwrap();

    assert_eq!(plan.title, "Karachi to Khunjerab Pass Travel Route");
    assert_eq!(plan.metadata.plan_type, PlanType::Travel);
    assert_eq!(plan.metadata.start_location.as_deref(), Some("Karachi"));
    assert_eq!(plan.metadata.end_location.as_deref(), Some("Khunjerab Pass"));

    let kinds: Vec<TodoType> = plan.todos.iter().map(|t| t.todo_type).collect();
    assert_eq!(
        kinds,
        vec![
            TodoType::Transport,
            TodoType::Accommodation,
            TodoType::Health,
            TodoType::Emergency,
            TodoType::Weather,
            TodoType::Transport,
        ]
    );

    // Emphasis is stripped, the two-letter item is dropped.
    assert_eq!(plan.todos[1].title, "Reserve a guesthouse in Hunza");
    assert_eq!(plan.todos.len(), 6);

    assert_eq!(plan.todos[3].risk_level, RiskLevel::High);
    assert_eq!(plan.todos[5].risk_level, RiskLevel::Medium);
    assert_eq!(plan.todos[4].location.as_deref(), Some("Naran"));
}

#[test]
fn test_ids_and_timestamps_are_injected() {
    let plan = extractor().extract_at(KKH_REPLY, fixed_now()).unwrap();
    let ids: Vec<&str> = plan.todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids[..3], ["todo-1", "todo-2", "todo-3"]);
    assert!(plan.todos.iter().all(|t| t.created_at == fixed_now()));
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extractor().extract_at(KKH_REPLY, fixed_now());
    let second = extractor().extract_at(KKH_REPLY, fixed_now());
    assert_eq!(first, second);
}

#[test]
fn test_default_title_and_no_endpoints() {
    let plan = extractor()
        .extract_at("Things to do:\n- Buy groceries\n- Call mom", fixed_now())
        .unwrap();
    assert_eq!(plan.title, "New Travel Plan");
    assert_eq!(plan.metadata.start_location, None);
    assert_eq!(plan.metadata.end_location, None);
    // Type is travel whenever a plan is extracted.
    assert_eq!(plan.metadata.plan_type, PlanType::Travel);
}

#[test]
fn test_title_skips_bold_and_short_lines() {
    let text = "Plan\n**Your travel plan**\nWeekend planning notes\n1. Pack bags";
    let plan = extractor().extract_at(text, fixed_now()).unwrap();
    assert_eq!(plan.title, "Weekend planning notes");
}

#[test]
fn test_bullet_without_space_is_an_item() {
    let plan = extractor()
        .extract_at("-Pack warm layers for Hunza", fixed_now())
        .unwrap();
    assert_eq!(plan.todos.len(), 1);
    assert_eq!(plan.todos[0].title, "Pack warm layers for Hunza");
    assert_eq!(plan.todos[0].location.as_deref(), Some("Hunza"));
}

#[test]
fn test_marker_lines_are_never_the_title() {
    let plan = extractor()
        .extract_at(
            "*Your travel plan overview*\nTravel route to Hunza\n- Book a hotel in Hunza",
            fixed_now(),
        )
        .unwrap();
    assert_eq!(plan.title, "Travel route to Hunza");
    assert_eq!(plan.todos.len(), 2);
    assert_eq!(plan.todos[1].title, "Book a hotel in Hunza");
}

#[test]
fn test_keyword_risk_only_escalates() {
    // Emergency items are high risk even when the text says "caution".
    let plan = extractor()
        .extract_at("- Share emergency plan, use caution", fixed_now())
        .unwrap();
    assert_eq!(plan.todos[0].risk_level, RiskLevel::High);
}

#[test]
fn test_to_json() {
    let plan = extractor()
        .extract_at("1. Book a flight from Karachi to Gilgit", fixed_now())
        .unwrap();
    let json = plan.to_json().unwrap();
    assert!(json.contains("\"type\": \"transport\""));
    assert!(json.contains("\"location\": \"Karachi\""));
}
