#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date};

    use crate::{
        display::LocalDateTime,
        models::{
            Message, Plan, PlanSummary, PlanType, RiskLevel, TodoItem, TodoType, TransportMode,
            TravelDates, TravelRoute,
        },
    };

    fn created() -> Timestamp {
        Timestamp::from_second(1640995200).unwrap() // 2022-01-01 00:00:00 UTC
    }

    fn create_test_todo(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            completed,
            ..TodoItem::new(id, "Book a flight from Karachi to Gilgit", created())
        }
    }

    fn create_health_todo() -> TodoItem {
        TodoItem {
            todo_type: TodoType::Health,
            location: Some("Khunjerab".to_string()),
            altitude: Some(4700),
            risk_level: RiskLevel::High,
            health_alert: true,
            description: Some("Carry oxygen".to_string()),
            ..TodoItem::new("t9", "Cross Khunjerab Pass", created())
        }
    }

    fn create_test_route() -> TravelRoute {
        TravelRoute {
            id: "r1".to_string(),
            from: "Gilgit".to_string(),
            to: "Hunza".to_string(),
            distance: Some("100 km".to_string()),
            estimated_time: Some("2 hours".to_string()),
            transport_mode: TransportMode::Road,
            altitude: Some(2500),
            risk_level: Some(RiskLevel::Medium),
            weather_dependent: Some(true),
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: "p1".to_string(),
            title: "Karakoram Highway".to_string(),
            todos: vec![create_test_todo("t1", true), create_health_todo()],
            created_at: created(),
            plan_type: PlanType::Travel,
            routes: vec![create_test_route()],
            start_location: Some("Karachi".to_string()),
            end_location: Some("Khunjerab Pass".to_string()),
            travel_dates: Some(TravelDates {
                start: date(2025, 6, 1),
                end: date(2025, 6, 10),
            }),
        }
    }

    #[test]
    fn test_todo_type_with_icon() {
        assert_eq!(TodoType::Transport.with_icon(), "✈ Transport");
        assert_eq!(TodoType::Health.with_icon(), "♥ Health");
        assert_eq!(TodoType::General.with_icon(), "○ General");
    }

    #[test]
    fn test_todo_display() {
        let output = format!("{}", create_health_todo());

        assert!(output.contains("### [ ] Cross Khunjerab Pass"));
        assert!(output.contains("- ID: t9"));
        assert!(output.contains("- Type: ♥ Health"));
        assert!(output.contains("- Risk: High Risk"));
        assert!(output.contains("- Health alert: yes"));
        assert!(output.contains("- Location: Khunjerab"));
        assert!(output.contains("- Altitude: 4700m"));
        assert!(output.contains("Carry oxygen"));
    }

    #[test]
    fn test_plain_todo_omits_optional_lines() {
        let output = format!("{}", TodoItem::new("t1", "Pack", created()));
        assert!(!output.contains("Health alert"));
        assert!(!output.contains("Location"));
        assert!(!output.contains("Altitude"));
    }

    #[test]
    fn test_plan_display() {
        let plan = create_test_plan();
        let output = format!("{}", plan);

        assert!(output.contains("# Karakoram Highway (Travel Plan)"));
        assert!(output.contains("- Route: Karachi → Khunjerab Pass"));
        assert!(output.contains("- Dates: 2025-06-01 to 2025-06-10"));
        assert!(output.contains(&format!("- Created: {}", LocalDateTime(&plan.created_at))));
        assert!(output.contains("## Tasks (1/2)"));
        assert!(output.contains(
            "1. [x] Book a flight from Karachi to Gilgit (○ General, Low Risk) `t1`"
        ));
        assert!(output.contains(
            "2. [ ] Cross Khunjerab Pass (♥ Health, High Risk, Health alert, 📍 Khunjerab, 4700m) `t9`"
        ));
        assert!(output.contains("## Routes"));
        assert!(output.contains(
            "- Gilgit → Hunza (road, 100 km, 2 hours, 2500m, Medium Risk, weather dependent)"
        ));
    }

    #[test]
    fn test_empty_general_plan_display() {
        let plan = Plan {
            todos: vec![],
            routes: vec![],
            plan_type: PlanType::General,
            start_location: None,
            end_location: None,
            travel_dates: None,
            ..create_test_plan()
        };
        let output = format!("{}", plan);

        assert!(output.starts_with("# Karakoram Highway\n"));
        assert!(output.contains("No tasks in this plan."));
        assert!(!output.contains("## Routes"));
        assert!(!output.contains("- Route:"));
    }

    #[test]
    fn test_route_label() {
        let mut plan = create_test_plan();
        assert_eq!(plan.route_label().as_deref(), Some("Karachi → Khunjerab Pass"));
        plan.start_location = None;
        assert_eq!(plan.route_label().as_deref(), Some("Khunjerab Pass"));
        plan.end_location = None;
        assert_eq!(plan.route_label(), None);
    }

    #[test]
    fn test_plan_summary_from_plan() {
        let summary = PlanSummary::from(&create_test_plan());

        assert_eq!(summary.id, "p1");
        assert_eq!(summary.plan_type, PlanType::Travel);
        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.high_risk_tasks, 1);
        assert_eq!(summary.health_alerts, 1);
    }

    #[test]
    fn test_plan_summary_display() {
        let summary = PlanSummary::from(&create_test_plan());
        let output = format!("{}", summary);

        assert!(output.contains("## Karakoram Highway (ID: p1) (1/2)"));
        assert!(output.contains("- **Type**: travel"));
        assert!(output.contains("- **Route**: Karachi → Khunjerab Pass"));
        assert!(output.contains("- **Alerts**: 1 high risk, 1 health alert\n"));
    }

    #[test]
    fn test_message_display() {
        assert_eq!(format!("{}", Message::user("m1", "Plan my week")), "> Plan my week\n");
        assert_eq!(format!("{}", Message::assistant("m2", "Sure.")), "Sure.\n");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(create_health_todo()).unwrap();
        assert_eq!(json["type"], "health");
        assert_eq!(json["risk_level"], "high");
        assert_eq!(json["health_alert"], true);
        assert!(json.get("todo_type").is_none());
    }
}
