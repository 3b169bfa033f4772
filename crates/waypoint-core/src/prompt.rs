//! Outbound request composition and the fixed conversational texts.
//!
//! Everything here is a pure function of its inputs.

use crate::{
    assistant::{Content, ContentRole, GenerateRequest},
    models::{Message, Role, TodoItem},
    questionnaire::{Answers, QuestionSpec},
};

/// Persona and capability block sent ahead of every transcript.
pub const PREAMBLE: &str = "You are an advanced AI travel and planning assistant specialized in comprehensive planning including travel itineraries, route planning, health & safety considerations, emergency preparedness, and general life planning.";

const EXPERTISE: &str = "TRAVEL PLANNING EXPERTISE:
- Route optimization with altitude, weather, and safety considerations
- Transportation planning (flights, road trips, train travel)
- Accommodation recommendations with safety ratings
- Health advisories for altitude changes and medical conditions
- Emergency planning and risk assessment
- Cultural and local insights
- Weather-dependent activities and alternatives

SAFETY & HEALTH FOCUS:
- Altitude sickness prevention and monitoring
- Risk assessment for different routes and locations
- Emergency contact planning
- Medical preparation for travel
- Weather-related safety alerts
- Political/security situation awareness

GENERAL PLANNING:
- Daily schedules and time management
- Event planning and organization
- Project planning and goal setting
- Task prioritization and breakdown

When creating travel plans, always include:
1. Detailed route breakdown with stopovers
2. Risk levels and safety considerations
3. Health advisories (especially for altitude changes)
4. Weather dependencies and alternatives
5. Emergency contacts and backup plans
6. Accommodation and transport booking details

Format your responses with clear, actionable items that can be tracked as todos. Include specific locations, altitudes, risk levels, and health considerations where relevant.";

/// First assistant message of every session.
pub const WELCOME: &str = "🧭 Welcome to your AI Travel & Planning Assistant! I specialize in:

🗺️ **Travel Planning**: Route optimization, accommodation booking, transport coordination
⛰️ **Safety & Health**: Altitude monitoring, risk assessment, emergency planning
🌤️ **Weather Intelligence**: Seasonal planning, alerts, backup routes
📋 **General Planning**: Daily schedules, project management, goal setting

I can help you plan everything from a Karachi to Khunjerab Pass adventure to your daily work schedule. What would you like to plan today?";

/// Reply recorded when the user skips the questionnaire.
pub const SKIP_ACK: &str = "No problem! You can still ask me to plan your trip, and I'll create a plan based on the information you provide in your message.";

/// Stand-in for an answer the user never gave.
const UNSPECIFIED: &str = "unspecified";

/// Instruction block, with the questionnaire answers when there are any.
pub fn instruction_block(answers: Option<&Answers>) -> String {
    let mut text = String::from(PREAMBLE);
    text.push_str("\n\n");
    if let Some(answers) = answers.filter(|a| !a.is_empty()) {
        text.push_str("QUESTIONNAIRE DATA PROVIDED:\n");
        for (key, value) in answers.iter() {
            text.push_str(&format!("{key}: {value}\n"));
        }
        text.push_str(
            "\nUse this information to create a highly personalized and detailed travel plan.\n\n",
        );
    }
    text.push_str(EXPERTISE);
    text
}

fn content_role(role: Role) -> ContentRole {
    match role {
        Role::User => ContentRole::User,
        Role::Assistant => ContentRole::Model,
    }
}

/// Builds the request for `transcript`, optionally personalised by
/// questionnaire `answers`.
///
/// The instruction block goes first as a `user` turn; every message follows
/// in order with `assistant` translated to `model`.
pub fn compose(transcript: &[Message], answers: Option<&Answers>) -> GenerateRequest {
    let mut contents = Vec::with_capacity(transcript.len() + 1);
    contents.push(Content::text(
        ContentRole::User,
        instruction_block(answers),
    ));
    contents.extend(
        transcript
            .iter()
            .map(|m| Content::text(content_role(m.role), m.content.clone())),
    );
    GenerateRequest { contents }
}

/// The single user message sent once the questionnaire completes.
pub fn planning_request(answers: &Answers) -> String {
    let get = |id: &str| answers.get(id).unwrap_or(UNSPECIFIED);
    format!(
        "Based on the questionnaire responses, create a detailed travel plan for a trip from {} to {}. \
         Include specific tasks for booking {} transportation, finding {} accommodation, and safety \
         considerations for {} level travelers. Duration: {}, Budget: {}, Interests: {}.",
        get("startLocation"),
        get("destination"),
        get("travelMethod"),
        get("accommodation"),
        get("experience"),
        get("duration"),
        get("budget"),
        get("interests"),
    )
}

/// Prefill for a follow-up question about a selected task.
pub fn follow_up_prompt(todo: &TodoItem) -> String {
    let mut text = format!(
        "I have a specific question about this {}: \"{}\"",
        todo.todo_type, todo.title
    );
    if let Some(desc) = &todo.description {
        text.push_str(&format!(" ({desc})"));
    }
    if let Some(location) = &todo.location {
        text.push_str(&format!(" in {location}"));
    }
    if let Some(altitude) = todo.altitude {
        text.push_str(&format!(" at {altitude}m altitude"));
    }
    text.push_str(". ");
    text
}

/// `**Question n of total**` followed by the question.
pub fn question_message(index: usize, total: usize, question: &QuestionSpec) -> String {
    format!(
        "**Question {} of {total}**\n\n{}",
        index + 1,
        question.question
    )
}

/// Opening message of a questionnaire run, including the first question.
pub fn questionnaire_intro(total: usize, first: &QuestionSpec) -> String {
    format!(
        "🗺️ **Travel Planning Questionnaire**\n\n\
         I'd like to ask you a few questions to create the perfect travel plan for you. \
         This will help me provide personalized recommendations for routes, accommodations, \
         and safety considerations.\n\n{}",
        question_message(0, total, first)
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Summary recorded when the last answer arrives.
pub fn completion_summary(answers: &Answers) -> String {
    let lines: Vec<String> = answers
        .iter()
        .map(|(key, value)| format!("• {}: {value}", capitalize(key)))
        .collect();
    format!(
        "Perfect! I have all the information I need. Let me create a comprehensive travel plan \
         based on your preferences:\n\n{}\n\nGenerating your personalized travel itinerary...",
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::TodoType;

    fn answers() -> Answers {
        [
            ("destination", "Hunza"),
            ("startLocation", "Karachi"),
            ("budget", "mid-range"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_compose_translates_roles_and_keeps_order() {
        let transcript = vec![
            Message::assistant("m1", "Welcome"),
            Message::user("m2", "Plan my week"),
        ];
        let request = compose(&transcript, None);

        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[0].role, ContentRole::User);
        assert!(request.contents[0].joined_text().starts_with(PREAMBLE));
        assert!(!request.contents[0].joined_text().contains("QUESTIONNAIRE DATA"));
        assert_eq!(request.contents[1].role, ContentRole::Model);
        assert_eq!(request.contents[1].joined_text(), "Welcome");
        assert_eq!(request.contents[2].role, ContentRole::User);
        assert_eq!(request.contents[2].joined_text(), "Plan my week");
    }

    #[test]
    fn test_compose_includes_answers() {
        let answers = answers();
        let request = compose(&[], Some(&answers));
        let block = request.contents[0].joined_text();
        assert!(block.contains("QUESTIONNAIRE DATA PROVIDED:\ndestination: Hunza\nstartLocation: Karachi\nbudget: mid-range\n"));
    }

    #[test]
    fn test_compose_is_pure() {
        let transcript = vec![Message::user("m1", "hello")];
        assert_eq!(compose(&transcript, None), compose(&transcript, None));
    }

    #[test]
    fn test_planning_request_fills_missing_answers() {
        let text = planning_request(&answers());
        assert!(text.contains("from Karachi to Hunza"));
        assert!(text.contains("Budget: mid-range"));
        assert!(text.contains("Duration: unspecified"));
    }

    #[test]
    fn test_follow_up_prompt() {
        let mut todo = TodoItem::new("t1", "Cross Khunjerab Pass", Timestamp::UNIX_EPOCH);
        todo.todo_type = TodoType::Health;
        todo.location = Some("Khunjerab".to_string());
        todo.altitude = Some(4700);
        assert_eq!(
            follow_up_prompt(&todo),
            "I have a specific question about this health: \"Cross Khunjerab Pass\" in Khunjerab at 4700m altitude. "
        );

        let plain = TodoItem::new("t2", "Pack bags", Timestamp::UNIX_EPOCH);
        assert_eq!(
            follow_up_prompt(&plain),
            "I have a specific question about this general: \"Pack bags\". "
        );
    }

    #[test]
    fn test_questionnaire_texts() {
        let q = QuestionSpec {
            id: "destination",
            question: "Where to?",
            placeholder: None,
        };
        assert_eq!(question_message(2, 8, &q), "**Question 3 of 8**\n\nWhere to?");
        assert!(questionnaire_intro(8, &q).ends_with("**Question 1 of 8**\n\nWhere to?"));

        let summary = completion_summary(&answers());
        assert!(summary.contains("• Destination: Hunza\n• StartLocation: Karachi"));
    }
}
