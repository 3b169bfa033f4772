//! The fixed catalog of guided travel questions.

/// One guided question. Identity is its position in the catalog; `id` keys
/// the collected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub question: &'static str,
    pub placeholder: Option<&'static str>,
}

/// Questions asked before requesting a travel plan, in asking order.
pub const TRAVEL_QUESTIONS: &[QuestionSpec] = &[
    QuestionSpec {
        id: "destination",
        question: "Where would you like to travel to? (e.g., Hunza Valley, Khunjerab Pass)",
        placeholder: Some("Enter your destination..."),
    },
    QuestionSpec {
        id: "startLocation",
        question: "Where will you be starting your journey from?",
        placeholder: Some("e.g., Karachi, Islamabad..."),
    },
    QuestionSpec {
        id: "travelMethod",
        question: "How do you prefer to travel? (flight, road trip, train, or combination)",
        placeholder: Some("e.g., Flight to Gilgit then road to Hunza..."),
    },
    QuestionSpec {
        id: "accommodation",
        question: "What type of accommodation do you prefer? (hotel, guesthouse, camping, etc.)",
        placeholder: Some("e.g., Budget hotels, luxury resorts..."),
    },
    QuestionSpec {
        id: "duration",
        question: "How long is your trip? (number of days/weeks)",
        placeholder: Some("e.g., 7 days, 2 weeks..."),
    },
    QuestionSpec {
        id: "budget",
        question: "What's your approximate budget range?",
        placeholder: Some("e.g., Budget-friendly, mid-range, luxury..."),
    },
    QuestionSpec {
        id: "experience",
        question: "What's your experience with high-altitude travel? (beginner, experienced, expert)",
        placeholder: Some("This helps with health and safety planning..."),
    },
    QuestionSpec {
        id: "interests",
        question: "What activities interest you most? (sightseeing, adventure, culture, photography, etc.)",
        placeholder: Some("e.g., Mountain climbing, cultural tours..."),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = TRAVEL_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), TRAVEL_QUESTIONS.len());
    }

    #[test]
    fn test_catalog_starts_with_destination() {
        assert_eq!(TRAVEL_QUESTIONS.len(), 8);
        assert_eq!(TRAVEL_QUESTIONS[0].id, "destination");
        assert_eq!(TRAVEL_QUESTIONS[7].id, "interests");
    }
}
