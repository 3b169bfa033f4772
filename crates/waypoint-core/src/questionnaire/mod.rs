//! Guided questionnaire state machine.
//!
//! A run walks the catalog in order, one answer per question:
//!
//! ```text
//! Idle ──start──▶ Active(0) ──answer──▶ Active(1) ── ... ──answer──▶ Completed
//!   ▲                │                                                  │
//!   └────skip────────┘◀──────────────────────start──────────────────────┘
//! ```
//!
//! The collected [`Answers`] leave the engine exactly once, inside
//! [`AnswerOutcome::Completed`]. Skipping discards them.
//!
//! ```rust
//! use waypoint_core::questionnaire::{AnswerOutcome, Questionnaire, TRAVEL_QUESTIONS};
//!
//! let mut q = Questionnaire::travel();
//! q.start();
//! let mut outcome = AnswerOutcome::Inactive;
//! for _ in TRAVEL_QUESTIONS {
//!     outcome = q.answer("anything");
//! }
//! let AnswerOutcome::Completed(answers) = outcome else { panic!("not completed") };
//! assert_eq!(answers.len(), TRAVEL_QUESTIONS.len());
//! ```

pub mod catalog;

use log::debug;
use serde::{Deserialize, Serialize};

pub use catalog::{QuestionSpec, TRAVEL_QUESTIONS};

/// Answers keyed by question id, kept in asking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers(Vec<(String, String)>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `id`, replacing an earlier value for the same id.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = value,
            None => self.0.push((id, value)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (k, v) in iter {
            answers.insert(k, v);
        }
        answers
    }
}

/// Where the engine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active { index: usize },
    Completed,
}

/// Result of feeding one answer to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was recorded and the next question is due.
    Next {
        index: usize,
        question: &'static QuestionSpec,
    },
    /// The final answer was recorded; the full answer set is handed over.
    Completed(Answers),
    /// No run was active, nothing was recorded.
    Inactive,
}

/// Drives one scripted question/answer run at a time.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: &'static [QuestionSpec],
    phase: Phase,
    answers: Answers,
}

impl Questionnaire {
    pub fn new(questions: &'static [QuestionSpec]) -> Self {
        Self {
            questions,
            phase: Phase::Idle,
            answers: Answers::new(),
        }
    }

    /// Engine over the built-in travel catalog.
    pub fn travel() -> Self {
        Self::new(TRAVEL_QUESTIONS)
    }

    /// Begins a fresh run and returns the first question.
    ///
    /// Returns `None` and stays idle when the catalog is empty.
    pub fn start(&mut self) -> Option<&'static QuestionSpec> {
        self.answers = Answers::new();
        let first = self.questions.first()?;
        self.phase = Phase::Active { index: 0 };
        debug!("questionnaire started ({} questions)", self.questions.len());
        Some(first)
    }

    /// Records `text` as the answer to the current question.
    pub fn answer(&mut self, text: &str) -> AnswerOutcome {
        let Phase::Active { index } = self.phase else {
            return AnswerOutcome::Inactive;
        };

        self.answers.insert(self.questions[index].id, text);

        let next = index + 1;
        if next < self.questions.len() {
            self.phase = Phase::Active { index: next };
            debug!("questionnaire advanced to question {}", next + 1);
            AnswerOutcome::Next {
                index: next,
                question: &self.questions[next],
            }
        } else {
            self.phase = Phase::Completed;
            debug!("questionnaire completed");
            AnswerOutcome::Completed(std::mem::take(&mut self.answers))
        }
    }

    /// Cancels the active run, discarding partial answers.
    ///
    /// Returns whether a run was actually cancelled.
    pub fn skip(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        debug!(
            "questionnaire skipped with {} answers discarded",
            self.answers.len()
        );
        self.phase = Phase::Idle;
        self.answers = Answers::new();
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    pub fn questions(&self) -> &'static [QuestionSpec] {
        self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Active { index } => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static QuestionSpec> {
        self.current_index().map(|i| &self.questions[i])
    }

    /// Input hint for the current question.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.current_question().and_then(|q| q.placeholder)
    }

    /// Share of the run reached, counting the current question, in percent.
    pub fn progress_percent(&self) -> u8 {
        match self.current_index() {
            Some(i) => ((i + 1) * 100 / self.questions.len()) as u8,
            None => 0,
        }
    }

    /// Answers collected so far in the active run.
    pub fn partial_answers(&self) -> &Answers {
        &self.answers
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::travel()
    }
}
