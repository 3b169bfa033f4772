//! Conversation controller tying the pieces together.
//!
//! A [`Session`] owns the transcript, the questionnaire, the plan store and
//! the assistant. Front ends feed it user input with [`Session::submit`] and
//! render the [`Turn`] that comes back.
//!
//! ```text
//!                 ┌──────────────┐
//!  user input ───▶│   Session    │──── generate ───▶ Assistant
//!                 │              │◀─── reply ───────
//!                 │ questionnaire│
//!                 │ extractor ───┼───▶ PlanStore
//!                 └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use waypoint_core::SessionBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_key_file(Some("/tmp/waypoint-key"))
//!     .build()?;
//!
//! // Starts the questionnaire; nothing is sent over the network.
//! let turn = session.submit("Help me plan a trip to Hunza").await?;
//! for message in &turn.messages {
//!     println!("{message}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use jiff::Timestamp;
use log::{debug, info, warn};

use crate::{
    assistant::{Assistant, GenerateRequest},
    credentials::{ApiKey, KeyStore},
    display::Notice,
    error::{Result, WaypointError},
    extract::PlanExtractor,
    ids::SharedIds,
    models::{Message, Plan, PlanMetadata, Role, TodoItem, TravelRoute},
    params::{AddPlan, AddRoute, TodoRef},
    prompt,
    questionnaire::{AnswerOutcome, Answers, Questionnaire},
    store::PlanStore,
    trigger,
};

pub use builder::SessionBuilder;

/// Id of the seeded welcome message.
pub const WELCOME_ID: &str = "welcome";

/// A plan created during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlan {
    pub id: String,
    pub todo_count: usize,
}

/// Everything one call to [`Session::submit`] produced.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    /// Messages appended to the transcript, in order
    pub messages: Vec<Message>,
    pub created_plan: Option<CreatedPlan>,
    pub notice: Option<Notice>,
}

/// Which flow issued an assistant request; picks the notice wording.
#[derive(Debug, Clone, Copy)]
enum RequestKind {
    Chat,
    Questionnaire,
}

impl RequestKind {
    fn failure_title(self) -> &'static str {
        match self {
            RequestKind::Chat => "Error contacting Gemini API",
            RequestKind::Questionnaire => "Error generating travel plan",
        }
    }

    fn success_description(self, count: usize) -> String {
        match self {
            RequestKind::Chat => format!("Added {count} tasks to your itinerary."),
            RequestKind::Questionnaire => {
                format!("Added {count} personalized tasks to your itinerary.")
            }
        }
    }
}

/// Holds the busy flag for the lifetime of one request.
struct BusyGuard(Arc<AtomicBool>);

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(WaypointError::Busy);
        }
        Ok(Self(Arc::clone(flag)))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// One conversation with the planning assistant.
pub struct Session {
    transcript: Vec<Message>,
    questionnaire: Questionnaire,
    store: PlanStore,
    extractor: PlanExtractor,
    assistant: Arc<dyn Assistant>,
    key_store: KeyStore,
    ids: SharedIds,
    busy: Arc<AtomicBool>,
}

impl Session {
    pub(crate) fn new(assistant: Arc<dyn Assistant>, key_store: KeyStore, ids: SharedIds) -> Self {
        info!("session started, key slot at {}", key_store.path().display());
        Self {
            transcript: vec![Message::assistant(WELCOME_ID, prompt::WELCOME)],
            questionnaire: Questionnaire::travel(),
            store: PlanStore::new(Arc::clone(&ids)),
            extractor: PlanExtractor::new(Arc::clone(&ids)),
            assistant,
            key_store,
            ids,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn key_store(&self) -> &KeyStore {
        &self.key_store
    }

    /// Whether an assistant request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Handles one line of user input.
    ///
    /// Blank input produces an empty turn. Credential and transport problems
    /// are reported through [`Turn::notice`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Busy` if a request is already outstanding.
    pub async fn submit(&mut self, input: &str) -> Result<Turn> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Turn::default());
        }
        let _busy = BusyGuard::acquire(&self.busy)?;

        let mut turn = Turn::default();
        if self.questionnaire.is_active() {
            self.answer_question(input, &mut turn).await;
        } else if trigger::should_start_questionnaire(input)
            && self.start_questionnaire(input, &mut turn)
        {
            debug!("submit: questionnaire triggered");
        } else {
            self.chat(input, &mut turn).await;
        }
        Ok(turn)
    }

    /// Abandons a running questionnaire, discarding its answers.
    ///
    /// Returns the acknowledgement message, or `None` if nothing was running.
    pub fn skip_questionnaire(&mut self) -> Option<Message> {
        if !self.questionnaire.skip() {
            return None;
        }
        Some(self.push(Role::Assistant, prompt::SKIP_ACK).clone())
    }

    /// Selects a task and returns the follow-up prefill for it.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` or `TodoNotFound` for unknown ids.
    pub fn discuss_todo(&mut self, target: &TodoRef) -> Result<String> {
        let todo = self.lookup(target)?.clone();
        let prefill = prompt::follow_up_prompt(&todo);
        self.store.select_todo_for_discussion(todo);
        Ok(prefill)
    }

    /// Flips a task's completion flag and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` or `TodoNotFound` for unknown ids.
    pub fn toggle_todo(&mut self, target: &TodoRef) -> Result<bool> {
        self.lookup(target)?;
        self.store
            .toggle_todo(&target.plan_id, &target.todo_id)
            .ok_or_else(|| todo_not_found(target))
    }

    /// Appends a route leg to a plan.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for bad parameters, `PlanNotFound` for an
    /// unknown plan.
    pub fn add_route(&mut self, params: &AddRoute) -> Result<TravelRoute> {
        let transport_mode = params.validate()?;
        let route = TravelRoute {
            id: self.ids.next_id(),
            from: params.from.trim().to_string(),
            to: params.to.trim().to_string(),
            distance: params.distance.clone(),
            estimated_time: params.estimated_time.clone(),
            transport_mode,
            altitude: None,
            risk_level: None,
            weather_dependent: None,
        };
        if !self.store.add_route(&params.plan_id, route.clone()) {
            return Err(WaypointError::PlanNotFound {
                id: params.plan_id.clone(),
            });
        }
        Ok(route)
    }

    /// Creates a plan from hand-entered task titles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the parameters do not validate.
    pub fn create_plan(&mut self, params: &AddPlan) -> Result<&Plan> {
        let (titles, plan_type) = params.validate()?;
        let now = Timestamp::now();
        let todos = titles
            .into_iter()
            .map(|title| TodoItem::new(self.ids.next_id(), title, now))
            .collect();
        let metadata = PlanMetadata {
            plan_type,
            ..Default::default()
        };
        Ok(self
            .store
            .add_plan_at(params.title.trim(), todos, Some(metadata), now))
    }

    fn lookup(&self, target: &TodoRef) -> Result<&TodoItem> {
        let plan = self
            .store
            .plan(&target.plan_id)
            .ok_or_else(|| WaypointError::PlanNotFound {
                id: target.plan_id.clone(),
            })?;
        plan.todo(&target.todo_id)
            .ok_or_else(|| todo_not_found(target))
    }

    fn push(&mut self, role: Role, content: impl Into<String>) -> &Message {
        let id = self.ids.next_id();
        let message = match role {
            Role::User => Message::user(id, content),
            Role::Assistant => Message::assistant(id, content),
        };
        self.transcript.push(message);
        &self.transcript[self.transcript.len() - 1]
    }

    fn record(&mut self, turn: &mut Turn, role: Role, content: impl Into<String>) {
        let message = self.push(role, content).clone();
        turn.messages.push(message);
    }

    /// Returns `false` when the catalog is empty and nothing started.
    fn start_questionnaire(&mut self, input: &str, turn: &mut Turn) -> bool {
        let Some(first) = self.questionnaire.start() else {
            return false;
        };
        let total = self.questionnaire.total();
        self.record(turn, Role::User, input);
        self.record(turn, Role::Assistant, prompt::questionnaire_intro(total, first));
        true
    }

    async fn answer_question(&mut self, input: &str, turn: &mut Turn) {
        self.record(turn, Role::User, input);
        match self.questionnaire.answer(input) {
            AnswerOutcome::Next { index, question } => {
                let total = self.questionnaire.total();
                self.record(
                    turn,
                    Role::Assistant,
                    prompt::question_message(index, total, question),
                );
            }
            AnswerOutcome::Completed(answers) => {
                self.record(turn, Role::Assistant, prompt::completion_summary(&answers));
                self.generate_plan(&answers, turn).await;
            }
            AnswerOutcome::Inactive => {}
        }
    }

    /// Sends the single planning request for a completed questionnaire.
    async fn generate_plan(&mut self, answers: &Answers, turn: &mut Turn) {
        let Some(key) = self.api_key(turn) else {
            return;
        };
        let planning = Message::user("planning", prompt::planning_request(answers));
        let request = prompt::compose(std::slice::from_ref(&planning), Some(answers));
        self.ask(&key, &request, RequestKind::Questionnaire, turn)
            .await;
    }

    async fn chat(&mut self, input: &str, turn: &mut Turn) {
        let Some(key) = self.api_key(turn) else {
            return;
        };
        self.record(turn, Role::User, input);
        let request = prompt::compose(&self.transcript, None);
        self.ask(&key, &request, RequestKind::Chat, turn).await;
    }

    /// Resolves and validates the key; on failure sets the notice.
    fn api_key(&self, turn: &mut Turn) -> Option<ApiKey> {
        let resolved = self
            .key_store
            .resolve()
            .and_then(|raw| ApiKey::parse(raw.as_deref().unwrap_or_default()));
        match resolved {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("request blocked: {e}");
                turn.notice = Some(Notice::from_error("Gemini API key required", &e));
                None
            }
        }
    }

    async fn ask(
        &mut self,
        key: &ApiKey,
        request: &GenerateRequest,
        kind: RequestKind,
        turn: &mut Turn,
    ) {
        let reply = match self.assistant.generate(key, request).await {
            Ok(reply) => reply,
            Err(e) => {
                let err = WaypointError::from(e);
                warn!("assistant request failed: {err}");
                turn.notice = Some(Notice::from_error(kind.failure_title(), &err));
                return;
            }
        };

        self.record(turn, Role::Assistant, reply.as_str());
        let Some(extracted) = self.extractor.extract(&reply) else {
            debug!("ask: reply contained no plan");
            return;
        };
        let count = extracted.todos.len();
        let plan = self
            .store
            .add_plan(extracted.title, extracted.todos, Some(extracted.metadata));
        turn.created_plan = Some(CreatedPlan {
            id: plan.id.clone(),
            todo_count: count,
        });
        turn.notice = Some(Notice::success(
            "Travel plan created!",
            kind.success_description(count),
        ));
    }
}

fn todo_not_found(target: &TodoRef) -> WaypointError {
    WaypointError::TodoNotFound {
        plan_id: target.plan_id.clone(),
        id: target.todo_id.clone(),
    }
}
