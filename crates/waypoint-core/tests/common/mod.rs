use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tempfile::TempDir;
use waypoint_core::{
    ApiKey, Assistant, AssistantError, KeyStore, Session, SessionBuilder,
    assistant::GenerateRequest, ids::SequentialIds,
};

pub const VALID_KEY: &str = "AIzaTestKey0000";

pub const PLAN_REPLY: &str = "\
Karachi to Khunjerab Pass travel route

1. Book a flight from Karachi to Gilgit
2. Reserve a guesthouse in Hunza
- High risk: crossing Khunjerab Pass at 4,700m requires oxygen
";

/// Scripted assistant that records every request it receives.
pub struct MockAssistant {
    replies: Mutex<Vec<Result<String, AssistantError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    call_count: AtomicUsize,
}

impl MockAssistant {
    /// Replies are handed out in order; an exhausted script yields an error.
    pub fn new(replies: Vec<Result<String, AssistantError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Self::new(vec![Err(AssistantError::Api {
            status,
            message: message.to_string(),
        })])
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Assistant for MockAssistant {
    async fn generate(
        &self,
        _api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<String, AssistantError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.replies.lock().unwrap().pop().unwrap_or_else(|| {
            Err(AssistantError::InvalidResponse(
                "No more mock responses".to_string(),
            ))
        })
    }
}

/// Session wired to `assistant`, deterministic ids and a key file in a
/// temporary directory holding `key` (nothing is written for `None`).
pub fn create_test_session(
    assistant: Arc<MockAssistant>,
    key: Option<&str>,
) -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let key_path = temp_dir.path().join("gemini-api-key");
    if let Some(key) = key {
        std::fs::write(&key_path, key).expect("Failed to write key file");
    }
    let session = SessionBuilder::new()
        .with_key_store(KeyStore::new(key_path).file_only())
        .with_assistant(assistant)
        .with_id_generator(Arc::new(SequentialIds::new("id")))
        .build()
        .expect("Failed to create session");
    (temp_dir, session)
}
