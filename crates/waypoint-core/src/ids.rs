//! Identifier generation for messages, plans, tasks and routes.
//!
//! Every component that mints identifiers takes an [`IdGenerator`] so tests
//! can swap the random source for a predictable one.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of identifiers produced by [`RandomIds`].
pub const RANDOM_ID_LEN: usize = 10;

/// Source of unique string identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}

/// Shared handle to an identifier source.
pub type SharedIds = Arc<dyn IdGenerator>;

/// Random lowercase base-36 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        let mut rng = rand::rng();
        (0..RANDOM_ID_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

/// Deterministic identifiers `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{n}", self.prefix)
    }
}
