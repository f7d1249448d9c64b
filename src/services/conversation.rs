use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::prompt::Turn;

/// Process-wide transcript sent as context with every completion call.
///
/// The first turn is always the system prompt given at construction; turns
/// are only ever appended. The lock is held for a single append or snapshot,
/// so concurrent exchanges may interleave their turns.
pub struct ConversationStore {
    turns: Mutex<Vec<Turn>>,
}

impl ConversationStore {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: Mutex::new(vec![Turn::system(system_prompt)]),
        }
    }

    pub fn append(&self, turn: Turn) {
        self.lock().push(turn);
    }

    pub fn snapshot(&self) -> Vec<Turn> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always `false`: the transcript holds at least the system turn.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Turn>> {
        self.turns.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
