pub mod conversation;
pub mod groq_service;

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};

use crate::error::CompletionError;
use crate::models::prompt::Turn;
use conversation::ConversationStore;

pub const NO_RESPONSE_REPLY: &str = "AI returned no response.";
pub const EMPTY_REPLY: &str = "AI returned an empty reply.";
pub const TROUBLE_REPLY: &str = "Sorry, I am having trouble responding right now. Please try again.";

/// A remote chat-completion provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends the whole transcript and returns the first candidate's text.
    async fn complete(&self, turns: &[Turn]) -> Result<String, CompletionError>;
}

pub struct ChatService {
    client: Arc<dyn ChatCompletion>,
    conversation: ConversationStore,
}

impl ChatService {
    pub fn new(client: Arc<dyn ChatCompletion>, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            conversation: ConversationStore::new(system_prompt),
        }
    }

    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    /// Runs one exchange. The user turn is kept even when the call fails;
    /// the assistant turn is only appended on success.
    pub async fn exchange(&self, message: &str) -> Result<String, CompletionError> {
        self.conversation.append(Turn::user(message));

        let context = self.conversation.snapshot();
        let completion = self.client.complete(&context).await?;

        let reply = completion.trim().to_string();
        self.conversation.append(Turn::assistant(reply.clone()));
        Ok(reply)
    }

    /// Like [`ChatService::exchange`], but every failure becomes a fallback reply.
    pub async fn reply(&self, message: &str) -> String {
        info!("User message received: {}", message);

        match self.exchange(message).await {
            Ok(reply) => reply,
            Err(CompletionError::NoCandidates) => {
                warn!("LLM provider returned no candidates");
                NO_RESPONSE_REPLY.to_string()
            }
            Err(CompletionError::EmptyContent) => {
                warn!("LLM provider returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Err(e) => {
                error!("LLM provider error: {}", e);
                TROUBLE_REPLY.to_string()
            }
        }
    }
}
